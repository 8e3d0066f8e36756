//! Collection operations built on one traversal and one fold primitive.
//!
//! A collection is either an ordered sequence (slices, `Vec`, `VecDeque`,
//! arrays) or a keyed mapping (`HashMap`, `BTreeMap`). Both are described by
//! the [`Collection`] trait, and every operation in this module is generic
//! over it.
//!
//! # Layering
//!
//! ```text
//! each ─┬─ index_of
//!       ├─ filter ── reject
//!       ├─ map ───── pluck
//!       └─ reduce / fold ─┬─ contains
//!                         └─ every ── some
//! ```
//!
//! [`uniq`], [`extend`] and [`defaults`] stand on their own, as do the
//! sequence accessors [`first`], [`first_n`], [`last`] and [`last_n`].
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use underbar::collection::{contains, map, reduce, some, Seed};
//!
//! let prices = BTreeMap::from([("apple", 3), ("pear", 5), ("plum", 2)]);
//!
//! assert_eq!(reduce(&prices, |total, price| total + price, Seed::Absent), Some(10));
//! assert_eq!(map(&prices, |price| price * 2), vec![6, 10, 4]);
//! assert!(contains(&prices, &5));
//! assert!(!some(&prices, |price| *price > 5));
//! ```

mod error;
mod filter;
mod merge;
mod predicate;
mod reduce;
mod search;
mod sequence;
mod transform;
mod traversal;
mod truthy;
mod uniq;

#[cfg(feature = "json")]
pub mod json;

pub use error::InvalidArgumentError;
pub use filter::{filter, reject};
pub use merge::{Mapping, defaults, extend};
pub use predicate::{contains, every, every_truthy, some, some_truthy};
pub use reduce::{Seed, fold, reduce};
pub use search::index_of;
pub use sequence::{first, first_n, last, last_n};
pub use transform::{Property, map, pluck};
pub use traversal::{Collection, each};
pub use truthy::Truthy;
pub use uniq::uniq;
