//! # underbar
//!
//! A small functional utility library providing generic operations over
//! ordered sequences and keyed mappings, plus a handful of function-wrapping
//! combinators.
//!
//! ## Overview
//!
//! The library is built around a single traversal primitive and a single
//! fold primitive:
//!
//! - **Traversal**: [`each`](collection::each) visits every element of a
//!   sequence or every entry of a mapping.
//! - **Reduction**: [`reduce`](collection::reduce) folds a collection with an
//!   optional [`Seed`](collection::Seed).
//! - **Derived operations**: searching, filtering, mapping, membership and
//!   quantification are all expressed in terms of the two primitives above.
//! - **Merging**: [`extend`](collection::extend) and
//!   [`defaults`](collection::defaults) for keyed mappings.
//! - **Combinators**: [`Once`](function::Once),
//!   [`Memoize`](function::Memoize) and `delay`.
//!
//! ## Feature Flags
//!
//! - `collection`: Collection operations (implies `function`)
//! - `function`: `identity` and the function combinators
//! - `async`: `delay`, backed by a tokio runtime
//! - `json`: Collection operations over `serde_json::Value`
//! - `fxhash` / `ahash`: Faster hashers for the memoize cache
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4];
//!
//! assert_eq!(reduce(&numbers, |sum, n| sum + n, Seed::Absent), Some(10));
//! assert_eq!(reduce(&numbers, |sum, n| sum + n, Seed::Supplied(10)), Some(20));
//! assert!(every(&numbers, |n| *n > 0));
//! assert_eq!(filter(&numbers, |n| *n % 2 == 0), vec![&2, &4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "function")]
pub mod function;
