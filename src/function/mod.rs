//! Function wrappers.
//!
//! This module provides [`identity`] and a few combinators that wrap a
//! function and change how it is invoked:
//!
//! - [`Once`]: runs the wrapped function on the first call only and returns
//!   that result from then on
//! - [`Memoize`]: caches results by argument
//! - `delay`: schedules a call on a tokio runtime (requires `async` feature)
//!
//! `Once` and `Memoize` keep their state in `Cell`/`RefCell` and are
//! therefore not `Sync`; each instance belongs to a single thread.
//!
//! # Examples
//!
//! ```rust
//! use underbar::function::{memoize, once};
//!
//! let initialize = once(|name: &str| format!("initialized {name}"));
//! assert_eq!(initialize.call("first"), "initialized first");
//! assert_eq!(initialize.call("second"), "initialized first");
//!
//! let square = memoize(|n: u64| n * n);
//! assert_eq!(square.call(12), 144);
//! assert!(square.is_cached(&12));
//! ```

mod memoize;
mod once;
mod utils;

#[cfg(feature = "async")]
mod delay;
#[cfg(feature = "async")]
pub mod runtime;

pub use memoize::{CacheHasher, Memoize, memoize};
pub use once::{Once, once};
pub use utils::identity;

#[cfg(feature = "async")]
pub use delay::{DelayError, DelayHandle, delay};
