//! Result caching by argument.
//!
//! [`Memoize`] wraps a single-argument function and stores each result in a
//! hash map keyed by the argument. A repeated argument is answered from the
//! cache without calling the function.
//!
//! Arguments must be `Hash + Eq + Clone`. Functions of several arguments
//! can be memoized over a tuple. Arguments that cannot be hashed (floats,
//! closures, most containers of them) are rejected at compile time.
//!
//! # Cache Hasher
//!
//! The cache uses [`CacheHasher`], selected by feature flag:
//!
//! - default: `std::collections::hash_map::RandomState`
//! - `fxhash`: `rustc_hash::FxBuildHasher`
//! - `ahash`: `ahash::RandomState` (ignored when `fxhash` is also enabled)

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// The hasher used by [`Memoize`] caches.
#[cfg(feature = "fxhash")]
pub type CacheHasher = rustc_hash::FxBuildHasher;

/// The hasher used by [`Memoize`] caches.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type CacheHasher = ahash::RandomState;

/// The hasher used by [`Memoize`] caches.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type CacheHasher = std::collections::hash_map::RandomState;

/// A function whose results are cached by argument.
///
/// # Type Parameters
///
/// * `K` - The argument type, used verbatim as the cache key
/// * `R` - The result type
/// * `F` - The wrapped function (defaults to `fn(K) -> R`)
///
/// # Thread Safety
///
/// This type is NOT thread-safe (it is `!Sync`).
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::function::Memoize;
///
/// let calls = Cell::new(0);
/// let length = Memoize::new(|text: String| {
///     calls.set(calls.get() + 1);
///     text.len()
/// });
///
/// assert_eq!(length.call("abc".to_string()), 3);
/// assert_eq!(length.call("abc".to_string()), 3);
/// assert_eq!(length.call("abcd".to_string()), 4);
/// assert_eq!(calls.get(), 2);
/// ```
pub struct Memoize<K, R, F = fn(K) -> R> {
    function: F,
    cache: RefCell<HashMap<K, R, CacheHasher>>,
}

impl<K, R, F> Memoize<K, R, F>
where
    K: Hash + Eq + Clone,
    R: Clone,
    F: Fn(K) -> R,
{
    /// Wraps `function` with an empty cache.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::default()),
        }
    }

    /// Returns the cached result for `argument`, computing and storing it on
    /// the first request.
    ///
    /// The cache is not borrowed while the wrapped function runs, so the
    /// function may itself consult the same `Memoize`.
    pub fn call(&self, argument: K) -> R {
        if let Some(cached) = self.cache.borrow().get(&argument) {
            tracing::trace!("memoize: cache hit");
            return cached.clone();
        }

        tracing::trace!("memoize: cache miss");
        let result = (self.function)(argument.clone());
        self.cache
            .borrow_mut()
            .entry(argument)
            .or_insert(result)
            .clone()
    }
}

impl<K: Hash + Eq, R, F> Memoize<K, R, F> {
    /// Returns `true` if a result for `argument` is cached.
    #[inline]
    pub fn is_cached(&self, argument: &K) -> bool {
        self.cache.borrow().contains_key(argument)
    }

    /// Returns the number of cached results.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Drops every cached result.
    #[inline]
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<K, R, F> fmt::Debug for Memoize<K, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` so that its results are cached by argument.
///
/// Shorthand for [`Memoize::new`].
///
/// # Examples
///
/// ```rust
/// use underbar::function::memoize;
///
/// let cube = memoize(|n: i64| n * n * n);
/// assert_eq!(cube.call(3), 27);
/// assert_eq!(cube.len(), 1);
/// ```
#[inline]
pub fn memoize<K, R, F>(function: F) -> Memoize<K, R, F>
where
    K: Hash + Eq + Clone,
    R: Clone,
    F: Fn(K) -> R,
{
    Memoize::new(function)
}

static_assertions::assert_not_impl_any!(Memoize<i32, i32>: Sync);
