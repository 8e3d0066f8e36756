//! Run-once function wrapper.
//!
//! This module provides the [`Once`] type, which calls the wrapped function
//! on its first invocation only. The first result is cached and every call,
//! including the first, returns that cached result.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::function::Once;
//!
//! let calls = Cell::new(0);
//! let create = Once::new(|size: usize| {
//!     calls.set(calls.get() + 1);
//!     vec![0_u8; size]
//! });
//!
//! assert_eq!(create.call(4).len(), 4);
//! assert_eq!(create.call(100).len(), 4);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::{Cell, OnceCell};
use std::fmt;
use std::marker::PhantomData;

/// A function that runs at most once.
///
/// `Once<A, R, F>` owns the wrapped function until its first invocation and
/// the result from then on. Arguments passed to later calls are dropped
/// without being looked at.
///
/// # Type Parameters
///
/// * `A` - The argument type; use a tuple for several arguments
/// * `R` - The result type
/// * `F` - The wrapped function (defaults to `fn(A) -> R`)
///
/// # Thread Safety
///
/// This type is NOT thread-safe (it is `!Sync`).
///
/// # Panics
///
/// A call made while the first invocation is still running (from inside the
/// wrapped function) panics, as does any call after the wrapped function
/// has panicked.
pub struct Once<A, R, F = fn(A) -> R> {
    function: Cell<Option<F>>,
    result: OnceCell<R>,
    _arguments: PhantomData<fn(A)>,
}

impl<A, R, F: FnOnce(A) -> R> Once<A, R, F> {
    /// Wraps `function` so that it runs at most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::function::Once;
    ///
    /// let greet = Once::new(|name: &str| format!("hello, {name}"));
    /// assert!(!greet.has_run());
    /// assert_eq!(greet.call("moe"), "hello, moe");
    /// ```
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            function: Cell::new(Some(function)),
            result: OnceCell::new(),
            _arguments: PhantomData,
        }
    }

    /// Invokes the wrapper.
    ///
    /// The first call runs the wrapped function with `arguments` and caches
    /// its result. Every call returns a reference to that cached result.
    ///
    /// # Panics
    ///
    /// Panics if called re-entrantly during the first invocation, or after
    /// the wrapped function has panicked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::function::Once;
    ///
    /// let double = Once::new(|(left, right): (i32, i32)| (left + right) * 2);
    /// assert_eq!(*double.call((1, 2)), 6);
    /// assert_eq!(*double.call((10, 20)), 6);
    /// ```
    pub fn call(&self, arguments: A) -> &R {
        if let Some(result) = self.result.get() {
            return result;
        }

        let Some(function) = self.function.take() else {
            panic!("Once instance has been poisoned or called re-entrantly");
        };
        tracing::trace!("once: invoking wrapped function");
        let value = function(arguments);
        self.result.get_or_init(|| value)
    }
}

impl<A, R, F> Once<A, R, F> {
    /// Returns `true` once the wrapped function has produced its result.
    ///
    /// The flag never goes back to `false`.
    #[inline]
    pub fn has_run(&self) -> bool {
        self.result.get().is_some()
    }

    /// Returns the cached result without invoking anything.
    #[inline]
    pub fn get(&self) -> Option<&R> {
        self.result.get()
    }

    /// Consumes the wrapper and returns the cached result, if any.
    #[inline]
    pub fn into_inner(self) -> Option<R> {
        self.result.into_inner()
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result.get() {
            Some(result) => formatter.debug_tuple("Once").field(result).finish(),
            None => formatter.write_str("Once(<not run>)"),
        }
    }
}

/// Wraps `function` so that it runs at most once.
///
/// Shorthand for [`Once::new`].
///
/// # Examples
///
/// ```rust
/// use underbar::function::once;
///
/// let answer = once(|(): ()| 42);
/// assert_eq!(*answer.call(()), 42);
/// assert!(answer.has_run());
/// ```
#[inline]
pub const fn once<A, R, F>(function: F) -> Once<A, R, F>
where
    F: FnOnce(A) -> R,
{
    Once::new(function)
}

static_assertions::assert_not_impl_any!(Once<i32, i32>: Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn call_returns_first_result_for_all_arguments() {
        let wrapped = once(|value: i32| value * 10);

        assert_eq!(*wrapped.call(1), 10);
        assert_eq!(*wrapped.call(2), 10);
        assert_eq!(*wrapped.call(3), 10);
    }

    #[rstest]
    fn wrapped_function_runs_exactly_once() {
        let calls = Cell::new(0);
        let wrapped = once(|(): ()| calls.set(calls.get() + 1));

        wrapped.call(());
        wrapped.call(());
        wrapped.call(());

        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn has_run_flips_on_first_call() {
        let wrapped = once(|value: &str| value.len());

        assert!(!wrapped.has_run());
        assert_eq!(wrapped.get(), None);

        wrapped.call("four");

        assert!(wrapped.has_run());
        assert_eq!(wrapped.get(), Some(&4));
        assert_eq!(wrapped.into_inner(), Some(4));
    }

    #[rstest]
    fn debug_shows_cached_result() {
        let wrapped = once(|value: i32| value);
        assert_eq!(format!("{wrapped:?}"), "Once(<not run>)");
        wrapped.call(7);
        assert_eq!(format!("{wrapped:?}"), "Once(7)");
    }

    #[rstest]
    #[should_panic(expected = "poisoned")]
    fn call_after_panicking_function_panics() {
        let wrapped = once(|fail: bool| {
            assert!(!fail, "first call failed");
            1
        });

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| wrapped.call(true)));
        wrapped.call(false);
    }
}
