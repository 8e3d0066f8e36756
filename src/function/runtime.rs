//! The runtime that delayed calls are scheduled on.
//!
//! `delay` needs a tokio runtime to own its timers. When called from inside
//! a runtime it uses that runtime; otherwise it falls back to a global
//! multi-thread runtime that is created on first use and never dropped.
//!
//! # Runtime Selection
//!
//! 1. If inside a tokio runtime: `Handle::current()`
//! 2. Otherwise: a thread-local cached handle to [`global()`]
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use underbar::function::delay;
//! use underbar::function::runtime::global;
//!
//! // Outside any runtime the call is scheduled on the global runtime.
//! let handle = delay(|(a, b): (i32, i32)| a + b, Duration::from_millis(1), (2, 3));
//! assert_eq!(global().block_on(handle), Ok(5));
//! ```

use std::cell::RefCell;
use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime};

// =============================================================================
// Global Runtime
// =============================================================================

/// Global tokio runtime initialized lazily on first access.
///
/// This runtime is configured with:
/// - Multi-thread scheduler
/// - Worker threads equal to the number of CPU cores
/// - Time driver enabled
///
/// The runtime has static lifetime and is never dropped.
static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("underbar-delay")
        .enable_time()
        .build()
        .expect("Failed to create global tokio runtime")
});

/// Returns a reference to the global runtime.
///
/// The runtime is lazily initialized on first call and shared across
/// all subsequent calls. The same instance is returned from any thread.
///
/// # Panics
///
/// Panics on first use if the runtime cannot be built.
#[inline]
#[must_use]
pub fn global() -> &'static Runtime {
    &GLOBAL_RUNTIME
}

// =============================================================================
// Handle Caching
// =============================================================================

thread_local! {
    /// Thread-local cached handle to the global runtime.
    static CACHED_HANDLE: RefCell<Option<Handle>> = const { RefCell::new(None) };
}

/// Returns a handle to the current or global runtime.
///
/// Inside a tokio runtime this is the current runtime's handle, so delayed
/// calls follow that runtime's clock (including a paused test clock).
/// Outside one it is a cached handle to [`global()`].
#[inline]
#[must_use]
pub fn handle() -> Handle {
    if let Ok(current_handle) = Handle::try_current() {
        return current_handle;
    }

    CACHED_HANDLE.with(|cached| {
        cached
            .borrow_mut()
            .get_or_insert_with(|| global().handle().clone())
            .clone()
    })
}
