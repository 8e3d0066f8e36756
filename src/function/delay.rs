//! Delayed invocation.
//!
//! [`delay`] captures a function and its arguments and schedules a single
//! call no earlier than the given duration from now. Timing is left to the
//! tokio runtime selected by [`runtime::handle`](super::runtime::handle).

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::task::{JoinError, JoinHandle};

use super::runtime;

/// Represents a delayed call that did not produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayError {
    /// The call was cancelled before it ran.
    Cancelled,
}

impl std::fmt::Display for DelayError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => write!(formatter, "delayed call was cancelled before it ran"),
        }
    }
}

impl std::error::Error for DelayError {}

/// A handle to a call scheduled by [`delay`].
///
/// Dropping the handle does not cancel the call; it still runs once the
/// delay elapses. Awaiting the handle yields the call's result, or
/// [`DelayError::Cancelled`] if [`cancel`](Self::cancel) won the race. A
/// panic raised by the delayed function is resumed in the awaiting task.
#[derive(Debug)]
#[must_use = "dropping the handle detaches the call; keep it to cancel or await the result"]
pub struct DelayHandle<R> {
    task: JoinHandle<R>,
}

impl<R> DelayHandle<R> {
    /// Cancels the call if it has not started yet.
    ///
    /// Cancelling a call that already ran has no effect.
    pub fn cancel(&self) {
        tracing::trace!("delay: cancelling scheduled call");
        self.task.abort();
    }

    /// Returns `true` if the call has run or has been cancelled.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl<R> Future for DelayHandle<R> {
    type Output = Result<R, DelayError>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task)
            .poll(context)
            .map(|outcome| outcome.map_err(into_delay_error))
    }
}

fn into_delay_error(error: JoinError) -> DelayError {
    match error.try_into_panic() {
        Ok(payload) => std::panic::resume_unwind(payload),
        Err(_) => DelayError::Cancelled,
    }
}

/// Schedules `function(arguments)` to run once, no earlier than `wait` from
/// now, and returns immediately.
///
/// Several arguments are passed as a tuple. The call runs on the current
/// tokio runtime when there is one, otherwise on the global runtime.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::function::delay;
///
/// # tokio_test();
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn tokio_test() {
/// let handle = delay(
///     |(greeting, name): (&str, &str)| format!("{greeting}, {name}"),
///     Duration::from_millis(5),
///     ("hello", "moe"),
/// );
/// assert_eq!(handle.await.unwrap(), "hello, moe");
/// # }
/// ```
pub fn delay<F, A, R>(function: F, wait: Duration, arguments: A) -> DelayHandle<R>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    tracing::trace!(?wait, "delay: scheduling call");
    let task = runtime::handle().spawn(async move {
        tokio::time::sleep(wait).await;
        tracing::trace!("delay: running scheduled call");
        function(arguments)
    });
    DelayHandle { task }
}

static_assertions::assert_impl_all!(DelayHandle<String>: Send, Sync, Unpin);
