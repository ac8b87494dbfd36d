//! Completion signal returned by every logging call

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// An already-finished logging operation
///
/// Every logging method returns the same shared value, [`Completion::DONE`].
/// It can be ignored by synchronous callers or awaited by async ones; awaiting
/// it never suspends.
///
/// ```
/// use logport_core::logging::{Completion, Logger, NullLogger};
///
/// let logger = NullLogger::new();
/// assert_eq!(logger.info("main", "hello"), Completion::DONE);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Completion;

impl Completion {
    /// The shared completion value
    pub const DONE: Completion = Completion;
}

impl Future for Completion {
    type Output = ();

    #[inline]
    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        Poll::Ready(())
    }
}
