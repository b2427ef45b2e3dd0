//! Producer steps and the shared lazy state machine.
//!
//! Every lazy source in this crate splits into two halves: a [`Fetch`]
//! producer that knows how to attempt one more id, and the [`Fetcher`]
//! state machine that drives it. The machine owns the pending and
//! exhausted bookkeeping exactly once, so producers stay one-method
//! types (or plain closures) and cannot get the protocol wrong.

use crate::error::StreamError;
use crate::stream::IdStream;

/// One producer step of a lazy id sequence.
///
/// A step either publishes the next id (`Some`) or reports exhaustion
/// (`None`). Steps may carry side effects, such as advancing a scan
/// cursor; [`Fetcher`] guarantees each produced id costs exactly one
/// step, no matter how often the stream is polled.
pub trait Fetch {
    /// Attempt to produce the next id.
    fn fetch_next(&mut self) -> Option<i64>;
}

/// Ad-hoc producers are plain closures.
impl<F> Fetch for F
where
    F: FnMut() -> Option<i64>,
{
    #[inline]
    fn fetch_next(&mut self) -> Option<i64> {
        self()
    }
}

/// Drives a [`Fetch`] producer through the lazy stream protocol.
///
/// # Invariant
///
/// `exhausted` never flips back to `false`, and `pending` is `Some` only
/// between a successful producer step and the read that consumes it.
/// Repeated [`has_next`] polls with no intervening read observe the
/// same answer without re-running the step.
///
/// [`has_next`]: IdStream::has_next
#[derive(Debug)]
pub struct Fetcher<F> {
    fetch: F,
    pending: Option<i64>,
    exhausted: bool,
}

impl<F: Fetch> Fetcher<F> {
    /// Wrap a producer in the stream protocol.
    #[inline]
    pub fn new(fetch: F) -> Self {
        Fetcher {
            fetch,
            pending: None,
            exhausted: false,
        }
    }
}

impl<F: Fetch> IdStream for Fetcher<F> {
    fn has_next(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        if self.pending.is_some() {
            return true;
        }
        match self.fetch.fetch_next() {
            Some(id) => {
                self.pending = Some(id);
                true
            }
            None => {
                self.exhausted = true;
                false
            }
        }
    }

    fn next_id(&mut self) -> Result<i64, StreamError> {
        if self.has_next() {
            // has_next just parked the id; take() hands it over once.
            self.pending.take().ok_or(StreamError::Exhausted)
        } else {
            Err(StreamError::Exhausted)
        }
    }
}
