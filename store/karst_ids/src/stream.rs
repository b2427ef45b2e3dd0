//! The id-stream contract and its terminal combinators.
//!
//! [`IdStream`] is the single-consumer, forward-only contract every
//! lazy id source implements. Two methods are required; everything
//! else is provided on top of them, so combinators know nothing about
//! a producer's internals and compose freely.
//!
//! Sources that hold an external resource release it in their [`Drop`]
//! impl. Abandoning a stream early therefore needs no separate
//! cleanup call, and combinators that take ownership (such as
//! [`single_or`](IdStream::single_or)) release it on every path.

use crate::error::StreamError;
use crate::fetch::Fetcher;
use crate::filter::{FilterFetch, Filtered};

/// Single-consumer, forward-only stream of `i64` record ids.
///
/// # Contract
///
/// [`has_next`](Self::has_next) is idempotent: consecutive polls
/// observe the same answer and cost at most one producer step between
/// them. [`next_id`](Self::next_id) consumes the pending id. Once a
/// stream reports no next id it stays exhausted forever, and further
/// reads fail with [`StreamError::Exhausted`]. Streams never restart.
pub trait IdStream {
    /// Whether another id remains. Idempotent.
    fn has_next(&mut self) -> bool;

    /// The next id, or [`StreamError::Exhausted`] past the end.
    fn next_id(&mut self) -> Result<i64, StreamError>;

    /// Keep only ids accepted by `predicate`, preserving source order.
    ///
    /// Lazy: each pull skips rejected ids one at a time, buffering
    /// nothing. The result is itself an [`IdStream`], so filters
    /// stack.
    fn filter<P>(self, predicate: P) -> Filtered<Self, P>
    where
        Self: Sized,
        P: FnMut(i64) -> bool,
    {
        Fetcher::new(FilterFetch::new(self, predicate))
    }

    /// 0-based position of the first occurrence of `target`, or `-1`
    /// when the stream exhausts without a match.
    ///
    /// Consumes the stream up to and including the match; a remainder
    /// after a hit stays readable.
    fn index_of(&mut self, target: i64) -> i64 {
        let mut index = 0_i64;
        while let Ok(id) = self.next_id() {
            if id == target {
                return index;
            }
            index += 1;
        }
        -1
    }

    /// Drain the stream and report how many ids it held.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut count = 0;
        while self.next_id().is_ok() {
            count += 1;
        }
        count
    }

    /// Drain the stream into a `Vec`, preserving order.
    fn into_vec(mut self) -> Vec<i64>
    where
        Self: Sized,
    {
        let mut ids = Vec::new();
        while let Ok(id) = self.next_id() {
            ids.push(id);
        }
        ids
    }

    /// The stream's only id, or `default` when it is empty.
    ///
    /// Fails with [`StreamError::MultipleElements`] as soon as a second
    /// id shows up. Takes the stream by value, so a resource-backed
    /// source is dropped, and thereby released, on the empty, single,
    /// and error paths alike.
    fn single_or(mut self, default: i64) -> Result<i64, StreamError>
    where
        Self: Sized,
    {
        let first = match self.next_id() {
            Ok(id) => id,
            Err(_) => return Ok(default),
        };
        match self.next_id() {
            Ok(extra) => Err(StreamError::MultipleElements { first, extra }),
            Err(_) => Ok(first),
        }
    }

    /// Adapt this stream to a std [`Iterator`].
    ///
    /// The adapter yields until exhaustion; the
    /// [`StreamError::Exhausted`] failure mode is not observable
    /// through it.
    fn into_iter(self) -> IntoIter<Self>
    where
        Self: Sized,
    {
        IntoIter { stream: self }
    }
}

/// Std-iterator adapter returned by [`IdStream::into_iter`].
#[derive(Debug)]
pub struct IntoIter<S> {
    stream: S,
}

impl<S: IdStream> Iterator for IntoIter<S> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        self.stream.next_id().ok()
    }
}
