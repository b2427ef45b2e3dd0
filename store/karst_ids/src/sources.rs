//! Ready-made id sources: array-backed, range-backed, and empty.

use crate::error::StreamError;
use crate::fetch::{Fetch, Fetcher};
use crate::stream::IdStream;

/// Array-backed stream; see [`from_vec`].
pub type VecStream = Fetcher<VecFetch>;

/// Producer step walking an owned vec front to back.
#[derive(Debug)]
pub struct VecFetch {
    values: Vec<i64>,
    pos: usize,
}

impl Fetch for VecFetch {
    #[inline]
    fn fetch_next(&mut self) -> Option<i64> {
        let id = self.values.get(self.pos).copied()?;
        self.pos += 1;
        Some(id)
    }
}

/// Stream the given ids in order, each exactly once.
pub fn from_vec(values: Vec<i64>) -> VecStream {
    Fetcher::new(VecFetch { values, pos: 0 })
}

/// Range-backed stream; see [`range`].
pub type RangeStream = Fetcher<RangeFetch>;

/// Producer step counting up through a half-open range.
#[derive(Debug)]
pub struct RangeFetch {
    next: i64,
    end: i64,
}

impl Fetch for RangeFetch {
    #[inline]
    fn fetch_next(&mut self) -> Option<i64> {
        if self.next >= self.end {
            return None;
        }
        let id = self.next;
        self.next += 1;
        Some(id)
    }
}

/// Stream every id in `start..end`, ascending.
///
/// Empty when `start >= end`.
pub fn range(start: i64, end: i64) -> RangeStream {
    Fetcher::new(RangeFetch { next: start, end })
}

/// The empty stream: exhausted from birth.
///
/// A direct [`IdStream`] impl with no producer step behind it, for
/// call sites that must hand back a stream but have nothing to put
/// in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// A stream holding no ids at all.
pub fn empty() -> Empty {
    Empty
}

impl IdStream for Empty {
    #[inline]
    fn has_next(&mut self) -> bool {
        false
    }

    #[inline]
    fn next_id(&mut self) -> Result<i64, StreamError> {
        Err(StreamError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::StreamError;
    use crate::sources::{empty, from_vec, range};
    use crate::stream::IdStream;

    #[test]
    fn vec_stream_yields_each_value_once() {
        let mut stream = from_vec(vec![2, 5, 234]);
        assert_eq!(stream.next_id(), Ok(2));
        assert_eq!(stream.next_id(), Ok(5));
        assert_eq!(stream.next_id(), Ok(234));
        assert_eq!(stream.next_id(), Err(StreamError::Exhausted));
    }

    #[test]
    fn range_is_half_open() {
        assert_eq!(range(3, 6).into_vec(), vec![3, 4, 5]);
        assert_eq!(range(-2, 1).into_vec(), vec![-2, -1, 0]);
    }

    #[test]
    fn degenerate_ranges_are_empty() {
        assert_eq!(range(5, 5).count(), 0);
        assert_eq!(range(6, 5).count(), 0);
    }

    #[test]
    fn empty_stream_starts_exhausted() {
        let mut stream = empty();
        assert!(!stream.has_next());
        assert_eq!(stream.next_id(), Err(StreamError::Exhausted));
    }
}
