//! Predicate filtering over id streams.

use crate::fetch::{Fetch, Fetcher};
use crate::stream::IdStream;

/// A filtered stream: the shared [`Fetcher`] machine driving a
/// [`FilterFetch`] step.
pub type Filtered<S, P> = Fetcher<FilterFetch<S, P>>;

/// Producer step that pulls from `source` until `predicate` accepts.
///
/// Rejected ids are dropped on the spot, nothing is buffered, and
/// source order survives. Exhausts exactly when the source does.
#[derive(Debug)]
pub struct FilterFetch<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> FilterFetch<S, P>
where
    S: IdStream,
    P: FnMut(i64) -> bool,
{
    pub(crate) fn new(source: S, predicate: P) -> Self {
        FilterFetch { source, predicate }
    }
}

impl<S, P> Fetch for FilterFetch<S, P>
where
    S: IdStream,
    P: FnMut(i64) -> bool,
{
    fn fetch_next(&mut self) -> Option<i64> {
        while let Ok(id) = self.source.next_id() {
            if (self.predicate)(id) {
                return Some(id);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::sources::from_vec;
    use crate::stream::IdStream;

    #[test]
    fn rejected_ids_are_skipped_in_order() {
        let items = from_vec(vec![1, 2, 3]);
        assert_eq!(items.filter(|id| id != 2).into_vec(), vec![1, 3]);
    }

    #[test]
    fn filters_stack() {
        let odd_and_small = from_vec(vec![1, 2, 3, 4, 5, 6, 7])
            .filter(|id| id % 2 == 1)
            .filter(|id| id < 5);
        assert_eq!(odd_and_small.into_vec(), vec![1, 3]);
    }

    #[test]
    fn rejecting_everything_leaves_an_empty_stream() {
        let mut none = from_vec(vec![4, 5, 6]).filter(|_| false);
        assert!(!none.has_next());
    }

    #[test]
    fn predicate_is_not_consulted_past_exhaustion() {
        let mut calls = 0;
        let mut stream = from_vec(vec![7]).filter(|_| {
            calls += 1;
            true
        });
        assert_eq!(stream.next_id(), Ok(7));
        assert!(!stream.has_next());
        assert!(!stream.has_next());
        drop(stream);
        assert_eq!(calls, 1);
    }
}
