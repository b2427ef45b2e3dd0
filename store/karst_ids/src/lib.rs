//! Karst Ids - Lazy Primitive Id Streams
//!
//! This crate contains the id-iteration primitives for the Karst store:
//! - `IdStream` for single-consumer, forward-only iteration over `i64` ids
//! - `Fetch`/`Fetcher` for writing producers without re-implementing the protocol
//! - Filtering plus the terminal combinators (`index_of`, `count`, `single_or`)
//! - Boundary conversions between the fast and general-purpose id sets
//!
//! # Design Philosophy
//!
//! - **Native ids end to end**: `i64` everywhere, nothing boxed
//! - **Pay per pull**: one producer step per id, nothing buffered ahead
//! - **One state machine**: pending/exhausted bookkeeping lives in `Fetcher` alone
//!
//! Streams never restart, and a stream is one consumer's value:
//! nothing here synchronizes. Sources that hold an external resource
//! release it in `Drop`, so abandoning a stream early is always safe.

/// Build an array-backed id stream from the listed ids.
///
/// `ids![]` is an empty stream; a trailing comma is allowed.
#[macro_export]
macro_rules! ids {
    ($($id:expr),* $(,)?) => {
        $crate::from_vec(::std::vec![$($id),*])
    };
}

mod convert;
mod error;
mod fetch;
mod filter;
mod sources;
mod stream;

pub use convert::{as_set, deduplicate, to_set};
pub use error::StreamError;
pub use fetch::{Fetch, Fetcher};
pub use filter::{FilterFetch, Filtered};
pub use sources::{empty, from_vec, range, Empty, RangeFetch, RangeStream, VecFetch, VecStream};
pub use stream::{IdStream, IntoIter};

// The fast set type at the conversion boundary, re-exported so
// callers can name what `as_set` hands back.
pub use rustc_hash::FxHashSet;
