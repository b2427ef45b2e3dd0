//! Error kinds surfaced by id-stream operations.

/// Error when pulling from an [`IdStream`](crate::IdStream) fails.
///
/// Streams are forward-only and non-restartable, so both kinds are
/// terminal: a failed pull leaves nothing further to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// `next_id` was called after the stream ran out of ids.
    Exhausted,
    /// A stream consumed for its single id held at least two. Carries
    /// the first id and the extra one that proved it non-singular.
    MultipleElements { first: i64, extra: i64 },
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamError::Exhausted => write!(f, "id stream is exhausted"),
            StreamError::MultipleElements { first, extra } => write!(
                f,
                "expected at most one id, found {} followed by {}",
                first, extra
            ),
        }
    }
}

impl std::error::Error for StreamError {}
