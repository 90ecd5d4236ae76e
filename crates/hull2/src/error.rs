//! Error types for geometry and input parsing.

/// Errors surfaced by the composite geometry operations (hull, centroid).
///
/// The predicates in `geom2` are total over finite inputs and never fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    /// The configuration has no well-defined answer (e.g. zero signed area).
    #[error("degenerate input: {reason}")]
    Degenerate { reason: String },

    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

impl GeomError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by `io::TokenSource` implementations and point readers.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The underlying stream ran out before a token could be produced.
    #[error("unexpected end of input")]
    EndOfInput,

    /// A token was read but does not parse as the requested kind.
    #[error("cannot parse {token:?} as {expected}")]
    Format {
        token: String,
        expected: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = GeomError> = std::result::Result<T, E>;
