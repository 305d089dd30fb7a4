//!
//! Defines error types for vector clock decoding.

/// Errors reported when bytes cannot be turned back into a clock.
///
/// No partial clock accompanies an error; callers fall back to an empty clock
/// or escalate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// The input is not a valid encoded clock (truncated, bad varint, non UTF-8 id, ...).
    #[error("Vector clock decode failed: {0}")]
    Decode(String),
    /// A complete clock was decoded but unconsumed bytes follow it.
    #[error("Vector clock decode left {0} trailing byte(s)")]
    TrailingBytes(usize),
    /// Ids are repeated or out of order; carries the first offending id.
    #[error("Vector clock ids not strictly ascending at {0:?}")]
    NonCanonical(String),
}

impl From<postcard::Error> for ClockError {
    fn from(err: postcard::Error) -> Self {
        ClockError::Decode(err.to_string())
    }
}
