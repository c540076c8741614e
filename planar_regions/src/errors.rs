//! Crate error type.
//!
//! The kernel is deterministic math: every failure is a property of the inputs and is surfaced
//! immediately. There are no retries and no partial application; operations that fail leave the
//! receiver unchanged.

use thiserror::Error;

/// Errors raised by the geometry kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The transform's determinant is at or near zero, so it has no inverse.
    ///
    /// This reflects a property of the data rather than caller misuse; callers are expected to
    /// branch on it explicitly.
    #[error("transform is not invertible (determinant is at or near zero)")]
    NonInvertible,
    /// An argument violated a numeric constraint (e.g. negative flatness tolerance).
    ///
    /// Rejected eagerly before any mutation takes place.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A draw operation (line/quad/cubic/close) was issued before an initial move established a
    /// current point.
    #[error("no current point (missing initial move_to)")]
    NoCurrentPoint,
    /// The segment iterator was queried after completion.
    ///
    /// Raised on every over-advance call; the iterator remains permanently exhausted.
    #[error("segment iterator is exhausted")]
    IteratorExhausted,
}
