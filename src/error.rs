//! Error types for attribute construction.

use thiserror::Error;

/// Result type for attribute construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Error produced when a builder is asked to freeze an invalid attribute.
///
/// Construction is the only fallible operation in this crate: accessors,
/// equality, and hashing are total over any built value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Span offsets are inverted (`start > end`).
    #[error("invalid span: start {start} exceeds end {end}")]
    InvalidSpan {
        /// Start offset of the rejected span.
        start: usize,
        /// End offset of the rejected span.
        end: usize,
    },

    /// Head mention index does not point into the mention list.
    #[error("head mention index {index} out of bounds for {len} mentions")]
    HeadMentionOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of mentions staged in the builder.
        len: usize,
    },

    /// Language and confidence lists differ in length.
    #[error("language detection holds {languages} languages but {confidences} confidences")]
    DetectionLengthMismatch {
        /// Number of staged language codes.
        languages: usize,
        /// Number of staged confidence values.
        confidences: usize,
    },
}

impl Error {
    /// Create an invalid span error.
    pub fn invalid_span(start: usize, end: usize) -> Self {
        Error::InvalidSpan { start, end }
    }

    /// Create a head mention bounds error.
    pub fn head_mention_out_of_bounds(index: usize, len: usize) -> Self {
        Error::HeadMentionOutOfBounds { index, len }
    }

    /// Create a detection length mismatch error.
    pub fn detection_length_mismatch(languages: usize, confidences: usize) -> Self {
        Error::DetectionLengthMismatch {
            languages,
            confidences,
        }
    }
}
