//! Witness type for confidence and salience values bounded to [0.0, 1.0].
//!
//! Attributes compare and hash by value across every field, including their
//! scores. Raw `f64` cannot carry that contract (`NaN != NaN`, and `f64` has
//! no `Hash`), so scores are parsed once into [`Confidence`] at the API
//! boundary. The witness guarantees a finite in-range value, which makes
//! equality reflexive and hashing total for every attribute that holds one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A score guaranteed to be in the range [0.0, 1.0] and never NaN.
///
/// `Confidence` is `#[repr(transparent)]`: it has the exact memory layout of
/// `f64` and serializes as a bare number.
///
/// # Construction
///
/// - [`Confidence::new`]: returns `None` if out of range or NaN
/// - [`Confidence::saturating`]: clamps to [0, 1]; NaN becomes 0.0
/// - [`Confidence::try_from`]: `Err` if out of range
///
/// # Example
///
/// ```rust
/// use notate::Confidence;
///
/// assert!(Confidence::new(0.5).is_some());
/// assert!(Confidence::new(1.5).is_none());
///
/// let conf = Confidence::saturating(1.5);
/// assert_eq!(conf.get(), 1.0);
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// The minimum valid confidence value.
    pub const MIN: Self = Self(0.0);

    /// The maximum valid confidence value.
    pub const MAX: Self = Self(1.0);

    /// Create a confidence score, returning `None` if out of range or NaN.
    #[must_use]
    #[inline]
    pub fn new(value: f64) -> Option<Self> {
        if (0.0..=1.0).contains(&value) && !value.is_nan() {
            Some(Self(normalize_zero(value)))
        } else {
            None
        }
    }

    /// Create a confidence score, clamping to [0.0, 1.0].
    ///
    /// NaN is treated as 0.0.
    #[must_use]
    #[inline]
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(normalize_zero(value.clamp(0.0, 1.0)))
        }
    }

    /// Get the inner value (guaranteed to be in [0.0, 1.0]).
    #[must_use]
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

// Negative zero compares equal to zero but has different bits; normalizing at
// construction keeps `Hash` consistent with `PartialEq`.
#[inline]
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

// Stored values are never NaN, so equality is reflexive and total.
impl Eq for Confidence {}

impl Hash for Confidence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Debug for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Confidence({:.4})", self.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Error when trying to create a [`Confidence`] from an invalid value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceError {
    /// The invalid value that was provided.
    pub value: f64,
}

impl fmt::Display for ConfidenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "confidence value {} is outside valid range [0.0, 1.0]",
            self.value
        )
    }
}

impl std::error::Error for ConfidenceError {}

impl TryFrom<f64> for Confidence {
    type Error = ConfidenceError;

    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or(ConfidenceError { value })
    }
}

impl From<Confidence> for f64 {
    #[inline]
    fn from(conf: Confidence) -> Self {
        conf.0
    }
}
