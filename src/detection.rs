//! Language detection results.

use crate::attribute::{Attribute, Positional};
use crate::confidence::Confidence;
use crate::error::{Error, Result};
use crate::lang::LanguageCode;
use crate::props::ExtendedProperties;
use crate::span::Span;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Detected languages for a region of text, ranked by the detector.
///
/// Candidates are parallel lists: `language()[i]` was detected with
/// `confidence()[i]`. The two lists always have the same length; the builder
/// appends candidates as pairs and refuses to freeze mismatched bulk sets.
///
/// # Example
///
/// ```rust
/// use notate::{Confidence, LanguageCode, LanguageDetectionBuilder};
///
/// let detection = LanguageDetectionBuilder::new(0, 120)
///     .detection(LanguageCode::German, Confidence::new(0.8).unwrap())
///     .detection(LanguageCode::English, Confidence::new(0.2).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(detection.language().len(), detection.confidence().len());
/// let (best, _) = detection.best().unwrap();
/// assert_eq!(best, LanguageCode::German);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageDetection {
    span: Span,
    language: Vec<LanguageCode>,
    confidence: Vec<Confidence>,
    extended_properties: ExtendedProperties,
}

impl LanguageDetection {
    /// Detected languages, best first by detector convention.
    #[must_use]
    pub fn language(&self) -> &[LanguageCode] {
        &self.language
    }

    /// Confidence for each detected language, index-paired with
    /// [`language`](Self::language).
    #[must_use]
    pub fn confidence(&self) -> &[Confidence] {
        &self.confidence
    }

    /// Iterate `(language, confidence)` candidate pairs.
    pub fn detections(&self) -> impl Iterator<Item = (LanguageCode, Confidence)> + '_ {
        self.language
            .iter()
            .copied()
            .zip(self.confidence.iter().copied())
    }

    /// The candidate with the highest confidence, if any were detected.
    #[must_use]
    pub fn best(&self) -> Option<(LanguageCode, Confidence)> {
        self.detections().max_by(|a, b| {
            a.1.get()
                .partial_cmp(&b.1.get())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Start a builder seeded with this detection's fields.
    #[must_use]
    pub fn to_builder(&self) -> LanguageDetectionBuilder {
        LanguageDetectionBuilder {
            start: self.span.start(),
            end: self.span.end(),
            language: self.language.clone(),
            confidence: self.confidence.clone(),
            extended_properties: self.extended_properties.clone(),
        }
    }
}

impl Attribute for LanguageDetection {
    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended_properties
    }
}

impl Positional for LanguageDetection {
    fn span(&self) -> Span {
        self.span
    }
}

/// Builder for [`LanguageDetection`].
#[derive(Debug, Clone)]
pub struct LanguageDetectionBuilder {
    start: usize,
    end: usize,
    language: Vec<LanguageCode>,
    confidence: Vec<Confidence>,
    extended_properties: ExtendedProperties,
}

impl LanguageDetectionBuilder {
    /// Create a builder from the required fields: the covered offsets.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            language: Vec::new(),
            confidence: Vec::new(),
            extended_properties: ExtendedProperties::new(),
        }
    }

    /// Append one `(language, confidence)` candidate pair.
    #[must_use]
    pub fn detection(mut self, language: LanguageCode, confidence: Confidence) -> Self {
        self.language.push(language);
        self.confidence.push(confidence);
        self
    }

    /// Replace the whole language list.
    ///
    /// When bulk-setting, the confidence list must be set to the same length
    /// or [`build`](Self::build) fails.
    #[must_use]
    pub fn languages(mut self, languages: Vec<LanguageCode>) -> Self {
        self.language = languages;
        self
    }

    /// Replace the whole confidence list.
    #[must_use]
    pub fn confidences(mut self, confidences: Vec<Confidence>) -> Self {
        self.confidence = confidences;
        self
    }

    /// Stage one extension bag entry.
    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended_properties.insert(key, value);
        self
    }

    /// Freeze into an immutable [`LanguageDetection`].
    ///
    /// Fails with [`Error::InvalidSpan`] for inverted offsets and
    /// [`Error::DetectionLengthMismatch`] when the staged language and
    /// confidence lists differ in length.
    pub fn build(self) -> Result<LanguageDetection> {
        if self.language.len() != self.confidence.len() {
            return Err(Error::detection_length_mismatch(
                self.language.len(),
                self.confidence.len(),
            ));
        }
        Ok(LanguageDetection {
            span: Span::new(self.start, self.end)?,
            language: self.language,
            confidence: self.confidence,
            extended_properties: self.extended_properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conf(value: f64) -> Confidence {
        Confidence::new(value).unwrap()
    }

    #[test]
    fn pairs_stay_index_aligned() {
        let detection = LanguageDetectionBuilder::new(0, 40)
            .detection(LanguageCode::Spanish, conf(0.7))
            .detection(LanguageCode::Portuguese, conf(0.3))
            .build()
            .unwrap();

        assert_eq!(detection.language()[0], LanguageCode::Spanish);
        assert_eq!(detection.confidence()[0], conf(0.7));
        assert_eq!(detection.language()[1], LanguageCode::Portuguese);
        assert_eq!(detection.confidence()[1], conf(0.3));
    }

    #[test]
    fn best_picks_highest_confidence() {
        let detection = LanguageDetectionBuilder::new(0, 10)
            .detection(LanguageCode::French, conf(0.2))
            .detection(LanguageCode::Italian, conf(0.75))
            .detection(LanguageCode::Spanish, conf(0.05))
            .build()
            .unwrap();
        assert_eq!(detection.best(), Some((LanguageCode::Italian, conf(0.75))));
    }

    #[test]
    fn best_is_none_when_empty() {
        let detection = LanguageDetectionBuilder::new(0, 10).build().unwrap();
        assert!(detection.best().is_none());
    }

    #[test]
    fn bulk_set_length_mismatch_rejected() {
        let err = LanguageDetectionBuilder::new(0, 10)
            .languages(vec![LanguageCode::English, LanguageCode::German])
            .confidences(vec![conf(0.9)])
            .build()
            .unwrap_err();
        assert_eq!(err, Error::detection_length_mismatch(2, 1));
    }

    #[test]
    fn build_rejects_inverted_span() {
        let err = LanguageDetectionBuilder::new(10, 2).build().unwrap_err();
        assert_eq!(err, Error::invalid_span(10, 2));
    }
}
