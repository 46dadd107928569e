//! Morphological analyses.
//!
//! A [`MorphoAnalysis`] records one reading of a span: its lemma, part of
//! speech, raw analyzer output, and the compound components the span breaks
//! into. [`HanMorphoAnalysis`] records the pronunciation readings produced
//! for Han script. A `None` component or reading list means the analyzer did
//! not compute that facet; an empty list means it computed one and found
//! nothing. The two are distinct values.

use crate::attribute::{Attribute, Positional};
use crate::error::Result;
use crate::props::ExtendedProperties;
use crate::span::Span;
use crate::token::Token;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One morphological reading of a span of text.
///
/// # Example
///
/// ```rust
/// use notate::MorphoAnalysisBuilder;
///
/// let analysis = MorphoAnalysisBuilder::new()
///     .lemma("run")
///     .part_of_speech("VERB")
///     .build()
///     .unwrap();
/// assert_eq!(analysis.lemma(), Some("run"));
/// assert!(analysis.components().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MorphoAnalysis {
    span: Span,
    components: Option<Vec<Token>>,
    lemma: Option<String>,
    part_of_speech: Option<String>,
    raw: Option<String>,
    extended_properties: ExtendedProperties,
}

impl MorphoAnalysis {
    /// Compound components of the analyzed span, or `None` if not computed.
    #[must_use]
    pub fn components(&self) -> Option<&[Token]> {
        self.components.as_deref()
    }

    /// The lemma, if any.
    #[must_use]
    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }

    /// The part of speech, if any.
    #[must_use]
    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.as_deref()
    }

    /// The raw analyzer output, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Start a builder seeded with this analysis's fields.
    #[must_use]
    pub fn to_builder(&self) -> MorphoAnalysisBuilder {
        MorphoAnalysisBuilder {
            start: self.span.start(),
            end: self.span.end(),
            components: self.components.clone(),
            lemma: self.lemma.clone(),
            part_of_speech: self.part_of_speech.clone(),
            raw: self.raw.clone(),
            extended_properties: self.extended_properties.clone(),
        }
    }
}

impl Attribute for MorphoAnalysis {
    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended_properties
    }
}

impl Positional for MorphoAnalysis {
    fn span(&self) -> Span {
        self.span
    }
}

/// Builder for [`MorphoAnalysis`].
///
/// No field is required; the span defaults to the empty range `[0, 0)`.
#[derive(Debug, Clone, Default)]
pub struct MorphoAnalysisBuilder {
    start: usize,
    end: usize,
    components: Option<Vec<Token>>,
    lemma: Option<String>,
    part_of_speech: Option<String>,
    raw: Option<String>,
    extended_properties: ExtendedProperties,
}

impl MorphoAnalysisBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offsets.
    #[must_use]
    pub const fn span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Add one compound component.
    #[must_use]
    pub fn component(mut self, component: Token) -> Self {
        self.components.get_or_insert_with(Vec::new).push(component);
        self
    }

    /// Replace the whole component list. `Some(vec![])` is preserved as an
    /// empty-but-present list, distinct from never setting one.
    #[must_use]
    pub fn components(mut self, components: Vec<Token>) -> Self {
        self.components = Some(components);
        self
    }

    /// Set the lemma.
    #[must_use]
    pub fn lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    /// Set the part of speech.
    #[must_use]
    pub fn part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = Some(pos.into());
        self
    }

    /// Set the raw analyzer output.
    #[must_use]
    pub fn raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// Stage one extension bag entry.
    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended_properties.insert(key, value);
        self
    }

    /// Freeze into an immutable [`MorphoAnalysis`].
    pub fn build(self) -> Result<MorphoAnalysis> {
        Ok(MorphoAnalysis {
            span: Span::new(self.start, self.end)?,
            components: self.components,
            lemma: self.lemma,
            part_of_speech: self.part_of_speech,
            raw: self.raw,
            extended_properties: self.extended_properties,
        })
    }
}

/// A morphological reading that also carries Han pronunciation readings.
///
/// Distinct from [`MorphoAnalysis`]: the two types never compare equal, even
/// when their incidental fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HanMorphoAnalysis {
    span: Span,
    readings: Option<Vec<String>>,
    extended_properties: ExtendedProperties,
}

impl HanMorphoAnalysis {
    /// Pronunciation readings, or `None` if not computed.
    #[must_use]
    pub fn readings(&self) -> Option<&[String]> {
        self.readings.as_deref()
    }

    /// Start a builder seeded with this analysis's fields.
    #[must_use]
    pub fn to_builder(&self) -> HanMorphoAnalysisBuilder {
        HanMorphoAnalysisBuilder {
            start: self.span.start(),
            end: self.span.end(),
            readings: self.readings.clone(),
            extended_properties: self.extended_properties.clone(),
        }
    }
}

impl Attribute for HanMorphoAnalysis {
    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended_properties
    }
}

impl Positional for HanMorphoAnalysis {
    fn span(&self) -> Span {
        self.span
    }
}

/// Builder for [`HanMorphoAnalysis`].
#[derive(Debug, Clone, Default)]
pub struct HanMorphoAnalysisBuilder {
    start: usize,
    end: usize,
    readings: Option<Vec<String>>,
    extended_properties: ExtendedProperties,
}

impl HanMorphoAnalysisBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offsets.
    #[must_use]
    pub const fn span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Add one reading.
    #[must_use]
    pub fn reading(mut self, reading: impl Into<String>) -> Self {
        self.readings.get_or_insert_with(Vec::new).push(reading.into());
        self
    }

    /// Replace the whole reading list.
    #[must_use]
    pub fn readings(mut self, readings: Vec<String>) -> Self {
        self.readings = Some(readings);
        self
    }

    /// Stage one extension bag entry.
    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended_properties.insert(key, value);
        self
    }

    /// Freeze into an immutable [`HanMorphoAnalysis`].
    pub fn build(self) -> Result<HanMorphoAnalysis> {
        Ok(HanMorphoAnalysis {
            span: Span::new(self.start, self.end)?,
            readings: self.readings,
            extended_properties: self.extended_properties,
        })
    }
}
