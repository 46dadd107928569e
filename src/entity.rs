//! Resolved entities, their mentions, and categorizer results.
//!
//! A [`Mention`] is a span of text that mentions an entity; an [`Entity`]
//! describes the referent itself and is not a span. Each entity aggregates
//! the mentions that were resolved to it and may designate one of them, by
//! index, as the head mention: the occurrence judged the best representative
//! of the referent.
//!
//! ```text
//! "Marie Curie won twice. Curie remains the only person to do so."
//!  ^^^^^^^^^^^            ^^^^^
//!  mention 0              mention 1
//!
//!  Entity { mentions: [m0, m1], head_mention_index: Some(0), .. }
//! ```
//!
//! The head index must point into the mention list; `build()` rejects
//! anything else.

use crate::attribute::{Attribute, Positional};
use crate::confidence::Confidence;
use crate::error::{Error, Result};
use crate::props::ExtendedProperties;
use crate::span::Span;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Mention
// ============================================================================

/// One occurrence of an entity in the document text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mention {
    span: Span,
    normalized: Option<String>,
    source: Option<String>,
    confidence: Option<Confidence>,
    extended_properties: ExtendedProperties,
}

impl Mention {
    /// Normalized form of the mention text, if computed.
    #[must_use]
    pub fn normalized(&self) -> Option<&str> {
        self.normalized.as_deref()
    }

    /// The component that produced this mention, if recorded.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Detection confidence, if any.
    #[must_use]
    pub const fn confidence(&self) -> Option<Confidence> {
        self.confidence
    }

    /// Start a builder seeded with this mention's fields.
    #[must_use]
    pub fn to_builder(&self) -> MentionBuilder {
        MentionBuilder {
            start: self.span.start(),
            end: self.span.end(),
            normalized: self.normalized.clone(),
            source: self.source.clone(),
            confidence: self.confidence,
            extended_properties: self.extended_properties.clone(),
        }
    }
}

impl Attribute for Mention {
    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended_properties
    }
}

impl Positional for Mention {
    fn span(&self) -> Span {
        self.span
    }
}

/// Builder for [`Mention`].
#[derive(Debug, Clone)]
pub struct MentionBuilder {
    start: usize,
    end: usize,
    normalized: Option<String>,
    source: Option<String>,
    confidence: Option<Confidence>,
    extended_properties: ExtendedProperties,
}

impl MentionBuilder {
    /// Create a builder from the required fields: the covered offsets.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            normalized: None,
            source: None,
            confidence: None,
            extended_properties: ExtendedProperties::new(),
        }
    }

    /// Set the normalized mention text.
    #[must_use]
    pub fn normalized(mut self, normalized: impl Into<String>) -> Self {
        self.normalized = Some(normalized.into());
        self
    }

    /// Record the component that produced this mention.
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the detection confidence.
    #[must_use]
    pub const fn confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Stage one extension bag entry.
    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended_properties.insert(key, value);
        self
    }

    /// Freeze into an immutable [`Mention`].
    pub fn build(self) -> Result<Mention> {
        Ok(Mention {
            span: Span::new(self.start, self.end)?,
            normalized: self.normalized,
            source: self.source,
            confidence: self.confidence,
            extended_properties: self.extended_properties,
        })
    }
}

// ============================================================================
// CategorizerResult
// ============================================================================

/// One label produced by a categorizer, with its scores.
///
/// Entities carry a list of these as their sentiment; other categorization
/// producers use the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategorizerResult {
    label: String,
    score: Option<Confidence>,
    confidence: Option<Confidence>,
    extended_properties: ExtendedProperties,
}

impl CategorizerResult {
    /// The assigned label, e.g. `"positive"`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Raw categorizer score, if reported.
    #[must_use]
    pub const fn score(&self) -> Option<Confidence> {
        self.score
    }

    /// Calibrated confidence, if reported.
    #[must_use]
    pub const fn confidence(&self) -> Option<Confidence> {
        self.confidence
    }

    /// Start a builder seeded with this result's fields.
    #[must_use]
    pub fn to_builder(&self) -> CategorizerResultBuilder {
        CategorizerResultBuilder {
            label: self.label.clone(),
            score: self.score,
            confidence: self.confidence,
            extended_properties: self.extended_properties.clone(),
        }
    }
}

impl Attribute for CategorizerResult {
    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended_properties
    }
}

/// Builder for [`CategorizerResult`].
#[derive(Debug, Clone)]
pub struct CategorizerResultBuilder {
    label: String,
    score: Option<Confidence>,
    confidence: Option<Confidence>,
    extended_properties: ExtendedProperties,
}

impl CategorizerResultBuilder {
    /// Create a builder from the required field: the label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            score: None,
            confidence: None,
            extended_properties: ExtendedProperties::new(),
        }
    }

    /// Set the raw score.
    #[must_use]
    pub const fn score(mut self, score: Confidence) -> Self {
        self.score = Some(score);
        self
    }

    /// Set the calibrated confidence.
    #[must_use]
    pub const fn confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Stage one extension bag entry.
    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended_properties.insert(key, value);
        self
    }

    /// Freeze into an immutable [`CategorizerResult`]. Never fails; the
    /// `Result` keeps the construction surface uniform across builders.
    pub fn build(self) -> Result<CategorizerResult> {
        Ok(CategorizerResult {
            label: self.label,
            score: self.score,
            confidence: self.confidence,
            extended_properties: self.extended_properties,
        })
    }
}

// ============================================================================
// Entity
// ============================================================================

/// A reference to a real-world entity, resolved from one or more mentions.
///
/// Entities are not spans of text. Each one provides the mentions that
/// support it, an optional head-mention index, an optional type label and
/// knowledge-base ID, a resolution confidence, and optional sentiment.
///
/// # Example
///
/// ```rust
/// use notate::{Confidence, EntityBuilder, MentionBuilder, Positional};
///
/// let entity = EntityBuilder::new()
///     .mention(MentionBuilder::new(0, 11).build().unwrap())
///     .mention(MentionBuilder::new(23, 28).build().unwrap())
///     .head_mention_index(0)
///     .entity_type("PERSON")
///     .entity_id("Q7186")
///     .confidence(Confidence::new(0.97).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(entity.head_mention().unwrap().span().start(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    mentions: Option<Vec<Mention>>,
    head_mention_index: Option<usize>,
    entity_type: Option<String>,
    entity_id: Option<String>,
    confidence: Option<Confidence>,
    sentiment: Option<Vec<CategorizerResult>>,
    extended_properties: ExtendedProperties,
}

impl Entity {
    /// The mentions that support this entity, or `None` if none were
    /// attached.
    #[must_use]
    pub fn mentions(&self) -> Option<&[Mention]> {
        self.mentions.as_deref()
    }

    /// Index of the head mention, if one is designated.
    ///
    /// When `Some`, the index is guaranteed in-bounds for
    /// [`mentions`](Self::mentions): the builder refused anything else.
    #[must_use]
    pub const fn head_mention_index(&self) -> Option<usize> {
        self.head_mention_index
    }

    /// The designated head mention, resolved through the index.
    #[must_use]
    pub fn head_mention(&self) -> Option<&Mention> {
        let index = self.head_mention_index?;
        self.mentions.as_ref()?.get(index)
    }

    /// The entity type label, e.g. `"PERSON"`, if established.
    #[must_use]
    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }

    /// Knowledge-base identifier, e.g. a Wikidata QID, if linked.
    #[must_use]
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Resolution confidence, if any.
    #[must_use]
    pub const fn confidence(&self) -> Option<Confidence> {
        self.confidence
    }

    /// Sentiment categorization, or `None` if not computed.
    #[must_use]
    pub fn sentiment(&self) -> Option<&[CategorizerResult]> {
        self.sentiment.as_deref()
    }

    /// Start a builder seeded with this entity's fields.
    ///
    /// The builder owns fresh copies; mutating it never affects `self`.
    #[must_use]
    pub fn to_builder(&self) -> EntityBuilder {
        EntityBuilder {
            mentions: self.mentions.clone(),
            head_mention_index: self.head_mention_index,
            entity_type: self.entity_type.clone(),
            entity_id: self.entity_id.clone(),
            confidence: self.confidence,
            sentiment: self.sentiment.clone(),
            extended_properties: self.extended_properties.clone(),
        }
    }
}

impl Attribute for Entity {
    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended_properties
    }
}

/// Builder for [`Entity`]. No field is required.
#[derive(Debug, Clone, Default)]
pub struct EntityBuilder {
    mentions: Option<Vec<Mention>>,
    head_mention_index: Option<usize>,
    entity_type: Option<String>,
    entity_id: Option<String>,
    confidence: Option<Confidence>,
    sentiment: Option<Vec<CategorizerResult>>,
    extended_properties: ExtendedProperties,
}

impl EntityBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one mention.
    #[must_use]
    pub fn mention(mut self, mention: Mention) -> Self {
        self.mentions.get_or_insert_with(Vec::new).push(mention);
        self
    }

    /// Replace the whole mention list. `Some(vec![])` is preserved as an
    /// empty-but-present list, distinct from never attaching mentions.
    #[must_use]
    pub fn mentions(mut self, mentions: Vec<Mention>) -> Self {
        self.mentions = Some(mentions);
        self
    }

    /// Designate the head mention by index into the mention list.
    ///
    /// Bounds are checked at [`build`](Self::build), not here, so mentions
    /// may be added in any order relative to this call.
    #[must_use]
    pub const fn head_mention_index(mut self, index: usize) -> Self {
        self.head_mention_index = Some(index);
        self
    }

    /// Set the entity type label.
    #[must_use]
    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    /// Set the knowledge-base identifier.
    #[must_use]
    pub fn entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Set the resolution confidence.
    #[must_use]
    pub const fn confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Add one sentiment categorization result.
    #[must_use]
    pub fn sentiment(mut self, sentiment: CategorizerResult) -> Self {
        self.sentiment.get_or_insert_with(Vec::new).push(sentiment);
        self
    }

    /// Stage one extension bag entry.
    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended_properties.insert(key, value);
        self
    }

    /// Freeze into an immutable [`Entity`].
    ///
    /// Fails with [`Error::HeadMentionOutOfBounds`] when a head mention index
    /// is set and does not point into the staged mention list (a missing
    /// list counts as zero mentions).
    pub fn build(self) -> Result<Entity> {
        if let Some(index) = self.head_mention_index {
            let len = self.mentions.as_ref().map_or(0, Vec::len);
            if index >= len {
                return Err(Error::head_mention_out_of_bounds(index, len));
            }
        }
        Ok(Entity {
            mentions: self.mentions,
            head_mention_index: self.head_mention_index,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            confidence: self.confidence,
            sentiment: self.sentiment,
            extended_properties: self.extended_properties,
        })
    }
}
