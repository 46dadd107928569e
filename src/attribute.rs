//! Attribute traits and the closed annotation sum type.
//!
//! The model is a closed set of concrete attribute types rather than an open
//! class hierarchy. Two traits carry the shared contract: [`Attribute`] for
//! the extension bag every attribute owns, and [`Positional`] for the span
//! positional attributes cover. [`Annotation`] is the tagged union used when
//! heterogeneous attributes live in one collection; comparing different
//! variants is always unequal, never an error.

use crate::concept::Concept;
use crate::detection::LanguageDetection;
use crate::entity::{CategorizerResult, Entity, Mention};
use crate::morpho::{HanMorphoAnalysis, MorphoAnalysis};
use crate::props::ExtendedProperties;
use crate::span::Span;
use crate::token::Token;
use serde::{Deserialize, Serialize};

/// Contract shared by every attribute: access to the extension bag.
pub trait Attribute {
    /// The open key/value bag captured at build time.
    fn extended_properties(&self) -> &ExtendedProperties;
}

/// Contract for attributes that cover a span of document text.
pub trait Positional: Attribute {
    /// The half-open character range this attribute covers.
    fn span(&self) -> Span;

    /// Start offset (inclusive).
    fn start_offset(&self) -> usize {
        self.span().start()
    }

    /// End offset (exclusive).
    fn end_offset(&self) -> usize {
        self.span().end()
    }
}

/// Any attribute the model defines, as a tagged union.
///
/// Useful for storing mixed annotations in one list and for comparing
/// attributes of unknown concrete type: derived equality returns `false`
/// across variants.
///
/// # Example
///
/// ```rust
/// use notate::{Annotation, TokenBuilder};
///
/// let token = TokenBuilder::new(0, 5, "Hello").build().unwrap();
/// let ann = Annotation::from(token);
/// assert_eq!(ann.kind(), "token");
/// assert_eq!(ann.span().unwrap().end(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Annotation {
    /// A token of text.
    Token(Token),
    /// A morphological analysis.
    MorphoAnalysis(MorphoAnalysis),
    /// A morphological analysis with Han readings.
    HanMorphoAnalysis(HanMorphoAnalysis),
    /// A language detection result.
    LanguageDetection(LanguageDetection),
    /// A mention of an entity in text.
    Mention(Mention),
    /// A resolved real-world entity.
    Entity(Entity),
    /// A document-level concept.
    Concept(Concept),
    /// A categorizer label with scores.
    CategorizerResult(CategorizerResult),
}

impl Annotation {
    /// Stable lower-case name of the concrete variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Annotation::Token(_) => "token",
            Annotation::MorphoAnalysis(_) => "morpho-analysis",
            Annotation::HanMorphoAnalysis(_) => "han-morpho-analysis",
            Annotation::LanguageDetection(_) => "language-detection",
            Annotation::Mention(_) => "mention",
            Annotation::Entity(_) => "entity",
            Annotation::Concept(_) => "concept",
            Annotation::CategorizerResult(_) => "categorizer-result",
        }
    }

    /// The covered span, for positional variants.
    ///
    /// Entities, concepts, and categorizer results do not themselves span
    /// text and return `None`.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Annotation::Token(a) => Some(a.span()),
            Annotation::MorphoAnalysis(a) => Some(a.span()),
            Annotation::HanMorphoAnalysis(a) => Some(a.span()),
            Annotation::LanguageDetection(a) => Some(a.span()),
            Annotation::Mention(a) => Some(a.span()),
            Annotation::Entity(_) | Annotation::Concept(_) | Annotation::CategorizerResult(_) => {
                None
            }
        }
    }
}

impl Attribute for Annotation {
    fn extended_properties(&self) -> &ExtendedProperties {
        match self {
            Annotation::Token(a) => a.extended_properties(),
            Annotation::MorphoAnalysis(a) => a.extended_properties(),
            Annotation::HanMorphoAnalysis(a) => a.extended_properties(),
            Annotation::LanguageDetection(a) => a.extended_properties(),
            Annotation::Mention(a) => a.extended_properties(),
            Annotation::Entity(a) => a.extended_properties(),
            Annotation::Concept(a) => a.extended_properties(),
            Annotation::CategorizerResult(a) => a.extended_properties(),
        }
    }
}

macro_rules! impl_from_annotation {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Annotation {
                fn from(attr: $ty) -> Self {
                    Annotation::$ty(attr)
                }
            }
        )*
    };
}

impl_from_annotation!(
    Token,
    MorphoAnalysis,
    HanMorphoAnalysis,
    LanguageDetection,
    Mention,
    Entity,
    Concept,
    CategorizerResult,
);
