//! # notate
//!
//! Immutable annotation data model for linguistic analysis results.
//!
//! Producers (tokenizers, morphological analyzers, entity resolvers) attach
//! annotations to character ranges of a document and hand them to consumers
//! (serializers, downstream analyzers) as frozen values:
//!
//! - **Positional attributes** cover a [`Span`] of text: [`Token`],
//!   [`MorphoAnalysis`], [`HanMorphoAnalysis`], [`LanguageDetection`],
//!   [`Mention`].
//! - **Non-positional attributes** describe the document or a referent
//!   without covering text: [`Entity`], [`Concept`], [`CategorizerResult`].
//! - Every attribute carries an [`ExtendedProperties`] bag for
//!   forward-compatible data the core schema does not anticipate.
//!
//! Every attribute is produced exactly once, through its builder; after
//! `build()` returns, nothing can mutate it. Equality and hashing are
//! structural over all fields (including the bag) and total: comparing or
//! hashing any built value never fails, and attributes of different concrete
//! types are never equal.
//!
//! ## Quick Start
//!
//! ```rust
//! use notate::{
//!     Confidence, EntityBuilder, MentionBuilder, MorphoAnalysisBuilder, Positional,
//!     TokenBuilder,
//! };
//!
//! // A token with one morphological reading.
//! let token = TokenBuilder::new(0, 3, "ran")
//!     .analysis(
//!         MorphoAnalysisBuilder::new()
//!             .lemma("run")
//!             .part_of_speech("VERB")
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//! assert_eq!(token.analyses().unwrap()[0].lemma(), Some("run"));
//!
//! // An entity resolved from two mentions, the first designated as head.
//! let entity = EntityBuilder::new()
//!     .mention(MentionBuilder::new(0, 11).build().unwrap())
//!     .mention(MentionBuilder::new(23, 28).build().unwrap())
//!     .head_mention_index(0)
//!     .entity_type("PERSON")
//!     .confidence(Confidence::new(0.97).unwrap())
//!     .build()
//!     .unwrap();
//! assert_eq!(entity.head_mention().unwrap().start_offset(), 0);
//! ```
//!
//! ## Construction errors
//!
//! Invalid values are rejected when a builder freezes, never later:
//! inverted spans ([`Error::InvalidSpan`]), head mention indices outside the
//! mention list ([`Error::HeadMentionOutOfBounds`]), and mismatched language
//! detection lists ([`Error::DetectionLengthMismatch`]). A built value is
//! always internally consistent.
//!
//! ## Design Notes
//!
//! - **Parse, don't validate**: scores are [`Confidence`] witnesses bounded
//!   to `[0, 1]`, so equality is reflexive and hashing total everywhere.
//! - **Unset vs empty**: list-valued fields are `Option<Vec<T>>`. `None`
//!   means the producer never computed the facet; `Some(vec![])` means it
//!   computed one and found nothing. Builders keep the two distinct.
//! - **No shared mutable state**: builders are plain structs, consumed by
//!   `build()`; built attributes are `Send + Sync` by composition and safe
//!   to share read-only.

#![warn(missing_docs)]

mod attribute;
mod concept;
mod confidence;
mod detection;
mod entity;
mod error;
mod lang;
mod morpho;
mod props;
mod span;
mod token;

pub use attribute::{Annotation, Attribute, Positional};
pub use concept::{Concept, ConceptBuilder};
pub use confidence::{Confidence, ConfidenceError};
pub use detection::{LanguageDetection, LanguageDetectionBuilder};
pub use entity::{
    CategorizerResult, CategorizerResultBuilder, Entity, EntityBuilder, Mention, MentionBuilder,
};
pub use error::{Error, Result};
pub use lang::LanguageCode;
pub use morpho::{
    HanMorphoAnalysis, HanMorphoAnalysisBuilder, MorphoAnalysis, MorphoAnalysisBuilder,
};
pub use props::ExtendedProperties;
pub use span::Span;
pub use token::{Token, TokenBuilder};

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use notate::prelude::*;
    //!
    //! let token = TokenBuilder::new(0, 4, "Oslo").build().unwrap();
    //! assert_eq!(token.span().len(), 4);
    //! ```
    pub use crate::attribute::{Annotation, Attribute, Positional};
    pub use crate::concept::{Concept, ConceptBuilder};
    pub use crate::confidence::Confidence;
    pub use crate::detection::{LanguageDetection, LanguageDetectionBuilder};
    pub use crate::entity::{
        CategorizerResult, CategorizerResultBuilder, Entity, EntityBuilder, Mention,
        MentionBuilder,
    };
    pub use crate::error::{Error, Result};
    pub use crate::lang::LanguageCode;
    pub use crate::morpho::{
        HanMorphoAnalysis, HanMorphoAnalysisBuilder, MorphoAnalysis, MorphoAnalysisBuilder,
    };
    pub use crate::props::ExtendedProperties;
    pub use crate::span::Span;
    pub use crate::token::{Token, TokenBuilder};
}

/// Static assertions for struct layouts.
///
/// Compile-time checks; a failure here is a build error, not a test failure.
#[doc(hidden)]
pub mod static_checks {
    use super::*;

    // Confidence is zero-cost (same layout as f64)
    const _: () = assert!(std::mem::size_of::<Confidence>() == std::mem::size_of::<f64>());

    // Span is two offsets, nothing more
    const _: () = assert!(std::mem::size_of::<Span>() == 2 * std::mem::size_of::<usize>());
}
