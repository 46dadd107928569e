//! Document-level concepts.

use crate::attribute::Attribute;
use crate::confidence::Confidence;
use crate::error::Result;
use crate::props::ExtendedProperties;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A high-level concept of a document.
///
/// A concept is an abstract or concrete topic highly relevant to the
/// document. It may never be referenced explicitly in the text, so it does
/// not cover a span.
///
/// # Example
///
/// ```rust
/// use notate::{Confidence, ConceptBuilder};
///
/// let concept = ConceptBuilder::new("radioactivity", "Q11448")
///     .salience(Confidence::new(0.82).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(concept.concept(), "radioactivity");
/// assert_eq!(concept.concept_id(), Some("Q11448"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Concept {
    concept: String,
    salience: Option<Confidence>,
    concept_id: Option<String>,
    extended_properties: ExtendedProperties,
}

impl Concept {
    /// The name of the concept.
    #[must_use]
    pub fn concept(&self) -> &str {
        &self.concept
    }

    /// Salience of the concept for the document, if computed.
    #[must_use]
    pub const fn salience(&self) -> Option<Confidence> {
        self.salience
    }

    /// Knowledge-base identifier for the concept, if linked.
    #[must_use]
    pub fn concept_id(&self) -> Option<&str> {
        self.concept_id.as_deref()
    }

    /// Start a builder seeded with this concept's fields.
    #[must_use]
    pub fn to_builder(&self) -> ConceptBuilder {
        ConceptBuilder {
            concept: self.concept.clone(),
            salience: self.salience,
            concept_id: self.concept_id.clone(),
            extended_properties: self.extended_properties.clone(),
        }
    }
}

impl Attribute for Concept {
    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended_properties
    }
}

/// Builder for [`Concept`].
#[derive(Debug, Clone)]
pub struct ConceptBuilder {
    concept: String,
    salience: Option<Confidence>,
    concept_id: Option<String>,
    extended_properties: ExtendedProperties,
}

impl ConceptBuilder {
    /// Create a builder from the required fields: the concept name and its
    /// knowledge-base ID.
    #[must_use]
    pub fn new(concept: impl Into<String>, concept_id: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            salience: None,
            concept_id: Some(concept_id.into()),
            extended_properties: ExtendedProperties::new(),
        }
    }

    /// Replace the concept name.
    #[must_use]
    pub fn concept(mut self, concept: impl Into<String>) -> Self {
        self.concept = concept.into();
        self
    }

    /// Set the salience.
    #[must_use]
    pub const fn salience(mut self, salience: Confidence) -> Self {
        self.salience = Some(salience);
        self
    }

    /// Replace the knowledge-base identifier.
    #[must_use]
    pub fn concept_id(mut self, concept_id: impl Into<String>) -> Self {
        self.concept_id = Some(concept_id.into());
        self
    }

    /// Stage one extension bag entry.
    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended_properties.insert(key, value);
        self
    }

    /// Freeze into an immutable [`Concept`]. Never fails; the `Result`
    /// keeps the construction surface uniform across builders.
    pub fn build(self) -> Result<Concept> {
        Ok(Concept {
            concept: self.concept,
            salience: self.salience,
            concept_id: self.concept_id,
            extended_properties: self.extended_properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_captured() {
        let concept = ConceptBuilder::new("superconductivity", "Q11651")
            .build()
            .unwrap();
        assert_eq!(concept.concept(), "superconductivity");
        assert_eq!(concept.concept_id(), Some("Q11651"));
        assert!(concept.salience().is_none());
    }

    #[test]
    fn salience_differentiates() {
        let base = ConceptBuilder::new("physics", "Q413").build().unwrap();
        let salient = base
            .to_builder()
            .salience(Confidence::new(0.9).unwrap())
            .build()
            .unwrap();
        assert_ne!(base, salient);
        assert_eq!(base.salience(), None);
    }

    #[test]
    fn override_through_copy_builder() {
        let concept = ConceptBuilder::new("physics", "Q413").build().unwrap();
        let renamed = concept.to_builder().concept("chemistry").build().unwrap();
        assert_eq!(concept.concept(), "physics");
        assert_eq!(renamed.concept(), "chemistry");
    }
}
