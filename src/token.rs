//! Tokens of text.

use crate::attribute::{Attribute, Positional};
use crate::error::Result;
use crate::morpho::MorphoAnalysis;
use crate::props::ExtendedProperties;
use crate::span::Span;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One token of text: the atomic unit produced by tokenization.
///
/// A token covers a span, carries the covered text, and may carry normalized
/// forms plus the morphological analyses computed for it. All fields are
/// frozen at build time.
///
/// # Example
///
/// ```rust
/// use notate::TokenBuilder;
///
/// let token = TokenBuilder::new(0, 5, "Hello")
///     .normalized("hello")
///     .build()
///     .unwrap();
/// assert_eq!(token.text(), "Hello");
/// assert_eq!(token.normalized(), Some(&["hello".to_string()][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    span: Span,
    text: String,
    normalized: Option<Vec<String>>,
    source: Option<String>,
    analyses: Option<Vec<MorphoAnalysis>>,
    extended_properties: ExtendedProperties,
}

impl Token {
    /// The covered text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized forms of the token, or `None` if none were computed.
    #[must_use]
    pub fn normalized(&self) -> Option<&[String]> {
        self.normalized.as_deref()
    }

    /// The component that produced this token, if recorded.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Morphological analyses of the token, or `None` if none were computed.
    #[must_use]
    pub fn analyses(&self) -> Option<&[MorphoAnalysis]> {
        self.analyses.as_deref()
    }

    /// Start a builder seeded with this token's fields.
    #[must_use]
    pub fn to_builder(&self) -> TokenBuilder {
        TokenBuilder {
            start: self.span.start(),
            end: self.span.end(),
            text: self.text.clone(),
            normalized: self.normalized.clone(),
            source: self.source.clone(),
            analyses: self.analyses.clone(),
            extended_properties: self.extended_properties.clone(),
        }
    }
}

impl Attribute for Token {
    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended_properties
    }
}

impl Positional for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// Builder for [`Token`].
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    start: usize,
    end: usize,
    text: String,
    normalized: Option<Vec<String>>,
    source: Option<String>,
    analyses: Option<Vec<MorphoAnalysis>>,
    extended_properties: ExtendedProperties,
}

impl TokenBuilder {
    /// Create a builder from the required fields: offsets and covered text.
    #[must_use]
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            normalized: None,
            source: None,
            analyses: None,
            extended_properties: ExtendedProperties::new(),
        }
    }

    /// Replace the offsets.
    #[must_use]
    pub const fn span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Replace the covered text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Add one normalized form.
    #[must_use]
    pub fn normalized(mut self, form: impl Into<String>) -> Self {
        self.normalized.get_or_insert_with(Vec::new).push(form.into());
        self
    }

    /// Record the component that produced this token.
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add one morphological analysis.
    #[must_use]
    pub fn analysis(mut self, analysis: MorphoAnalysis) -> Self {
        self.analyses.get_or_insert_with(Vec::new).push(analysis);
        self
    }

    /// Replace the whole analysis list. `Some(vec![])` is preserved as an
    /// empty-but-present list, distinct from never setting one.
    #[must_use]
    pub fn analyses(mut self, analyses: Vec<MorphoAnalysis>) -> Self {
        self.analyses = Some(analyses);
        self
    }

    /// Stage one extension bag entry.
    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended_properties.insert(key, value);
        self
    }

    /// Freeze into an immutable [`Token`].
    ///
    /// Fails with [`crate::Error::InvalidSpan`] when the staged offsets are
    /// inverted.
    pub fn build(self) -> Result<Token> {
        Ok(Token {
            span: Span::new(self.start, self.end)?,
            text: self.text,
            normalized: self.normalized,
            source: self.source,
            analyses: self.analyses,
            extended_properties: self.extended_properties,
        })
    }
}
