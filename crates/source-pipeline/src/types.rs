use graphql_parser::query;

use crate::error::{PipelineError, Result};

/// Parsed executable document with owned string storage
pub type ParsedDocument = query::Document<'static, String>;

/// A single top-level definition of a parsed document
pub type ParsedDefinition = query::Definition<'static, String>;

/// A raw GraphQL document as supplied by the host
#[derive(Debug, Clone, PartialEq)]
pub struct RawSource {
    /// Document text exactly as written
    pub raw_text: String,

    /// Parsed syntax tree of `raw_text`, if the host parsed it
    pub document: Option<ParsedDocument>,

    /// Opaque location metadata (usually a file path), passed through unchanged
    pub location: Option<String>,
}

impl RawSource {
    /// Create a source from text and its parsed document
    #[must_use]
    pub fn new(raw_text: impl Into<String>, document: ParsedDocument) -> Self {
        Self {
            raw_text: raw_text.into(),
            document: Some(document),
            location: None,
        }
    }

    /// Parse `raw_text` and create a source from it
    pub fn parse(raw_text: impl Into<String>) -> Result<Self> {
        let raw_text = raw_text.into();
        let document = graphql_parser::parse_query::<String>(&raw_text)
            .map_err(|err| PipelineError::invalid_document(err.to_string()))?
            .into_static();

        Ok(Self {
            raw_text,
            document: Some(document),
            location: None,
        })
    }

    /// Builder: attach location metadata
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A named executable definition with its synthesized artifact identifier
#[derive(Debug, Clone, PartialEq)]
pub struct OperationOrFragment {
    /// Identifier the generated artifact is exported under
    pub initial_name: String,

    /// The definition node the identifier refers to
    pub definition: ParsedDefinition,
}

/// A retained source together with its named definitions, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct SourceWithOperations {
    /// The retained source, location metadata intact
    pub source: RawSource,

    /// Named operations and fragments extracted from the source
    pub operations: Vec<OperationOrFragment>,
}
