use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while processing raw sources
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A raw source arrived without a parsed document
    #[error("source {location} has no parsed document")]
    MissingDocument { location: String },

    /// Packed text segments and parsed definitions are out of step
    #[error(
        "source {location} splits into {segments} segment(s) but its document has {definitions} definition(s)"
    )]
    SegmentMismatch {
        location: String,
        segments: usize,
        definitions: usize,
    },

    /// No prefix length within the search bound keeps all hashes distinct
    #[error("content hashes collide at every prefix length up to {bound}")]
    HashCollision { bound: usize },

    /// The document text is not valid GraphQL
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

impl PipelineError {
    /// Create a missing-document error for a source location
    pub fn missing_document(location: Option<&str>) -> Self {
        Self::MissingDocument {
            location: display_location(location),
        }
    }

    /// Create a segment-mismatch error for a source location
    pub fn segment_mismatch(location: Option<&str>, segments: usize, definitions: usize) -> Self {
        Self::SegmentMismatch {
            location: display_location(location),
            segments,
            definitions,
        }
    }

    /// Create an invalid-document error
    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::InvalidDocument(msg.into())
    }
}

fn display_location(location: Option<&str>) -> String {
    location.unwrap_or("<unknown>").to_string()
}
