use crate::error::{PipelineError, Result};
use crate::types::{ParsedDocument, RawSource};

/// Literal marker separating independently packed definitions within one
/// document. The marker is itself a GraphQL comment line, so packed text
/// still parses as a single document.
pub const SOURCE_SEPARATOR: &str = "\n#-#\n";

/// Split every packed source into one source per definition.
///
/// Text segment `i` pairs with definition `i` of the parsed document;
/// location metadata is copied onto every emitted source. Output preserves
/// input order, with each source's segments emitted contiguously.
pub(crate) fn expand_sources(sources: Vec<RawSource>) -> Result<Vec<RawSource>> {
    let mut expanded = Vec::with_capacity(sources.len());

    for source in sources {
        let RawSource {
            raw_text,
            document,
            location,
        } = source;

        let document =
            document.ok_or_else(|| PipelineError::missing_document(location.as_deref()))?;

        let segments: Vec<&str> = raw_text.split(SOURCE_SEPARATOR).collect();
        if segments.len() != document.definitions.len() {
            return Err(PipelineError::segment_mismatch(
                location.as_deref(),
                segments.len(),
                document.definitions.len(),
            ));
        }

        for (segment, definition) in segments.into_iter().zip(document.definitions) {
            expanded.push(RawSource {
                raw_text: segment.to_string(),
                document: Some(ParsedDocument {
                    definitions: vec![definition],
                }),
                location: location.clone(),
            });
        }
    }

    Ok(expanded)
}
