use crate::dedupe::dedupe_sources;
use crate::error::Result;
use crate::expand::expand_sources;
use crate::extract::extract_definitions;
use crate::shorten::shorten_hashes;
use crate::types::{RawSource, SourceWithOperations};

/// Run the full processing pipeline over one batch of raw sources.
///
/// Stages run strictly in order: expansion, deduplication, identifier
/// shortening, definition extraction. The batch is processed as a whole or
/// not at all; no partial result is ever returned. Every invocation is
/// independent, with no state carried between calls.
pub fn process_sources(sources: Vec<RawSource>) -> Result<Vec<SourceWithOperations>> {
    let expanded = expand_sources(sources)?;
    let retained = dedupe_sources(expanded);
    let rekeyed = shorten_hashes(retained)?;
    Ok(extract_definitions(rekeyed))
}
