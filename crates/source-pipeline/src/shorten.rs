use std::collections::HashSet;

use crate::error::{PipelineError, Result};
use crate::types::RawSource;

/// Longest hash prefix the shortening search will try.
pub(crate) const MAX_PREFIX_LEN: usize = 32;

/// Find the smallest prefix length at which all hashes stay pairwise
/// distinct.
///
/// Tries lengths `1..=MAX_PREFIX_LEN` in order, so the returned length is
/// minimal. Hashes are expected to be ASCII hex; inputs shorter than the
/// candidate length compare as a whole. Exhausting the bound is an error
/// rather than a silent truncation, since colliding identifiers would
/// corrupt downstream artifact naming.
pub(crate) fn shortest_unique_prefix<S: AsRef<str>>(hashes: &[S]) -> Result<usize> {
    for len in 1..=MAX_PREFIX_LEN {
        let mut seen = HashSet::with_capacity(hashes.len());
        let all_distinct = hashes.iter().all(|hash| {
            let hash = hash.as_ref();
            seen.insert(&hash[..len.min(hash.len())])
        });

        if all_distinct {
            return Ok(len);
        }
    }

    Err(PipelineError::HashCollision {
        bound: MAX_PREFIX_LEN,
    })
}

/// Re-key retained sources by the minimal collision-free hash prefix,
/// preserving first-seen order.
pub(crate) fn shorten_hashes(
    retained: Vec<(String, RawSource)>,
) -> Result<Vec<(String, RawSource)>> {
    let prefix_len = {
        let hashes: Vec<&str> = retained.iter().map(|(hash, _)| hash.as_str()).collect();
        shortest_unique_prefix(&hashes)?
    };

    log::debug!("content hashes shortened to {prefix_len} character(s)");

    Ok(retained
        .into_iter()
        .map(|(mut hash, source)| {
            hash.truncate(prefix_len);
            (hash, source)
        })
        .collect())
}
