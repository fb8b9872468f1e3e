//! # GraphQL Source Pipeline
//!
//! Deterministic preprocessing of raw GraphQL documents for artifact
//! generation.
//!
//! The host hands over a batch of raw sources (document text plus parsed
//! syntax tree) and receives back, for every distinct retained source, the
//! named operations and fragments it defines. Content addressing keeps the
//! result stable across runs: identical text always deduplicates to the
//! same entry, and retained sources are re-keyed by the shortest hash
//! prefix that stays collision-free.
//!
//! ## Architecture
//!
//! ```text
//! Raw sources (text + parsed document)
//!     │
//!     ├──> Expansion (split packed documents on "\n#-#\n")
//!     │
//!     ├──> Deduplication (SHA-256 over raw text, first occurrence wins)
//!     │
//!     ├──> Identifier shortening (minimal collision-free hash prefix)
//!     │
//!     └──> Definition extraction
//!          ├─> keep named operations and fragments
//!          ├─> synthesize `<Name>Document` / `<Name>FragmentDoc`
//!          └─> emit SourceWithOperations[]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gqlgen_source_pipeline::{process_sources, RawSource};
//!
//! let source = RawSource::parse("query Viewer { id }").unwrap();
//! let processed = process_sources(vec![source]).unwrap();
//!
//! assert_eq!(processed.len(), 1);
//! assert_eq!(processed[0].operations[0].initial_name, "ViewerDocument");
//! ```

mod dedupe;
mod error;
mod expand;
mod extract;
mod pipeline;
mod shorten;
mod types;

pub use dedupe::content_hash;
pub use error::{PipelineError, Result};
pub use expand::SOURCE_SEPARATOR;
pub use pipeline::process_sources;
pub use types::{
    OperationOrFragment, ParsedDefinition, ParsedDocument, RawSource, SourceWithOperations,
};
