use graphql_parser::query::{Definition, OperationDefinition};

use crate::types::{OperationOrFragment, ParsedDefinition, RawSource, SourceWithOperations};

/// Suffix appended to operation identifiers
const OPERATION_SUFFIX: &str = "Document";

/// Suffix appended to fragment identifiers
const FRAGMENT_SUFFIX: &str = "FragmentDoc";

/// Collect the named operations and fragments of every retained source.
///
/// Definitions are walked in document order. Sources that yield no named
/// definitions (anonymous-only or definition-free) are dropped entirely,
/// so every emitted entry has at least one operation.
pub(crate) fn extract_definitions(
    retained: Vec<(String, RawSource)>,
) -> Vec<SourceWithOperations> {
    let mut out = Vec::with_capacity(retained.len());

    for (_, source) in retained {
        let operations: Vec<OperationOrFragment> = source
            .document
            .iter()
            .flat_map(|document| document.definitions.iter())
            .filter_map(named_definition)
            .collect();

        if operations.is_empty() {
            continue;
        }

        out.push(SourceWithOperations { source, operations });
    }

    out
}

/// Synthesize the artifact identifier for a definition, if it carries a
/// usable name.
fn named_definition(definition: &ParsedDefinition) -> Option<OperationOrFragment> {
    let initial_name = match definition {
        Definition::Operation(operation) => {
            format!("{}{OPERATION_SUFFIX}", well_formed(operation_name(operation))?)
        }
        Definition::Fragment(fragment) => {
            format!("{}{FRAGMENT_SUFFIX}", well_formed(Some(&fragment.name))?)
        }
    };

    Some(OperationOrFragment {
        initial_name,
        definition: definition.clone(),
    })
}

/// Name of an operation definition, if present. Shorthand selection sets
/// are always anonymous.
fn operation_name<'a>(operation: &'a OperationDefinition<'static, String>) -> Option<&'a String> {
    match operation {
        OperationDefinition::SelectionSet(_) => None,
        OperationDefinition::Query(query) => query.name.as_ref(),
        OperationDefinition::Mutation(mutation) => mutation.name.as_ref(),
        OperationDefinition::Subscription(subscription) => subscription.name.as_ref(),
    }
}

/// Empty names are treated the same as absent ones.
fn well_formed(name: Option<&String>) -> Option<&String> {
    name.filter(|name| !name.is_empty())
}
