//! Registry validation orchestration and shared helpers.
//!
//! Validation is a warning channel: the tree builder degrades unresolved
//! relations to terminal constants on its own, so nothing here gates
//! generation. Callers run it when they want findings surfaced.

pub mod naming;
pub mod relation;

use crate::{Error, error::ErrorTree, node::ValidateNode, registry::Registry};

/// Run full registry validation in a staged, deterministic order.
pub fn validate_registry(registry: &Registry) -> Result<(), Error> {
    // Phase 1: validate each class (structural + local invariants).
    let mut errors = validate_nodes(registry);

    // Phase 2: enforce registry-wide invariants.
    validate_global(registry, &mut errors);

    errors.result().map_err(Error::Validation)
}

// Validate all classes, folding findings in under their qualified path.
fn validate_nodes(registry: &Registry) -> ErrorTree {
    let mut errors = ErrorTree::new();

    for (path, class) in registry.iter() {
        if let Err(tree) = class.validate() {
            errors.merge(path, tree);
        }
    }

    errors
}

// Run global validation passes that require a full registry view.
fn validate_global(registry: &Registry, errors: &mut ErrorTree) {
    relation::validate_relations(registry, errors);
}
