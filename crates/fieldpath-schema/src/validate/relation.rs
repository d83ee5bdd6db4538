use crate::{prelude::*, registry::Registry};

/// Report declared relation targets that do not resolve in the registry.
///
/// An unresolved target is never fatal: the tree builder degrades the field
/// to a terminal constant. This pass exists so a typo'd target can be
/// surfaced before the generated output ships.
pub fn validate_relations(registry: &Registry, errs: &mut ErrorTree) {
    for (class_path, class) in registry.iter() {
        for field in &class.fields {
            let Some(target) = &field.relation else {
                continue;
            };

            if registry.lookup(target).is_none() {
                err!(
                    errs,
                    "class '{class_path}', field '{0}', declares a relation to '{target}' which is not in the registry",
                    field.ident
                );
            }
        }
    }
}

///
/// TESTS
///
