use crate::{
    format::{FieldNameFormatter, FormatError},
    tree::{Constant, Entry, FieldTree, Group, PATH_IDENT},
};
use fieldpath_schema::{node::Class, registry::Registry};
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error(transparent)]
    Format(#[from] FormatError),
}

///
/// TreeBuilder
/// Builds one field-path tree per root class by walking the registry's
/// relation graph depth-first in field declaration order.
///

pub struct TreeBuilder<'a, F> {
    registry: &'a Registry,
    formatter: &'a F,
}

impl<'a, F: FieldNameFormatter> TreeBuilder<'a, F> {
    #[must_use]
    pub const fn new(registry: &'a Registry, formatter: &'a F) -> Self {
        Self {
            registry,
            formatter,
        }
    }

    /// Build the full tree for one root class.
    ///
    /// Unresolved and cyclic relations degrade to terminal constants; the
    /// only error is a formatter failure, which yields no partial tree.
    pub fn build(&self, class: &Class) -> Result<FieldTree, BuildError> {
        let mut ancestors = BTreeSet::new();
        let entries = self.walk(class, "", &mut ancestors)?;

        Ok(FieldTree {
            class: class.def.clone(),
            entries,
        })
    }

    // Expand one class's fields under the given dotted-path prefix. The
    // ancestor set holds the qualified paths on the active recursion path
    // only; sibling branches never see each other's ancestry.
    fn walk(
        &self,
        class: &Class,
        prefix: &str,
        ancestors: &mut BTreeSet<String>,
    ) -> Result<Vec<Entry>, BuildError> {
        let mut entries = Vec::new();

        for field in &class.fields {
            let value = format!("{prefix}{}", field.ident);

            let target = field
                .relation
                .as_deref()
                .and_then(|path| self.registry.lookup(path));

            match target {
                Some(target) if !ancestors.contains(&target.path()) => {
                    let mut group = Group {
                        ident: self.formatter.format(&field.ident)?,
                        entries: vec![Entry::Constant(Constant {
                            ident: PATH_IDENT.to_string(),
                            value: value.clone(),
                        })],
                    };

                    let class_path = class.path();
                    let child_prefix = format!("{value}.");

                    ancestors.insert(class_path.clone());
                    let children = self.walk(target, &child_prefix, ancestors)?;
                    ancestors.remove(&class_path);

                    group.entries.extend(children);
                    entries.push(Entry::Group(group));
                }

                // No relation, an unresolved target, or a relation back into
                // the active path (a closed cycle): emit a plain constant.
                _ => {
                    entries.push(Entry::Constant(Constant {
                        ident: self.formatter.format(&field.ident)?,
                        value,
                    }));
                }
            }
        }

        Ok(entries)
    }
}

///
/// TESTS
///
