use crate::{prelude::*, validate::naming};
use std::collections::BTreeSet;

///
/// Class
///

#[derive(Clone, Debug, Serialize)]
pub struct Class {
    pub def: Def,
    pub fields: FieldList,
}

impl Class {
    #[must_use]
    pub fn new(def: Def) -> Self {
        Self {
            def,
            fields: FieldList::new(),
        }
    }

    #[must_use]
    pub fn with_fields(def: Def, fields: FieldList) -> Self {
        Self { def, fields }
    }

    /// Qualified path used as the registry key.
    #[must_use]
    pub fn path(&self) -> String {
        self.def.path()
    }
}

impl ValidateNode for Class {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(msg) = naming::validate_class_ident(&self.def.ident) {
            errs.add(msg);
        }
        if self.def.module_path.is_empty() {
            errs.add("module path is empty");
        }

        // field idents must be unique within a class
        let mut seen = BTreeSet::new();
        for field in &self.fields {
            if !seen.insert(field.ident.as_str()) {
                err!(errs, "duplicate field ident '{}'", field.ident);
            }

            if let Err(tree) = field.validate() {
                errs.merge(&field.ident, tree);
            }
        }

        errs.result()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_field_idents_are_rejected() {
        let class = Class::with_fields(
            Def::new("demo::pets", "Dog"),
            [Field::terminal("name"), Field::terminal("name")]
                .into_iter()
                .collect(),
        );

        let err = class.validate().unwrap_err();
        assert_eq!(err.entries(), ["duplicate field ident 'name'"]);
    }

    #[test]
    fn well_formed_class_passes() {
        let class = Class::with_fields(
            Def::new("demo::pets", "Dog"),
            [Field::terminal("name"), Field::terminal("age")]
                .into_iter()
                .collect(),
        );

        assert!(class.validate().is_ok());
    }
}
