use crate::{prelude::*, validate::naming};

///
/// FieldList
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FromIterator<Field> for FieldList {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl ValidateNode for FieldList {}

///
/// Field
/// A field is terminal unless its relation target resolves in the registry.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Field {
    pub ident: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
}

impl Field {
    /// A plain field with no relation target.
    #[must_use]
    pub fn terminal(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            relation: None,
        }
    }

    /// A field declaring a relation to another class's qualified path.
    #[must_use]
    pub fn relation(ident: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            relation: Some(target.into()),
        }
    }

    #[must_use]
    pub const fn is_relation(&self) -> bool {
        self.relation.is_some()
    }
}

impl ValidateNode for Field {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(msg) = naming::validate_field_ident(&self.ident) {
            errs.add(msg);
        }

        errs.result()
    }
}

///
/// TESTS
///
