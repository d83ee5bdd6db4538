use crate::{
    emit::{EmitError, TreeEmitter},
    tree::FieldTree,
};
use serde_json::{Map, Value};

///
/// JsonEmitter
/// In-memory adapter: one JSON document per class, keyed by qualified path.
///

#[derive(Debug, Default)]
pub struct JsonEmitter {
    documents: Map<String, Value>,
}

impl JsonEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn documents(&self) -> &Map<String, Value> {
        &self.documents
    }

    #[must_use]
    pub fn into_documents(self) -> Map<String, Value> {
        self.documents
    }
}

impl TreeEmitter for JsonEmitter {
    fn emit(&mut self, tree: &FieldTree) -> Result<(), EmitError> {
        let value = serde_json::to_value(tree).map_err(|e| EmitError::Render {
            class: tree.class.path(),
            message: e.to_string(),
        })?;

        self.documents.insert(tree.class.path(), value);

        Ok(())
    }
}

///
/// TESTS
///
