mod class;
mod field;

pub use class::Class;
pub use field::{Field, FieldList};

use crate::error::ErrorTree;
use derive_more::Display;
use serde::Serialize;

///
/// Def
/// Node identity: the module path plus type ident that together form the
/// qualified path used as the registry key.
///

#[derive(Clone, Debug, Display, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[display("{module_path}::{ident}")]
pub struct Def {
    pub module_path: String,
    pub ident: String,
}

impl Def {
    #[must_use]
    pub fn new(module_path: impl Into<String>, ident: impl Into<String>) -> Self {
        Self {
            module_path: module_path.into(),
            ident: ident.into(),
        }
    }

    /// Qualified path used for registry lookup and relation targets.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}::{}", self.module_path, self.ident)
    }
}

///
/// ValidateNode
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

///
/// TESTS
///
