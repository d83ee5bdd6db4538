pub mod error;
pub mod node;
pub mod registry;
pub mod validate;

/// Maximum length for class schema identifiers.
pub const MAX_CLASS_NAME_LEN: usize = 64;

/// Maximum length for field schema identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::{Class, Def, Field, FieldList, ValidateNode},
        registry::Registry,
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}
