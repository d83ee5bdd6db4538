use crate::tree::FieldTree;
use thiserror::Error as ThisError;

///
/// EmitError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum EmitError {
    #[error("generated ident '{0}' is not a valid identifier")]
    InvalidIdent(String),

    #[error("io error writing '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("rendered output for '{class}' is malformed: {message}")]
    Render { class: String, message: String },
}

///
/// TreeEmitter
/// Narrow adapter contract: accept one finished tree, report success or
/// failure. The batch driver aborts on the first failure.
///

pub trait TreeEmitter {
    fn emit(&mut self, tree: &FieldTree) -> Result<(), EmitError>;
}
