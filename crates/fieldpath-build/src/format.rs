use convert_case::{Case, Casing};
use thiserror::Error as ThisError;

///
/// FormatError
///

#[derive(Debug, ThisError)]
pub enum FormatError {
    #[error("field ident '{0}' formats to an empty identifier")]
    Empty(String),
}

///
/// FieldNameFormatter
/// Formats a raw field ident into a generated constant identifier. The
/// output is used verbatim for every identifier in the tree; the builder
/// performs no further validation on it.
///

pub trait FieldNameFormatter {
    fn format(&self, raw: &str) -> Result<String, FormatError>;
}

///
/// ConstantFormatter
/// Default formatter: `favoriteDog` becomes `FAVORITE_DOG`.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantFormatter;

impl FieldNameFormatter for ConstantFormatter {
    fn format(&self, raw: &str) -> Result<String, FormatError> {
        let ident = raw.to_case(Case::Constant);
        if ident.is_empty() {
            return Err(FormatError::Empty(raw.to_string()));
        }

        Ok(ident)
    }
}

///
/// TESTS
///
