//! Field-path tree generation: the tree builder, the formatter and emitter
//! contracts, and the concrete Rust-source and JSON emitters.

pub mod build;
pub mod emit;
pub mod format;
pub mod json;
pub mod rust;
pub mod tree;

pub use build::{BuildError, TreeBuilder};
pub use emit::{EmitError, TreeEmitter};
pub use format::{ConstantFormatter, FieldNameFormatter, FormatError};
pub use json::JsonEmitter;
pub use rust::RustSourceEmitter;
pub use tree::{Constant, Entry, FieldTree, Group, PATH_IDENT};

use fieldpath_schema::registry::Registry;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Generate trees for every class in the registry, in deterministic
/// qualified-path order, handing each to the emitter as soon as it is
/// built. The first build or emitter failure aborts the remaining batch.
pub fn generate<F, E>(registry: &Registry, formatter: &F, emitter: &mut E) -> Result<(), Error>
where
    F: FieldNameFormatter,
    E: TreeEmitter,
{
    let builder = TreeBuilder::new(registry, formatter);

    for (_, class) in registry.iter() {
        let tree = builder.build(class)?;
        emitter.emit(&tree)?;
    }

    Ok(())
}
