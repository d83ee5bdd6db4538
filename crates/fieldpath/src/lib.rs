//! ## Crate layout
//! - `schema`: class descriptions, the registry, and validation.
//! - `build`: the tree builder, formatter and emitter contracts, and the
//!   concrete Rust-source and JSON emitters.
//!
//! The `prelude` module mirrors the surface a generation driver uses.
//!
//! ```
//! use fieldpath::prelude::*;
//!
//! let registry: Registry = [
//!     Class::with_fields(
//!         Def::new("app::model", "Order"),
//!         [
//!             Field::terminal("id"),
//!             Field::relation("customer", "app::model::Customer"),
//!         ]
//!         .into_iter()
//!         .collect(),
//!     ),
//!     Class::with_fields(
//!         Def::new("app::model", "Customer"),
//!         [Field::terminal("name")].into_iter().collect(),
//!     ),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut emitter = RustSourceEmitter::new();
//! generate(&registry, &ConstantFormatter, &mut emitter).unwrap();
//!
//! let (_, source) = &emitter.sources()[1];
//! assert!(source.contains("pub const NAME: &str = \"customer.name\";"));
//! ```

pub use fieldpath_build as build;
pub use fieldpath_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use fieldpath_build::generate;

///
/// Prelude
///

pub mod prelude {
    pub use crate::build::{
        ConstantFormatter, FieldNameFormatter, FieldTree, JsonEmitter, RustSourceEmitter,
        TreeBuilder, TreeEmitter, generate,
    };
    pub use crate::schema::{
        node::{Class, Def, Field, FieldList},
        registry::Registry,
        validate::validate_registry,
    };
}
