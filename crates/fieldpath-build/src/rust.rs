use crate::{
    emit::{EmitError, TreeEmitter},
    tree::{Entry, FieldTree},
};
use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::quote;
use std::path::Path;

///
/// RustSourceEmitter
/// Renders each tree as a standalone Rust source file: one
/// `pub mod {Class}Fields` per class, nested groups as inner modules, laid
/// out under the class's module path the way the original class would be.
///

#[derive(Debug, Default)]
pub struct RustSourceEmitter {
    sources: Vec<(String, String)>,
}

impl RustSourceEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generated `(relative file path, source)` pairs in generation order.
    #[must_use]
    pub fn sources(&self) -> &[(String, String)] {
        &self.sources
    }

    /// Write every generated file under `dir`, creating directories as
    /// needed.
    pub fn write_to_dir(&self, dir: &Path) -> Result<(), EmitError> {
        for (name, source) in &self.sources {
            let path = dir.join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|source| EmitError::Io {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
            std::fs::write(&path, source).map_err(|source| EmitError::Io {
                path: path.display().to_string(),
                source,
            })?;
        }

        Ok(())
    }
}

impl TreeEmitter for RustSourceEmitter {
    fn emit(&mut self, tree: &FieldTree) -> Result<(), EmitError> {
        let tokens = render(tree)?;

        let file = syn::parse2::<syn::File>(tokens).map_err(|e| EmitError::Render {
            class: tree.class.path(),
            message: e.to_string(),
        })?;

        self.sources
            .push((file_name(tree), prettyplease::unparse(&file)));

        Ok(())
    }
}

// One file per class, nested in its module path: `demo::pets::Person`
// lands at `demo/pets/person_fields.rs`.
fn file_name(tree: &FieldTree) -> String {
    let dir = tree.class.module_path.replace("::", "/");
    let stem = tree.class.ident.to_case(Case::Snake);

    format!("{dir}/{stem}_fields.rs")
}

fn render(tree: &FieldTree) -> Result<TokenStream, EmitError> {
    let doc = format!(" Queryable field paths for `{}`.", tree.class.path());
    let module = ident(&format!("{}Fields", tree.class.ident))?;
    let entries = render_entries(&tree.entries)?;

    Ok(quote! {
        #[doc = #doc]
        #[allow(non_snake_case)]
        pub mod #module {
            #entries
        }
    })
}

fn render_entries(entries: &[Entry]) -> Result<TokenStream, EmitError> {
    let mut tokens = quote!();

    for entry in entries {
        match entry {
            Entry::Constant(constant) => {
                let ident = ident(&constant.ident)?;
                let value = constant.value.as_str();

                tokens.extend(quote! {
                    pub const #ident: &str = #value;
                });
            }
            Entry::Group(group) => {
                let ident = ident(&group.ident)?;
                let children = render_entries(&group.entries)?;

                tokens.extend(quote! {
                    #[allow(non_snake_case)]
                    pub mod #ident {
                        #children
                    }
                });
            }
        }
    }

    Ok(tokens)
}

// Formatter output is used verbatim, so it is only here that a non-ident
// surfaces; that is an emission failure, not a build failure.
fn ident(raw: &str) -> Result<syn::Ident, EmitError> {
    syn::parse_str(raw).map_err(|_| EmitError::InvalidIdent(raw.to_string()))
}

///
/// TESTS
///
