use fieldpath_schema::node::Def;
use serde::Serialize;

/// Identifier of the synthetic constant carrying a group's own dotted path.
///
/// Formatted field identifiers never begin with an underscore, so this name
/// cannot collide with a generated constant.
pub const PATH_IDENT: &str = "_PATH";

///
/// FieldTree
/// The generated structure of constants and nested groups for one root
/// class, mirroring the reachable field graph up to cycle truncation.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldTree {
    pub class: Def,
    pub entries: Vec<Entry>,
}

///
/// Entry
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Entry {
    Constant(Constant),
    Group(Group),
}

impl Entry {
    #[must_use]
    pub const fn as_constant(&self) -> Option<&Constant> {
        match self {
            Self::Constant(constant) => Some(constant),
            Self::Group(_) => None,
        }
    }

    #[must_use]
    pub const fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(group) => Some(group),
            Self::Constant(_) => None,
        }
    }
}

///
/// Constant
/// One generated identifier with its dotted-path value.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Constant {
    pub ident: String,
    pub value: String,
}

///
/// Group
/// A nested constant group for a structural field. The first entry is
/// always the synthetic [`PATH_IDENT`] constant holding the group's own
/// dotted path.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Group {
    pub ident: String,
    pub entries: Vec<Entry>,
}

impl Group {
    /// The group's own dotted path, read from the synthetic entry.
    #[must_use]
    pub fn own_path(&self) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            Entry::Constant(c) if c.ident == PATH_IDENT => Some(c.value.as_str()),
            _ => None,
        })
    }
}
