use crate::prelude::*;
use std::collections::BTreeMap;

///
/// Registry
/// The full set of class descriptions for one generation run, keyed by
/// qualified path. Read-only once generation starts.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Registry {
    classes: BTreeMap<String, Class>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class under its qualified path. Last write wins.
    pub fn insert(&mut self, class: Class) -> Option<Class> {
        self.classes.insert(class.path(), class)
    }

    /// Exact-match lookup. Absent entries are a normal outcome: relation
    /// targets may legitimately point outside the generation batch.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Class> {
        self.classes.get(path)
    }

    /// Classes in deterministic qualified-path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Class)> {
        self.classes.iter().map(|(path, class)| (path.as_str(), class))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<Class> for Registry {
    fn from_iter<I: IntoIterator<Item = Class>>(iter: I) -> Self {
        let mut registry = Self::new();
        for class in iter {
            registry.insert(class);
        }

        registry
    }
}

///
/// TESTS
///
