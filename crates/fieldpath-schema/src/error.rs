use serde::Serialize;
use std::fmt;

///
/// ErrorTree
/// Aggregated validation findings, one route-prefixed line per finding.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    entries: Vec<String>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finding.
    pub fn add(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Fold another tree's findings in under a route prefix.
    pub fn merge(&mut self, route: &str, other: Self) {
        for entry in other.entries {
            self.entries.push(format!("{route}: {entry}"));
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Consume the tree, `Ok` when nothing was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

/// Record a formatted finding into an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// TESTS
///
