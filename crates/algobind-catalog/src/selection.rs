//! Inclusion and exclusion lists selecting which algorithms to process.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The algorithms a generation run covers.
///
/// The inclusion list fixes emission order. Excluded names are removed and
/// repeated names are kept at their first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmSelection {
    /// Algorithms to process, in emission order.
    #[serde(default)]
    pub include: Vec<String>,
    /// Algorithms to skip even if included.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl AlgorithmSelection {
    /// Creates a selection from the two lists.
    pub fn new<I, E, S, T>(include: I, exclude: E) -> Self
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            exclude: exclude.into_iter().map(Into::into).collect(),
        }
    }

    /// Selects every name in `names`, in order.
    pub fn all<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self::new(names, Vec::<String>::new())
    }

    /// Returns the effective, ordered algorithm list.
    pub fn resolve(&self) -> Vec<String> {
        let excluded: HashSet<&str> = self.exclude.iter().map(String::as_str).collect();
        let mut seen = HashSet::new();
        self.include
            .iter()
            .filter(|name| !excluded.contains(name.as_str()))
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect()
    }

    /// Returns excluded names that never appear in the inclusion list.
    pub fn unused_exclusions(&self) -> Vec<&str> {
        let included: HashSet<&str> = self.include.iter().map(String::as_str).collect();
        self.exclude
            .iter()
            .map(String::as_str)
            .filter(|name| !included.contains(name))
            .collect()
    }
}
