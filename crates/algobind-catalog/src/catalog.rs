//! JSON-backed descriptor catalog.
//!
//! A catalog file is a dump of the upstream library's algorithm metadata:
//!
//! ```json
//! {
//!   "algorithms": [
//!     {
//!       "name": "Windowing",
//!       "description": "This algorithm applies windowing to an audio signal.",
//!       "inputs": [{"name": "frame", "type": "vector_real", "description": "the input audio frame"}],
//!       "outputs": [{"name": "frame", "type": "vector_real", "description": "the windowed audio frame"}],
//!       "parameters": [{"name": "type", "type": "string", "default": "hann", "description": "the window type"}]
//!     }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::AlgorithmDescriptor;
use crate::error::{CatalogError, CatalogResult};
use crate::provider::DescriptorProvider;

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    algorithms: Vec<AlgorithmDescriptor>,
}

/// An in-memory catalog of algorithm descriptors, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    algorithms: Vec<AlgorithmDescriptor>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from descriptors, rejecting duplicate names.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = AlgorithmDescriptor>,
    ) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for descriptor in descriptors {
            catalog.insert(descriptor)?;
        }
        Ok(catalog)
    }

    /// Parses a catalog from a JSON string.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_descriptors(file.algorithms)
    }

    /// Reads and parses a catalog file.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the catalog to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        let file = CatalogFile {
            algorithms: self.algorithms.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Adds a descriptor.
    pub fn insert(&mut self, descriptor: AlgorithmDescriptor) -> CatalogResult<()> {
        if self.index.contains_key(&descriptor.name) {
            return Err(CatalogError::DuplicateAlgorithm {
                name: descriptor.name,
            });
        }
        self.index
            .insert(descriptor.name.clone(), self.algorithms.len());
        self.algorithms.push(descriptor);
        Ok(())
    }

    /// Looks up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&AlgorithmDescriptor> {
        self.index.get(name).map(|&i| &self.algorithms[i])
    }

    /// Returns true if the catalog holds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates algorithm names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.algorithms.iter().map(|a| a.name.as_str())
    }

    /// Iterates descriptors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.algorithms.iter()
    }

    /// Number of algorithms.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl DescriptorProvider for Catalog {
    fn descriptor(&self, name: &str) -> CatalogResult<AlgorithmDescriptor> {
        self.get(name)
            .cloned()
            .ok_or_else(|| CatalogError::unknown(name))
    }
}
