//! Catalog and run-config loading.
//!
//! Run configs are JSON or YAML, chosen by file extension, and carry the
//! inclusion/exclusion lists plus an optional `codegen` section.

use std::path::{Path, PathBuf};

use algobind_catalog::{AlgorithmSelection, Catalog, CatalogError};
use algobind_codegen::CodegenConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Recognized YAML extensions.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Errors from loading CLI inputs.
#[derive(Debug, Error)]
pub enum InputError {
    /// Failed to read a file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config extension is not JSON or YAML.
    #[error("unknown config extension {extension:?} (expected .json, .yaml or .yml)")]
    UnknownExtension {
        /// The extension found, if any.
        extension: Option<String>,
    },

    /// JSON config did not parse.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML config did not parse.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The catalog failed to load.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Selection and codegen settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Algorithms to process, in emission order.
    #[serde(default)]
    pub include: Vec<String>,
    /// Algorithms to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Generator settings.
    #[serde(default)]
    pub codegen: CodegenConfig,
}

impl RunConfig {
    /// Returns the inclusion/exclusion selection.
    pub fn selection(&self) -> AlgorithmSelection {
        AlgorithmSelection::new(self.include.iter().cloned(), self.exclude.iter().cloned())
    }
}

/// Loads a JSON catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, InputError> {
    let content = read(path)?;
    Ok(Catalog::from_json(&content)?)
}

/// Loads a run config, dispatching on the file extension.
pub fn load_run_config(path: &Path) -> Result<RunConfig, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => {
            Ok(serde_json::from_str(&read(path)?)?)
        }
        Some(ext) if YAML_EXTENSIONS.contains(&ext) => {
            Ok(serde_yaml::from_str(&read(path)?)?)
        }
        _ => Err(InputError::UnknownExtension { extension }),
    }
}

fn read(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("run.json");
        std::fs::write(
            &path,
            r#"{"include": ["Windowing", "Spectrum"], "exclude": ["Spectrum"]}"#,
        )
        .unwrap();

        let config = load_run_config(&path).unwrap();
        assert_eq!(config.selection().resolve(), vec!["Windowing"]);
        assert_eq!(config.codegen, CodegenConfig::default());
    }

    #[test]
    fn test_load_yaml_config_with_codegen_section() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("run.yml");
        std::fs::write(
            &path,
            "include:\n  - Windowing\ncodegen:\n  input_prefix: in_\n  reconfigure_by_recreate: []\n",
        )
        .unwrap();

        let config = load_run_config(&path).unwrap();
        assert_eq!(config.include, vec!["Windowing"]);
        assert_eq!(config.codegen.input_prefix, "in_");
        assert_eq!(config.codegen.output_prefix, "output_");
        assert!(config.codegen.reconfigure_by_recreate.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("run.json");
        std::fs::write(&path, r#"{"includes": ["Windowing"]}"#).unwrap();
        assert!(matches!(load_run_config(&path), Err(InputError::Json(_))));
    }

    #[test]
    fn test_unknown_extension() {
        let err = load_run_config(Path::new("run.toml")).unwrap_err();
        assert!(matches!(
            err,
            InputError::UnknownExtension { extension: Some(ref e) } if e == "toml"
        ));
    }

    #[test]
    fn test_missing_catalog() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
    }
}
