//! Generator configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, CodegenResult};

/// Prefix applied to input identifiers in native code.
pub const DEFAULT_INPUT_PREFIX: &str = "input_";

/// Prefix applied to output identifiers in native code.
pub const DEFAULT_OUTPUT_PREFIX: &str = "output_";

/// Prefix of the private handle member (`_` + lower-cased algorithm name).
pub const DEFAULT_HANDLE_PREFIX: &str = "_";

/// Upstream reference pages live at `<base>std_<Algorithm>.html`.
pub const DEFAULT_REFERENCE_BASE_URL: &str = "https://essentia.upf.edu/reference/";

/// Algorithms whose handles fail when reconfigured in place and are
/// recreated through the factory instead.
pub const DEFAULT_RECONFIGURE_BY_RECREATE: &[&str] =
    &["PitchMelodia", "PredominantPitchMelodia", "MultiPitchMelodia"];

/// Settings shared by every emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Prefix for input identifiers.
    pub input_prefix: String,
    /// Prefix for output identifiers.
    pub output_prefix: String,
    /// Prefix for the private handle member.
    pub handle_prefix: String,
    /// Algorithms whose `configure` destroys and recreates the handle.
    pub reconfigure_by_recreate: BTreeSet<String>,
    /// Base URL for upstream reference pages.
    pub reference_base_url: String,
    /// Name of the module-level WASM backend in the wrapper.
    pub backend_var: String,
    /// Namespace the wrapper imports parameter types from.
    pub param_types_namespace: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            input_prefix: DEFAULT_INPUT_PREFIX.to_string(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            handle_prefix: DEFAULT_HANDLE_PREFIX.to_string(),
            reconfigure_by_recreate: DEFAULT_RECONFIGURE_BY_RECREATE
                .iter()
                .map(|s| s.to_string())
                .collect(),
            reference_base_url: DEFAULT_REFERENCE_BASE_URL.to_string(),
            backend_var: "wasmBackend".to_string(),
            param_types_namespace: "paramTypes".to_string(),
        }
    }
}

impl CodegenConfig {
    /// Replaces the reconfigure-by-recreate set.
    pub fn with_reconfigure_by_recreate<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.reconfigure_by_recreate = names.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if `algorithm`'s configure must recreate its handle.
    pub fn recreates_on_configure(&self, algorithm: &str) -> bool {
        self.reconfigure_by_recreate.contains(algorithm)
    }

    /// Returns the upstream reference page for `algorithm`.
    pub fn reference_url(&self, algorithm: &str) -> String {
        format!("{}std_{}.html", self.reference_base_url, algorithm)
    }

    /// Returns the wrapper's parameter type name for `algorithm`.
    pub fn param_type_name(&self, algorithm: &str) -> String {
        format!("Params{}", algorithm)
    }

    /// Returns the namespaced parameter type as referenced from the wrapper.
    pub fn qualified_param_type(&self, algorithm: &str) -> String {
        format!(
            "{}.{}",
            self.param_types_namespace,
            self.param_type_name(algorithm)
        )
    }

    /// Checks the prefixes keep inputs and outputs apart.
    pub fn validate(&self) -> CodegenResult<()> {
        if self.input_prefix.is_empty() || self.output_prefix.is_empty() {
            return Err(CodegenError::invalid_config(
                "input and output prefixes must be non-empty",
            ));
        }
        if self.input_prefix == self.output_prefix {
            return Err(CodegenError::invalid_config(format!(
                "input and output prefixes must differ (both '{}')",
                self.input_prefix
            )));
        }
        if self.backend_var.is_empty() || self.param_types_namespace.is_empty() {
            return Err(CodegenError::invalid_config(
                "backend_var and param_types_namespace must be non-empty",
            ));
        }
        Ok(())
    }
}
