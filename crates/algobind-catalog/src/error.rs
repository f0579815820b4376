//! Error types for catalog loading and descriptor lookup.

use thiserror::Error;

/// Common trait for errors reported with a stable code.
///
/// Each crate's error type implements this trait so the CLI can report
/// failures uniformly without depending on the concrete error enums.
///
/// # Example
///
/// ```ignore
/// use algobind_catalog::CodedError;
///
/// fn report<E: CodedError>(err: &E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait CodedError: std::error::Error {
    /// Stable error code such as `CATALOG_001` or `CODEGEN_002`.
    fn code(&self) -> &'static str;

    /// Human-readable message; defaults to the `Display` output.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Category used to group related errors (`catalog`, `codegen`).
    fn category(&self) -> &'static str;
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while loading a catalog or resolving a descriptor.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The provider has no algorithm with this name.
    #[error("unknown algorithm '{name}'")]
    UnknownAlgorithm {
        /// Requested algorithm name.
        name: String,
    },

    /// Two catalog entries share a name.
    #[error("duplicate algorithm '{name}' in catalog")]
    DuplicateAlgorithm {
        /// Duplicated algorithm name.
        name: String,
    },

    /// A descriptor failed validation.
    #[error("invalid descriptor for '{algorithm}': {message}")]
    InvalidDescriptor {
        /// Algorithm name.
        algorithm: String,
        /// What is wrong with it.
        message: String,
    },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Creates an unknown-algorithm error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }

    /// Creates an invalid-descriptor error.
    pub fn invalid(algorithm: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            algorithm: algorithm.into(),
            message: message.into(),
        }
    }
}

impl CodedError for CatalogError {
    fn code(&self) -> &'static str {
        match self {
            CatalogError::UnknownAlgorithm { .. } => "CATALOG_001",
            CatalogError::DuplicateAlgorithm { .. } => "CATALOG_002",
            CatalogError::InvalidDescriptor { .. } => "CATALOG_003",
            CatalogError::JsonParse(_) => "CATALOG_004",
            CatalogError::Io(_) => "CATALOG_005",
        }
    }

    fn category(&self) -> &'static str {
        "catalog"
    }
}
