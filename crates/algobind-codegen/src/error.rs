//! Error types for code generation.

use algobind_catalog::{CatalogError, CodedError, TypeTag};
use thiserror::Error;

use crate::types::Surface;

/// Result type for code generation.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Errors that abort generation. None of them are retried; every input is
/// in memory and deterministic.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A type tag has no mapping on the requested surface.
    #[error("unsupported type '{tag}' for {surface} surface in '{algorithm}' (field '{field}')")]
    UnsupportedType {
        /// Algorithm being generated.
        algorithm: String,
        /// Input, output, or parameter name carrying the tag.
        field: String,
        /// Surface the mapping was requested for.
        surface: Surface,
        /// The offending tag.
        tag: TypeTag,
    },

    /// The descriptor has no inputs, outputs, or parameters.
    #[error("no inputs, outputs or parameters found for the algorithm '{algorithm}'")]
    MalformedDescriptor {
        /// Algorithm name.
        algorithm: String,
    },

    /// Output collection produced nothing for the compute body.
    #[error("no output variable found in the algorithm '{algorithm}'")]
    MissingOutputBinding {
        /// Algorithm name.
        algorithm: String,
    },

    /// An emitter was asked for an unknown target surface.
    #[error("invalid target '{target}': expected one of declaration, definition, binding, wrapper, param-types")]
    InvalidTarget {
        /// The unrecognized target tag.
        target: String,
    },

    /// Generator configuration is inconsistent.
    #[error("invalid codegen config: {message}")]
    InvalidConfig {
        /// What is wrong.
        message: String,
    },

    /// The descriptor provider failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl CodegenError {
    /// Creates a malformed-descriptor error.
    pub fn malformed(algorithm: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            algorithm: algorithm.into(),
        }
    }

    /// Creates a missing-output-binding error.
    pub fn missing_outputs(algorithm: impl Into<String>) -> Self {
        Self::MissingOutputBinding {
            algorithm: algorithm.into(),
        }
    }

    /// Creates an invalid-config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns the algorithm the error is about, if any.
    pub fn algorithm(&self) -> Option<&str> {
        match self {
            CodegenError::UnsupportedType { algorithm, .. }
            | CodegenError::MalformedDescriptor { algorithm }
            | CodegenError::MissingOutputBinding { algorithm } => Some(algorithm.as_str()),
            CodegenError::Catalog(CatalogError::UnknownAlgorithm { name }) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl CodedError for CodegenError {
    fn code(&self) -> &'static str {
        match self {
            CodegenError::UnsupportedType { .. } => "CODEGEN_001",
            CodegenError::MalformedDescriptor { .. } => "CODEGEN_002",
            CodegenError::MissingOutputBinding { .. } => "CODEGEN_003",
            CodegenError::InvalidTarget { .. } => "CODEGEN_004",
            CodegenError::InvalidConfig { .. } => "CODEGEN_005",
            CodegenError::Catalog(err) => err.code(),
        }
    }

    fn category(&self) -> &'static str {
        match self {
            CodegenError::Catalog(_) => "catalog",
            _ => "codegen",
        }
    }
}
