//! algobind Descriptor Catalog
//!
//! This crate provides the data model consumed by the algobind code
//! generator: type tags, algorithm descriptors, the pluggable descriptor
//! provider capability, a JSON-backed catalog, and the inclusion/exclusion
//! selection that decides which algorithms a run covers.
//!
//! # Example
//!
//! ```
//! use algobind_catalog::{AlgorithmDescriptor, Catalog, DescriptorProvider, TypeTag};
//! use algobind_catalog::validation::validate_descriptor;
//!
//! let windowing = AlgorithmDescriptor::builder("Windowing")
//!     .description("Applies windowing to an audio frame.")
//!     .input("signal", TypeTag::VectorReal, "the input audio frame")
//!     .output("signal", TypeTag::VectorReal, "the windowed audio frame")
//!     .param("type", TypeTag::String, "hann", "the window type")
//!     .build();
//!
//! assert!(validate_descriptor(&windowing).is_ok());
//!
//! let catalog = Catalog::from_descriptors([windowing]).unwrap();
//! let desc = catalog.descriptor("Windowing").unwrap();
//! assert_eq!(desc.parameters[0].default, "hann");
//! ```
//!
//! # Modules
//!
//! - [`types`]: Type tags for inputs, outputs, and parameters
//! - [`descriptor`]: Descriptor types and builder
//! - [`provider`]: The descriptor provider capability
//! - [`catalog`]: JSON-backed catalog
//! - [`selection`]: Inclusion/exclusion lists
//! - [`validation`]: Descriptor validation
//! - [`error`]: Error types

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod provider;
pub mod selection;
pub mod types;
pub mod validation;

// Re-export commonly used types at the crate root
pub use catalog::Catalog;
pub use descriptor::{
    AlgorithmDescriptor, AlgorithmDescriptorBuilder, InputSpec, OutputSpec, ParamSpec,
};
pub use error::{CatalogError, CatalogResult, CodedError};
pub use provider::{DescriptorProvider, FnProvider};
pub use selection::AlgorithmSelection;
pub use types::TypeTag;
pub use validation::{validate_descriptor, DescriptorIssue, IssueCode};
