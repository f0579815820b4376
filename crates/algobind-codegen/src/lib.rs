//! algobind Code Generator
//!
//! This crate turns algorithm descriptors into five correlated text
//! artifacts:
//! - C++ class declarations (`algorithms.h`)
//! - C++ class definitions over an `AlgorithmFactory` handle (`algorithms.cpp`)
//! - Emscripten embind registrations (`bindings.cpp`)
//! - TypeScript wrapper classes (`wrapper.ts`)
//! - TypeScript `ParamsX` types plus an export block (`param_types.ts`)
//!
//! # Determinism
//!
//! Generation is a pure transform. Output order is fixed by the selection's
//! inclusion list and by each descriptor's own field order, so the same
//! catalog and selection always produce byte-identical text. Each run
//! reports a BLAKE3 digest per target for comparing reruns.
//!
//! # Example
//!
//! ```
//! use algobind_catalog::{AlgorithmDescriptor, AlgorithmSelection, Catalog, TypeTag};
//! use algobind_codegen::{Generator, Target};
//!
//! let catalog = Catalog::from_descriptors([AlgorithmDescriptor::builder("Windowing")
//!     .input("signal", TypeTag::VectorReal, "the input audio frame")
//!     .output("signal", TypeTag::VectorReal, "the windowed audio frame")
//!     .param("type", TypeTag::String, "hann", "the window type")
//!     .build()])
//! .unwrap();
//!
//! let generator = Generator::with_defaults(catalog);
//! let run = generator
//!     .run(&AlgorithmSelection::all(["Windowing"]), &[Target::Binding])
//!     .unwrap();
//! assert!(run.render(Target::Binding).contains(".constructor<std::string>()"));
//! ```
//!
//! # Crate Structure
//!
//! - [`types`]: Type mapping per surface
//! - [`normalize`]: Descriptor normalization (prefixes, handle names)
//! - [`native`]: Declaration, definition and binding emitters
//! - [`wrapper`]: Wrapper class and parameter type emitters
//! - [`emit`]: Target dispatch
//! - [`driver`]: The [`Generator`] run driver
//! - [`artifact`]: Generated artifacts and whole-run assembly
//! - [`summary`]: Type summaries and parameter search

pub mod artifact;
pub mod config;
pub mod driver;
pub mod emit;
pub mod error;
pub mod native;
pub mod normalize;
pub mod summary;
pub mod target;
pub mod types;
pub mod wrapper;

pub use artifact::{GeneratedArtifact, GenerationRun};
pub use config::CodegenConfig;
pub use driver::Generator;
pub use emit::{emit, emit_tagged};
pub use error::{CodegenError, CodegenResult};
pub use normalize::{normalize, NormalizedAlgorithm, Port};
pub use summary::{find_params_of_type, ParamMatch, TypeSummary};
pub use target::Target;
pub use types::{map_binding, map_native, map_wrapper, Surface, TypeMapping};
