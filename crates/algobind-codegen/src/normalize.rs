//! Descriptor normalization.
//!
//! Every emitter works from a [`NormalizedAlgorithm`]: the descriptor plus
//! the identifiers native code uses for it. Inputs and outputs get distinct
//! prefixes so an input and an output sharing a name (`frame` in, `frame`
//! out) never collide as C++ locals.

use algobind_catalog::{AlgorithmDescriptor, DescriptorProvider, TypeTag};

use crate::config::CodegenConfig;
use crate::error::{CodegenError, CodegenResult};

/// An input or output with its native identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    /// Name as the catalog spells it.
    pub name: String,
    /// Identifier used in generated native code.
    pub ident: String,
    /// Type tag.
    pub type_tag: TypeTag,
    /// Free-text description.
    pub description: String,
}

/// A descriptor prepared for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAlgorithm {
    /// The source descriptor.
    pub descriptor: AlgorithmDescriptor,
    /// Private handle member name.
    pub handle: String,
    /// Inputs, in descriptor order.
    pub inputs: Vec<Port>,
    /// Outputs, in descriptor order.
    pub outputs: Vec<Port>,
}

impl NormalizedAlgorithm {
    /// Normalizes a descriptor.
    ///
    /// Fails with [`CodegenError::MalformedDescriptor`] when the descriptor
    /// has no inputs, outputs, or parameters at all.
    pub fn from_descriptor(
        descriptor: AlgorithmDescriptor,
        config: &CodegenConfig,
    ) -> CodegenResult<Self> {
        if descriptor.is_empty() {
            return Err(CodegenError::malformed(&descriptor.name));
        }

        let inputs = descriptor
            .inputs
            .iter()
            .map(|i| Port {
                name: i.name.clone(),
                ident: format!("{}{}", config.input_prefix, i.name),
                type_tag: i.type_tag.clone(),
                description: i.description.clone(),
            })
            .collect();
        let outputs = descriptor
            .outputs
            .iter()
            .map(|o| Port {
                name: o.name.clone(),
                ident: format!("{}{}", config.output_prefix, o.name),
                type_tag: o.type_tag.clone(),
                description: o.description.clone(),
            })
            .collect();

        Ok(Self {
            handle: handle_ident(&descriptor.name, config),
            descriptor,
            inputs,
            outputs,
        })
    }

    /// Algorithm name.
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Returns true if the algorithm takes parameters.
    pub fn has_parameters(&self) -> bool {
        self.descriptor.has_parameters()
    }
}

/// Returns the private handle identifier for `algorithm`.
pub fn handle_ident(algorithm: &str, config: &CodegenConfig) -> String {
    format!("{}{}", config.handle_prefix, algorithm.to_lowercase())
}

/// Fetches `name` from the provider and normalizes it.
pub fn normalize<P: DescriptorProvider + ?Sized>(
    provider: &P,
    name: &str,
    config: &CodegenConfig,
) -> CodegenResult<NormalizedAlgorithm> {
    let descriptor = provider.descriptor(name)?;
    NormalizedAlgorithm::from_descriptor(descriptor, config)
}
