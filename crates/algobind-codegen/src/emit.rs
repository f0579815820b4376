//! Target dispatch.

use crate::artifact::GeneratedArtifact;
use crate::config::CodegenConfig;
use crate::error::CodegenResult;
use crate::native::{binding::emit_binding, declaration::emit_declaration, definition::emit_definition};
use crate::normalize::NormalizedAlgorithm;
use crate::target::Target;
use crate::wrapper::{class::emit_wrapper_class, param_types::emit_param_type};

/// Runs the emitter for `target` over one algorithm.
pub fn emit(
    target: Target,
    algo: &NormalizedAlgorithm,
    config: &CodegenConfig,
) -> CodegenResult<GeneratedArtifact> {
    match target {
        Target::Declaration => emit_declaration(algo),
        Target::Definition => emit_definition(algo, config),
        Target::Binding => emit_binding(algo),
        Target::Wrapper => emit_wrapper_class(algo, config),
        Target::ParamTypes => emit_param_type(algo, config),
    }
}

/// Like [`emit`], with the target given as a tag such as `"binding"`.
///
/// Unknown tags fail with [`CodegenError::InvalidTarget`](crate::CodegenError::InvalidTarget).
pub fn emit_tagged(
    target: &str,
    algo: &NormalizedAlgorithm,
    config: &CodegenConfig,
) -> CodegenResult<GeneratedArtifact> {
    emit(target.parse()?, algo, config)
}
