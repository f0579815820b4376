//! Class declarations for the native header.

use crate::artifact::GeneratedArtifact;
use crate::error::CodegenResult;
use crate::normalize::NormalizedAlgorithm;
use crate::target::Target;

use super::{render_inputs, render_params, ParamStyle, COMPUTE_RETURN_TYPE};

/// Emits the class declaration for one algorithm.
///
/// Members are always declared in the same order: constructor, destructor,
/// `configure`, `compute`, `reset`, then the private handle.
pub fn emit_declaration(algo: &NormalizedAlgorithm) -> CodegenResult<GeneratedArtifact> {
    let name = algo.name();
    let params = render_params(algo, ParamStyle::WithDefaults)?;
    let inputs = render_inputs(algo)?;

    let lines = vec![
        format!("class {} {{", name),
        "\tpublic:".to_string(),
        format!("\t\t{}({});", name, params),
        format!("\t\t~{}();", name),
        format!("\t\tvoid configure({});", params),
        format!("\t\t{} compute({});", COMPUTE_RETURN_TYPE, inputs),
        "\t\tvoid reset();".to_string(),
        "\tprivate:".to_string(),
        format!("\t\tAlgorithm* {};", algo.handle),
        "};".to_string(),
    ];

    Ok(GeneratedArtifact::new(name, Target::Declaration, lines))
}
