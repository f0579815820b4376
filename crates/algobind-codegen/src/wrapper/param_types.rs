//! `ParamsX` structural types for the wrapper surface.

use crate::artifact::GeneratedArtifact;
use crate::config::CodegenConfig;
use crate::error::CodegenResult;
use crate::normalize::NormalizedAlgorithm;
use crate::target::Target;
use crate::types::map_wrapper;

use super::wrapper_literal;

/// Emits the parameter type for one algorithm.
///
/// Algorithms without parameters produce an empty artifact, which
/// [`param_type_exports`] leaves out of the export block.
pub fn emit_param_type(
    algo: &NormalizedAlgorithm,
    config: &CodegenConfig,
) -> CodegenResult<GeneratedArtifact> {
    let name = algo.name();
    if !algo.has_parameters() {
        return Ok(GeneratedArtifact::empty(name, Target::ParamTypes));
    }

    let mut docs = Vec::with_capacity(algo.descriptor.parameters.len());
    let mut fields = Vec::with_capacity(algo.descriptor.parameters.len());
    for param in &algo.descriptor.parameters {
        let ts_type = map_wrapper(&param.type_tag).map_err(|e| e.for_field(name, &param.name))?;
        docs.push(format!(
            " * @param {{{}}} [{}={}] {}",
            ts_type,
            param.name,
            wrapper_literal(param),
            param.description
        ));
        fields.push(format!("  {}: {},", param.name, ts_type));
    }

    let mut lines = vec![
        "/**".to_string(),
        format!(" * Parameter object type accepted by `{}` algorithm", name),
        " *@type".to_string(),
    ];
    lines.extend(docs);
    lines.push("*/".to_string());
    lines.push(format!("type {} = {{", config.param_type_name(name)));
    lines.extend(fields);
    lines.push("};".to_string());

    Ok(GeneratedArtifact::new(name, Target::ParamTypes, lines))
}

/// Builds the aggregate `export { ... }` block.
///
/// Only artifacts that actually declared a type are listed, in the order
/// given.
pub fn param_type_exports(artifacts: &[GeneratedArtifact], config: &CodegenConfig) -> Vec<String> {
    let mut lines = vec!["export {".to_string()];
    lines.extend(
        artifacts
            .iter()
            .filter(|a| a.target == Target::ParamTypes && !a.is_empty())
            .map(|a| format!("  {},", config.param_type_name(&a.algorithm))),
    );
    lines.push("}".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use algobind_catalog::{AlgorithmDescriptor, TypeTag};
    use pretty_assertions::assert_eq;

    fn normalized(desc: AlgorithmDescriptor) -> NormalizedAlgorithm {
        NormalizedAlgorithm::from_descriptor(desc, &CodegenConfig::default()).unwrap()
    }

    fn windowing() -> NormalizedAlgorithm {
        normalized(
            AlgorithmDescriptor::builder("Windowing")
                .input("signal", TypeTag::VectorReal, "the input audio frame")
                .output("signal", TypeTag::VectorReal, "the windowed audio frame")
                .param("normalized", TypeTag::Bool, "true", "a boolean value to specify whether to normalize windows")
                .param("size", TypeTag::Integer, "1024", "the window size")
                .param("type", TypeTag::String, "hann", "the window type")
                .build(),
        )
    }

    fn energy() -> NormalizedAlgorithm {
        normalized(
            AlgorithmDescriptor::builder("Energy")
                .input("array", TypeTag::VectorReal, "the input array")
                .output("energy", TypeTag::Real, "the energy of the input array")
                .build(),
        )
    }

    #[test]
    fn test_windowing_param_type() {
        let artifact = emit_param_type(&windowing(), &CodegenConfig::default()).unwrap();
        assert_eq!(
            artifact.lines,
            vec![
                "/**",
                " * Parameter object type accepted by `Windowing` algorithm",
                " *@type",
                " * @param {boolean} [normalized=true] a boolean value to specify whether to normalize windows",
                " * @param {number} [size=1024] the window size",
                " * @param {string} [type='hann'] the window type",
                "*/",
                "type ParamsWindowing = {",
                "  normalized: boolean,",
                "  size: number,",
                "  type: string,",
                "};",
            ]
        );
    }

    #[test]
    fn test_zero_parameter_algorithm_yields_empty_artifact() {
        let artifact = emit_param_type(&energy(), &CodegenConfig::default()).unwrap();
        assert!(artifact.is_empty());
        assert_eq!(artifact.algorithm, "Energy");
    }

    #[test]
    fn test_exports_skip_empty_artifacts() {
        let config = CodegenConfig::default();
        let artifacts = vec![
            emit_param_type(&windowing(), &config).unwrap(),
            emit_param_type(&energy(), &config).unwrap(),
        ];
        assert_eq!(
            param_type_exports(&artifacts, &config),
            vec!["export {", "  ParamsWindowing,", "}"]
        );
    }

    #[test]
    fn test_exports_of_nothing() {
        assert_eq!(
            param_type_exports(&[], &CodegenConfig::default()),
            vec!["export {", "}"]
        );
    }

    #[test]
    fn test_vector_param_maps_to_any_array() {
        let algo = normalized(
            AlgorithmDescriptor::builder("BPF")
                .input("x", TypeTag::Real, "")
                .output("y", TypeTag::Real, "")
                .param("xPoints", TypeTag::VectorReal, "[0, 1]", "the x-coordinates")
                .build(),
        );
        let lines = emit_param_type(&algo, &CodegenConfig::default())
            .unwrap()
            .lines;
        assert!(lines.contains(&"  xPoints: any[],".to_string()));
        assert!(lines.contains(&" * @param {any[]} [xPoints=[0, 1]] the x-coordinates".to_string()));
    }
}
