//! Embind registrations.

use crate::artifact::GeneratedArtifact;
use crate::error::CodegenResult;
use crate::normalize::NormalizedAlgorithm;
use crate::target::Target;
use crate::types::{map_binding, Surface, UnmappedType};

/// Emits the `class_<T>` registration for one algorithm.
///
/// The constructor signature lists parameter types only, in descriptor
/// order; inputs never appear in it. Inputs are still mapped so that a class
/// the declaration cannot express is never registered.
pub fn emit_binding(algo: &NormalizedAlgorithm) -> CodegenResult<GeneratedArtifact> {
    let name = algo.name();
    super::render_inputs(algo)?;
    let ctor_types = algo
        .descriptor
        .parameters
        .iter()
        .map(|p| {
            let mapped = if p.type_tag.is_parameter_type() {
                map_binding(&p.type_tag)
            } else {
                None
            };
            mapped.ok_or_else(|| {
                UnmappedType {
                    surface: Surface::Binding,
                    tag: p.type_tag.clone(),
                }
                .for_field(name, &p.name)
            })
        })
        .collect::<CodegenResult<Vec<_>>>()?;

    let lines = vec![
        format!("class_<{}>(\"{}\")", name, name),
        format!("\t.constructor<{}>()", ctor_types.join(", ")),
        format!("\t.function(\"configure\", &{}::configure)", name),
        format!("\t.function(\"compute\", &{}::compute)", name),
        format!("\t.function(\"reset\", &{}::reset)", name),
        "\t;".to_string(),
    ];

    Ok(GeneratedArtifact::new(name, Target::Binding, lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CodegenConfig;
    use crate::error::CodegenError;
    use algobind_catalog::{AlgorithmDescriptor, TypeTag};
    use pretty_assertions::assert_eq;

    fn normalized(desc: AlgorithmDescriptor) -> NormalizedAlgorithm {
        NormalizedAlgorithm::from_descriptor(desc, &CodegenConfig::default()).unwrap()
    }

    #[test]
    fn test_windowing_binding() {
        let algo = normalized(
            AlgorithmDescriptor::builder("Windowing")
                .input("signal", TypeTag::VectorReal, "")
                .output("signal", TypeTag::VectorReal, "")
                .param("type", TypeTag::String, "hann", "")
                .build(),
        );
        let artifact = emit_binding(&algo).unwrap();
        assert_eq!(
            artifact.text(),
            "class_<Windowing>(\"Windowing\")\n\
             \t.constructor<std::string>()\n\
             \t.function(\"configure\", &Windowing::configure)\n\
             \t.function(\"compute\", &Windowing::compute)\n\
             \t.function(\"reset\", &Windowing::reset)\n\
             \t;"
        );
    }

    #[test]
    fn test_constructor_lists_parameter_types_only() {
        let algo = normalized(
            AlgorithmDescriptor::builder("BPF")
                .input("x", TypeTag::Real, "")
                .output("y", TypeTag::Real, "")
                .param("xPoints", TypeTag::VectorReal, "[0, 1]", "")
                .param("yPoints", TypeTag::VectorReal, "[0, 1]", "")
                .param("sampleRate", TypeTag::Real, "44100", "")
                .build(),
        );
        let artifact = emit_binding(&algo).unwrap();
        assert_eq!(
            artifact.lines[1],
            "\t.constructor<std::vector<float>&, std::vector<float>&, float>()"
        );
    }

    #[test]
    fn test_zero_parameter_constructor() {
        let algo = normalized(
            AlgorithmDescriptor::builder("Energy")
                .input("array", TypeTag::VectorReal, "")
                .output("energy", TypeTag::Real, "")
                .build(),
        );
        assert_eq!(emit_binding(&algo).unwrap().lines[1], "\t.constructor<>()");
    }

    #[test]
    fn test_unmapped_input_is_not_registered() {
        let algo = normalized(
            AlgorithmDescriptor::builder("Magnitude")
                .input("complex", TypeTag::VectorComplex, "")
                .output("magnitude", TypeTag::VectorReal, "")
                .build(),
        );
        match emit_binding(&algo).unwrap_err() {
            CodegenError::UnsupportedType {
                algorithm,
                field,
                surface,
                tag,
            } => {
                assert_eq!(algorithm, "Magnitude");
                assert_eq!(field, "complex");
                assert_eq!(surface, Surface::Native);
                assert_eq!(tag, TypeTag::VectorComplex);
            }
            other => panic!("expected UnsupportedType, got {:?}", other),
        }
    }

    #[test]
    fn test_parameter_outside_subset_is_rejected() {
        let algo = normalized(
            AlgorithmDescriptor::builder("Chords")
                .input("chords", TypeTag::VectorString, "")
                .output("key", TypeTag::String, "")
                .param("labels", TypeTag::VectorString, "[]", "")
                .build(),
        );
        match emit_binding(&algo).unwrap_err() {
            CodegenError::UnsupportedType {
                field, surface, tag, ..
            } => {
                assert_eq!(field, "labels");
                assert_eq!(surface, Surface::Binding);
                assert_eq!(tag, TypeTag::VectorString);
            }
            other => panic!("expected UnsupportedType, got {:?}", other),
        }
    }
}
