//! Type summaries over a set of descriptors.

use algobind_catalog::{AlgorithmDescriptor, TypeTag};
use serde::Serialize;

/// Distinct type tags in use, each list in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeSummary {
    /// Parameter tags.
    pub parameter_types: Vec<TypeTag>,
    /// Input tags.
    pub input_types: Vec<TypeTag>,
    /// Output tags.
    pub output_types: Vec<TypeTag>,
}

impl TypeSummary {
    /// Collects the tags used by `descriptors`.
    pub fn collect<'a>(descriptors: impl IntoIterator<Item = &'a AlgorithmDescriptor>) -> Self {
        let mut summary = Self::default();
        for descriptor in descriptors {
            for param in &descriptor.parameters {
                push_distinct(&mut summary.parameter_types, &param.type_tag);
            }
            for input in &descriptor.inputs {
                push_distinct(&mut summary.input_types, &input.type_tag);
            }
            for output in &descriptor.outputs {
                push_distinct(&mut summary.output_types, &output.type_tag);
            }
        }
        summary
    }

    /// Parameter tags that fall outside the supported parameter subset.
    pub fn unsupported_parameter_types(&self) -> Vec<&TypeTag> {
        self.parameter_types
            .iter()
            .filter(|t| !t.is_parameter_type())
            .collect()
    }
}

fn push_distinct(tags: &mut Vec<TypeTag>, tag: &TypeTag) {
    if !tags.contains(tag) {
        tags.push(tag.clone());
    }
}

/// An algorithm with parameters of a searched-for type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamMatch {
    /// Algorithm name.
    pub algorithm: String,
    /// Matching parameter names, in descriptor order.
    pub parameters: Vec<String>,
}

/// Lists every algorithm with at least one parameter of type `tag`.
pub fn find_params_of_type<'a>(
    descriptors: impl IntoIterator<Item = &'a AlgorithmDescriptor>,
    tag: &TypeTag,
) -> Vec<ParamMatch> {
    descriptors
        .into_iter()
        .filter_map(|d| {
            let parameters: Vec<String> = d
                .parameters
                .iter()
                .filter(|p| &p.type_tag == tag)
                .map(|p| p.name.clone())
                .collect();
            if parameters.is_empty() {
                None
            } else {
                Some(ParamMatch {
                    algorithm: d.name.clone(),
                    parameters,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn descriptors() -> Vec<AlgorithmDescriptor> {
        vec![
            AlgorithmDescriptor::builder("Windowing")
                .input("signal", TypeTag::VectorReal, "")
                .output("signal", TypeTag::VectorReal, "")
                .param("size", TypeTag::Integer, "1024", "")
                .param("type", TypeTag::String, "hann", "")
                .build(),
            AlgorithmDescriptor::builder("BPF")
                .input("x", TypeTag::Real, "")
                .output("y", TypeTag::Real, "")
                .param("xPoints", TypeTag::VectorReal, "[0, 1]", "")
                .param("yPoints", TypeTag::VectorReal, "[0, 1]", "")
                .build(),
            AlgorithmDescriptor::builder("Energy")
                .input("array", TypeTag::VectorReal, "")
                .output("energy", TypeTag::Real, "")
                .build(),
        ]
    }

    #[test]
    fn test_summary_is_distinct_and_ordered() {
        let descriptors = descriptors();
        let summary = TypeSummary::collect(&descriptors);
        assert_eq!(
            summary.parameter_types,
            vec![TypeTag::Integer, TypeTag::String, TypeTag::VectorReal]
        );
        assert_eq!(summary.input_types, vec![TypeTag::VectorReal, TypeTag::Real]);
        assert_eq!(summary.output_types, vec![TypeTag::VectorReal, TypeTag::Real]);
        assert!(summary.unsupported_parameter_types().is_empty());
    }

    #[test]
    fn test_unsupported_parameter_types() {
        let descriptors = vec![AlgorithmDescriptor::builder("Chords")
            .param("labels", TypeTag::VectorString, "[]", "")
            .build()];
        let summary = TypeSummary::collect(&descriptors);
        assert_eq!(
            summary.unsupported_parameter_types(),
            vec![&TypeTag::VectorString]
        );
    }

    #[test]
    fn test_find_params_of_type() {
        let descriptors = descriptors();
        let matches = find_params_of_type(&descriptors, &TypeTag::VectorReal);
        assert_eq!(
            matches,
            vec![ParamMatch {
                algorithm: "BPF".to_string(),
                parameters: vec!["xPoints".to_string(), "yPoints".to_string()],
            }]
        );
        assert!(find_params_of_type(&descriptors, &TypeTag::Bool).is_empty());
    }
}
