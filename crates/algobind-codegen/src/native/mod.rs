//! Native (C++) surface emitters.
//!
//! - [`declaration`]: class declarations for the header
//! - [`definition`]: class definitions over a factory-created handle
//! - [`binding`]: embind registrations exposing each class

pub mod binding;
pub mod declaration;
pub mod definition;

use algobind_catalog::{ParamSpec, TypeTag};

use crate::error::CodegenResult;
use crate::normalize::NormalizedAlgorithm;
use crate::types::{map_native, native_value_type, Surface, UnmappedType};

/// Return type of every generated `compute`.
pub const COMPUTE_RETURN_TYPE: &str = "val";

/// Whether a rendered parameter list carries default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParamStyle {
    /// `const float sampleRate=44100` (declarations).
    WithDefaults,
    /// `const float sampleRate` (definitions).
    Plain,
}

/// Renders one parameter for a constructor or `configure` signature.
pub(crate) fn render_param(
    algorithm: &str,
    param: &ParamSpec,
    style: ParamStyle,
) -> CodegenResult<String> {
    let native =
        map_native(&param.type_tag).map_err(|e| e.for_field(algorithm, &param.name))?;

    let rendered = match (&param.type_tag, style) {
        (TypeTag::String, ParamStyle::WithDefaults) => {
            format!("const {}& {}=\"{}\"", native, param.name, param.default)
        }
        (TypeTag::String, ParamStyle::Plain) => format!("const {}& {}", native, param.name),
        (TypeTag::VectorReal, ParamStyle::WithDefaults) => {
            let value_type = native_value_type(native);
            let default = if param.default.trim() == "[]" {
                format!("{}()", value_type)
            } else {
                format!(
                    "{}{}",
                    value_type,
                    param.default.replace('[', "{").replace(']', "}")
                )
            };
            format!("const {} {}={}", native, param.name, default)
        }
        (TypeTag::Real, ParamStyle::WithDefaults) => {
            format!("const {} {}={}", native, param.name, real_literal(&param.default))
        }
        (TypeTag::Integer | TypeTag::Bool, ParamStyle::WithDefaults) => {
            format!("const {} {}={}", native, param.name, param.default)
        }
        (TypeTag::VectorReal | TypeTag::Real | TypeTag::Integer | TypeTag::Bool, ParamStyle::Plain) => {
            format!("const {} {}", native, param.name)
        }
        // Natively mappable but not a parameter type (e.g. vector_string).
        _ => {
            return Err(UnmappedType {
                surface: Surface::Native,
                tag: param.type_tag.clone(),
            }
            .for_field(algorithm, &param.name))
        }
    };
    Ok(rendered)
}

/// Renders a real default as a C++ literal, spelling out non-finite values.
fn real_literal(default: &str) -> String {
    match default.trim() {
        "inf" => "std::numeric_limits<float>::infinity()".to_string(),
        "-inf" => "-std::numeric_limits<float>::infinity()".to_string(),
        "nan" => "std::numeric_limits<float>::quiet_NaN()".to_string(),
        other => other.to_string(),
    }
}

/// Renders the full parameter list, comma separated.
pub(crate) fn render_params(algo: &NormalizedAlgorithm, style: ParamStyle) -> CodegenResult<String> {
    let params = algo
        .descriptor
        .parameters
        .iter()
        .map(|p| render_param(algo.name(), p, style))
        .collect::<CodegenResult<Vec<_>>>()?;
    Ok(params.join(", "))
}

/// Renders the `compute` argument list with prefixed input identifiers.
pub(crate) fn render_inputs(algo: &NormalizedAlgorithm) -> CodegenResult<String> {
    let inputs = algo
        .inputs
        .iter()
        .map(|input| {
            let native = map_native(&input.type_tag)
                .map_err(|e| e.for_field(algo.name(), &input.name))?;
            Ok(format!("{} {}", native, input.ident))
        })
        .collect::<CodegenResult<Vec<_>>>()?;
    Ok(inputs.join(", "))
}

/// Flattened `"name", name` pairs passed to the factory and `configure`.
pub(crate) fn flattened_params(algo: &NormalizedAlgorithm) -> String {
    algo.descriptor
        .parameters
        .iter()
        .map(|p| format!("\"{}\", {}", p.name, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}
