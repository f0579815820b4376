//! TypeScript wrapper surface emitters.
//!
//! - [`class`]: wrapper classes forwarding to the WASM backend
//! - [`param_types`]: `ParamsX` structural types and their export block

pub mod class;
pub mod param_types;

use algobind_catalog::{ParamSpec, TypeTag};

/// Renders a parameter default as a TypeScript literal.
///
/// Strings are single-quoted; non-finite reals use the JavaScript globals;
/// everything else is already valid TypeScript.
pub(crate) fn wrapper_literal(param: &ParamSpec) -> String {
    match param.type_tag {
        TypeTag::String => format!("'{}'", escape_single_quotes(&param.default)),
        TypeTag::Real => match param.default.trim() {
            "inf" => "Infinity".to_string(),
            "-inf" => "-Infinity".to_string(),
            "nan" => "NaN".to_string(),
            other => other.to_string(),
        },
        _ => param.default.clone(),
    }
}

/// Returns true if the wrapper converts a supplied value of this type with
/// `arrayToVector` before handing it to the backend.
pub(crate) fn needs_vector_coercion(tag: &TypeTag) -> bool {
    matches!(
        tag,
        TypeTag::VectorReal | TypeTag::VectorComplex | TypeTag::MatrixReal
    )
}

/// Documented type of a container input (`VectorFloat`, `VectorString`,
/// `VectorVectorFloat`), or `None` for scalars.
pub(crate) fn container_doc_type(tag: &TypeTag) -> Option<&'static str> {
    match tag {
        TypeTag::VectorReal | TypeTag::VectorComplex | TypeTag::MatrixReal => Some("VectorFloat"),
        TypeTag::VectorString => Some("VectorString"),
        TypeTag::VectorVectorReal | TypeTag::VectorVectorComplex | TypeTag::VectorStereoSample => {
            Some("VectorVectorFloat")
        }
        _ => None,
    }
}

pub(crate) fn escape_single_quotes(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}
