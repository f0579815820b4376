//! Type mapping from catalog type tags to each generated surface.
//!
//! | tag | native | binding | wrapper |
//! |-----|--------|---------|---------|
//! | `real` | `float` | `float` | `number` |
//! | `integer` | `int` | `int` | `number` |
//! | `string` | `std::string` | `std::string` | `string` |
//! | `bool` | `bool` | `bool` | `boolean` |
//! | `vector_real` | `std::vector<float>&` | same | `any[]` |
//! | `vector_vector_real` | `std::vector<std::vector<float> >&` | same | `VectorVectorFloat` |
//! | `vector_string` | `std::vector<std::string>` | same | `any[]` |
//! | `vector_complex`, `matrix_real` | - | - | `any[]` |
//! | `vector_stereosample`, `vector_vector_complex` | - | - | `VectorVectorFloat` |
//!
//! Complex, matrix, and stereo-sample tags are deliberately unmapped on the
//! native surface; asking for them fails instead of emitting code the
//! bindings cannot marshal.

use algobind_catalog::TypeTag;
use serde::Serialize;

use crate::error::CodegenError;

/// One of the three surfaces a type can be rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// C++ class declarations and definitions.
    Native,
    /// Embind registrations.
    Binding,
    /// TypeScript wrapper classes and parameter types.
    Wrapper,
}

impl Surface {
    /// Returns the surface name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Native => "native",
            Surface::Binding => "binding",
            Surface::Wrapper => "wrapper",
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tag that has no representation on a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedType {
    /// Surface the lookup was made for.
    pub surface: Surface,
    /// The tag without a mapping.
    pub tag: TypeTag,
}

impl UnmappedType {
    /// Attaches the algorithm and field the tag came from.
    pub fn for_field(self, algorithm: &str, field: &str) -> CodegenError {
        CodegenError::UnsupportedType {
            algorithm: algorithm.to_string(),
            field: field.to_string(),
            surface: self.surface,
            tag: self.tag,
        }
    }
}

/// Maps a tag to its C++ type.
pub fn map_native(tag: &TypeTag) -> Result<&'static str, UnmappedType> {
    match tag {
        TypeTag::VectorReal => Ok("std::vector<float>&"),
        TypeTag::VectorVectorReal => Ok("std::vector<std::vector<float> >&"),
        TypeTag::VectorString => Ok("std::vector<std::string>"),
        TypeTag::String => Ok("std::string"),
        TypeTag::Integer => Ok("int"),
        TypeTag::Real => Ok("float"),
        TypeTag::Bool => Ok("bool"),
        _ => Err(UnmappedType {
            surface: Surface::Native,
            tag: tag.clone(),
        }),
    }
}

/// Maps a tag to the type it takes in an embind constructor signature.
///
/// Constructor signatures list native parameter types verbatim, so this is
/// absent exactly where the native mapping is.
pub fn map_binding(tag: &TypeTag) -> Option<&'static str> {
    map_native(tag).ok()
}

/// Maps a tag to its TypeScript type.
pub fn map_wrapper(tag: &TypeTag) -> Result<&'static str, UnmappedType> {
    match tag {
        TypeTag::VectorReal | TypeTag::VectorComplex | TypeTag::MatrixReal | TypeTag::VectorString => {
            Ok("any[]")
        }
        TypeTag::VectorVectorReal | TypeTag::VectorVectorComplex | TypeTag::VectorStereoSample => {
            Ok("VectorVectorFloat")
        }
        TypeTag::String => Ok("string"),
        TypeTag::Integer | TypeTag::Real => Ok("number"),
        TypeTag::Bool => Ok("boolean"),
        TypeTag::Other(_) => Err(UnmappedType {
            surface: Surface::Wrapper,
            tag: tag.clone(),
        }),
    }
}

/// A tag's representation on all three surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    /// C++ type, if mapped.
    pub native: Option<&'static str>,
    /// Embind constructor argument type, if mapped.
    pub binding: Option<&'static str>,
    /// TypeScript type, if mapped.
    pub wrapper: Option<&'static str>,
}

impl TypeMapping {
    /// Looks up every surface for a tag.
    pub fn of(tag: &TypeTag) -> Self {
        Self {
            native: map_native(tag).ok(),
            binding: map_binding(tag),
            wrapper: map_wrapper(tag).ok(),
        }
    }

    /// Returns true if the tag can appear in native and wrapper code alike.
    pub fn is_complete(&self) -> bool {
        self.native.is_some() && self.wrapper.is_some()
    }
}

/// Strips the reference marker from a native type for use as a local
/// variable declaration (`std::vector<float>&` becomes `std::vector<float>`).
pub fn native_value_type(native: &str) -> String {
    native.replace('&', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_mapping_table() {
        assert_eq!(map_native(&TypeTag::Real).unwrap(), "float");
        assert_eq!(map_native(&TypeTag::Integer).unwrap(), "int");
        assert_eq!(map_native(&TypeTag::String).unwrap(), "std::string");
        assert_eq!(map_native(&TypeTag::Bool).unwrap(), "bool");
        assert_eq!(map_native(&TypeTag::VectorReal).unwrap(), "std::vector<float>&");
        assert_eq!(
            map_native(&TypeTag::VectorVectorReal).unwrap(),
            "std::vector<std::vector<float> >&"
        );
        assert_eq!(
            map_native(&TypeTag::VectorString).unwrap(),
            "std::vector<std::string>"
        );
    }

    #[test]
    fn test_native_unsupported_types_fail() {
        for tag in [
            TypeTag::VectorComplex,
            TypeTag::MatrixReal,
            TypeTag::VectorStereoSample,
            TypeTag::VectorVectorComplex,
            TypeTag::Other("pool".to_string()),
        ] {
            let err = map_native(&tag).unwrap_err();
            assert_eq!(err.surface, Surface::Native);
            assert_eq!(err.tag, tag);
        }
    }

    #[test]
    fn test_wrapper_collapses_containers() {
        assert_eq!(map_wrapper(&TypeTag::VectorReal).unwrap(), "any[]");
        assert_eq!(map_wrapper(&TypeTag::MatrixReal).unwrap(), "any[]");
        assert_eq!(map_wrapper(&TypeTag::VectorString).unwrap(), "any[]");
        assert_eq!(
            map_wrapper(&TypeTag::VectorStereoSample).unwrap(),
            "VectorVectorFloat"
        );
        assert_eq!(map_wrapper(&TypeTag::Integer).unwrap(), "number");
        assert_eq!(map_wrapper(&TypeTag::Bool).unwrap(), "boolean");
        assert!(map_wrapper(&TypeTag::Other("pool".to_string())).is_err());
    }

    #[test]
    fn test_every_known_tag_has_a_wrapper_type() {
        for tag in TypeTag::all() {
            assert!(TypeMapping::of(tag).wrapper.is_some(), "{} unmapped", tag);
        }
    }

    #[test]
    fn test_binding_absent_where_native_is() {
        let mapping = TypeMapping::of(&TypeTag::VectorComplex);
        assert!(mapping.native.is_none());
        assert!(mapping.binding.is_none());
        assert!(!mapping.is_complete());
        assert!(TypeMapping::of(&TypeTag::String).is_complete());
    }

    #[test]
    fn test_unmapped_attaches_context() {
        let err = map_native(&TypeTag::MatrixReal)
            .unwrap_err()
            .for_field("PCA", "poolIn");
        assert!(err.to_string().contains("PCA"));
        assert!(err.to_string().contains("poolIn"));
        assert!(err.to_string().contains("native"));
    }

    #[test]
    fn test_native_value_type() {
        assert_eq!(native_value_type("std::vector<float>&"), "std::vector<float>");
        assert_eq!(native_value_type("float"), "float");
    }
}
