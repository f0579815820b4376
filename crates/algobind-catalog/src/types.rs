//! Type tags carried by algorithm inputs, outputs, and parameters.

use serde::{Deserialize, Serialize};

/// Abstract type tag of an algorithm input, output, or parameter.
///
/// Tags serialize with the snake_case names used by the upstream catalog
/// (`real`, `vector_real`, ...). Tag strings the catalog knows nothing about
/// are kept verbatim in [`TypeTag::Other`] so that code generation, not
/// catalog loading, decides whether they are usable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeTag {
    /// Scalar real (32-bit float on the native side).
    Real,
    /// Scalar integer.
    Integer,
    /// Scalar string.
    String,
    /// Scalar boolean.
    Bool,
    /// Resizable sequence of reals.
    VectorReal,
    /// Sequence of real sequences.
    VectorVectorReal,
    /// Sequence of strings.
    VectorString,
    /// Sequence of complex numbers.
    VectorComplex,
    /// Two-dimensional real matrix.
    MatrixReal,
    /// Sequence of stereo samples.
    VectorStereoSample,
    /// Sequence of complex sequences.
    VectorVectorComplex,
    /// A tag outside the known set, kept verbatim.
    Other(std::string::String),
}

impl TypeTag {
    /// Returns the catalog spelling of the tag.
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::Real => "real",
            TypeTag::Integer => "integer",
            TypeTag::String => "string",
            TypeTag::Bool => "bool",
            TypeTag::VectorReal => "vector_real",
            TypeTag::VectorVectorReal => "vector_vector_real",
            TypeTag::VectorString => "vector_string",
            TypeTag::VectorComplex => "vector_complex",
            TypeTag::MatrixReal => "matrix_real",
            TypeTag::VectorStereoSample => "vector_stereosample",
            TypeTag::VectorVectorComplex => "vector_vector_complex",
            TypeTag::Other(name) => name,
        }
    }

    /// Returns true if the tag may appear on a parameter.
    pub fn is_parameter_type(&self) -> bool {
        matches!(
            self,
            TypeTag::Real | TypeTag::Integer | TypeTag::String | TypeTag::Bool | TypeTag::VectorReal
        )
    }

    /// Returns every known tag, in declaration order.
    pub fn all() -> &'static [TypeTag] {
        &[
            TypeTag::Real,
            TypeTag::Integer,
            TypeTag::String,
            TypeTag::Bool,
            TypeTag::VectorReal,
            TypeTag::VectorVectorReal,
            TypeTag::VectorString,
            TypeTag::VectorComplex,
            TypeTag::MatrixReal,
            TypeTag::VectorStereoSample,
            TypeTag::VectorVectorComplex,
        ]
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for TypeTag {
    fn from(s: &str) -> Self {
        match s {
            "real" => TypeTag::Real,
            "integer" => TypeTag::Integer,
            "string" => TypeTag::String,
            "bool" => TypeTag::Bool,
            "vector_real" => TypeTag::VectorReal,
            "vector_vector_real" => TypeTag::VectorVectorReal,
            "vector_string" => TypeTag::VectorString,
            "vector_complex" => TypeTag::VectorComplex,
            "matrix_real" => TypeTag::MatrixReal,
            "vector_stereosample" => TypeTag::VectorStereoSample,
            "vector_vector_complex" => TypeTag::VectorVectorComplex,
            other => TypeTag::Other(other.to_string()),
        }
    }
}

impl From<std::string::String> for TypeTag {
    fn from(s: std::string::String) -> Self {
        TypeTag::from(s.as_str())
    }
}

impl From<TypeTag> for std::string::String {
    fn from(tag: TypeTag) -> Self {
        tag.as_str().to_string()
    }
}

impl std::str::FromStr for TypeTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TypeTag::from(s))
    }
}
