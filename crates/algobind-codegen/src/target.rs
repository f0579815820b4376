//! Target surfaces an emitter can produce.

use serde::{Deserialize, Serialize};

use crate::error::CodegenError;

/// A generated artifact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// C++ class declarations.
    Declaration,
    /// C++ class definitions.
    Definition,
    /// Embind registrations.
    Binding,
    /// TypeScript wrapper classes.
    Wrapper,
    /// TypeScript parameter types plus their export block.
    ParamTypes,
}

impl Target {
    /// Returns the target tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Declaration => "declaration",
            Target::Definition => "definition",
            Target::Binding => "binding",
            Target::Wrapper => "wrapper",
            Target::ParamTypes => "param-types",
        }
    }

    /// File the CLI writes this target's artifacts to.
    pub fn file_name(&self) -> &'static str {
        match self {
            Target::Declaration => "algorithms.h",
            Target::Definition => "algorithms.cpp",
            Target::Binding => "bindings.cpp",
            Target::Wrapper => "wrapper.ts",
            Target::ParamTypes => "param_types.ts",
        }
    }

    /// Returns all targets in emission order.
    pub fn all() -> &'static [Target] {
        &[
            Target::Declaration,
            Target::Definition,
            Target::Binding,
            Target::Wrapper,
            Target::ParamTypes,
        ]
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Target {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "declaration" | "header" => Ok(Target::Declaration),
            "definition" | "algorithm" => Ok(Target::Definition),
            "binding" => Ok(Target::Binding),
            "wrapper" => Ok(Target::Wrapper),
            "param-types" | "param_types" => Ok(Target::ParamTypes),
            _ => Err(CodegenError::InvalidTarget {
                target: s.to_string(),
            }),
        }
    }
}
