//! Algorithm descriptor types.
//!
//! A descriptor is the read-only shape of one catalog algorithm: its ordered
//! inputs, outputs, and parameters plus free-text documentation. Field order
//! is significant everywhere; generated code follows it exactly.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::TypeTag;

/// An algorithm input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    /// Input name, unique among the algorithm's inputs.
    pub name: String,
    /// Input type tag.
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

/// An algorithm output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Output name, unique among the algorithm's outputs.
    pub name: String,
    /// Output type tag.
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

/// An algorithm parameter with its default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name, unique among the algorithm's parameters.
    pub name: String,
    /// Parameter type tag.
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// Default value as a source literal (`44100`, `hann`, `[0, 1]`, `false`).
    ///
    /// Catalog JSON may spell the default as a string, number, boolean, or
    /// array; it is normalized to its literal text on load.
    #[serde(deserialize_with = "deserialize_literal")]
    pub default: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl InputSpec {
    /// Creates a new input.
    pub fn new(name: impl Into<String>, type_tag: TypeTag, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag,
            description: description.into(),
        }
    }
}

impl OutputSpec {
    /// Creates a new output.
    pub fn new(name: impl Into<String>, type_tag: TypeTag, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag,
            description: description.into(),
        }
    }
}

impl ParamSpec {
    /// Creates a new parameter.
    pub fn new(
        name: impl Into<String>,
        type_tag: TypeTag,
        default: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_tag,
            default: default.into(),
            description: description.into(),
        }
    }
}

/// Structured metadata for one catalog algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmDescriptor {
    /// Algorithm name, unique within the catalog.
    pub name: String,
    /// Free-text description; paragraphs are separated by blank lines.
    #[serde(default)]
    pub description: String,
    /// Ordered inputs.
    #[serde(default)]
    pub inputs: Vec<InputSpec>,
    /// Ordered outputs.
    #[serde(default)]
    pub outputs: Vec<OutputSpec>,
    /// Ordered parameters.
    #[serde(default)]
    pub parameters: Vec<ParamSpec>,
}

impl AlgorithmDescriptor {
    /// Creates a new descriptor builder.
    pub fn builder(name: impl Into<String>) -> AlgorithmDescriptorBuilder {
        AlgorithmDescriptorBuilder::new(name)
    }

    /// Parses a descriptor from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the descriptor to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Returns true if the algorithm has at least one parameter.
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Returns true if the algorithm has no inputs, outputs, or parameters.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty() && self.parameters.is_empty()
    }

    /// Returns the first paragraph of the description.
    pub fn summary(&self) -> &str {
        self.description
            .split("\n\n")
            .next()
            .unwrap_or_default()
    }
}

/// Builder for [`AlgorithmDescriptor`].
#[derive(Debug, Clone)]
pub struct AlgorithmDescriptorBuilder {
    descriptor: AlgorithmDescriptor,
}

impl AlgorithmDescriptorBuilder {
    /// Creates a builder for an algorithm with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            descriptor: AlgorithmDescriptor {
                name: name.into(),
                description: String::new(),
                inputs: Vec::new(),
                outputs: Vec::new(),
                parameters: Vec::new(),
            },
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.descriptor.description = description.into();
        self
    }

    /// Appends an input.
    pub fn input(
        mut self,
        name: impl Into<String>,
        type_tag: TypeTag,
        description: impl Into<String>,
    ) -> Self {
        self.descriptor
            .inputs
            .push(InputSpec::new(name, type_tag, description));
        self
    }

    /// Appends an output.
    pub fn output(
        mut self,
        name: impl Into<String>,
        type_tag: TypeTag,
        description: impl Into<String>,
    ) -> Self {
        self.descriptor
            .outputs
            .push(OutputSpec::new(name, type_tag, description));
        self
    }

    /// Appends a parameter.
    pub fn param(
        mut self,
        name: impl Into<String>,
        type_tag: TypeTag,
        default: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.descriptor
            .parameters
            .push(ParamSpec::new(name, type_tag, default, description));
        self
    }

    /// Builds the descriptor.
    pub fn build(self) -> AlgorithmDescriptor {
        self.descriptor
    }
}

fn deserialize_literal<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    literal_text(&value).ok_or_else(|| {
        serde::de::Error::custom(format!("unsupported default literal: {}", value))
    })
}

/// Renders a JSON value as the literal text the catalog would print.
fn literal_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Array(items) => {
            let parts = items
                .iter()
                .map(literal_text)
                .collect::<Option<Vec<_>>>()?;
            Some(format!("[{}]", parts.join(", ")))
        }
        serde_json::Value::Null | serde_json::Value::Object(_) => None,
    }
}
