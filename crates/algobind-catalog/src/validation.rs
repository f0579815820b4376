//! Descriptor validation.
//!
//! Checks the structural invariants a descriptor must hold before code is
//! generated from it: identifier-safe names, unique names per list, and
//! default values that parse as their parameter type.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::descriptor::AlgorithmDescriptor;
use crate::types::TypeTag;

/// Issue codes reported by descriptor validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// D001: Name is not a valid identifier
    InvalidIdentifier,
    /// D002: Input name repeated
    DuplicateInput,
    /// D003: Output name repeated
    DuplicateOutput,
    /// D004: Parameter name repeated
    DuplicateParameter,
    /// D005: Default value does not parse as the parameter type
    InvalidDefault,
    /// D006: Parameter type outside the supported parameter subset
    UnsupportedParameterType,
    /// D007: No inputs, outputs, or parameters
    EmptyDescriptor,
}

impl IssueCode {
    /// Returns the issue code string (e.g., "D001").
    pub fn code(&self) -> &'static str {
        match self {
            IssueCode::InvalidIdentifier => "D001",
            IssueCode::DuplicateInput => "D002",
            IssueCode::DuplicateOutput => "D003",
            IssueCode::DuplicateParameter => "D004",
            IssueCode::InvalidDefault => "D005",
            IssueCode::UnsupportedParameterType => "D006",
            IssueCode::EmptyDescriptor => "D007",
        }
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorIssue {
    /// The issue code.
    pub code: IssueCode,
    /// Human-readable message.
    pub message: String,
    /// Path to the offending field (e.g., "parameters\[2\].default").
    pub path: Option<String>,
}

impl DescriptorIssue {
    /// Creates a new issue.
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new issue with a field path.
    pub fn with_path(code: IssueCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for DescriptorIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Identifier pattern shared by the native and wrapper surfaces.
pub const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

static IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();

fn identifier_regex() -> &'static Regex {
    IDENTIFIER_REGEX.get_or_init(|| Regex::new(IDENTIFIER_PATTERN).expect("invalid regex pattern"))
}

/// Returns true if `name` is usable as an identifier on every surface.
pub fn is_valid_identifier(name: &str) -> bool {
    identifier_regex().is_match(name)
}

/// Returns true if `literal` is a valid default for a parameter of `type_tag`.
///
/// Tags outside the parameter subset never have a valid default.
pub fn is_valid_default(type_tag: &TypeTag, literal: &str) -> bool {
    match type_tag {
        TypeTag::Real => literal.trim().parse::<f64>().is_ok(),
        TypeTag::Integer => literal.trim().parse::<i64>().is_ok(),
        TypeTag::Bool => matches!(literal, "true" | "false"),
        TypeTag::String => !literal.contains('"'),
        TypeTag::VectorReal => {
            let Some(inner) = literal
                .trim()
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
            else {
                return false;
            };
            inner.trim().is_empty()
                || inner
                    .split(',')
                    .all(|item| item.trim().parse::<f64>().is_ok())
        }
        _ => false,
    }
}

/// Validates a descriptor, returning every issue found.
pub fn validate_descriptor(descriptor: &AlgorithmDescriptor) -> Result<(), Vec<DescriptorIssue>> {
    let mut issues = Vec::new();

    if !is_valid_identifier(&descriptor.name) {
        issues.push(DescriptorIssue::with_path(
            IssueCode::InvalidIdentifier,
            format!("algorithm name '{}' is not a valid identifier", descriptor.name),
            "name",
        ));
    }

    if descriptor.is_empty() {
        issues.push(DescriptorIssue::new(
            IssueCode::EmptyDescriptor,
            format!(
                "algorithm '{}' has no inputs, outputs, or parameters",
                descriptor.name
            ),
        ));
    }

    check_names(
        descriptor.inputs.iter().map(|i| i.name.as_str()),
        "inputs",
        IssueCode::DuplicateInput,
        &mut issues,
    );
    check_names(
        descriptor.outputs.iter().map(|o| o.name.as_str()),
        "outputs",
        IssueCode::DuplicateOutput,
        &mut issues,
    );
    check_names(
        descriptor.parameters.iter().map(|p| p.name.as_str()),
        "parameters",
        IssueCode::DuplicateParameter,
        &mut issues,
    );

    for (i, param) in descriptor.parameters.iter().enumerate() {
        if !param.type_tag.is_parameter_type() {
            issues.push(DescriptorIssue::with_path(
                IssueCode::UnsupportedParameterType,
                format!(
                    "parameter '{}' has unsupported type '{}'",
                    param.name, param.type_tag
                ),
                format!("parameters[{}].type", i),
            ));
        } else if !is_valid_default(&param.type_tag, &param.default) {
            issues.push(DescriptorIssue::with_path(
                IssueCode::InvalidDefault,
                format!(
                    "default '{}' of parameter '{}' is not a valid {}",
                    param.default, param.name, param.type_tag
                ),
                format!("parameters[{}].default", i),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn check_names<'a>(
    names: impl Iterator<Item = &'a str>,
    list: &str,
    duplicate: IssueCode,
    issues: &mut Vec<DescriptorIssue>,
) {
    let mut seen = HashSet::new();
    for (i, name) in names.enumerate() {
        let path = format!("{}[{}].name", list, i);
        if !is_valid_identifier(name) {
            issues.push(DescriptorIssue::with_path(
                IssueCode::InvalidIdentifier,
                format!("'{}' is not a valid identifier", name),
                path,
            ));
        } else if !seen.insert(name) {
            issues.push(DescriptorIssue::with_path(
                duplicate,
                format!("'{}' is declared more than once", name),
                path,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windowing() -> AlgorithmDescriptor {
        AlgorithmDescriptor::builder("Windowing")
            .input("frame", TypeTag::VectorReal, "the input audio frame")
            .output("frame", TypeTag::VectorReal, "the windowed audio frame")
            .param("size", TypeTag::Integer, "1024", "the window size")
            .param("type", TypeTag::String, "hann", "the window type")
            .param("normalized", TypeTag::Bool, "true", "normalize")
            .param("zeroPhase", TypeTag::Bool, "true", "zero phase")
            .build()
    }

    #[test]
    fn test_valid_descriptor() {
        assert!(validate_descriptor(&windowing()).is_ok());
    }

    #[test]
    fn test_same_name_across_input_and_output_is_allowed() {
        let desc = windowing();
        assert_eq!(desc.inputs[0].name, desc.outputs[0].name);
        assert!(validate_descriptor(&desc).is_ok());
    }

    #[test]
    fn test_empty_descriptor() {
        let desc = AlgorithmDescriptor::builder("Nothing").build();
        let issues = validate_descriptor(&desc).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::EmptyDescriptor);
    }

    #[test]
    fn test_duplicate_parameter() {
        let desc = AlgorithmDescriptor::builder("Twice")
            .param("size", TypeTag::Integer, "1", "a")
            .param("size", TypeTag::Integer, "2", "b")
            .build();
        let issues = validate_descriptor(&desc).unwrap_err();
        assert_eq!(issues[0].code, IssueCode::DuplicateParameter);
        assert_eq!(issues[0].path.as_deref(), Some("parameters[1].name"));
    }

    #[test]
    fn test_invalid_default() {
        let desc = AlgorithmDescriptor::builder("BadDefault")
            .param("sampleRate", TypeTag::Real, "fast", "sr")
            .build();
        let issues = validate_descriptor(&desc).unwrap_err();
        assert_eq!(issues[0].code, IssueCode::InvalidDefault);
        assert_eq!(
            issues[0].to_string(),
            "D005: default 'fast' of parameter 'sampleRate' is not a valid real (at parameters[0].default)"
        );
    }

    #[test]
    fn test_unsupported_parameter_type() {
        let desc = AlgorithmDescriptor::builder("Chords")
            .param("chords", TypeTag::VectorString, "[]", "labels")
            .build();
        let issues = validate_descriptor(&desc).unwrap_err();
        assert_eq!(issues[0].code, IssueCode::UnsupportedParameterType);
    }

    #[test]
    fn test_default_literals() {
        assert!(is_valid_default(&TypeTag::VectorReal, "[]"));
        assert!(is_valid_default(&TypeTag::VectorReal, "[0, 1.5, -2]"));
        assert!(!is_valid_default(&TypeTag::VectorReal, "0, 1"));
        assert!(!is_valid_default(&TypeTag::VectorReal, "[a]"));
        assert!(is_valid_default(&TypeTag::Integer, "2048"));
        assert!(!is_valid_default(&TypeTag::Integer, "2048.5"));
        assert!(is_valid_default(&TypeTag::Real, "inf"));
        assert!(is_valid_default(&TypeTag::Bool, "false"));
        assert!(!is_valid_default(&TypeTag::Bool, "False"));
        assert!(is_valid_default(&TypeTag::String, "hann"));
        assert!(!is_valid_default(&TypeTag::String, "say \"hi\""));
    }

    #[test]
    fn test_identifiers() {
        assert!(is_valid_identifier("MFCC"));
        assert!(is_valid_identifier("_private1"));
        assert!(!is_valid_identifier("1st"));
        assert!(!is_valid_identifier("with space"));
        assert!(!is_valid_identifier(""));
    }
}
