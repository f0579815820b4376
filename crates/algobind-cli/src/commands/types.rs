//! Types command implementation
//!
//! Prints the distinct parameter, input and output type tags used by the
//! selected algorithms.

use anyhow::{Context, Result};
use algobind_catalog::TypeTag;
use algobind_codegen::{Generator, TypeMapping, TypeSummary};
use colored::Colorize;
use std::process::ExitCode;

use super::reporting::load_inputs;

/// Run the types command
///
/// # Arguments
/// * `catalog_path` - Path to the JSON descriptor catalog
/// * `config_path` - Path to the run config (JSON or YAML)
/// * `json_output` - Print the summary as JSON instead of colored text
pub fn run(catalog_path: &str, config_path: &str, json_output: bool) -> Result<ExitCode> {
    let (catalog, config) = load_inputs(catalog_path, config_path)?;
    let generator = Generator::new(catalog, config.codegen.clone()).context("Invalid codegen config")?;
    let summary = generator
        .type_summary(&config.selection())
        .context("Failed to summarize types")?;

    if json_output {
        let json = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize type summary")?;
        println!("{}", json);
    } else {
        print_summary(&summary);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_summary(summary: &TypeSummary) {
    let unsupported = summary.unsupported_parameter_types();
    print_tags("Parameter types:", &summary.parameter_types, |tag| {
        parameter_note(tag, &unsupported)
    });
    print_tags("Input types:", &summary.input_types, port_note);
    print_tags("Output types:", &summary.output_types, port_note);
}

fn print_tags(heading: &str, tags: &[TypeTag], note: impl Fn(&TypeTag) -> Option<&'static str>) {
    println!("{}", heading.cyan().bold());
    if tags.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for tag in tags {
        match note(tag) {
            Some(note) => println!("  {} {}", tag, note.yellow()),
            None => println!("  {}", tag),
        }
    }
}

fn parameter_note(tag: &TypeTag, unsupported: &[&TypeTag]) -> Option<&'static str> {
    unsupported
        .contains(&tag)
        .then_some("(unsupported as parameter)")
}

/// Inputs and outputs need a native and a wrapper type to be generated.
fn port_note(tag: &TypeTag) -> Option<&'static str> {
    (!TypeMapping::of(tag).is_complete()).then_some("(no native mapping)")
}
