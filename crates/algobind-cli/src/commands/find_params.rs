//! Find-params command implementation
//!
//! Lists the selected algorithms that take a parameter of a given type.

use anyhow::{Context, Result};
use algobind_catalog::TypeTag;
use algobind_codegen::Generator;
use colored::Colorize;
use std::process::ExitCode;

use super::reporting::load_inputs;

/// Run the find-params command
///
/// # Arguments
/// * `catalog_path` - Path to the JSON descriptor catalog
/// * `config_path` - Path to the run config (JSON or YAML)
/// * `type_tag` - Type tag to search for, e.g. `vector_real`
/// * `json_output` - Print matches as JSON instead of colored text
pub fn run(
    catalog_path: &str,
    config_path: &str,
    type_tag: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let tag = TypeTag::from(type_tag);
    let (catalog, config) = load_inputs(catalog_path, config_path)?;
    let generator = Generator::new(catalog, config.codegen.clone()).context("Invalid codegen config")?;
    let matches = generator
        .find_params(&config.selection(), &tag)
        .context("Failed to search parameters")?;

    if json_output {
        let json =
            serde_json::to_string_pretty(&matches).context("Failed to serialize matches")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} ({} algorithm(s))",
        "Parameters of type".cyan().bold(),
        tag.to_string().bold(),
        matches.len()
    );
    for found in &matches {
        println!(
            "  {} {}",
            found.algorithm.green(),
            found.parameters.join(", ").dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}
