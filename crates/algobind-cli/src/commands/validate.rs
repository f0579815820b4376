//! Validate command implementation
//!
//! Checks every catalog descriptor, then dry-runs each target for every
//! selected algorithm so all generation problems are reported at once
//! instead of stopping at the first.

use anyhow::{Context, Result};
use algobind_catalog::{validate_descriptor, AlgorithmSelection, Catalog, CatalogError};
use algobind_codegen::{emit, normalize, CodegenConfig, Target};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::reporting::print_coded_error;
use crate::input::{load_catalog, load_run_config};

/// Run the validate command
///
/// # Arguments
/// * `catalog_path` - Path to the JSON descriptor catalog
/// * `config_path` - Optional run config; without one every catalog
///   algorithm is checked with default settings
///
/// # Returns
/// Exit code: 0 if valid, 1 if any problem was found
pub fn run(catalog_path: &str, config_path: Option<&str>) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), catalog_path);

    let catalog = load_catalog(Path::new(catalog_path))
        .with_context(|| format!("Failed to load catalog: {}", catalog_path))?;
    let (selection, config) = match config_path {
        Some(path) => {
            let run_config = load_run_config(Path::new(path))
                .with_context(|| format!("Failed to load config: {}", path))?;
            (run_config.selection(), run_config.codegen)
        }
        None => (
            AlgorithmSelection::all(catalog.names()),
            CodegenConfig::default(),
        ),
    };
    config.validate().context("Invalid codegen config")?;

    let mut problems = descriptor_problems(&catalog);
    problems += generation_problems(&catalog, &selection, &config);

    if problems == 0 {
        println!(
            "\n{} {} algorithm(s) checked",
            "VALID".green().bold(),
            selection.resolve().len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!("\n{} {} problem(s)", "INVALID".red().bold(), problems);
        Ok(ExitCode::from(1))
    }
}

fn descriptor_problems(catalog: &Catalog) -> usize {
    let errors = descriptor_errors(catalog);
    for error in &errors {
        print_coded_error(error);
    }
    errors.len()
}

/// One `InvalidDescriptor` error per validation issue, in catalog order.
fn descriptor_errors(catalog: &Catalog) -> Vec<CatalogError> {
    catalog
        .iter()
        .filter_map(|descriptor| {
            validate_descriptor(descriptor).err().map(|issues| {
                issues
                    .iter()
                    .map(|issue| CatalogError::invalid(&descriptor.name, issue.to_string()))
                    .collect::<Vec<_>>()
            })
        })
        .flatten()
        .collect()
}

fn generation_problems(
    catalog: &Catalog,
    selection: &AlgorithmSelection,
    config: &CodegenConfig,
) -> usize {
    let mut count = 0;
    for name in selection.resolve() {
        let algo = match normalize(catalog, &name, config) {
            Ok(algo) => algo,
            Err(e) => {
                println!("{} {}", "Algorithm:".yellow(), name);
                print_coded_error(&e);
                count += 1;
                continue;
            }
        };
        let errors: Vec<_> = Target::all()
            .iter()
            .filter_map(|target| emit(*target, &algo, config).err())
            .collect();
        if !errors.is_empty() {
            println!("{} {}", "Algorithm:".yellow(), name);
            for e in &errors {
                print_coded_error(e);
            }
            count += errors.len();
        }
    }
    count
}
