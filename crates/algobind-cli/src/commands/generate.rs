//! Generate command implementation
//!
//! Runs the generator over the configured selection and writes one file per
//! requested target into the output directory.

use anyhow::{Context, Result};
use algobind_codegen::{Generator, Target};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::reporting::{load_inputs, print_coded_error};

/// Run the generate command
///
/// # Arguments
/// * `catalog_path` - Path to the JSON descriptor catalog
/// * `config_path` - Path to the run config (JSON or YAML)
/// * `out_dir` - Directory the artifacts are written to
/// * `targets` - Target tags to generate; empty means all
///
/// # Returns
/// Exit code: 0 on success, 2 if generation failed
pub fn run(
    catalog_path: &str,
    config_path: &str,
    out_dir: &str,
    targets: &[String],
) -> Result<ExitCode> {
    let targets = parse_targets(targets)?;

    println!("{} {}", "Catalog:".cyan().bold(), catalog_path);
    println!("{} {}", "Output dir:".cyan().bold(), out_dir);

    let (catalog, config) = load_inputs(catalog_path, config_path)?;
    let selection = config.selection();
    let algorithm_count = selection.resolve().len();
    println!(
        "{} {} algorithm(s), {} target(s)",
        "Selection:".dimmed(),
        algorithm_count,
        targets.len()
    );

    let generator = Generator::new(catalog, config.codegen).context("Invalid codegen config")?;
    let run = match generator.run(&selection, &targets) {
        Ok(run) => run,
        Err(e) => {
            println!("\n{}", "GENERATION FAILED".red().bold());
            print_coded_error(&e);
            return Ok(ExitCode::from(2));
        }
    };

    let out = Path::new(out_dir);
    std::fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out_dir))?;

    for target in &targets {
        let path = out.join(target.file_name());
        std::fs::write(&path, run.render(*target))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        let digest = run.digest(*target);
        println!(
            "  {} {} {}",
            "+".green(),
            target.file_name(),
            digest[..16].dimmed()
        );
    }

    println!(
        "\n{} Generated {} file(s) for {} algorithm(s)",
        "SUCCESS".green().bold(),
        targets.len(),
        algorithm_count
    );

    Ok(ExitCode::SUCCESS)
}

/// Parses target tags, defaulting to every target and dropping repeats.
pub fn parse_targets(raw: &[String]) -> Result<Vec<Target>> {
    if raw.is_empty() {
        return Ok(Target::all().to_vec());
    }
    let mut targets = Vec::with_capacity(raw.len());
    for tag in raw {
        let target: Target = tag.parse()?;
        if !targets.contains(&target) {
            targets.push(target);
        }
    }
    Ok(targets)
}
