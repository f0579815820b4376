//! Shared loading and console helpers for commands.

use std::path::Path;

use algobind_catalog::{Catalog, CodedError};
use anyhow::{Context, Result};
use colored::Colorize;

use crate::input::{load_catalog, load_run_config, RunConfig};

/// Loads the catalog and run config every command starts from.
pub(crate) fn load_inputs(catalog_path: &str, config_path: &str) -> Result<(Catalog, RunConfig)> {
    let catalog = load_catalog(Path::new(catalog_path))
        .with_context(|| format!("Failed to load catalog: {}", catalog_path))?;
    let config = load_run_config(Path::new(config_path))
        .with_context(|| format!("Failed to load config: {}", config_path))?;
    Ok((catalog, config))
}

/// Prints one coded error as an `x [CODE] message` line.
pub(crate) fn print_coded_error(error: &dyn CodedError) {
    println!(
        "  {} [{}] {}",
        "x".red(),
        error.code().red(),
        error.message()
    );
}
