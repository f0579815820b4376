//! algobind CLI - Command-line interface for binding generation
//!
//! This binary loads a descriptor catalog and a run config, drives the code
//! generator, and writes the generated sources.

use clap::Parser;
use std::process::ExitCode;

use algobind_cli::{commands, logging};

mod cli_args;
use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            catalog,
            config,
            out,
            targets,
        } => commands::generate::run(&catalog, &config, &out, &targets),
        Commands::Types {
            catalog,
            config,
            json,
        } => commands::types::run(&catalog, &config, json),
        Commands::FindParams {
            catalog,
            config,
            type_tag,
            json,
        } => commands::find_params::run(&catalog, &config, &type_tag, json),
        Commands::Validate { catalog, config } => {
            commands::validate::run(&catalog, config.as_deref())
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
