//! CLI argument definitions for the algobind command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// algobind - Native and wrapper bindings from algorithm descriptors
#[derive(Parser)]
#[command(name = "algobind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate native classes, bindings and TypeScript wrappers
    Generate {
        /// Path to the descriptor catalog (JSON)
        #[arg(short, long)]
        catalog: String,

        /// Path to the run config (JSON or YAML)
        #[arg(long)]
        config: String,

        /// Output directory
        #[arg(short, long)]
        out: String,

        /// Targets to generate (declaration, definition, binding, wrapper, param-types); default all
        #[arg(short, long = "target")]
        targets: Vec<String>,
    },

    /// Print the distinct type tags used by the selected algorithms
    Types {
        /// Path to the descriptor catalog (JSON)
        #[arg(short, long)]
        catalog: String,

        /// Path to the run config (JSON or YAML)
        #[arg(long)]
        config: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List selected algorithms with parameters of a given type
    FindParams {
        /// Path to the descriptor catalog (JSON)
        #[arg(short, long)]
        catalog: String,

        /// Path to the run config (JSON or YAML)
        #[arg(long)]
        config: String,

        /// Type tag to search for (e.g. vector_real)
        #[arg(short = 't', long = "type")]
        type_tag: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate catalog descriptors and dry-run generation
    Validate {
        /// Path to the descriptor catalog (JSON)
        #[arg(short, long)]
        catalog: String,

        /// Optional run config limiting the selection
        #[arg(long)]
        config: Option<String>,
    },
}
