//! algobind CLI library.
//!
//! This crate provides the core functionality for the algobind CLI:
//! catalog and run-config loading, logging setup, and the subcommands.

pub mod commands;
pub mod input;
pub mod logging;
