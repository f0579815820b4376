//! algobind End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the generation pipeline:
//!
//! - Generation: catalog + selection -> five target files
//! - **Determinism**: byte-identical output across runs
//! - Naming: prefixed identifiers and bare result keys for arbitrary names
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p algobind-tests
//! ```

pub mod fixtures;
