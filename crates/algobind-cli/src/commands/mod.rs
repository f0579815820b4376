//! CLI command implementations

pub mod find_params;
pub mod generate;
pub mod types;
pub mod validate;

mod reporting;
