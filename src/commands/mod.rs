//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod config;
pub mod sample;

pub use config::run_config;
pub use sample::run_sample;
