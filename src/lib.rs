//! syshealth - host health sampling library
//!
//! This library provides the core functionality for sampling CPU, memory
//! and network throughput, persisting samples to append-only logs and
//! raising threshold alerts.
//!
//! # Modules
//!
//! - [`alerts`]: Threshold evaluation and notification channels
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Environment-based configuration
//! - [`domain`]: Domain values
//! - [`error`]: Error types
//! - [`sampler`]: Metrics provider abstraction
//! - [`services`]: Pipeline orchestration
//! - [`store`]: CSV and JSONL log store

pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod sampler;
pub mod services;
pub mod store;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
