//! Business logic services
//!
//! Orchestrates one sampling run on top of the sampler, the alert
//! evaluator, the notifiers and the log store.

pub mod pipeline;

pub use pipeline::{Pipeline, RunReport};
