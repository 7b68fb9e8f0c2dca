//! Domain models for syshealth
//!
//! Plain value types shared by the sampler, the alert evaluator and the
//! log store.

pub mod sample;
pub mod throughput;

pub use sample::{round_to, Sample};
pub use throughput::{bytes_to_mbps, NetCounters, MIN_WINDOW_SECONDS};
