//! rng-analyzer - client for a remote RNG output classifier
//!
//! Uploads raw generator output to a classification service, presents the
//! prediction, and keeps a bounded local history of past analyses.

pub mod classes;
pub mod cli;
pub mod client;
pub mod config;
pub mod history;
pub mod logging;
