//! Shared components - market types, errors, configuration and helpers

pub mod types;
pub mod errors;
pub mod utils;
pub mod config;
