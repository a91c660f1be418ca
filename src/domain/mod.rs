//! Domain layer - core business logic and entities

pub mod knowledge;
pub mod market;
pub mod opportunity;
pub mod scoring;
