//! Scoring domain - shared numeric formulas for the detectors

pub mod scorer;

pub use scorer::Scorer;
