//! Market domain - joining league snapshots into trend-annotated data

pub mod data_integrator;

pub use data_integrator::DataIntegrator;
