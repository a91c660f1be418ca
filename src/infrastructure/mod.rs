//! Infrastructure layer - snapshot sources, persistence and logging

pub mod logging;
pub mod market;
pub mod result_writer;

pub use logging::init_logging;
pub use market::{FileSnapshotSource, PoeNinjaCollector, SnapshotSource};
pub use result_writer::ResultWriter;
