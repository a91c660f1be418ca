//! Market snapshot sources

pub mod poe_ninja;
pub mod snapshot_store;
pub mod traits;

pub use poe_ninja::PoeNinjaCollector;
pub use snapshot_store::FileSnapshotSource;
pub use traits::SnapshotSource;
