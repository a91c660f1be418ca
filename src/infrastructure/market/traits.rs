use async_trait::async_trait;
use crate::shared::errors::CollectorError;
use crate::shared::types::Snapshot;

/// Anything that can produce a market snapshot for a league
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Load the latest snapshot of a league
    async fn load(&self, league: &str) -> Result<Snapshot, CollectorError>;
}
