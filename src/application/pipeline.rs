//! Update pipeline: collect -> integrate -> analyze -> persist, one run at a time

use crate::application::analyzer::{AnalysisResult, OpportunityAnalyzer};
use crate::domain::market::DataIntegrator;
use crate::infrastructure::{FileSnapshotSource, ResultWriter, SnapshotSource};
use crate::shared::config::{AppConfig, LeagueConfig};
use crate::shared::types::Snapshot;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Shared run state: single-flight flag, last result and its time
#[derive(Debug)]
pub struct PipelineState {
    running: AtomicBool,
    /// Last result together with the time it was recorded
    last: RwLock<Option<(AnalysisResult, DateTime<Utc>)>>,
    update_interval: Duration,
}

/// Held for the duration of one run; releases on drop
#[derive(Debug)]
pub struct RunGuard<'a> {
    state: &'a PipelineState,
}

impl RunGuard<'_> {
    pub fn release(self) {}
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.state.running.store(false, Ordering::Release);
    }
}

/// Snapshot of the pipeline for status reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineStatus {
    /// "initializing" until the first run completes, then "ready"
    pub status: &'static str,
    pub running: bool,
    pub last_update: Option<String>,
    pub next_update_in_secs: u64,
}

impl PipelineState {
    pub fn new(update_interval: Duration) -> Self {
        Self {
            running: AtomicBool::new(false),
            last: RwLock::new(None),
            update_interval,
        }
    }

    /// Non-blocking acquire. `None` means a run is already in progress.
    pub fn try_acquire(&self) -> Option<RunGuard<'_>> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RunGuard { state: self })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn record(&self, result: AnalysisResult, at: DateTime<Utc>) {
        *self.last.write() = Some((result, at));
    }

    /// Last result and its update time, read together
    pub fn last_run(&self) -> Option<(AnalysisResult, DateTime<Utc>)> {
        self.last.read().clone()
    }

    pub fn last_result(&self) -> Option<AnalysisResult> {
        self.last.read().as_ref().map(|(result, _)| result.clone())
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last.read().as_ref().map(|(_, at)| *at)
    }

    pub fn status(&self) -> PipelineStatus {
        self.status_at(Utc::now())
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> PipelineStatus {
        let last_update = self.last_update();
        let next_update_in_secs = match last_update {
            Some(at) => {
                let elapsed = now.signed_duration_since(at).num_seconds().max(0) as u64;
                self.update_interval.as_secs().saturating_sub(elapsed)
            }
            None => 0,
        };

        PipelineStatus {
            status: if last_update.is_some() { "ready" } else { "initializing" },
            running: self.is_running(),
            last_update: last_update.map(|at| at.to_rfc3339()),
            next_update_in_secs,
        }
    }
}

/// Wires a snapshot source, the integrator, the analyzer and the result writer
pub struct OpportunityPipeline {
    source: Arc<dyn SnapshotSource>,
    archive: Option<FileSnapshotSource>,
    writer: ResultWriter,
    integrator: DataIntegrator,
    analyzer: OpportunityAnalyzer,
    leagues: LeagueConfig,
    state: Arc<PipelineState>,
}

impl OpportunityPipeline {
    pub fn new(config: &AppConfig, source: Arc<dyn SnapshotSource>) -> Self {
        Self {
            source,
            archive: None,
            writer: ResultWriter::new(config.output.result_path()),
            integrator: DataIntegrator::default(),
            analyzer: OpportunityAnalyzer::new(&config.analysis),
            leagues: config.leagues.clone(),
            state: Arc::new(PipelineState::new(Duration::from_secs(config.schedule.update_interval_secs))),
        }
    }

    /// Also save every loaded snapshot to this store
    pub fn with_archive(mut self, archive: FileSnapshotSource) -> Self {
        self.archive = Some(archive);
        self
    }

    pub fn state(&self) -> Arc<PipelineState> {
        Arc::clone(&self.state)
    }

    /// One full update. Returns `None` without doing anything when another run holds the lock.
    pub async fn run_once(&self) -> Option<AnalysisResult> {
        let Some(guard) = self.state.try_acquire() else {
            warn!("⏳ Update already in progress, skipping");
            return None;
        };

        let started_at = Utc::now();
        info!("🚀 Updating opportunities from {}", self.source.name());

        let (primary, historical) = tokio::join!(
            self.load_or_empty(&self.leagues.primary),
            self.load_or_empty(&self.leagues.historical)
        );

        let integrated = self.integrator.integrate(&primary, &historical);
        let result = self.analyzer.analyze_at(&integrated, started_at);

        if let Err(e) = self.writer.write(&result).await {
            error!("❌ Failed to save analysis result: {}", e);
        }

        self.state.record(result.clone(), Utc::now());
        guard.release();

        info!("Update finished with {} opportunities", result.total());
        Some(result)
    }

    /// Trigger `run_once` on every tick until `shutdown` resolves, the first immediately.
    /// Ticks run detached so a tick that lands during a run is skipped.
    pub async fn watch<F>(self: Arc<Self>, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let period = self.state.update_interval.max(Duration::from_secs(1));
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        info!("⏱️ Scheduling updates every {}s", period.as_secs());

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let pipeline = Arc::clone(&self);
                    tokio::spawn(async move {
                        pipeline.run_once().await;
                    });
                }
                _ = &mut shutdown => {
                    info!("Shutting down scheduler");
                    break;
                }
            }
        }
    }

    async fn load_or_empty(&self, league: &str) -> Snapshot {
        match self.source.load(league).await {
            Ok(snapshot) => {
                if let Some(archive) = &self.archive {
                    if let Err(e) = archive.save(&snapshot).await {
                        warn!("Failed to archive {} snapshot: {}", league, e);
                    }
                }
                snapshot
            }
            Err(e) => {
                warn!("No market data for {}: {}", league, e);
                Snapshot::empty(league)
            }
        }
    }
}
