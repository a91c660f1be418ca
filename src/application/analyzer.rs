//! Opportunity analysis - runs every detector over one integrated snapshot

use crate::domain::knowledge::KnowledgeBase;
use crate::domain::opportunity::{
    CraftingAdvisor, Detector, FarmingAdvisor, FlipDetector, InvestmentAnalyzer, Opportunity,
};
use crate::shared::config::AnalysisConfig;
use crate::shared::types::IntegratedSnapshot;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Outcome of one analysis run. Every list is present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub flipping: Vec<Opportunity>,
    pub farming: Vec<Opportunity>,
    pub crafting: Vec<Opportunity>,
    pub investment: Vec<Opportunity>,
    /// Start of the run, RFC 3339
    pub timestamp: String,
}

impl AnalysisResult {
    pub fn empty(started_at: DateTime<Utc>) -> Self {
        Self {
            flipping: Vec::new(),
            farming: Vec::new(),
            crafting: Vec::new(),
            investment: Vec::new(),
            timestamp: format_timestamp(started_at),
        }
    }

    pub fn total(&self) -> usize {
        self.flipping.len() + self.farming.len() + self.crafting.len() + self.investment.len()
    }
}

/// Orchestrator over the four detectors
pub struct OpportunityAnalyzer {
    flips: FlipDetector,
    farming: FarmingAdvisor,
    crafting: CraftingAdvisor,
    investment: InvestmentAnalyzer,
    parallel: bool,
}

impl OpportunityAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        let knowledge = KnowledgeBase::standard();
        Self {
            flips: FlipDetector::new(config),
            farming: FarmingAdvisor::new(knowledge, config.farming_cap),
            crafting: CraftingAdvisor::new(knowledge),
            investment: InvestmentAnalyzer::new(config.investment_threshold, config.investment_cap),
            parallel: config.parallel_detectors,
        }
    }

    pub fn analyze_all(&self, snapshot: &IntegratedSnapshot) -> AnalysisResult {
        self.analyze_at(snapshot, Utc::now())
    }

    /// Run all detectors; a failing detector contributes an empty list
    pub fn analyze_at(&self, snapshot: &IntegratedSnapshot, started_at: DateTime<Utc>) -> AnalysisResult {
        info!("🔍 Analyzing opportunities for {}", snapshot.league);

        // Detectors share only the immutable snapshot
        let ((flipping, farming), (crafting, investment)) = if self.parallel {
            rayon::join(
                || rayon::join(|| run_detector(&self.flips, snapshot), || run_detector(&self.farming, snapshot)),
                || rayon::join(|| run_detector(&self.crafting, snapshot), || run_detector(&self.investment, snapshot)),
            )
        } else {
            (
                (run_detector(&self.flips, snapshot), run_detector(&self.farming, snapshot)),
                (run_detector(&self.crafting, snapshot), run_detector(&self.investment, snapshot)),
            )
        };

        let result = AnalysisResult {
            flipping,
            farming,
            crafting,
            investment,
            timestamp: format_timestamp(started_at),
        };

        info!(
            "✅ Analysis complete: {} flipping, {} farming, {} crafting, {} investment",
            result.flipping.len(),
            result.farming.len(),
            result.crafting.len(),
            result.investment.len()
        );
        result
    }
}

impl Default for OpportunityAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

fn run_detector(detector: &dyn Detector, snapshot: &IntegratedSnapshot) -> Vec<Opportunity> {
    match detector.detect(snapshot) {
        Ok(opportunities) => {
            info!("Identified {} opportunities with {}", opportunities.len(), detector.name());
            opportunities
        }
        Err(e) => {
            error!("❌ {} failed, reporting no opportunities: {}", detector.name(), e);
            Vec::new()
        }
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
