//! Opportunity domain - the ranked recommendation model and its detectors

pub mod crafting_advisor;
pub mod farming_advisor;
pub mod flip_detector;
pub mod investment_analyzer;

pub use crafting_advisor::CraftingAdvisor;
pub use farming_advisor::FarmingAdvisor;
pub use flip_detector::FlipDetector;
pub use investment_analyzer::InvestmentAnalyzer;

use crate::shared::errors::DetectorFailure;
use crate::shared::types::{IntegratedItem, IntegratedSnapshot, ItemCategory};
use serde::{Deserialize, Serialize};

/// Kind of recommendation, serialized as the `kind` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    SingleStepFlip,
    MultiStepFlip,
    Farming,
    Crafting,
    Investment,
}

/// Kind-specific payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpportunityDetails {
    SingleStepFlip {
        chaos_value: f64,
        volatility: f64,
        potential_profit: f64,
    },
    MultiStepFlip {
        /// start -> mid -> end -> start
        path: [String; 4],
        profit_percent: f64,
        potential_profit: f64,
    },
    Farming {
        category: ItemCategory,
        chaos_value: f64,
        method: String,
        locations: Vec<String>,
    },
    Crafting {
        description: String,
        materials: Vec<String>,
        estimated_cost: f64,
        estimated_return: f64,
    },
    Investment {
        category: ItemCategory,
        chaos_value: f64,
        price_change_pct: f64,
    },
}

/// A scored, strategy-annotated recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Item name, path description or crafting method
    pub subject: String,
    pub league: String,
    pub score: f64,
    pub strategy: String,
    #[serde(flatten)]
    pub details: OpportunityDetails,
}

impl Opportunity {
    pub fn kind(&self) -> OpportunityKind {
        match self.details {
            OpportunityDetails::SingleStepFlip { .. } => OpportunityKind::SingleStepFlip,
            OpportunityDetails::MultiStepFlip { .. } => OpportunityKind::MultiStepFlip,
            OpportunityDetails::Farming { .. } => OpportunityKind::Farming,
            OpportunityDetails::Crafting { .. } => OpportunityKind::Crafting,
            OpportunityDetails::Investment { .. } => OpportunityKind::Investment,
        }
    }

    /// Profit percentage of a multi-step cycle
    pub fn profit_percent(&self) -> Option<f64> {
        match self.details {
            OpportunityDetails::MultiStepFlip { profit_percent, .. } => Some(profit_percent),
            _ => None,
        }
    }
}

/// A detector turns one integrated snapshot into a ranked opportunity list
pub trait Detector: Send + Sync {
    fn name(&self) -> &'static str;

    fn detect(&self, snapshot: &IntegratedSnapshot) -> Result<Vec<Opportunity>, DetectorFailure>;
}

/// Sort by score descending, keeping input order among equal scores, then cap
pub fn rank(opportunities: Vec<Opportunity>, cap: usize) -> Vec<Opportunity> {
    rank_by(opportunities, cap, |o| o.score)
}

pub fn rank_by<F>(mut opportunities: Vec<Opportunity>, cap: usize, key: F) -> Vec<Opportunity>
where
    F: Fn(&Opportunity) -> f64,
{
    opportunities.sort_by(|a, b| key(b).total_cmp(&key(a)));
    opportunities.truncate(cap);
    opportunities
}

/// Reject opportunities whose score cannot be ranked
pub(crate) fn ensure_finite(detector: &'static str, opportunity: &Opportunity) -> Result<(), DetectorFailure> {
    if opportunity.score.is_finite() {
        Ok(())
    } else {
        Err(DetectorFailure::NonFiniteScore {
            detector,
            subject: opportunity.subject.clone(),
        })
    }
}

/// Item league, or the snapshot league when the item carries none
pub(crate) fn league_of(item: &IntegratedItem, snapshot: &IntegratedSnapshot) -> String {
    if item.league().is_empty() {
        snapshot.league.clone()
    } else {
        item.league().to_string()
    }
}

/// Items in descending chaos value, stable among equal values
pub(crate) fn by_value_desc(items: &[IntegratedItem]) -> Vec<&IntegratedItem> {
    let mut sorted: Vec<&IntegratedItem> = items.iter().collect();
    sorted.sort_by(|a, b| b.chaos_value().total_cmp(&a.chaos_value()));
    sorted
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::shared::types::{IntegratedItem, IntegratedSnapshot, ItemCategory, MarketItem};
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    pub fn item(name: &str, category: ItemCategory, value: f64, volume: u64, change: f64) -> MarketItem {
        MarketItem::new(name, category, value, volume, change, "Phrecia")
    }

    pub fn snapshot(categories: Vec<(ItemCategory, Vec<MarketItem>)>) -> IntegratedSnapshot {
        let categories: BTreeMap<_, _> = categories
            .into_iter()
            .map(|(category, items)| (category, items.iter().map(IntegratedItem::from_market).collect()))
            .collect();

        IntegratedSnapshot {
            league: "Phrecia".to_string(),
            captured_at: Utc.with_ymd_and_hms(2025, 2, 21, 12, 0, 0).unwrap(),
            categories,
        }
    }

    pub fn assert_ranked(list: &[super::Opportunity], cap: usize) {
        assert!(list.len() <= cap, "{} entries exceed cap {}", list.len(), cap);
        assert!(list.windows(2).all(|w| w[0].score >= w[1].score), "list is not sorted by score");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crafting(subject: &str, score: f64) -> Opportunity {
        Opportunity {
            subject: subject.to_string(),
            league: "Phrecia".to_string(),
            score,
            strategy: String::new(),
            details: OpportunityDetails::Crafting {
                description: String::new(),
                materials: vec![],
                estimated_cost: 0.0,
                estimated_return: 0.0,
            },
        }
    }

    #[test]
    fn test_rank_is_stable_and_capped() {
        let ranked = rank(
            vec![crafting("a", 1.0), crafting("b", 3.0), crafting("c", 1.0), crafting("d", 2.0)],
            3,
        );
        let subjects: Vec<&str> = ranked.iter().map(|o| o.subject.as_str()).collect();
        assert_eq!(subjects, vec!["b", "d", "a"]);
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let json = serde_json::to_value(crafting("Fossil Crafting", 90.0)).unwrap();

        assert_eq!(json["kind"], "crafting");
        assert_eq!(json["subject"], "Fossil Crafting");
        assert_eq!(json["score"], 90.0);
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_non_finite_score_rejected() {
        let err = ensure_finite("test", &crafting("broken", f64::NAN)).unwrap_err();
        assert_eq!(
            err,
            DetectorFailure::NonFiniteScore {
                detector: "test",
                subject: "broken".to_string()
            }
        );
    }
}
