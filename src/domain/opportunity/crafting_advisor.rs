//! Crafting recommendations, a projection of the static catalogue

use super::{Detector, Opportunity, OpportunityDetails};
use crate::domain::knowledge::KnowledgeBase;
use crate::shared::errors::DetectorFailure;
use crate::shared::types::IntegratedSnapshot;

const DETECTOR: &str = "crafting_advisor";

#[derive(Debug, Clone)]
pub struct CraftingAdvisor {
    knowledge: &'static KnowledgeBase,
}

impl CraftingAdvisor {
    pub fn new(knowledge: &'static KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Every catalogue entry for the league, best base score first. Never filtered or capped.
    pub fn list(&self, league: &str) -> Vec<Opportunity> {
        let mut opportunities: Vec<Opportunity> = self
            .knowledge
            .crafting_methods()
            .iter()
            .map(|method| Opportunity {
                subject: method.name.to_string(),
                league: league.to_string(),
                score: method.base_score,
                strategy: method.strategy.to_string(),
                details: OpportunityDetails::Crafting {
                    description: method.description.to_string(),
                    materials: method.materials.iter().map(|m| m.to_string()).collect(),
                    estimated_cost: method.estimated_cost,
                    estimated_return: method.estimated_return,
                },
            })
            .collect();

        opportunities.sort_by(|a, b| b.score.total_cmp(&a.score));
        opportunities
    }
}

impl Detector for CraftingAdvisor {
    fn name(&self) -> &'static str {
        DETECTOR
    }

    fn detect(&self, snapshot: &IntegratedSnapshot) -> Result<Vec<Opportunity>, DetectorFailure> {
        Ok(self.list(&snapshot.league))
    }
}

impl Default for CraftingAdvisor {
    fn default() -> Self {
        Self::new(KnowledgeBase::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::opportunity::test_support::snapshot;

    #[test]
    fn test_all_methods_sorted_by_base_score() {
        let crafting = CraftingAdvisor::default().list("Phrecia");

        assert_eq!(crafting.len(), 10);
        assert!(crafting.iter().all(|c| c.league == "Phrecia"));
        assert_eq!(crafting[0].subject, "Fractured Item Crafting");
        assert_eq!(crafting[9].subject, "Veiled Chaos Orb Crafting");
        assert!(crafting.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_catalogue_order() {
        let crafting = CraftingAdvisor::default().list("Phrecia");
        let subjects: Vec<&str> = crafting.iter().map(|c| c.subject.as_str()).collect();

        assert_eq!(
            &subjects[1..3],
            &["Harvest Reforge Crafting", "Awakener Orb Crafting"]
        );
        assert_eq!(&subjects[3..5], &["Fossil Crafting", "Meta-mod Crafting"]);
    }

    #[test]
    fn test_independent_of_market_data() {
        let advisor = CraftingAdvisor::default();
        let detected = advisor.detect(&snapshot(vec![])).unwrap();
        assert_eq!(detected, advisor.list("Phrecia"));
    }
}
