//! Farming advice for the most valuable drops of each farmable category

use super::{by_value_desc, ensure_finite, league_of, rank, Detector, Opportunity, OpportunityDetails};
use crate::domain::knowledge::{FarmingStrategy, KnowledgeBase};
use crate::shared::errors::DetectorFailure;
use crate::shared::types::{IntegratedSnapshot, ItemCategory};
use tracing::debug;

const DETECTOR: &str = "farming_advisor";

/// Per-category selection: how many top items, value floor, score weight
#[derive(Debug, Clone, Copy)]
struct FarmingRule {
    category: ItemCategory,
    top_n: usize,
    min_value: f64,
    weight: f64,
}

const RULES: [FarmingRule; 4] = [
    FarmingRule { category: ItemCategory::Scarab, top_n: 10, min_value: 10.0, weight: 0.8 },
    FarmingRule { category: ItemCategory::Fragment, top_n: 10, min_value: 15.0, weight: 0.9 },
    FarmingRule { category: ItemCategory::Oil, top_n: 5, min_value: 10.0, weight: 0.7 },
    FarmingRule { category: ItemCategory::DivinationCard, top_n: 10, min_value: 50.0, weight: 0.6 },
];

#[derive(Debug, Clone)]
pub struct FarmingAdvisor {
    knowledge: &'static KnowledgeBase,
    cap: usize,
}

impl FarmingAdvisor {
    pub fn new(knowledge: &'static KnowledgeBase, cap: usize) -> Self {
        Self { knowledge, cap }
    }

    fn strategy_for(&self, category: ItemCategory, name: &str) -> &FarmingStrategy {
        match category {
            ItemCategory::Scarab => self.knowledge.scarab_strategy(name),
            ItemCategory::Fragment => self.knowledge.fragment_strategy(name),
            ItemCategory::Oil => self.knowledge.oil_strategy(),
            _ => self.knowledge.card_strategy(name),
        }
    }

    fn advise(&self, rule: &FarmingRule, snapshot: &IntegratedSnapshot) -> Result<Vec<Opportunity>, DetectorFailure> {
        let mut opportunities = Vec::new();

        for item in by_value_desc(snapshot.items(rule.category)).into_iter().take(rule.top_n) {
            let value = item.chaos_value();
            if value < rule.min_value {
                continue;
            }

            let strategy = self.strategy_for(rule.category, item.name());
            let opportunity = Opportunity {
                subject: item.name().to_string(),
                league: league_of(item, snapshot),
                score: value * rule.weight,
                strategy: strategy.strategy.to_string(),
                details: OpportunityDetails::Farming {
                    category: rule.category,
                    chaos_value: value,
                    method: strategy.method.to_string(),
                    locations: strategy.locations_owned(),
                },
            };
            ensure_finite(DETECTOR, &opportunity)?;
            opportunities.push(opportunity);
        }

        debug!("{} farming targets for {}", opportunities.len(), rule.category);
        Ok(opportunities)
    }
}

impl Detector for FarmingAdvisor {
    fn name(&self) -> &'static str {
        DETECTOR
    }

    fn detect(&self, snapshot: &IntegratedSnapshot) -> Result<Vec<Opportunity>, DetectorFailure> {
        let mut opportunities = Vec::new();
        for rule in &RULES {
            opportunities.extend(self.advise(rule, snapshot)?);
        }
        Ok(rank(opportunities, self.cap))
    }
}

impl Default for FarmingAdvisor {
    fn default() -> Self {
        Self::new(KnowledgeBase::standard(), 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::opportunity::test_support::{assert_ranked, item, snapshot};

    fn farming_fields(opportunity: &Opportunity) -> (&str, &[String]) {
        match &opportunity.details {
            OpportunityDetails::Farming { method, locations, .. } => (method.as_str(), locations.as_slice()),
            other => panic!("unexpected details {:?}", other),
        }
    }

    #[test]
    fn test_known_card_uses_exact_entry() {
        let snap = snapshot(vec![(
            ItemCategory::DivinationCard,
            vec![item("The Doctor", ItemCategory::DivinationCard, 80.0, 12, 0.0)],
        )]);

        let farming = FarmingAdvisor::default().detect(&snap).unwrap();
        assert_eq!(farming.len(), 1);

        let doctor = &farming[0];
        let expected = KnowledgeBase::standard().card_strategy("The Doctor");
        assert!((doctor.score - 48.0).abs() < 1e-9);
        assert_eq!(doctor.strategy, expected.strategy);
        assert_ne!(doctor.strategy, KnowledgeBase::standard().card_default.strategy);
        assert_eq!(farming_fields(doctor).1, ["Burial Chambers", "Spider Forest"]);
    }

    #[test]
    fn test_value_floors_and_top_n() {
        let oils = (0..8)
            .map(|i| item(&format!("Oil {}", i), ItemCategory::Oil, 5.0 + 2.0 * i as f64, 10, 0.0))
            .collect();
        let snap = snapshot(vec![
            (ItemCategory::Oil, oils),
            (
                ItemCategory::DivinationCard,
                vec![item("The Nurse", ItemCategory::DivinationCard, 49.9, 10, 0.0)],
            ),
            (
                ItemCategory::Fragment,
                vec![item("Sacrifice at Dawn", ItemCategory::Fragment, 14.0, 10, 0.0)],
            ),
        ]);

        let farming = FarmingAdvisor::default().detect(&snap).unwrap();
        // Top five oils are 19, 17, 15, 13, 11; all above the floor
        let subjects: Vec<&str> = farming.iter().map(|o| o.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Oil 7", "Oil 6", "Oil 5", "Oil 4", "Oil 3"]);
        assert!(farming.iter().all(|o| farming_fields(o).0 == "Blight Farming"));
    }

    #[test]
    fn test_lookup_fallbacks() {
        let snap = snapshot(vec![
            (ItemCategory::Scarab, vec![item("Gilded Breach Scarab", ItemCategory::Scarab, 30.0, 10, 0.0)]),
            (ItemCategory::Fragment, vec![item("Mortal Hope", ItemCategory::Fragment, 40.0, 10, 0.0)]),
            (ItemCategory::DivinationCard, vec![item("Brother's Gift", ItemCategory::DivinationCard, 60.0, 10, 0.0)]),
        ]);

        let farming = FarmingAdvisor::default().detect(&snap).unwrap();
        let method_of = |name: &str| {
            farming
                .iter()
                .find(|o| o.subject == name)
                .map(|o| farming_fields(o).0.to_string())
                .unwrap()
        };

        assert_eq!(method_of("Gilded Breach Scarab"), "General Scarab Farming");
        assert_eq!(method_of("Mortal Hope"), "Atziri Farming");
        assert_eq!(method_of("Brother's Gift"), "Targeted Map Farming");
    }

    #[test]
    fn test_merged_list_is_ranked_and_capped() {
        let scarabs = (0..15)
            .map(|i| item(&format!("Scarab {}", i), ItemCategory::Scarab, 10.0 + i as f64, 10, 0.0))
            .collect();
        let fragments = (0..15)
            .map(|i| item(&format!("Fragment {}", i), ItemCategory::Fragment, 15.0 + i as f64, 10, 0.0))
            .collect();
        let snap = snapshot(vec![(ItemCategory::Scarab, scarabs), (ItemCategory::Fragment, fragments)]);

        let farming = FarmingAdvisor::default().detect(&snap).unwrap();
        assert_eq!(farming.len(), 20);
        assert_ranked(&farming, 20);
        // Highest fragment: 29 * 0.9
        assert!((farming[0].score - 26.1).abs() < 1e-9);
    }

    #[test]
    fn test_empty_snapshot() {
        assert!(FarmingAdvisor::default().detect(&snapshot(vec![])).unwrap().is_empty());
    }
}
