//! Flip detection - single-step price swings and 3-leg conversion cycles

use super::{ensure_finite, league_of, rank, rank_by, Detector, Opportunity, OpportunityDetails};
use crate::domain::scoring::Scorer;
use crate::shared::config::AnalysisConfig;
use crate::shared::errors::DetectorFailure;
use crate::shared::types::{IntegratedItem, IntegratedSnapshot, ItemCategory};
use crate::shared::utils::format_chaos;
use tracing::debug;

const DETECTOR: &str = "flip_detector";

/// Share of an item's value assumed capturable from one price swing
const CAPTURE_RATIO: f64 = 0.1;

/// Categories traded against each other in flips
const FLIP_CATEGORIES: [ItemCategory; 2] = [ItemCategory::Currency, ItemCategory::Fragment];

#[derive(Debug, Clone)]
pub struct FlipDetector {
    flip_cap: usize,
    multi_step_cap: usize,
    min_flip_value: f64,
    volatility_threshold: f64,
    high_volume_threshold: u64,
    cycle_start_slice: usize,
    min_leg_value: f64,
    leg_spread: f64,
    min_cycle_profit_pct: f64,
    multi_step_weight: f64,
}

impl FlipDetector {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            flip_cap: config.flip_cap,
            multi_step_cap: config.multi_step_cap,
            min_flip_value: config.min_flip_value,
            volatility_threshold: config.volatility_threshold,
            high_volume_threshold: config.high_volume_threshold,
            cycle_start_slice: config.cycle_start_slice,
            min_leg_value: config.min_leg_value,
            leg_spread: config.leg_spread,
            min_cycle_profit_pct: config.min_cycle_profit_pct,
            multi_step_weight: config.multi_step_weight,
        }
    }

    /// Buy-low/sell-high candidates among volatile, valuable items
    pub fn single_step(
        &self,
        items: &[&IntegratedItem],
        snapshot: &IntegratedSnapshot,
    ) -> Result<Vec<Opportunity>, DetectorFailure> {
        let mut opportunities = Vec::new();

        for item in items {
            let value = item.chaos_value();
            if !value.is_finite() {
                return Err(DetectorFailure::InvalidInput {
                    detector: DETECTOR,
                    reason: format!("chaos value of {} is not finite", item.name()),
                });
            }

            let volatility = item.price_change_pct().abs() / 100.0;
            if value <= self.min_flip_value || volatility <= self.volatility_threshold {
                continue;
            }

            let potential_profit = volatility * value * CAPTURE_RATIO;
            let opportunity = Opportunity {
                subject: item.name().to_string(),
                league: league_of(item, snapshot),
                score: Scorer::opportunity_score(potential_profit / value, volatility, item.trade_volume()),
                strategy: format!(
                    "Buy {} when price drops, sell when price rises. Current price: {} chaos.",
                    item.name(),
                    format_chaos(value)
                ),
                details: OpportunityDetails::SingleStepFlip {
                    chaos_value: value,
                    volatility,
                    potential_profit,
                },
            };
            ensure_finite(DETECTOR, &opportunity)?;
            opportunities.push(opportunity);
        }

        Ok(rank(opportunities, self.flip_cap))
    }

    /// Closed start -> mid -> end -> start conversion cycles over liquid items.
    ///
    /// Starts come from the first `cycle_start_slice` high-volume items in input
    /// order; mid and end range over the whole high-volume set. Every leg loses
    /// `leg_spread` of its value.
    pub fn multi_step(
        &self,
        items: &[&IntegratedItem],
        snapshot: &IntegratedSnapshot,
    ) -> Result<Vec<Opportunity>, DetectorFailure> {
        let high_volume: Vec<&IntegratedItem> = items
            .iter()
            .copied()
            .filter(|item| item.trade_volume() > self.high_volume_threshold)
            .collect();

        if high_volume.is_empty() {
            return Ok(Vec::new());
        }

        let keep = 1.0 - self.leg_spread;
        let mut opportunities = Vec::new();
        let mut evaluated = 0usize;

        for start in high_volume.iter().take(self.cycle_start_slice) {
            let start_value = start.chaos_value();
            if start_value < self.min_leg_value {
                continue;
            }

            for mid in &high_volume {
                let mid_value = mid.chaos_value();
                if mid.name() == start.name() || mid_value < self.min_leg_value {
                    continue;
                }

                for end in &high_volume {
                    let end_value = end.chaos_value();
                    if end.name() == start.name() || end.name() == mid.name() || end_value < self.min_leg_value {
                        continue;
                    }
                    evaluated += 1;

                    // Each leg converts the full holding and pays the spread once
                    let after_first = start_value * keep;
                    let after_second = (after_first / mid_value) * mid_value * keep;
                    let after_third = (after_second / end_value) * end_value * keep;
                    let final_value = (after_third / start_value) * start_value;

                    let profit = final_value - start_value;
                    let profit_percent = profit / start_value * 100.0;
                    if profit_percent <= self.min_cycle_profit_pct {
                        continue;
                    }

                    let opportunity = Opportunity {
                        subject: format!("{} -> {} -> {} -> {}", start.name(), mid.name(), end.name(), start.name()),
                        league: league_of(start, snapshot),
                        score: profit_percent * self.multi_step_weight,
                        strategy: format!(
                            "Convert {} to {}, then to {}, then back to {}. Expected profit: {:.2}%",
                            start.name(),
                            mid.name(),
                            end.name(),
                            start.name(),
                            profit_percent
                        ),
                        details: OpportunityDetails::MultiStepFlip {
                            path: [
                                start.name().to_string(),
                                mid.name().to_string(),
                                end.name().to_string(),
                                start.name().to_string(),
                            ],
                            profit_percent,
                            potential_profit: profit,
                        },
                    };
                    ensure_finite(DETECTOR, &opportunity)?;
                    opportunities.push(opportunity);
                }
            }
        }

        debug!(
            "Evaluated {} cycles over {} high-volume items, {} profitable",
            evaluated,
            high_volume.len(),
            opportunities.len()
        );

        Ok(rank_by(opportunities, self.multi_step_cap, |o| o.profit_percent().unwrap_or(0.0)))
    }
}

impl Detector for FlipDetector {
    fn name(&self) -> &'static str {
        DETECTOR
    }

    fn detect(&self, snapshot: &IntegratedSnapshot) -> Result<Vec<Opportunity>, DetectorFailure> {
        let items = snapshot.collect(&FLIP_CATEGORIES);

        let mut flips = self.single_step(&items, snapshot)?;
        flips.extend(self.multi_step(&items, snapshot)?);

        Ok(rank(flips, self.flip_cap))
    }
}

impl Default for FlipDetector {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::opportunity::test_support::{assert_ranked, item, snapshot};
    use crate::domain::opportunity::OpportunityKind;
    use crate::shared::types::MarketItem;

    /// Config under which every cycle gains 1% per leg
    fn rebating_config() -> AnalysisConfig {
        AnalysisConfig {
            leg_spread: -0.01,
            ..AnalysisConfig::default()
        }
    }

    fn liquid_currencies(count: usize) -> Vec<MarketItem> {
        (0..count)
            .map(|i| item(&format!("Currency {}", i), ItemCategory::Currency, 10.0 + i as f64, 100, 0.0))
            .collect()
    }

    #[test]
    fn test_single_step_thresholds() {
        let snap = snapshot(vec![(
            ItemCategory::Currency,
            vec![
                item("Divine Orb", ItemCategory::Currency, 120.0, 250, 15.0),
                item("Y", ItemCategory::Currency, 3.0, 0, 1.0),
                item("Cheap Swing", ItemCategory::Currency, 4.0, 500, 40.0),
                item("Flat Orb", ItemCategory::Currency, 60.0, 500, 5.0),
            ],
        )]);
        let items = snap.collect(&FLIP_CATEGORIES);

        let flips = FlipDetector::default().single_step(&items, &snap).unwrap();
        assert_eq!(flips.len(), 1);

        let divine = &flips[0];
        assert_eq!(divine.subject, "Divine Orb");
        assert_eq!(divine.kind(), OpportunityKind::SingleStepFlip);
        // profit ratio 0.015, volatility 0.15, volume 250
        assert_eq!(divine.score, 35.9);
        assert_eq!(divine.strategy, "Buy Divine Orb when price drops, sell when price rises. Current price: 120 chaos.");
    }

    #[test]
    fn test_single_step_rejects_non_finite_values() {
        let snap = snapshot(vec![(
            ItemCategory::Currency,
            vec![item("Broken", ItemCategory::Currency, f64::NAN, 10, 20.0)],
        )]);
        let items = snap.collect(&FLIP_CATEGORIES);

        let err = FlipDetector::default().single_step(&items, &snap).unwrap_err();
        assert!(matches!(err, DetectorFailure::InvalidInput { .. }));
    }

    #[test]
    fn test_multi_step_without_liquid_items_is_empty() {
        let snap = snapshot(vec![(
            ItemCategory::Currency,
            vec![
                item("A", ItemCategory::Currency, 10.0, 50, 0.0),
                item("B", ItemCategory::Currency, 20.0, 3, 0.0),
            ],
        )]);
        let items = snap.collect(&FLIP_CATEGORIES);

        assert!(FlipDetector::default().multi_step(&items, &snap).unwrap().is_empty());
    }

    #[test]
    fn test_multi_step_uniform_spread_never_clears_threshold() {
        let snap = snapshot(vec![(ItemCategory::Currency, liquid_currencies(6))]);
        let items = snap.collect(&FLIP_CATEGORIES);

        assert!(FlipDetector::default().multi_step(&items, &snap).unwrap().is_empty());
    }

    #[test]
    fn test_multi_step_paths_are_distinct_and_capped() {
        let snap = snapshot(vec![(ItemCategory::Currency, liquid_currencies(6))]);
        let items = snap.collect(&FLIP_CATEGORIES);

        let cycles = FlipDetector::new(&rebating_config()).multi_step(&items, &snap).unwrap();
        assert_eq!(cycles.len(), 10);

        for cycle in &cycles {
            let OpportunityDetails::MultiStepFlip { path, profit_percent, .. } = &cycle.details else {
                panic!("unexpected kind {:?}", cycle.kind());
            };
            assert_ne!(path[0], path[1]);
            assert_ne!(path[1], path[2]);
            assert_ne!(path[0], path[2]);
            assert_eq!(path[0], path[3]);
            // 1.01^3 - 1
            assert!((profit_percent - 3.0301).abs() < 1e-9);
            assert!((cycle.score - profit_percent * 2.0).abs() < 1e-9);
        }
        assert!(cycles.windows(2).all(|w| w[0].profit_percent() >= w[1].profit_percent()));
    }

    #[test]
    fn test_multi_step_skips_low_value_legs_and_limits_starts() {
        let mut currencies = vec![item("Penny", ItemCategory::Currency, 1.0, 900, 0.0)];
        currencies.extend(liquid_currencies(12));
        let snap = snapshot(vec![(ItemCategory::Currency, currencies)]);
        let items = snap.collect(&FLIP_CATEGORIES);

        let config = AnalysisConfig {
            multi_step_cap: usize::MAX,
            ..rebating_config()
        };
        let cycles = FlipDetector::new(&config).multi_step(&items, &snap).unwrap();

        // Starts are the first 10 high-volume items, "Penny" among them but too cheap
        let starts: std::collections::BTreeSet<&str> = cycles
            .iter()
            .filter_map(|c| match &c.details {
                OpportunityDetails::MultiStepFlip { path, .. } => Some(path[0].as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(starts.len(), 9);
        assert!(!starts.contains("Penny"));
        assert!(!starts.contains("Currency 10"));
        assert!(cycles.iter().all(|c| !c.subject.contains("Penny")));
        // 9 starts x 11 mids x 10 ends
        assert_eq!(cycles.len(), 9 * 11 * 10);
    }

    #[test]
    fn test_detect_merges_and_caps() {
        let mut currencies = liquid_currencies(6);
        currencies.push(item("Divine Orb", ItemCategory::Currency, 120.0, 250, 15.0));
        let fragments = (0..25)
            .map(|i| item(&format!("Fragment {}", i), ItemCategory::Fragment, 20.0, 10, 6.0 + i as f64))
            .collect();
        let snap = snapshot(vec![(ItemCategory::Currency, currencies), (ItemCategory::Fragment, fragments)]);

        let flips = FlipDetector::new(&rebating_config()).detect(&snap).unwrap();
        assert_ranked(&flips, 20);
        assert_eq!(flips.len(), 20);
        assert!(flips.iter().any(|f| f.kind() == OpportunityKind::SingleStepFlip));
    }
}
