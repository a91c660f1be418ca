//! Investment picks among items that report a price change

use super::{ensure_finite, league_of, rank, Detector, Opportunity, OpportunityDetails};
use crate::domain::scoring::Scorer;
use crate::shared::errors::DetectorFailure;
use crate::shared::types::{IntegratedItem, IntegratedSnapshot, ItemCategory};
use crate::shared::utils::format_chaos;
use tracing::debug;

const DETECTOR: &str = "investment_analyzer";

/// Price change beyond which an item is treated as trending, in percent
const TREND_PCT: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct InvestmentAnalyzer {
    threshold: f64,
    cap: usize,
}

impl InvestmentAnalyzer {
    pub fn new(threshold: f64, cap: usize) -> Self {
        Self { threshold, cap }
    }

    fn evaluate(
        &self,
        category: ItemCategory,
        item: &IntegratedItem,
        snapshot: &IntegratedSnapshot,
    ) -> Result<Option<Opportunity>, DetectorFailure> {
        let value = item.chaos_value();
        if value <= 0.0 {
            return Ok(None);
        }

        let change = item.price_change_pct();
        let rating = Scorer::investment_rating(value, change, item.trade_volume());
        if rating <= self.threshold {
            debug!("{} rated {} for investment, skipped", item.name(), rating);
            return Ok(None);
        }

        let opportunity = Opportunity {
            subject: item.name().to_string(),
            league: league_of(item, snapshot),
            score: rating,
            strategy: investment_strategy(item.name(), value, change),
            details: OpportunityDetails::Investment {
                category,
                chaos_value: value,
                price_change_pct: change,
            },
        };
        ensure_finite(DETECTOR, &opportunity)?;
        Ok(Some(opportunity))
    }
}

impl Detector for InvestmentAnalyzer {
    fn name(&self) -> &'static str {
        DETECTOR
    }

    fn detect(&self, snapshot: &IntegratedSnapshot) -> Result<Vec<Opportunity>, DetectorFailure> {
        let mut opportunities = Vec::new();

        for category in ItemCategory::ALL.into_iter().filter(ItemCategory::tracks_price_change) {
            for item in snapshot.items(category) {
                if let Some(opportunity) = self.evaluate(category, item, snapshot)? {
                    opportunities.push(opportunity);
                }
            }
        }

        Ok(rank(opportunities, self.cap))
    }
}

impl Default for InvestmentAnalyzer {
    fn default() -> Self {
        Self::new(60.0, 20)
    }
}

fn investment_strategy(name: &str, value: f64, change: f64) -> String {
    let price = format_chaos(value);
    if change > TREND_PCT {
        format!(
            "Short-term investment: {} is rising in value (+{}%). Buy now and sell within 1-3 days for quick profit. Current price: {} chaos.",
            name,
            format_chaos(change),
            price
        )
    } else if change < -TREND_PCT {
        format!(
            "Long-term investment: {} is currently undervalued ({}%). Buy now while price is low and hold for 1-2 weeks until price recovers. Current price: {} chaos.",
            name,
            format_chaos(change),
            price
        )
    } else {
        format!(
            "Stable investment: {} has consistent value with moderate volatility. Good for bulk buying and selling when small price fluctuations occur. Current price: {} chaos.",
            name, price
        )
    }
}
