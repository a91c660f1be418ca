use crate::domain::knowledge::KnowledgeBase;
use crate::shared::errors::IntegrationFailure;
use crate::shared::types::{IntegratedItem, IntegratedSnapshot, ItemCategory, MarketItem, PriceTrend, Snapshot};
use crate::shared::utils::calculate_percentage_change;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

/// Change beyond which a price counts as rising or falling, in percent
const TREND_THRESHOLD_PCT: f64 = 10.0;

/// Joins the primary league snapshot with a historical one, item by item
#[derive(Debug, Clone, Copy)]
pub struct DataIntegrator {
    knowledge: &'static KnowledgeBase,
}

impl DataIntegrator {
    pub fn new(knowledge: &'static KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Integrate, falling back to the primary snapshot unmodified on failure
    pub fn integrate(&self, primary: &Snapshot, historical: &Snapshot) -> IntegratedSnapshot {
        match self.try_integrate(primary, historical) {
            Ok(integrated) => integrated,
            Err(e) => {
                warn!("Integration failed, using {} data without trends: {}", primary.league, e);
                IntegratedSnapshot::passthrough(primary)
            }
        }
    }

    /// Left-outer join on item name per category. Historical-only items are dropped.
    pub fn try_integrate(
        &self,
        primary: &Snapshot,
        historical: &Snapshot,
    ) -> Result<IntegratedSnapshot, IntegrationFailure> {
        info!(
            "Integrating {} ({} items) with {} ({} items)",
            primary.league,
            primary.item_count(),
            historical.league,
            historical.item_count()
        );

        let mut categories = BTreeMap::new();
        for (category, items) in &primary.categories {
            let integrated = self.integrate_category(*category, items, historical.items(*category))?;
            categories.insert(*category, integrated);
        }

        Ok(IntegratedSnapshot {
            league: primary.league.clone(),
            captured_at: primary.captured_at,
            categories,
        })
    }

    fn integrate_category(
        &self,
        category: ItemCategory,
        primary: &[MarketItem],
        historical: &[MarketItem],
    ) -> Result<Vec<IntegratedItem>, IntegrationFailure> {
        // Later duplicates overwrite earlier ones
        let lookup: HashMap<&str, &MarketItem> =
            historical.iter().map(|item| (item.name.as_str(), item)).collect();

        let mut integrated = Vec::with_capacity(primary.len());
        let mut matched = 0usize;

        for item in primary {
            let mut entry = IntegratedItem::from_market(item);

            if let Some(past) = lookup.get(item.name.as_str()) {
                let change = calculate_percentage_change(past.chaos_value, item.chaos_value);
                if !change.is_finite() {
                    return Err(IntegrationFailure::NonFiniteChange {
                        category,
                        name: item.name.clone(),
                    });
                }

                entry.historical_value = Some(past.chaos_value);
                entry.historical_change_pct = Some(change);
                entry.price_trend = Some(classify_trend(change));
                entry.item.volatility = item.volatility.max(past.volatility);
                matched += 1;
            }

            if category == ItemCategory::DivinationCard {
                entry.farming_locations = Some(self.knowledge.card_locations(&item.name));
            }

            integrated.push(entry);
        }

        debug!("{}: {} of {} items matched historical data", category, matched, primary.len());
        Ok(integrated)
    }
}

impl Default for DataIntegrator {
    fn default() -> Self {
        Self::new(KnowledgeBase::standard())
    }
}

fn classify_trend(change_pct: f64) -> PriceTrend {
    if change_pct > TREND_THRESHOLD_PCT {
        PriceTrend::Rising
    } else if change_pct < -TREND_THRESHOLD_PCT {
        PriceTrend::Falling
    } else {
        PriceTrend::Stable
    }
}
