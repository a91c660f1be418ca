//! Common types used across the application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tradable item category, mirrors the overview types of the market API
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Currency,
    Fragment,
    Scarab,
    Oil,
    DivinationCard,
    Incubator,
    Artifact,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 7] = [
        ItemCategory::Currency,
        ItemCategory::Fragment,
        ItemCategory::Scarab,
        ItemCategory::Oil,
        ItemCategory::DivinationCard,
        ItemCategory::Incubator,
        ItemCategory::Artifact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Currency => "Currency",
            ItemCategory::Fragment => "Fragment",
            ItemCategory::Scarab => "Scarab",
            ItemCategory::Oil => "Oil",
            ItemCategory::DivinationCard => "DivinationCard",
            ItemCategory::Incubator => "Incubator",
            ItemCategory::Artifact => "Artifact",
        }
    }

    /// Key used for the category in snapshot documents
    pub fn key(&self) -> &'static str {
        match self {
            ItemCategory::Currency => "currency",
            ItemCategory::Fragment => "fragment",
            ItemCategory::Scarab => "scarab",
            ItemCategory::Oil => "oil",
            ItemCategory::DivinationCard => "divination_card",
            ItemCategory::Incubator => "incubator",
            ItemCategory::Artifact => "artifact",
        }
    }

    /// Categories priced through the currency overview (pay/receive lines)
    pub fn is_currency_like(&self) -> bool {
        matches!(self, ItemCategory::Currency | ItemCategory::Fragment)
    }

    /// Categories whose collector reports a usable price-change sparkline
    pub fn tracks_price_change(&self) -> bool {
        matches!(
            self,
            ItemCategory::Currency | ItemCategory::Fragment | ItemCategory::Scarab | ItemCategory::Oil
        )
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One priced item as produced by ingestion. Missing numeric fields decode as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketItem {
    pub name: String,
    pub category: ItemCategory,
    #[serde(default)]
    pub chaos_value: f64,
    #[serde(default)]
    pub trade_volume: u64,
    #[serde(default)]
    pub price_change_pct: f64,
    #[serde(default)]
    pub volatility: f64,
    #[serde(default)]
    pub league: String,
}

impl MarketItem {
    pub fn new(
        name: impl Into<String>,
        category: ItemCategory,
        chaos_value: f64,
        trade_volume: u64,
        price_change_pct: f64,
        league: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            chaos_value,
            trade_volume,
            price_change_pct,
            volatility: price_change_pct.abs() / 100.0,
            league: league.into(),
        }
    }
}

/// All items captured for one league at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub league: String,
    pub captured_at: DateTime<Utc>,
    #[serde(default)]
    pub categories: BTreeMap<ItemCategory, Vec<MarketItem>>,
}

impl Snapshot {
    pub fn new(league: impl Into<String>, captured_at: DateTime<Utc>) -> Self {
        Self {
            league: league.into(),
            captured_at,
            categories: BTreeMap::new(),
        }
    }

    /// Empty snapshot stamped with the current time
    pub fn empty(league: impl Into<String>) -> Self {
        Self::new(league, Utc::now())
    }

    pub fn with_items(mut self, category: ItemCategory, items: Vec<MarketItem>) -> Self {
        self.categories.insert(category, items);
        self
    }

    /// Items of a category; a missing category reads as empty
    pub fn items(&self, category: ItemCategory) -> &[MarketItem] {
        self.categories.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn item_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

/// Direction of the price relative to the historical league
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTrend {
    Rising,
    Falling,
    Stable,
}

/// Market item annotated with trend data from the historical league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratedItem {
    #[serde(flatten)]
    pub item: MarketItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_change_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_trend: Option<PriceTrend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farming_locations: Option<Vec<String>>,
}

impl IntegratedItem {
    /// Pass-through copy with no trend fields
    pub fn from_market(item: &MarketItem) -> Self {
        Self {
            item: item.clone(),
            historical_value: None,
            historical_change_pct: None,
            price_trend: None,
            farming_locations: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn chaos_value(&self) -> f64 {
        self.item.chaos_value
    }

    pub fn trade_volume(&self) -> u64 {
        self.item.trade_volume
    }

    pub fn price_change_pct(&self) -> f64 {
        self.item.price_change_pct
    }

    /// Max of current and historical volatility when a counterpart exists
    pub fn volatility(&self) -> f64 {
        self.item.volatility
    }

    pub fn league(&self) -> &str {
        &self.item.league
    }
}

/// Name-keyed join of the primary and historical snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratedSnapshot {
    pub league: String,
    pub captured_at: DateTime<Utc>,
    pub categories: BTreeMap<ItemCategory, Vec<IntegratedItem>>,
}

impl IntegratedSnapshot {
    /// Primary snapshot copied without any trend annotation
    pub fn passthrough(primary: &Snapshot) -> Self {
        let categories = primary
            .categories
            .iter()
            .map(|(category, items)| (*category, items.iter().map(IntegratedItem::from_market).collect()))
            .collect();

        Self {
            league: primary.league.clone(),
            captured_at: primary.captured_at,
            categories,
        }
    }

    pub fn items(&self, category: ItemCategory) -> &[IntegratedItem] {
        self.categories.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Concatenation of several categories in the given order
    pub fn collect(&self, categories: &[ItemCategory]) -> Vec<&IntegratedItem> {
        categories.iter().flat_map(|c| self.items(*c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let item: MarketItem =
            serde_json::from_str(r#"{"name": "Divine Orb", "category": "currency"}"#).unwrap();

        assert_eq!(item.chaos_value, 0.0);
        assert_eq!(item.trade_volume, 0);
        assert_eq!(item.price_change_pct, 0.0);
        assert!(item.league.is_empty());
    }

    #[test]
    fn test_missing_category_reads_as_empty() {
        let snapshot = Snapshot::empty("Phrecia");
        assert!(snapshot.items(ItemCategory::Scarab).is_empty());
        assert_eq!(snapshot.item_count(), 0);
    }

    #[test]
    fn test_integrated_item_serializes_flat() {
        let item = MarketItem::new("Divine Orb", ItemCategory::Currency, 180.0, 900, 4.0, "Phrecia");
        let json = serde_json::to_value(IntegratedItem::from_market(&item)).unwrap();

        assert_eq!(json["name"], "Divine Orb");
        assert_eq!(json["category"], "currency");
        assert!(json.get("price_trend").is_none());
    }
}
