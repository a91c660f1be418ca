//! poe.ninja overview API client

use super::traits::SnapshotSource;
use crate::shared::config::CollectorConfig;
use crate::shared::errors::CollectorError;
use crate::shared::types::{ItemCategory, MarketItem, Snapshot};
use async_trait::async_trait;
use chrono::Utc;
use futures::future::join_all;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct Overview<T> {
    #[serde(default = "Vec::new")]
    lines: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SparkLine {
    total_change: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct TradeSide {
    #[serde(default)]
    count: u64,
}

/// One line of a `currencyoverview` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyLine {
    currency_type_name: Option<String>,
    #[serde(default)]
    chaos_equivalent: f64,
    #[serde(default)]
    receive: Option<TradeSide>,
    #[serde(default)]
    receive_spark_line: Option<SparkLine>,
}

/// One line of an `itemoverview` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemLine {
    name: Option<String>,
    #[serde(default)]
    chaos_value: f64,
    #[serde(default)]
    count: u64,
    #[serde(default)]
    sparkline: Option<SparkLine>,
}

impl CurrencyLine {
    fn into_item(self, category: ItemCategory, league: &str) -> Option<MarketItem> {
        let change = self.receive_spark_line.and_then(|s| s.total_change).unwrap_or(0.0);
        let volume = self.receive.map(|r| r.count).unwrap_or(0);
        Some(MarketItem::new(self.currency_type_name?, category, self.chaos_equivalent, volume, change, league))
    }
}

impl ItemLine {
    fn into_item(self, category: ItemCategory, league: &str) -> Option<MarketItem> {
        let change = self.sparkline.and_then(|s| s.total_change).unwrap_or(0.0);
        Some(MarketItem::new(self.name?, category, self.chaos_value, self.count, change, league))
    }
}

/// Fetches every category of a league from poe.ninja
pub struct PoeNinjaCollector {
    client: reqwest::Client,
    base_url: String,
}

impl PoeNinjaCollector {
    pub fn new(config: &CollectorConfig) -> Result<Self, CollectorError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn overview_url(&self, category: ItemCategory) -> String {
        let endpoint = if category.is_currency_like() { "currencyoverview" } else { "itemoverview" };
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Fetch one category's overview
    pub async fn fetch_category(&self, league: &str, category: ItemCategory) -> Result<Vec<MarketItem>, CollectorError> {
        let url = self.overview_url(category);
        debug!("Fetching {} for {} from {}", category, league, url);

        let response = self
            .client
            .get(&url)
            .query(&[("league", league), ("type", category.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let items: Vec<MarketItem> = if category.is_currency_like() {
            let overview: Overview<CurrencyLine> = response.json().await?;
            overview.lines.into_iter().filter_map(|l| l.into_item(category, league)).collect()
        } else {
            let overview: Overview<ItemLine> = response.json().await?;
            overview.lines.into_iter().filter_map(|l| l.into_item(category, league)).collect()
        };

        debug!("Fetched {} {} items for {}", items.len(), category, league);
        Ok(items)
    }
}

#[async_trait]
impl SnapshotSource for PoeNinjaCollector {
    fn name(&self) -> &'static str {
        "poe.ninja"
    }

    /// A category that fails to fetch is recorded as empty
    async fn load(&self, league: &str) -> Result<Snapshot, CollectorError> {
        info!("📡 Collecting market data for {}", league);

        let fetches = ItemCategory::ALL.map(|category| async move { (category, self.fetch_category(league, category).await) });

        let mut snapshot = Snapshot::new(league, Utc::now());
        for (category, fetched) in join_all(fetches).await {
            let items = fetched.unwrap_or_else(|e| {
                warn!("Failed to fetch {} for {}: {}", category, league, e);
                Vec::new()
            });
            snapshot.categories.insert(category, items);
        }

        info!("Collected {} items for {}", snapshot.item_count(), league);
        Ok(snapshot)
    }
}
