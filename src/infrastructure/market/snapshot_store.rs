//! JSON snapshot files on disk, one directory per league
//!
//! Decoding is lenient: malformed pieces are logged and skipped or
//! defaulted, never fatal. Documents written by older collectors (plural
//! category keys, `receive_change`/`price_change` fields) load as well.

use super::traits::SnapshotSource;
use crate::shared::errors::{CollectorError, DataFormatError};
use crate::shared::types::{ItemCategory, MarketItem, Snapshot};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const SNAPSHOT_FILE: &str = "market_data.json";

/// Price change field names, most specific first
const CHANGE_FIELDS: [&str; 3] = ["price_change_pct", "receive_change", "price_change"];

#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    root: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/<league, lowercased>/market_data.json`
    pub fn snapshot_path(&self, league: &str) -> PathBuf {
        self.root.join(league.to_lowercase()).join(SNAPSHOT_FILE)
    }

    pub async fn save(&self, snapshot: &Snapshot) -> Result<PathBuf, CollectorError> {
        let path = self.snapshot_path(&snapshot.league);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        tokio::fs::write(&path, json).await?;

        info!("💾 Saved {} items for {} to {}", snapshot.item_count(), snapshot.league, path.display());
        Ok(path)
    }

    async fn read(&self, path: &Path, league: &str) -> Result<String, CollectorError> {
        tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => CollectorError::NotFound(league.to_string()),
            _ => CollectorError::Io(e),
        })
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    fn name(&self) -> &'static str {
        "snapshot files"
    }

    async fn load(&self, league: &str) -> Result<Snapshot, CollectorError> {
        let path = self.snapshot_path(league);
        let content = self.read(&path, league).await?;
        let document: Value = serde_json::from_str(&content)?;

        let snapshot = decode_snapshot(league, &document);
        debug!("Loaded {} items for {} from {}", snapshot.item_count(), league, path.display());
        Ok(snapshot)
    }
}

/// Decode a snapshot document, recovering from every format problem
pub fn decode_snapshot(league: &str, document: &Value) -> Snapshot {
    let Some(root) = document.as_object() else {
        warn!("{}", DataFormatError::MalformedSnapshot(format!("{} document is not an object", league)));
        return Snapshot::empty(league);
    };

    let league = root
        .get("league")
        .and_then(Value::as_str)
        .filter(|l| !l.is_empty())
        .unwrap_or(league)
        .to_string();

    let captured_at = match root.get("captured_at").or_else(|| root.get("timestamp")) {
        Some(value) => parse_timestamp(value).unwrap_or_else(|| {
            warn!("{}", DataFormatError::MalformedSnapshot(format!("bad timestamp {}", value)));
            Utc::now()
        }),
        None => Utc::now(),
    };

    // Saved snapshots nest categories; older documents keep them at the top level
    let categories = root.get("categories").and_then(Value::as_object).unwrap_or(root);

    let mut snapshot = Snapshot::new(league, captured_at);
    for category in ItemCategory::ALL {
        let Some(raw) = document_keys(category).iter().find_map(|key| categories.get(*key)) else {
            continue;
        };

        let Some(raw_items) = raw.as_array() else {
            warn!("{}", DataFormatError::MalformedCategory { category });
            continue;
        };

        let items: Vec<MarketItem> = raw_items
            .iter()
            .filter_map(|raw_item| match decode_item(category, &snapshot.league, raw_item) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!("Skipping item: {}", e);
                    None
                }
            })
            .collect();
        snapshot.categories.insert(category, items);
    }

    snapshot
}

fn decode_item(category: ItemCategory, league: &str, raw: &Value) -> Result<MarketItem, DataFormatError> {
    let fields: &Map<String, Value> = raw.as_object().ok_or_else(|| DataFormatError::MalformedItem {
        category,
        reason: format!("expected an object, got {}", raw),
    })?;

    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.trim().is_empty())
        .ok_or(DataFormatError::MissingName { category })?;

    let number = |key: &str| fields.get(key).and_then(Value::as_f64);

    let chaos_value = number("chaos_value").unwrap_or(0.0).max(0.0);
    let trade_volume = number("trade_volume").map(|v| v.max(0.0) as u64).unwrap_or(0);
    let price_change_pct = CHANGE_FIELDS.iter().find_map(|key| number(key)).unwrap_or(0.0);
    let volatility = number("volatility").unwrap_or(price_change_pct.abs() / 100.0);
    let league = fields
        .get("league")
        .and_then(Value::as_str)
        .filter(|l| !l.is_empty())
        .unwrap_or(league);

    Ok(MarketItem {
        name: name.to_string(),
        category,
        chaos_value,
        trade_volume,
        price_change_pct,
        volatility,
        league: league.to_string(),
    })
}

fn document_keys(category: ItemCategory) -> [&'static str; 2] {
    let legacy = match category {
        ItemCategory::Currency => "currencies",
        ItemCategory::Fragment => "fragments",
        ItemCategory::Scarab => "scarabs",
        ItemCategory::Oil => "oils",
        ItemCategory::DivinationCard => "divination_cards",
        ItemCategory::Incubator => "incubators",
        ItemCategory::Artifact => "artifacts",
    };
    [category.key(), legacy]
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?;
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Utc));
    }
    // Naive ISO timestamps are taken as UTC
    chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
