use exile_economy::infrastructure::{FileSnapshotSource, ResultWriter};
use exile_economy::shared::config::AppConfig;
use exile_economy::shared::types::{ItemCategory, MarketItem, Snapshot};
use exile_economy::{OpportunityKind, OpportunityPipeline};
use std::sync::Arc;

fn item(name: &str, category: ItemCategory, value: f64, volume: u64, change: f64, league: &str) -> MarketItem {
    MarketItem::new(name, category, value, volume, change, league)
}

fn config_for(dir: &std::path::Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.output.dir = dir.join("output");
    config.output.snapshot_dir = dir.join("data");
    config
}

async fn seed(store: &FileSnapshotSource) {
    let primary = Snapshot::empty("Phrecia")
        .with_items(
            ItemCategory::Currency,
            vec![
                item("X", ItemCategory::Currency, 100.0, 250, 15.0, "Phrecia"),
                item("Y", ItemCategory::Currency, 3.0, 0, 1.0, "Phrecia"),
                item("Divine Orb", ItemCategory::Currency, 180.0, 900, -20.0, "Phrecia"),
            ],
        )
        .with_items(
            ItemCategory::DivinationCard,
            vec![item("The Doctor", ItemCategory::DivinationCard, 80.0, 12, 0.0, "Phrecia")],
        );
    let historical = Snapshot::empty("Settlers").with_items(
        ItemCategory::Currency,
        vec![item("Divine Orb", ItemCategory::Currency, 240.0, 1200, 2.0, "Settlers")],
    );

    store.save(&primary).await.unwrap();
    store.save(&historical).await.unwrap();
}

#[tokio::test]
async fn analyze_from_snapshot_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let store = FileSnapshotSource::new(&config.output.snapshot_dir);
    seed(&store).await;

    let pipeline = OpportunityPipeline::new(&config, Arc::new(store));
    let result = pipeline.run_once().await.unwrap();

    let x = result.investment.iter().find(|o| o.subject == "X").unwrap();
    assert_eq!(x.score, 67.5);
    assert!(x.strategy.contains("rising"));
    assert!(result.investment.iter().all(|o| o.subject != "Y"));
    assert!(result.flipping.iter().all(|o| o.subject != "Y"));

    let doctor = result.farming.iter().find(|o| o.subject == "The Doctor").unwrap();
    assert_eq!(doctor.kind(), OpportunityKind::Farming);
    assert!((doctor.score - 48.0).abs() < 1e-9);

    assert_eq!(result.crafting.len(), 10);

    let written = ResultWriter::new(config.output.result_path()).read().await.unwrap();
    assert_eq!(written.timestamp, result.timestamp);
    let subjects = |list: &[exile_economy::Opportunity]| list.iter().map(|o| o.subject.clone()).collect::<Vec<_>>();
    assert_eq!(subjects(&written.flipping), subjects(&result.flipping));
    assert_eq!(subjects(&written.investment), subjects(&result.investment));
}

#[tokio::test]
async fn result_document_shape() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let store = FileSnapshotSource::new(&config.output.snapshot_dir);
    seed(&store).await;

    OpportunityPipeline::new(&config, Arc::new(store)).run_once().await.unwrap();

    let raw = std::fs::read_to_string(config.output.result_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    for key in ["flipping", "farming", "crafting", "investment"] {
        assert!(json[key].is_array(), "missing {}", key);
    }
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());

    let first_flip = &json["flipping"][0];
    assert_eq!(first_flip["kind"], "single_step_flip");
    assert!(first_flip["score"].is_number());
    assert!(first_flip["strategy"].is_string());
}

#[tokio::test]
async fn missing_snapshots_still_produce_a_result() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let pipeline = OpportunityPipeline::new(&config, Arc::new(FileSnapshotSource::new(&config.output.snapshot_dir)));

    let result = pipeline.run_once().await.unwrap();

    assert!(result.flipping.is_empty());
    assert!(result.farming.is_empty());
    assert!(result.investment.is_empty());
    assert_eq!(result.crafting.len(), 10);
    assert_eq!(pipeline.state().status().status, "ready");
}
