use crate::shared::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// League pair compared on every run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    pub primary: String,
    pub historical: String,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            primary: "Phrecia".to_string(),
            historical: "Settlers".to_string(),
        }
    }
}

/// Market API client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://poe.ninja/api/data".to_string(),
            timeout_secs: 30,
            user_agent: concat!("exile-economy/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub update_interval_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { update_interval_secs: 15 * 60 }
    }
}

/// Where snapshots are read from and results are written to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub result_file: String,
    pub snapshot_dir: PathBuf,
}

impl OutputConfig {
    pub fn result_path(&self) -> PathBuf {
        self.dir.join(&self.result_file)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            result_file: "profit_opportunities.json".to_string(),
            snapshot_dir: PathBuf::from("data"),
        }
    }
}

/// Detector thresholds and list caps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub flip_cap: usize,
    pub multi_step_cap: usize,
    pub min_flip_value: f64,
    pub volatility_threshold: f64,
    pub high_volume_threshold: u64,
    pub cycle_start_slice: usize,
    pub min_leg_value: f64,
    pub leg_spread: f64,
    pub min_cycle_profit_pct: f64,
    pub multi_step_weight: f64,
    pub farming_cap: usize,
    pub investment_threshold: f64,
    pub investment_cap: usize,
    /// Run the detectors on the rayon pool
    pub parallel_detectors: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            flip_cap: 20,
            multi_step_cap: 10,
            min_flip_value: 5.0,
            volatility_threshold: 0.05,
            high_volume_threshold: 50,
            cycle_start_slice: 10,
            min_leg_value: 5.0,
            leg_spread: 0.01,
            min_cycle_profit_pct: 2.0,
            multi_step_weight: 2.0,
            farming_cap: 20,
            investment_threshold: 60.0,
            investment_cap: 20,
            parallel_detectors: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Full application configuration, every section optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub leagues: LeagueConfig,
    pub collector: CollectorConfig,
    pub schedule: ScheduleConfig,
    pub output: OutputConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.leagues.primary.trim().is_empty() {
            return Err(AppError::ConfigError("leagues.primary must not be empty".to_string()));
        }
        if self.schedule.update_interval_secs == 0 {
            return Err(AppError::ConfigError(
                "schedule.update_interval_secs must be positive".to_string(),
            ));
        }
        if self.collector.timeout_secs == 0 {
            return Err(AppError::ConfigError("collector.timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<AppConfig, AppError> {
        let config_content = fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::ConfigError(format!("Failed to read config file: {}", e)))?;

        Self::parse(&config_content)
    }

    pub fn parse(content: &str) -> Result<AppConfig, AppError> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the file when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig, AppError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(AppConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.schedule.update_interval_secs, 900);
        assert_eq!(config.analysis.flip_cap, 20);
    }

    #[test]
    fn test_partial_sections_merge_with_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [leagues]
            primary = "Mercenaries"

            [analysis]
            investment_threshold = 70.0
            "#,
        )
        .unwrap();

        assert_eq!(config.leagues.primary, "Mercenaries");
        assert_eq!(config.leagues.historical, "Settlers");
        assert_eq!(config.analysis.investment_threshold, 70.0);
        assert_eq!(config.analysis.multi_step_cap, 10);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = ConfigLoader::parse("[schedule]\nupdate_interval_secs = 0").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));

        let err = ConfigLoader::parse("[leagues\nprimary =").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_result_path() {
        let output = OutputConfig::default();
        assert_eq!(output.result_path(), PathBuf::from("output/profit_opportunities.json"));
    }
}
