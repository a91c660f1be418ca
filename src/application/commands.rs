//! CLI commands and handlers
use crate::application::analyzer::AnalysisResult;
use crate::application::pipeline::OpportunityPipeline;
use crate::domain::knowledge::KnowledgeBase;
use crate::domain::opportunity::{CraftingAdvisor, Opportunity};
use crate::infrastructure::{FileSnapshotSource, PoeNinjaCollector, SnapshotSource};
use crate::shared::config::AppConfig;
use crate::shared::errors::AppError;
use crate::shared::utils::format_chaos;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "exile-economy")]
#[command(version, about = "Path of Exile economy analyzer: flipping, farming, crafting and investment opportunities")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that take precedence over the config file
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// Primary (current) league
    #[arg(long, global = true)]
    pub primary: Option<String>,

    /// Historical (reference) league
    #[arg(long, global = true)]
    pub historical: Option<String>,

    /// Directory holding per-league snapshot files
    #[arg(long, global = true)]
    pub snapshot_dir: Option<PathBuf>,

    /// Directory the result file is written to
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,
}

impl Overrides {
    pub fn apply(self, config: &mut AppConfig) {
        if let Some(primary) = self.primary {
            config.leagues.primary = primary;
        }
        if let Some(historical) = self.historical {
            config.leagues.historical = historical;
        }
        if let Some(dir) = self.snapshot_dir {
            config.output.snapshot_dir = dir;
        }
        if let Some(dir) = self.output_dir {
            config.output.dir = dir;
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze saved snapshots and write the result file
    Analyze {
        /// Entries shown per category
        #[arg(short, long, default_value_t = 5)]
        top: usize,
    },

    /// Fetch current market data from poe.ninja and save it as snapshots
    Collect,

    /// Collect and analyze on a fixed schedule until interrupted
    Watch {
        /// Seconds between updates
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Print the crafting method catalogue
    Crafting,
}

pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute the selected command
    pub async fn execute(command: Commands, config: AppConfig) -> Result<(), AppError> {
        config.validate()?;

        match command {
            Commands::Analyze { top } => Self::execute_analyze_command(top, config).await,
            Commands::Collect => Self::execute_collect_command(config).await,
            Commands::Watch { interval } => Self::execute_watch_command(interval, config).await,
            Commands::Crafting => Self::execute_crafting_command(config),
        }
    }

    async fn execute_analyze_command(top: usize, config: AppConfig) -> Result<(), AppError> {
        let source = Arc::new(FileSnapshotSource::new(&config.output.snapshot_dir));
        let pipeline = OpportunityPipeline::new(&config, source);

        match pipeline.run_once().await {
            Some(result) => {
                print_summary(&result, top);
                info!("Result written to {}", config.output.result_path().display());
                Ok(())
            }
            None => Err(AppError::Unknown("analysis already running".to_string())),
        }
    }

    async fn execute_collect_command(config: AppConfig) -> Result<(), AppError> {
        let collector = PoeNinjaCollector::new(&config.collector)?;
        let store = FileSnapshotSource::new(&config.output.snapshot_dir);

        for league in [&config.leagues.primary, &config.leagues.historical] {
            let snapshot = collector.load(league).await?;
            store.save(&snapshot).await?;
        }
        Ok(())
    }

    async fn execute_watch_command(interval: Option<u64>, mut config: AppConfig) -> Result<(), AppError> {
        if let Some(interval) = interval {
            config.schedule.update_interval_secs = interval;
            config.validate()?;
        }

        let collector = Arc::new(PoeNinjaCollector::new(&config.collector)?);
        let pipeline = Arc::new(
            OpportunityPipeline::new(&config, collector)
                .with_archive(FileSnapshotSource::new(&config.output.snapshot_dir)),
        );

        pipeline
            .watch(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for ctrl-c: {}", e);
                }
            })
            .await;
        Ok(())
    }

    fn execute_crafting_command(config: AppConfig) -> Result<(), AppError> {
        let crafting = CraftingAdvisor::new(KnowledgeBase::standard()).list(&config.leagues.primary);
        println!("🔨 Crafting methods for {}:", config.leagues.primary);
        for (i, method) in crafting.iter().enumerate() {
            println!("{:>2}. {}", i + 1, describe(method));
            println!("    {}", method.strategy);
        }
        Ok(())
    }
}

fn print_summary(result: &AnalysisResult, top: usize) {
    let sections = [
        ("💱 Flipping", &result.flipping),
        ("🌾 Farming", &result.farming),
        ("🔨 Crafting", &result.crafting),
        ("📈 Investment", &result.investment),
    ];

    println!("Opportunities at {}", result.timestamp);
    for (title, list) in sections {
        println!("\n{} ({} found)", title, list.len());
        for (i, opportunity) in list.iter().take(top).enumerate() {
            println!("{:>2}. {}", i + 1, describe(opportunity));
        }
    }
}

fn describe(opportunity: &Opportunity) -> String {
    format!(
        "{} [score {}] {}",
        opportunity.subject,
        format_chaos(opportunity.score),
        opportunity.league
    )
}
