//! Application layer - orchestration, scheduling and CLI

pub mod analyzer;
pub mod commands;
pub mod pipeline;

pub use analyzer::{AnalysisResult, OpportunityAnalyzer};
pub use commands::{Cli, CommandExecutor, Commands};
pub use pipeline::{OpportunityPipeline, PipelineState, PipelineStatus};
