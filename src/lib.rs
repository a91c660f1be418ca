//! Exile Economy - Path of Exile market opportunity analyzer
//! Built with Domain-Driven Design principles

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types for convenience
pub use application::{AnalysisResult, OpportunityAnalyzer, OpportunityPipeline, PipelineState};
pub use domain::knowledge::KnowledgeBase;
pub use domain::market::DataIntegrator;
pub use domain::opportunity::{Opportunity, OpportunityDetails, OpportunityKind};
pub use domain::scoring::Scorer;
