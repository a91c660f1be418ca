use crate::application::analyzer::AnalysisResult;
use crate::shared::errors::AppError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Persists analysis results as pretty-printed JSON
#[derive(Debug, Clone)]
pub struct ResultWriter {
    path: PathBuf,
}

impl ResultWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the result, creating parent directories as needed
    pub async fn write(&self, result: &AnalysisResult) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(result)?;
        tokio::fs::write(&self.path, json).await?;

        info!("💾 Saved {} opportunities to {}", result.total(), self.path.display());
        Ok(())
    }

    pub async fn read(&self) -> Result<AnalysisResult, AppError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}
