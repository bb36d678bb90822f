use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use stepper_core::error::{Result, StepperError};

use crate::config::CountConfig;

/// Supplies the raw activity count (e.g. recently active users).
#[async_trait]
pub trait CountSource: Send + Sync + 'static {
    async fn raw_count(&self) -> Result<u64>;
}

/// Fixed count.
pub struct StaticCount(pub u64);

#[async_trait]
impl CountSource for StaticCount {
    async fn raw_count(&self) -> Result<u64> {
        Ok(self.0)
    }
}

/// Count published as a decimal integer in a file.
pub struct FileCount {
    path: PathBuf,
}

impl FileCount {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CountSource for FileCount {
    async fn raw_count(&self) -> Result<u64> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            StepperError::Internal(format!("read count failed ({}): {e}", self.path.display()))
        })?;
        raw.trim().parse::<u64>().map_err(|_| {
            StepperError::Internal(format!(
                "count file {} does not hold a non-negative integer",
                self.path.display()
            ))
        })
    }
}

pub fn from_config(cfg: &CountConfig) -> Arc<dyn CountSource> {
    match cfg {
        CountConfig::Static { value } => Arc::new(StaticCount(*value)),
        CountConfig::File { path } => Arc::new(FileCount::new(path.clone())),
    }
}
