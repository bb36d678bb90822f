use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stepper_core::error::{Result, StepperError};
use stepper_core::settings::normalize_payload;
use stepper_core::Settings;

/// File-backed settings mapping.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the current settings. A missing file behaves like an
    /// empty mapping.
    pub async fn load(&self) -> Result<Settings> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => "{}".to_string(),
            Err(e) => {
                return Err(StepperError::Internal(format!(
                    "read settings failed ({}): {e}",
                    self.path.display()
                )))
            }
        };
        Ok(Settings::decode(&raw))
    }

    /// Store a settings payload as submitted by an operator. Anything that is
    /// not a JSON object is stored as `{}`.
    pub async fn save(&self, payload: &str) -> Result<Settings> {
        let normalized = normalize_payload(payload);
        tokio::fs::write(&self.path, &normalized).await.map_err(|e| {
            StepperError::Internal(format!(
                "write settings failed ({}): {e}",
                self.path.display()
            ))
        })?;
        Ok(Settings::decode(&normalized))
    }
}
