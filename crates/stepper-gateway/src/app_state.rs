//! Shared application state for the stepper gateway.

use std::sync::Arc;

use stepper_core::error::Result;

use crate::config::GatewayConfig;
use crate::sources::{self, CountSource, SettingsStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    settings: SettingsStore,
    count: Arc<dyn CountSource>,
}

impl AppState {
    /// Build application state from a validated config.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        cfg.validate()?;
        let count = sources::from_config(&cfg.count);
        Ok(Self::with_count_source(cfg, count))
    }

    /// Build with an explicit count source (embedding, tests).
    pub fn with_count_source(cfg: GatewayConfig, count: Arc<dyn CountSource>) -> Self {
        let settings = SettingsStore::new(cfg.settings.path.clone());
        Self {
            inner: Arc::new(AppStateInner { cfg, settings, count }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.inner.settings
    }

    pub fn count_source(&self) -> Arc<dyn CountSource> {
        Arc::clone(&self.inner.count)
    }
}
