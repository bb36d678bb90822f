use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use stepper_core::error::{Result, StepperError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    pub settings: SettingsSection,

    #[serde(default)]
    pub count: CountConfig,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StepperError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.gateway.validate()?;
        self.settings.validate()?;
        self.count.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Honour `X-Forwarded-For` before the peer address.
    #[serde(default = "default_trust_forwarded_for")]
    pub trust_forwarded_for: bool,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            trust_forwarded_for: default_trust_forwarded_for(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            StepperError::BadRequest(format!(
                "gateway.listen must be a valid SocketAddr (got {})",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_trust_forwarded_for() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsSection {
    /// JSON settings mapping, re-read on every request.
    pub path: PathBuf,
}

impl SettingsSection {
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(StepperError::BadRequest("settings.path must not be empty".into()));
        }
        Ok(())
    }
}

/// Where the raw activity count comes from.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum CountConfig {
    /// Fixed value (bench setups, indicator calibration).
    Static {
        #[serde(default)]
        value: u64,
    },
    /// Decimal integer file maintained by an external activity job.
    File { path: PathBuf },
}

impl Default for CountConfig {
    fn default() -> Self {
        CountConfig::Static { value: 0 }
    }
}

impl CountConfig {
    pub fn validate(&self) -> Result<()> {
        match self {
            CountConfig::Static { .. } => Ok(()),
            CountConfig::File { path } if path.as_os_str().is_empty() => {
                Err(StepperError::BadRequest("count.path must not be empty".into()))
            }
            CountConfig::File { .. } => Ok(()),
        }
    }
}
