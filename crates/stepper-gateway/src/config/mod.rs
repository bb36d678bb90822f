//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use stepper_core::error::{Result, StepperError};

pub use schema::{CountConfig, GatewayConfig, GatewaySection, SettingsSection};

/// Load and validate a config file. Errors name the file.
pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| StepperError::Internal(format!("read config {path} failed: {e}")))?;
    load_from_str(&s).map_err(|e| match e {
        StepperError::BadRequest(msg) => StepperError::BadRequest(format!("{path}: {msg}")),
        other => other,
    })
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| StepperError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
