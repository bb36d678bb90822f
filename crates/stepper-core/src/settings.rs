//! Stored indicator settings.
//!
//! Settings live as a JSON mapping in an external store. Decoding never fails:
//! garbage in the envelope means "nothing configured", and a mistyped field is
//! recorded as a fault. A faulty `key` or `ip` makes the gate reject every
//! request; a faulty `max` surfaces from [`Settings::max_scale`], which runs
//! only after the gate has passed.
//!
//! [`normalize_payload`] and [`Settings::encode`] are the storage-side
//! helpers: whatever writes the mapping stores their output.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::degrees::MaxScale;
use crate::error::{Result, StepperError};

pub const DEFAULT_MAX: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Shared secret a caller must present.
    pub key: Option<String>,
    /// Only this exact source IP is authorized, when non-empty.
    pub ip: Option<String>,
    /// Raw count that maps to 359 degrees. Validated at mapping time.
    pub max: i64,

    #[serde(skip)]
    pub(crate) faults: Faults,
}

/// Fields that were present but carried the wrong JSON type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Faults {
    pub(crate) key: bool,
    pub(crate) ip: bool,
    pub(crate) max: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            key: None,
            ip: None,
            max: DEFAULT_MAX,
            faults: Faults::default(),
        }
    }
}

impl Settings {
    /// Decode the stored settings mapping.
    ///
    /// Unparseable JSON or a non-object payload resolves to defaults. Unknown
    /// keys are ignored.
    pub fn decode(raw: &str) -> Self {
        let map = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::debug!("stored settings are not a JSON object; using defaults");
                return Self::default();
            }
        };

        let mut faults = Faults::default();
        let key = opt_string(&map, "key", &mut faults.key);
        let ip = opt_string(&map, "ip", &mut faults.ip);
        let max = match max_field(&map) {
            Ok(max) => max,
            Err(reason) => {
                faults.max = Some(reason);
                0
            }
        };

        Self { key, ip, max, faults }
    }

    /// Canonical JSON form for storage.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Whether `provided` is the configured shared secret. A mistyped stored
    /// key matches nothing.
    pub fn key_matches(&self, provided: Option<&str>) -> bool {
        !self.faults.key && provided == self.key.as_deref()
    }

    /// IP filter, if one is configured.
    pub fn ip_filter(&self) -> Option<&str> {
        self.ip.as_deref().filter(|ip| !ip.is_empty())
    }

    /// A mistyped stored IP is a filter no client passes.
    pub fn ip_rejects_all(&self) -> bool {
        self.faults.ip
    }

    pub fn max_scale(&self) -> Result<MaxScale> {
        if let Some(reason) = &self.faults.max {
            return Err(StepperError::InvalidConfig(reason.clone()));
        }
        MaxScale::new(self.max)
    }

    /// Human-readable problems with the stored mapping, for operator logs.
    pub fn problems(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.faults.key {
            out.push("key must be a string or null".to_string());
        }
        if self.faults.ip {
            out.push("ip must be a string or null".to_string());
        }
        if let Err(e) = self.max_scale() {
            out.push(e.to_string());
        }
        out
    }
}

/// Normalize an incoming settings payload before it is stored: anything that
/// is not a JSON object becomes `{}`.
pub fn normalize_payload(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(v @ Value::Object(_)) => v.to_string(),
        _ => "{}".to_string(),
    }
}

fn opt_string(map: &Map<String, Value>, field: &str, fault: &mut bool) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            *fault = true;
            None
        }
    }
}

fn max_field(map: &Map<String, Value>) -> std::result::Result<i64, String> {
    let invalid = |v: &Value| format!("max must be an integer (got {v})");

    match map.get("max") {
        None | Some(Value::Null) => Ok(DEFAULT_MAX),
        Some(v @ Value::Number(n)) => n.as_i64().ok_or_else(|| invalid(v)),
        Some(v @ Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid(v)),
        Some(v) => Err(invalid(v)),
    }
}
