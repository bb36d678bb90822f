//! Degree mapping (raw count -> [0, 359]).
//!
//! The mapping is `round(min(359, floor(raw * (359 / max))))`. The order
//! floor -> clamp -> round is kept exactly as deployed indicators expect it.

use crate::error::{Result, StepperError};

/// Full-scale position of the indicator.
pub const MAX_DEGREES: u16 = 359;

/// Validated full-scale raw count (always > 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxScale(u64);

impl MaxScale {
    /// Validate a configured maximum. Zero or negative is a configuration fault.
    pub fn new(max: i64) -> Result<Self> {
        if max <= 0 {
            return Err(StepperError::InvalidConfig(format!(
                "max must be a positive integer (got {max})"
            )));
        }
        Ok(Self(max as u64))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Map a raw count onto the dial.
    pub fn map(self, raw_count: u64) -> u16 {
        let step = f64::from(MAX_DEGREES) / self.0 as f64;

        let mut degrees = (raw_count as f64 * step).floor();
        if degrees > f64::from(MAX_DEGREES) {
            degrees = f64::from(MAX_DEGREES);
        }

        // step and raw are non-negative, so this lands in [0, 359]
        degrees.round() as u16
    }
}

/// Convert `raw_count` to degrees for the configured `max_scale`.
///
/// Precondition: `max_scale > 0`. Otherwise returns
/// [`StepperError::InvalidConfig`] without dividing.
pub fn to_degrees(raw_count: u64, max_scale: i64) -> Result<u16> {
    Ok(MaxScale::new(max_scale)?.map(raw_count))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ClientCode;

    #[test]
    fn zero_maps_to_zero() {
        assert_eq!(to_degrees(0, 100).unwrap(), 0);
    }

    #[test]
    fn full_scale_maps_to_359() {
        assert_eq!(to_degrees(100, 100).unwrap(), 359);
    }

    #[test]
    fn half_scale_floors_before_rounding() {
        // 50 * 3.59 = 179.5 on paper; floor wins over round
        assert_eq!(to_degrees(50, 100).unwrap(), 179);
    }

    #[test]
    fn over_scale_is_clamped() {
        assert_eq!(to_degrees(1000, 100).unwrap(), 359);
        assert_eq!(to_degrees(u64::MAX, 1).unwrap(), 359);
    }

    #[test]
    fn small_max_scales_up() {
        assert_eq!(to_degrees(1, 1).unwrap(), 359);
        assert_eq!(to_degrees(1, 2).unwrap(), 179);
    }

    #[test]
    fn large_max_scales_down() {
        // 359 / 1000 * 10 = 3.59
        assert_eq!(to_degrees(10, 1000).unwrap(), 3);
        assert_eq!(to_degrees(1, 1000).unwrap(), 0);
    }

    #[test]
    fn zero_max_is_config_fault() {
        let err = to_degrees(10, 0).unwrap_err();
        assert_eq!(err.client_code(), ClientCode::InvalidConfig);
    }

    #[test]
    fn negative_max_is_config_fault() {
        let err = to_degrees(10, -5).unwrap_err();
        assert_eq!(err.client_code(), ClientCode::InvalidConfig);
    }

    #[test]
    fn monotonic_and_bounded() {
        for max in [1_i64, 3, 7, 50, 100, 359, 360, 1000, 12_345] {
            let scale = MaxScale::new(max).unwrap();
            let mut prev = 0;
            for raw in 0..=(max as u64 * 3) {
                let d = scale.map(raw);
                assert!(d <= MAX_DEGREES, "max={max} raw={raw} d={d}");
                assert!(d >= prev, "max={max} raw={raw} not monotonic");
                prev = d;
            }
        }
    }
}
