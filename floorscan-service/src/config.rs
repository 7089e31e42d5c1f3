//! Service configuration loaded from environment variables.

use floorscan_algorithms::OutlineConfig;
use floorscan_combine::CombineConfig;

pub const FLOOR_EPSILON_VAR: &str = "FLOORSCAN_FLOOR_EPSILON";
pub const SIMPLIFY_TOLERANCE_VAR: &str = "FLOORSCAN_SIMPLIFY_TOLERANCE";
pub const CANVAS_SCALE_VAR: &str = "FLOORSCAN_CANVAS_SCALE";

/// Service configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceConfig {
    /// Floor band and simplification tolerance for outlines.
    pub outline: OutlineConfig,
    /// Canvas scale and node naming for composites.
    pub combine: CombineConfig,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Absent, unparseable or out-of-range values fall back to the defaults:
    /// thresholds must be non-negative and the canvas scale positive.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let number = |key: &str, default: f64, accept: fn(f64) -> bool| {
            lookup(key)
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .filter(|&value| value.is_finite() && accept(value))
                .unwrap_or(default)
        };
        let non_negative = |value: f64| value >= 0.0;
        let positive = |value: f64| value > 0.0;

        Self {
            outline: OutlineConfig {
                floor_epsilon: number(FLOOR_EPSILON_VAR, defaults.outline.floor_epsilon, non_negative),
                simplify_tolerance: number(
                    SIMPLIFY_TOLERANCE_VAR,
                    defaults.outline.simplify_tolerance,
                    non_negative,
                ),
            },
            combine: defaults
                .combine
                .clone()
                .with_canvas_scale(number(CANVAS_SCALE_VAR, defaults.combine.canvas_scale, positive)),
        }
    }
}
