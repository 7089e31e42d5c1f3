//! Combination settings

use floorscan_core::{Error, Result, CANVAS_UNITS_TO_METERS, COMPOSITE_ROOT_NAME, SCAN_CONTAINER_PREFIX};
use serde::{Deserialize, Serialize};

/// Configuration for scene combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombineConfig {
    /// Meters per canvas unit
    pub canvas_scale: f64,
    /// Containers are named `<prefix><index>`
    pub container_prefix: String,
    /// Name of the composite root node
    pub root_name: String,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            canvas_scale: CANVAS_UNITS_TO_METERS,
            container_prefix: SCAN_CONTAINER_PREFIX.to_string(),
            root_name: COMPOSITE_ROOT_NAME.to_string(),
        }
    }
}

impl CombineConfig {
    pub fn with_canvas_scale(mut self, canvas_scale: f64) -> Self {
        self.canvas_scale = canvas_scale;
        self
    }

    pub fn with_container_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.container_prefix = prefix.into();
        self
    }

    pub fn with_root_name(mut self, root_name: impl Into<String>) -> Self {
        self.root_name = root_name.into();
        self
    }

    /// Name of the container holding scan `index`
    pub fn container_name(&self, index: usize) -> String {
        format!("{}{}", self.container_prefix, index)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.canvas_scale.is_finite() || self.canvas_scale <= 0.0 {
            return Err(Error::validation(format!(
                "canvas scale must be positive, got {}",
                self.canvas_scale
            )));
        }
        Ok(())
    }
}
