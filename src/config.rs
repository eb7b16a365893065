//! # Lens State Config
//!
//! Lens state is only reported by specific camera models. The support list is
//! loaded from `lens_state.toml`.
//!
//! ```toml
//! supported_cameras = ["X5", "X5R"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Default config file name
pub const CONFIG_FILENAME: &str = "lens_state.toml";

/// Cameras that report lens state out of the box
pub const DEFAULT_SUPPORTED_CAMERAS: [&str; 2] = ["X5", "X5R"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LensStateConfig {
    /// Camera model names that report lens state
    #[serde(default = "default_supported_cameras")]
    pub supported_cameras: Vec<String>,
}

fn default_supported_cameras() -> Vec<String> {
    DEFAULT_SUPPORTED_CAMERAS
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl Default for LensStateConfig {
    fn default() -> Self {
        Self {
            supported_cameras: default_supported_cameras(),
        }
    }
}

impl LensStateConfig {
    /// Parse config from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize config to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load config from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!(
            path = %path.display(),
            cameras = config.supported_cameras.len(),
            "loaded lens state config"
        );
        Ok(config)
    }

    /// Whether the camera model reports lens state (ASCII case-insensitive)
    pub fn supports(&self, camera: &str) -> bool {
        self.supported_cameras
            .iter()
            .any(|c| c.eq_ignore_ascii_case(camera))
    }
}
