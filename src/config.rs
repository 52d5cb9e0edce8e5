//! Controller tuning loaded from TOML.
//!
//! ```toml
//! dead_zone = 0.2
//! pov_radius = 1.0
//! ```
//!
//! Missing keys take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_DEAD_ZONE: f32 = 0.25;
pub const DEFAULT_POV_RADIUS: f32 = 1.0;

/// Dead-zone and POV settings applied by [`Controller`](crate::controller::Controller).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Dead zone for sticks, Z/V axes and triggers.
    pub dead_zone: f32,
    /// Radius of the POV point when the hat is pressed.
    pub pov_radius: f32,
    /// Dead zone for the POV point.
    pub pov_dead_zone: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
            pov_radius: DEFAULT_POV_RADIUS,
            pov_dead_zone: 0.0,
        }
    }
}

impl ControllerConfig {
    /// Parse TOML text; absent keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
