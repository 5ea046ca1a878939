//! Configuration persistence for the selection overlay

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Serializable RGBA color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "default_alpha")]
    pub a: f32,
}

fn default_alpha() -> f32 {
    1.0
}

impl OverlayColor {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to 8-bit RGBA (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

/// Overlay configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSnapConfig {
    /// Max gap between two pointer-downs that still form one double-click
    #[serde(default = "default_double_click_window_ms")]
    pub double_click_window_ms: u64,
    /// Color laid over everything outside the selection
    #[serde(default = "default_dim_color")]
    pub dim_color: OverlayColor,
    /// Selection outline color
    #[serde(default = "default_selection_color")]
    pub selection_color: OverlayColor,
    /// Resize handle fill color
    #[serde(default = "default_handle_color")]
    pub handle_color: OverlayColor,
    /// Selection outline thickness in logical pixels
    #[serde(default = "default_selection_thickness")]
    pub selection_thickness: f32,
    /// Side length of the drawn resize handle markers in logical pixels
    #[serde(default = "default_handle_marker_size")]
    pub handle_marker_size: f32,
}

fn default_double_click_window_ms() -> u64 {
    400
}

fn default_dim_color() -> OverlayColor {
    OverlayColor::rgba(0.0, 0.0, 0.0, 0.5)
}

fn default_selection_color() -> OverlayColor {
    OverlayColor::rgba(0.2, 0.6, 1.0, 1.0)
}

fn default_handle_color() -> OverlayColor {
    OverlayColor::rgba(1.0, 1.0, 1.0, 1.0)
}

fn default_selection_thickness() -> f32 {
    2.0
}

fn default_handle_marker_size() -> f32 {
    8.0
}

impl RegionSnapConfig {
    /// Directory name under the platform config dir
    pub const ID: &'static str = "regionsnap";

    /// Location of the config file, if the platform has a config dir
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::ID).join("config.json"))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            log::warn!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {err:#}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Save configuration to disk
    pub fn save(&self) {
        match Self::path() {
            Some(path) => {
                if let Err(err) = self.save_to(&path) {
                    log::error!("Failed to save config: {err:#}");
                }
            }
            None => log::error!("Could not find a config directory for saving"),
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw).with_context(|| format!("failed to write {}", path.display()))
    }

    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_window_ms)
    }
}

impl Default for RegionSnapConfig {
    fn default() -> Self {
        Self {
            double_click_window_ms: default_double_click_window_ms(),
            dim_color: default_dim_color(),
            selection_color: default_selection_color(),
            handle_color: default_handle_color(),
            selection_thickness: default_selection_thickness(),
            handle_marker_size: default_handle_marker_size(),
        }
    }
}
