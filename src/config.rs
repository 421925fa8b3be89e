//! Application configuration.
//!
//! Loaded from `$XDG_CONFIG_HOME/icongrid/config.json`.  Every section is
//! optional; a minimal `{}` file is valid and all sections fall back to
//! their compiled-in defaults.  Unknown keys are ignored.
//!
//! # Example
//!
//! ```json
//! {
//!   "layout": { "icon_size": 48.0, "label_lines": 2 },
//!   "drag": { "threshold": 8.0, "threshold_axes": "per_axis" },
//!   "directory": { "origin": { "x": 10.0, "y": 10.0 }, "step": 80.0, "wrap_x": 400.0 },
//!   "canvas": { "width": 800.0, "height": 600.0 },
//!   "default_icon": 0
//! }
//! ```

use crate::directory::DirectoryConfig;
use crate::gesture::DragConfig;
use crate::item::IconId;
use crate::layout::LayoutConfig;
use crate::view::ItemGridView;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Icon and label geometry.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Drag recognition.
    #[serde(default)]
    pub drag: DragConfig,

    /// Flow placement for directory listings.
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Size of the drawing surface.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Icon for items added without one.
    #[serde(default)]
    pub default_icon: IconId,
}

/// Size of the drawing surface in pixels.
///
/// The GTK viewer opens its window at this size; the headless host uses
/// it as the clip rectangle for the final render list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Build an empty view with these settings.
    pub fn build_view(&self) -> ItemGridView {
        let mut view = ItemGridView::new(self.layout.clone());
        view.set_drag_config(self.drag.clone());
        view.set_default_icon(self.default_icon);
        view
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
