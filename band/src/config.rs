//! Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::primitives::{Color, WindowArea};
use crate::surface::Surface;

/// Configuration for a window driven by [`frame::run`](crate::frame::run).
///
/// Every field has a default, so a config file only names what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window title.
    pub title: String,

    /// Initial window size.
    pub window_area: WindowArea,

    /// Frame rate the backend should aim for.
    pub target_fps: u32,

    /// Color each frame is cleared to.
    pub clear_color: Color,

    /// Start in fullscreen mode.
    pub fullscreen: bool,

    /// Draw the FPS indicator on top of every frame.
    pub debug_overlay: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: String::from("Band"),
            window_area: WindowArea::new(1200.0, 800.0),
            target_fps: 60,
            clear_color: Color::BLACK,
            fullscreen: false,
            debug_overlay: false,
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Push the window settings to a surface.
    pub fn apply(&self, surface: &mut dyn Surface) {
        surface.set_title(&self.title);
        surface.set_window_area(self.window_area);
        surface.set_target_fps(self.target_fps);
        if self.fullscreen {
            surface.toggle_fullscreen();
        }
    }
}
