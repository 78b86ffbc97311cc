//! Scene settings
//!
//! Loaded from an optional JSON file; any missing field keeps its default.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Colors as 8-bit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: [u8; 3],
    pub sparkle: [u8; 3],
    pub figure: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            sparkle: SPARKLE_COLOR,
            figure: FIGURE_COLOR,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena width (pixels)
    pub width: f64,
    /// Arena height (pixels)
    pub height: f64,
    pub title: String,
    /// Target frame rate, 0 runs unpaced
    pub fps: u32,

    pub sparkle_count: usize,
    /// Distance travelled per step
    pub sparkle_speed: f64,
    /// Shared spawn point (arena center when unset)
    pub spawn: Option<DVec2>,
    /// RNG seed for sparkle headings (random when unset)
    pub seed: Option<u64>,

    pub palette: Palette,
    /// Obstacle outlines, each a list of `[x, y]` points
    pub figures: Vec<Vec<DVec2>>,

    /// Stop after this many frames (run until killed when unset)
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            fps: FPS,

            sparkle_count: SPARKLE_COUNT,
            sparkle_speed: SPARKLE_SPEED,
            spawn: None,
            seed: None,

            palette: Palette::default(),
            figures: Vec::new(),

            max_frames: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Where sparkles start: the configured spawn or the arena center on whole pixels
    pub fn spawn_point(&self) -> DVec2 {
        self.spawn
            .unwrap_or_else(|| (DVec2::new(self.width, self.height) / 2.0).floor())
    }
}
