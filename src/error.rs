//! Errors raised while setting up a scene
//!
//! Stepping never fails; everything here is a rejected construction input.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("segment endpoints coincide at ({x}, {y})")]
    DegenerateSegment { x: f64, y: f64 },

    #[error("a figure needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("arena size must be positive and finite, got {width}x{height}")]
    InvalidArena { width: f64, height: f64 },

    #[error("sparkle speed must be positive and finite, got {speed}")]
    InvalidSpeed { speed: f64 },

    #[error("spawn point ({x}, {y}) lies outside the arena")]
    SpawnOutsideArena { x: f64, y: f64 },

    #[error("failed to read settings from '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
