//! Sparkles - light particles bouncing around a polygonal arena
//!
//! Core modules:
//! - `sim`: Deterministic reflection simulation (segments, figures, world, sparkles)
//! - `frame`: Frame driver tying the simulation to a host canvas
//! - `renderer`: Host drawing interface and triangle-mesh tessellation
//! - `platform`: Frame pacing
//! - `settings`: JSON-loadable configuration

pub mod error;
pub mod frame;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::{Palette, Settings};

/// Defaults carried over from the reference scene
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f64 = 1200.0;
    pub const ARENA_HEIGHT: f64 = 800.0;

    pub const WINDOW_TITLE: &str = "Reflection";
    pub const FPS: u32 = 60;

    /// Distance a sparkle travels per step
    pub const SPARKLE_SPEED: f64 = 10.0;
    pub const SPARKLE_COUNT: usize = 1;
    /// Side of the square drawn for a sparkle (pixels)
    pub const SPARKLE_SIZE: f64 = 3.0;

    pub const BACKGROUND_COLOR: [u8; 3] = [50, 50, 50];
    pub const SPARKLE_COLOR: [u8; 3] = [200, 200, 200];
    pub const FIGURE_COLOR: [u8; 3] = [90, 140, 200];
}
