//! Deterministic reflection simulation
//!
//! Pure geometry and stepping. This module must stay free of rendering and
//! platform concerns:
//! - Walls never move once the world is built
//! - Seeded RNG only
//! - Sparkles advance in insertion order

pub mod figure;
pub mod geometry;
pub mod sparkle;
pub mod state;
pub mod world;

pub use figure::Figure;
pub use geometry::{Segment, distance, intersect, reflect};
pub use sparkle::{Hit, Sparkle};
pub use state::SimState;
pub use world::{FigureId, SegmentId, World};
