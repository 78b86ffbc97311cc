//! Host drawing layer
//!
//! The simulation only ever draws through [`Canvas`]: a cleared background,
//! one small square per sparkle and one filled polygon per figure.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::MeshCanvas;
pub use vertex::Vertex;

use glam::DVec2;

/// RGBA color with components in `0.0..=1.0`
pub type Color = [f32; 4];

/// Opaque color from 8-bit RGB
#[inline]
pub fn rgb([r, g, b]: [u8; 3]) -> Color {
    [
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        1.0,
    ]
}

/// Drawing surface provided by the host
pub trait Canvas {
    /// Fill the whole frame with `color`
    fn clear(&mut self, color: Color);

    /// Draw a sparkle at `p`
    fn draw_point(&mut self, p: DVec2, color: Color);

    /// Fill a closed polygon given by its outline
    fn fill_polygon(&mut self, points: &[DVec2], color: Color);

    /// Finish the frame
    fn present(&mut self);
}
