//! Triangle-mesh canvas
//!
//! Collects each frame as a flat triangle list ready for upload to a GPU
//! vertex buffer. The finished frame is kept until the next `present`.

use glam::DVec2;

use super::vertex::Vertex;
use super::{Canvas, Color, shapes};

#[derive(Debug, Default)]
pub struct MeshCanvas {
    clear_color: Color,
    building: Vec<Vertex>,
    frame: Vec<Vertex>,
    frame_clear_color: Color,
    frames_presented: u64,
}

impl MeshCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of the last presented frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.frame
    }

    /// Last presented frame as raw bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.frame)
    }

    /// Background of the last presented frame
    pub fn clear_color(&self) -> Color {
        self.frame_clear_color
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Canvas for MeshCanvas {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.building.clear();
    }

    fn draw_point(&mut self, p: DVec2, color: Color) {
        self.building.extend(shapes::sparkle(p, color));
    }

    fn fill_polygon(&mut self, points: &[DVec2], color: Color) {
        self.building.extend(shapes::polygon(points, color));
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.frame, &mut self.building);
        self.building.clear();
        self.frame_clear_color = self.clear_color;
        self.frames_presented += 1;
    }
}
