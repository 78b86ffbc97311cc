//! Shape generation for 2D primitives

use glam::{DVec2, Vec2};

use super::Color;
use super::vertex::Vertex;
use crate::consts::SPARKLE_SIZE;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(top_left: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let Vec2 { x: x0, y: y0 } = top_left;
    let Vec2 { x: x1, y: y1 } = top_left + size;

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y1, color),
    ]
}

/// Generate vertices for a sparkle: a small square snapped to whole pixels around `p`
pub fn sparkle(p: DVec2, color: Color) -> Vec<Vertex> {
    let top_left = (p - DVec2::ONE).trunc().as_vec2();
    rect(top_left, Vec2::splat(SPARKLE_SIZE as f32), color)
}

/// Generate vertices for a filled simple polygon (convex or concave)
pub fn polygon(points: &[DVec2], color: Color) -> Vec<Vertex> {
    let points: Vec<Vec2> = points.iter().map(|p| p.as_vec2()).collect();

    triangulate(&points)
        .into_iter()
        .flatten()
        .map(|i| Vertex::new(points[i].x, points[i].y, color))
        .collect()
}

/// Twice the signed area; positive for counter-clockwise winding in a y-up frame
fn signed_area2(points: &[Vec2]) -> f32 {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p, q)| p.perp_dot(*q))
        .sum()
}

fn in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = (b - a).perp_dot(p - a);
    let d2 = (c - b).perp_dot(p - b);
    let d3 = (a - c).perp_dot(p - c);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Split a simple polygon into triangles by ear clipping
///
/// Returns index triples into `points`. Works for either winding.
pub fn triangulate(points: &[Vec2]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let winding = signed_area2(points).signum();
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let m = remaining.len();
        let ear = (0..m).find(|&i| {
            let (ia, ib, ic) = (remaining[(i + m - 1) % m], remaining[i], remaining[(i + 1) % m]);
            let (a, b, c) = (points[ia], points[ib], points[ic]);

            let convex = (b - a).perp_dot(c - b) * winding > 0.0;
            convex
                && remaining
                    .iter()
                    .filter(|&&j| j != ia && j != ib && j != ic)
                    .all(|&j| !in_triangle(points[j], a, b, c))
        });

        // Degenerate outline: fan out whatever is left
        let Some(i) = ear else {
            log::debug!("No ear found in {}-gon, falling back to fan", m);
            for k in 1..m - 1 {
                triangles.push([remaining[0], remaining[k], remaining[k + 1]]);
            }
            return triangles;
        };

        triangles.push([remaining[(i + m - 1) % m], remaining[i], remaining[(i + 1) % m]]);
        remaining.remove(i);
    }

    triangles.push([remaining[0], remaining[1], remaining[2]]);
    triangles
}
