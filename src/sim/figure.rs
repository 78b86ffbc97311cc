//! Closed polygonal obstacles

use glam::DVec2;

use super::geometry::Segment;
use crate::error::{Error, Result};

/// A closed polygon decomposed into its boundary edges
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Boundary points in edge order
    points: Vec<DVec2>,
    /// `edges[i]` joins `points[i]` to `points[(i + 1) % len]`
    edges: Vec<Segment>,
}

impl Figure {
    pub fn new(points: impl Into<Vec<DVec2>>) -> Result<Self> {
        let points = points.into();
        if points.len() < 3 {
            return Err(Error::TooFewPoints {
                count: points.len(),
            });
        }

        let edges = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(&p, &q)| Segment::new(p, q))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { points, edges })
    }

    /// Ordered outline, for drawing as a filled polygon
    pub fn boundary_points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }
}
