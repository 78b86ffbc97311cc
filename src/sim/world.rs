//! Registry of every collidable segment
//!
//! Built once before the simulation starts and only read afterwards. Segments
//! live in a single vector so a [`SegmentId`] is a stable identity for the
//! whole run.

use glam::DVec2;

use super::figure::Figure;
use super::geometry::Segment;
use crate::error::{Error, Result};

/// Stable handle to a segment in a [`World`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(usize);

impl SegmentId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a figure in [`World::figures`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(usize);

impl FigureId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Wall {
    segment: Segment,
    /// `None` for the arena border
    owner: Option<FigureId>,
}

/// The rectangular arena, its obstacles and all their walls
#[derive(Debug, Clone)]
pub struct World {
    width: f64,
    height: f64,
    figures: Vec<Figure>,
    walls: Vec<Wall>,
}

impl World {
    /// Build the border of a `width` x `height` arena plus the edges of every figure
    pub fn build(width: f64, height: f64, figures: Vec<Figure>) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(Error::InvalidArena { width, height });
        }

        let corners = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, height),
            DVec2::new(width, height),
            DVec2::new(width, 0.0),
        ];
        // Left, bottom, right, top
        let mut walls = corners
            .iter()
            .zip(corners.iter().cycle().skip(1))
            .map(|(&p, &q)| {
                Segment::new(p, q).map(|segment| Wall {
                    segment,
                    owner: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for (i, figure) in figures.iter().enumerate() {
            if let Some(p) = figure
                .boundary_points()
                .iter()
                .find(|p| !Self::in_rect(**p, width, height))
            {
                log::warn!("Figure {} has a vertex outside the arena at {}", i, p);
            }
            walls.extend(figure.edges().iter().map(|&segment| Wall {
                segment,
                owner: Some(FigureId(i)),
            }));
        }

        log::debug!(
            "World {}x{}: {} figures, {} segments",
            width,
            height,
            figures.len(),
            walls.len()
        );

        Ok(Self {
            width,
            height,
            figures,
            walls,
        })
    }

    /// Build figures from raw outlines, then the world
    pub fn from_outlines(width: f64, height: f64, outlines: &[Vec<DVec2>]) -> Result<Self> {
        let figures = outlines
            .iter()
            .map(|outline| Figure::new(outline.as_slice()))
            .collect::<Result<Vec<_>>>()?;
        Self::build(width, height, figures)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Every collidable segment with its identity
    pub fn all_segments(&self) -> impl Iterator<Item = (SegmentId, &Segment)> + '_ {
        self.walls
            .iter()
            .enumerate()
            .map(|(i, wall)| (SegmentId(i), &wall.segment))
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.walls.get(id.0).map(|wall| &wall.segment)
    }

    /// Figure a segment belongs to, `None` for border segments
    pub fn owner(&self, id: SegmentId) -> Option<FigureId> {
        self.walls.get(id.0).and_then(|wall| wall.owner)
    }

    pub fn segment_count(&self) -> usize {
        self.walls.len()
    }

    /// Whether `p` lies inside the closed arena rectangle
    pub fn contains(&self, p: DVec2) -> bool {
        Self::in_rect(p, self.width, self.height)
    }

    fn in_rect(p: DVec2, width: f64, height: f64) -> bool {
        (0.0..=width).contains(&p.x) && (0.0..=height).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, side: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(x, y),
            DVec2::new(x + side, y),
            DVec2::new(x + side, y + side),
            DVec2::new(x, y + side),
        ]
    }

    #[test]
    fn test_border_only() {
        let world = World::build(100.0, 50.0, Vec::new()).unwrap();
        assert_eq!(world.segment_count(), 4);

        let total: f64 = world.all_segments().map(|(_, s)| s.length()).sum();
        assert_eq!(total, 300.0);
        assert!(world.all_segments().all(|(id, _)| world.owner(id).is_none()));
    }

    #[test]
    fn test_border_order() {
        let world = World::build(100.0, 50.0, Vec::new()).unwrap();
        let ends = |i| {
            let s = world.segment(SegmentId(i)).unwrap();
            (s.p1(), s.p2())
        };

        // Left, bottom, right, top
        assert_eq!(ends(0), (DVec2::new(0.0, 0.0), DVec2::new(0.0, 50.0)));
        assert_eq!(ends(1), (DVec2::new(0.0, 50.0), DVec2::new(100.0, 50.0)));
        assert_eq!(ends(2), (DVec2::new(100.0, 50.0), DVec2::new(100.0, 0.0)));
        assert_eq!(ends(3), (DVec2::new(100.0, 0.0), DVec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_figure_edges_are_tagged() {
        let world =
            World::from_outlines(200.0, 200.0, &[square(10.0, 10.0, 20.0), square(100.0, 100.0, 5.0)])
                .unwrap();
        assert_eq!(world.figures().len(), 2);
        assert_eq!(world.segment_count(), 4 + 4 + 4);

        let owners: Vec<_> = world.all_segments().map(|(id, _)| world.owner(id)).collect();
        assert_eq!(owners[..4], [None; 4]);
        assert!(owners[4..8].iter().all(|o| *o == Some(FigureId(0))));
        assert!(owners[8..].iter().all(|o| *o == Some(FigureId(1))));
    }

    #[test]
    fn test_segment_ids_are_stable() {
        let world = World::from_outlines(200.0, 200.0, &[square(10.0, 10.0, 20.0)]).unwrap();
        for (id, segment) in world.all_segments() {
            assert_eq!(world.segment(id), Some(segment));
        }
        assert_eq!(world.segment(SegmentId(world.segment_count())), None);
    }

    #[test]
    fn test_invalid_arena() {
        assert!(matches!(
            World::build(0.0, 10.0, Vec::new()),
            Err(Error::InvalidArena { .. })
        ));
        assert!(matches!(
            World::build(10.0, f64::NAN, Vec::new()),
            Err(Error::InvalidArena { .. })
        ));
    }

    #[test]
    fn test_contains() {
        let world = World::build(100.0, 50.0, Vec::new()).unwrap();
        assert!(world.contains(DVec2::new(0.0, 0.0)));
        assert!(world.contains(DVec2::new(100.0, 50.0)));
        assert!(!world.contains(DVec2::new(100.1, 10.0)));
        assert!(!world.contains(DVec2::new(10.0, -0.1)));
    }
}
