//! Sparkle stepping
//!
//! A sparkle moves in a straight line one velocity-length per step. Each step
//! tests its path against every wall of the [`World`] except the one it
//! bounced off last, snaps to the nearest hit and mirrors its velocity.
//! Skipping the last wall keeps a sparkle sitting exactly on a wall from
//! detecting that same wall again at distance zero.

use glam::DVec2;
use rand::Rng;

use super::geometry::{Segment, distance, intersect, reflect};
use super::world::{SegmentId, World};
use crate::error::{Error, Result};

/// A wall crossed by a step's path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub point: DVec2,
    pub segment: SegmentId,
}

/// A single light particle
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkle {
    position: DVec2,
    velocity: DVec2,
    /// Wall used for the most recent reflection, skipped on the next step
    last_reflect: Option<SegmentId>,
}

impl Sparkle {
    /// Sparkle with an explicit velocity
    pub fn new(position: DVec2, velocity: DVec2) -> Result<Self> {
        let speed = velocity.length();
        if !(speed.is_finite() && speed > 0.0) {
            return Err(Error::InvalidSpeed { speed });
        }
        Ok(Self {
            position,
            velocity,
            last_reflect: None,
        })
    }

    /// Sparkle heading in a random whole-degree direction at `speed`
    pub fn create(position: DVec2, speed: f64, rng: &mut impl Rng) -> Result<Self> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(Error::InvalidSpeed { speed });
        }
        let angle = f64::from(rng.random_range(0..360_u16)).to_radians();
        Self::new(position, DVec2::from_angle(angle) * speed)
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    #[inline]
    pub fn last_reflect_segment(&self) -> Option<SegmentId> {
        self.last_reflect
    }

    /// Walls the next step's path would cross, in registry order
    pub fn collisions(&self, world: &World) -> Vec<Hit> {
        let path = Segment::between(self.position, self.position + self.velocity);
        self.hits(world, &path).map(|(hit, _)| hit).collect()
    }

    fn hits<'a>(
        &self,
        world: &'a World,
        path: &'a Segment,
    ) -> impl Iterator<Item = (Hit, &'a Segment)> + 'a {
        let skip = self.last_reflect;
        world
            .all_segments()
            .filter(move |(id, _)| Some(*id) != skip)
            .filter_map(move |(id, wall)| {
                intersect(path, wall).map(|point| (Hit { point, segment: id }, wall))
            })
    }

    /// Advance one step and return the position held *before* it
    ///
    /// The first call returns the spawn position, so a renderer drawing the
    /// returned point always shows where the sparkle was at the start of the frame.
    pub fn advance(&mut self, world: &World) -> DVec2 {
        let current = self.position;
        let next = current + self.velocity;
        let path = Segment::between(current, next);

        // min_by keeps the first of equal candidates
        let closest = self
            .hits(world, &path)
            .min_by(|(h1, _), (h2, _)| {
                distance(current, h1.point).total_cmp(&distance(current, h2.point))
            });

        match closest {
            Some((Hit { point, segment }, wall)) => {
                self.position = point;
                self.last_reflect = Some(segment);
                self.velocity = reflect(self.velocity, wall);
                log::trace!(
                    "Reflected at {} off segment {}, velocity now {}",
                    point,
                    segment.index(),
                    self.velocity
                );
            }
            None => {
                self.position = next;
                self.last_reflect = None;
            }
        }

        current
    }
}
