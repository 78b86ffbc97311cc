//! Simulation state
//!
//! The world plus every sparkle, in insertion order.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::sparkle::Sparkle;
use super::world::World;
use crate::error::{Error, Result};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed the sparkle headings were drawn from
    pub seed: u64,
    /// Frames advanced so far
    pub frame: u64,
    world: World,
    sparkles: Vec<Sparkle>,
}

impl SimState {
    /// Build the world and spawn every sparkle described by `settings`
    pub fn new(settings: &Settings) -> Result<Self> {
        let world = World::from_outlines(settings.width, settings.height, &settings.figures)?;

        let spawn = settings.spawn_point();
        if !world.contains(spawn) {
            return Err(Error::SpawnOutsideArena {
                x: spawn.x,
                y: spawn.y,
            });
        }

        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(seed);
        let sparkles = (0..settings.sparkle_count)
            .map(|_| Sparkle::create(spawn, settings.sparkle_speed, &mut rng))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "Spawned {} sparkles at {} (seed {}) among {} figures",
            sparkles.len(),
            spawn,
            seed,
            world.figures().len()
        );

        Ok(Self {
            seed,
            frame: 0,
            world,
            sparkles,
        })
    }

    /// State from an already built world and sparkles
    pub fn from_parts(world: World, sparkles: Vec<Sparkle>) -> Self {
        Self {
            seed: 0,
            frame: 0,
            world,
            sparkles,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    /// Advance every sparkle one step, handing each pre-step position to `draw`
    pub fn advance(&mut self, mut draw: impl FnMut(DVec2)) {
        for sparkle in &mut self.sparkles {
            draw(sparkle.advance(&self.world));
        }
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(seed: u64) -> Settings {
        Settings {
            width: 300.0,
            height: 200.0,
            sparkle_count: 8,
            seed: Some(seed),
            figures: vec![vec![
                DVec2::new(40.0, 40.0),
                DVec2::new(90.0, 40.0),
                DVec2::new(60.0, 90.0),
            ]],
            ..Default::default()
        }
    }

    #[test]
    fn test_spawns_at_shared_point() {
        let state = SimState::new(&settings(1)).unwrap();
        assert_eq!(state.sparkles().len(), 8);
        assert!(
            state
                .sparkles()
                .iter()
                .all(|s| s.position() == DVec2::new(150.0, 100.0))
        );
        assert_eq!(state.world().segment_count(), 4 + 3);
    }

    #[test]
    fn test_advance_draws_in_insertion_order() {
        let mut state = SimState::new(&settings(3)).unwrap();
        state.advance(|_| {});

        let expected: Vec<_> = state.sparkles().iter().map(Sparkle::position).collect();
        let mut drawn = Vec::new();
        state.advance(|p| drawn.push(p));

        assert_eq!(drawn, expected);
        assert_eq!(state.frame, 2);
    }

    #[test]
    fn test_determinism() {
        // Same seed, same trajectories
        let mut state1 = SimState::new(&settings(99999)).unwrap();
        let mut state2 = SimState::new(&settings(99999)).unwrap();

        for _ in 0..200 {
            state1.advance(|_| {});
            state2.advance(|_| {});
        }

        assert_eq!(state1.sparkles(), state2.sparkles());
    }

    #[test]
    fn test_spawn_outside_arena() {
        let settings = Settings {
            spawn: Some(DVec2::new(-5.0, 10.0)),
            ..Default::default()
        };
        assert!(matches!(
            SimState::new(&settings),
            Err(Error::SpawnOutsideArena { .. })
        ));
    }

    #[test]
    fn test_invalid_speed_fails_setup() {
        let settings = Settings {
            sparkle_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            SimState::new(&settings),
            Err(Error::InvalidSpeed { .. })
        ));
    }
}
