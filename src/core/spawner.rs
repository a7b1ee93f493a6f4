//! Spawner module - procedural entity generation ahead of the player
//!
//! Two regimes: a bootstrap pass that seeds a whole field of obstacles past
//! the right edge at session start, and a steady-state pass that tops the
//! stream up as the field scrolls. Density is controlled by the active
//! difficulty profile; there is no solvability check, since only vertical
//! dodging is required and the spawn band always leaves free rows.

use crate::core::entity::{Collectible, Obstacle};
use crate::core::rng::SimpleRng;
use crate::types::{
    DifficultyProfile, FieldSize, BOOTSTRAP_COLLECTIBLE_CHANCE,
    BOOTSTRAP_COLLECTIBLE_SETBACK_MAX, BOOTSTRAP_COLLECTIBLE_SETBACK_MIN, BOOTSTRAP_LEAD_GAP,
    BOOTSTRAP_OBSTACLES, COLLECTIBLE_GLYPHS, GAP_LEVEL_NARROWING_CAP, GAP_MAX, GAP_MIN,
    OBSTACLE_GLYPHS, SPAWN_MARGIN, SPAWN_OFFSET, STEADY_COLLECTIBLE_CHANCE,
    STEADY_COLLECTIBLE_OFFSET_MAX, STEADY_COLLECTIBLE_OFFSET_MIN,
};

/// Owns the gameplay RNG for one session. Decorative effects never draw
/// from this generator.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SimpleRng,
}

impl Spawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Seed the initial obstacle stream just past the visible right edge,
    /// with breathing room before the first one and spacing that narrows as
    /// the level rises. Collectibles are sprinkled into the gaps.
    pub fn bootstrap(
        &mut self,
        field: FieldSize,
        level: u32,
    ) -> (Vec<Obstacle>, Vec<Collectible>) {
        let mut obstacles = Vec::with_capacity(BOOTSTRAP_OBSTACLES);
        let mut collectibles = Vec::new();

        let mut x = field.width + BOOTSTRAP_LEAD_GAP;
        for _ in 0..BOOTSTRAP_OBSTACLES {
            obstacles.push(self.obstacle_at(x, field));

            if self.rng.chance(BOOTSTRAP_COLLECTIBLE_CHANCE) {
                let setback = self.rng.range_inclusive(
                    BOOTSTRAP_COLLECTIBLE_SETBACK_MIN,
                    BOOTSTRAP_COLLECTIBLE_SETBACK_MAX,
                );
                collectibles.push(self.collectible_at(x - setback, field));
            }

            x += self.gap(level);
        }

        (obstacles, collectibles)
    }

    /// Steady state, once per tick: when the trailing obstacle has scrolled
    /// far enough in from the right edge, roll the profile's spawn chance
    /// for a new obstacle and, independently, a smaller chance for a nearby
    /// collectible.
    pub fn advance(
        &mut self,
        field: FieldSize,
        profile: &DifficultyProfile,
        obstacles: &mut Vec<Obstacle>,
        collectibles: &mut Vec<Collectible>,
    ) {
        let eligible = obstacles
            .last()
            .map_or(true, |o| o.x < field.width - SPAWN_MARGIN);
        if !eligible {
            return;
        }

        if self.rng.chance(profile.spawn_chance) {
            obstacles.push(self.obstacle_at(field.width + SPAWN_OFFSET, field));
        }
        if self.rng.chance(STEADY_COLLECTIBLE_CHANCE) {
            let offset = self.rng.range_inclusive(
                STEADY_COLLECTIBLE_OFFSET_MIN,
                STEADY_COLLECTIBLE_OFFSET_MAX,
            );
            collectibles.push(self.collectible_at(field.width + offset, field));
        }
    }

    /// Gap to the next bootstrap obstacle. The upper bound narrows with
    /// level but never drops below GAP_MIN, so obstacles cannot overlap.
    fn gap(&mut self, level: u32) -> i32 {
        let hi = GAP_MAX - (level as i32).min(GAP_LEVEL_NARROWING_CAP);
        self.rng.range_inclusive(GAP_MIN, hi.max(GAP_MIN))
    }

    fn obstacle_at(&mut self, x: i32, field: FieldSize) -> Obstacle {
        let y = self.spawn_row(field);
        Obstacle::new(x, y, self.rng.pick(&OBSTACLE_GLYPHS))
    }

    fn collectible_at(&mut self, x: i32, field: FieldSize) -> Collectible {
        let y = self.spawn_row(field);
        Collectible::new(x, y, self.rng.pick(&COLLECTIBLE_GLYPHS))
    }

    /// Uniform row within the playable vertical band.
    fn spawn_row(&mut self, field: FieldSize) -> i32 {
        let (top, bottom) = field.spawn_band();
        self.rng.range_inclusive(top, bottom)
    }
}
