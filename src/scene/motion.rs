//! Fixed-step motion for the boat, fish and birds.
//!
//! Horizontal motion wraps: anything that passes [`WORLD_MAX_X`] reappears at
//! [`WORLD_MIN_X`] in a single step. Birds also bounce vertically between
//! [`BIRD_MIN_Y`] and [`BIRD_MAX_Y`]; the bound is checked after moving, so a bird may
//! overshoot by one step before turning around.

use crate::scene::Scene;
use crate::scene::entities::{Bird, Boat, Fish};
use crate::scene::init::sample_bird_altitude;
use rand::Rng;

/// Left edge of the world; wrapped actors reappear here.
pub const WORLD_MIN_X: f32 = -600.0;
/// Right edge of the world.
pub const WORLD_MAX_X: f32 = 600.0;
/// Lower altitude bound for birds.
pub const BIRD_MIN_Y: f32 = 75.0;
/// Upper altitude bound for birds.
pub const BIRD_MAX_Y: f32 = 95.0;

/// Returns the left edge if `x` has run past the right edge.
pub fn wrap_x(x: f32) -> Option<f32> {
    (x > WORLD_MAX_X).then_some(WORLD_MIN_X)
}

impl Boat {
    /// Moves the boat one step if it is under way.
    pub fn step(&mut self) {
        if !self.moving {
            return;
        }
        self.x += self.speed;
        if let Some(x) = wrap_x(self.x) {
            self.x = x;
        }
    }
}

impl Fish {
    pub fn step(&mut self) {
        self.x += self.speed;
        if let Some(x) = wrap_x(self.x) {
            self.x = x;
        }
    }
}

impl Bird {
    /// Moves the bird one step.
    ///
    /// A bird that leaves on the right comes back on the left at a new random altitude.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.y > BIRD_MAX_Y || self.y < BIRD_MIN_Y {
            self.speed_y = -self.speed_y;
        }

        if let Some(x) = wrap_x(self.x) {
            self.x = x;
            self.y = sample_bird_altitude(rng);
        }
    }
}

impl Scene {
    /// Advances every actor by exactly one tick.
    ///
    /// Runs in O(fish + birds) and never allocates.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        self.boat.step();
        for fish in self.fish.iter_mut() {
            fish.step();
        }
        for bird in self.birds.iter_mut() {
            bird.step(rng);
        }
    }
}
