//! Randomised population of the fish school and bird flock.
//!
//! Sampling is discrete: every value is `base + k * step` for an integer `k` drawn uniformly,
//! which keeps all samples inside the documented ranges and on the same grid the scene was
//! designed around.

use crate::scene::Scene;
use crate::scene::entities::{Bird, Fish};
use rand::Rng;

/// Vertical speed magnitude given to every bird.
pub const BIRD_SPEED_Y: f32 = 0.05;

/// Seed derived from the wall clock, so each run looks different.
pub fn wall_clock_seed() -> u64 {
    chrono::Local::now().timestamp_millis() as u64
}

/// Overwrites every fish and bird in `scene` with freshly sampled state.
///
/// The boat is left untouched.
pub fn populate<R: Rng>(scene: &mut Scene, rng: &mut R) {
    for fish in scene.fish.iter_mut() {
        *fish = sample_fish(rng);
    }
    for (index, bird) in scene.birds.iter_mut().enumerate() {
        *bird = sample_bird(index, rng);
    }
}

/// Samples one fish.
///
/// - `x` in [-550, 550)
/// - `y` in [0.5, 2.5)
/// - `z` in [-250, 150)
/// - `speed` in [0.15, 0.25)
/// - `scale` in [10.0, 15.0)
pub fn sample_fish<R: Rng>(rng: &mut R) -> Fish {
    Fish {
        x: -550.0 + rng.gen_range(0..1100) as f32,
        y: 0.5 + rng.gen_range(0..20) as f32 / 10.0,
        z: -250.0 + rng.gen_range(0..400) as f32,
        speed: 0.15 + rng.gen_range(0..10) as f32 / 100.0,
        scale: 10.0 + rng.gen_range(0..50) as f32 / 10.0,
    }
}

/// Samples the bird at `index` in the flock.
///
/// Birds are spread 70 units apart starting at x = -400; even birds start climbing and odd
/// birds start descending.
pub fn sample_bird<R: Rng>(index: usize, rng: &mut R) -> Bird {
    Bird {
        x: -400.0 + index as f32 * 70.0,
        y: sample_bird_altitude(rng),
        z: -140.0 - rng.gen_range(0..40) as f32,
        speed_x: 0.5 + rng.gen_range(0..3) as f32 * 0.05,
        speed_y: if index % 2 == 0 {
            BIRD_SPEED_Y
        } else {
            -BIRD_SPEED_Y
        },
    }
}

/// Altitude in [80, 89] used at startup and whenever a bird re-enters from the left.
pub fn sample_bird_altitude<R: Rng>(rng: &mut R) -> f32 {
    80.0 + rng.gen_range(0..10) as f32
}
