//! Entity records for the animated actors.
//!
//! Every actor is a plain `Copy` value. The scene owns them in fixed-size arrays and mutates
//! them in place once per tick, so nothing here allocates.

/// Number of fish swimming under the surface.
pub const NUM_FISH: usize = 6;
/// Number of birds flying above the horizon.
pub const NUM_BIRDS: usize = 8;

/// Height at which the boat floats.
pub const BOAT_Y: f32 = 5.0;
/// Depth of the lane the boat sails along.
pub const BOAT_Z: f32 = -100.0;

/// The single player-controlled boat.
///
/// Only `x` changes; `y` and `z` are fixed at [`BOAT_Y`] and [`BOAT_Z`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boat {
    /// Position along the river.
    pub x: f32,
    /// Distance travelled per tick while moving.
    pub speed: f32,
    /// Whether the boat advances on each tick.
    pub moving: bool,
}

impl Boat {
    /// Creates a stationary boat at `x`.
    pub fn new(x: f32, speed: f32) -> Self {
        Self {
            x,
            speed,
            moving: false,
        }
    }

    /// Current world position.
    pub fn position(&self) -> [f32; 3] {
        [self.x, BOAT_Y, BOAT_Z]
    }
}

/// A fish swimming left to right just under the water plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fish {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Distance travelled per tick.
    pub speed: f32,
    /// Body length; height and width are half of it.
    pub scale: f32,
}

/// A bird gliding across the sky while bobbing up and down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Horizontal distance per tick.
    pub speed_x: f32,
    /// Vertical distance per tick; the sign sets the direction.
    pub speed_y: f32,
}

/// A borrowed-by-value view over any animated actor, handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entity {
    Boat(Boat),
    Fish(Fish),
    Bird(Bird),
}

impl Entity {
    /// World position of the actor.
    pub fn position(&self) -> [f32; 3] {
        match self {
            Entity::Boat(boat) => boat.position(),
            Entity::Fish(fish) => [fish.x, fish.y, fish.z],
            Entity::Bird(bird) => [bird.x, bird.y, bird.z],
        }
    }
}
