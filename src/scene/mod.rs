//! Scene state management module.
//!
//! This module defines the [`Scene`] aggregate, which owns every animated actor, and
//! [`SceneState`], which adds the camera, projection and random source and reacts to host
//! events through the [`SceneEvents`] interface.
//!
//! # Event Flow
//!
//! 1. The frame scheduler fires [`SceneEvents::on_tick`], advancing every actor one step
//! 2. Keyboard and pointer events arrive through [`SceneEvents::on_key`] and
//!    [`SceneEvents::on_button`] and are applied immediately
//! 3. Window size changes arrive through [`SceneEvents::on_resize`]
//!
//! Everything runs on the event-loop thread, so intents never interleave with a tick.

pub mod camera;
pub mod entities;
pub mod init;
pub mod keys;
pub mod motion;
pub mod viewport;

use self::camera::Camera;
use self::entities::{Bird, Boat, Entity, Fish, NUM_BIRDS, NUM_FISH};
use self::keys::Intent;
use self::viewport::Projection;
use crate::config::SceneConfig;
use crate::math::mat::Mat4;
use rand::SeedableRng;
use rand::rngs::StdRng;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::Key;

/// Every animated actor in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub boat: Boat,
    pub fish: [Fish; NUM_FISH],
    pub birds: [Bird; NUM_BIRDS],
}

impl Scene {
    /// Creates a scene with the boat at its starting point and unpopulated fish and birds.
    ///
    /// Call [`init::populate`] to sample the fish and birds.
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            boat: Boat::new(config.boat_start_x, config.boat_speed),
            fish: [Fish::default(); NUM_FISH],
            birds: [Bird::default(); NUM_BIRDS],
        }
    }

    /// Birds as renderable entities, in flock order.
    pub fn bird_entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.birds.iter().copied().map(Entity::Bird)
    }

    /// Fish as renderable entities, in school order.
    pub fn fish_entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.fish.iter().copied().map(Entity::Fish)
    }

    pub fn boat_entity(&self) -> Entity {
        Entity::Boat(self.boat)
    }
}

/// Host callbacks the windowing adapter forwards to the scene.
///
/// Each method runs to completion before the next event is dispatched. The adapter requests
/// a redraw after every call.
pub trait SceneEvents {
    /// One fixed timestep elapsed.
    fn on_tick(&mut self);
    /// The drawable area changed size.
    fn on_resize(&mut self, width: u32, height: u32);
    /// A key was pressed.
    fn on_key(&mut self, key: &Key);
    /// A pointer button changed state.
    fn on_button(&mut self, button: MouseButton, state: ElementState);
}

/// The mutable state read by the renderer every frame.
pub struct SceneState {
    /// All animated actors.
    pub scene: Scene,
    /// The current viewpoint.
    pub camera: Camera,
    /// Projection for the current window size.
    pub projection: Projection,
    config: SceneConfig,
    rng: StdRng,
}

impl SceneState {
    /// Builds a fully populated scene from `seed`.
    pub fn new(config: &SceneConfig, seed: u64, width: u32, height: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut scene = Scene::new(config);
        init::populate(&mut scene, &mut rng);
        log::debug!("Scene populated from seed {}", seed);

        Self {
            scene,
            camera: Camera::new(config),
            projection: Projection::new(width, height, config),
            config: config.clone(),
            rng,
        }
    }

    /// Applies one intent.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Camera(movement) => self.camera.apply(movement),
            Intent::StartBoat => {
                if !self.scene.boat.moving {
                    log::debug!("Boat under way at x = {:.1}", self.scene.boat.x);
                }
                self.scene.boat.moving = true;
            }
            Intent::StopBoat => {
                if self.scene.boat.moving {
                    log::debug!("Boat stopped at x = {:.1}", self.scene.boat.x);
                }
                self.scene.boat.moving = false;
            }
        }
    }

    /// Combined projection and view transform for the current frame.
    pub fn view_projection(&self) -> Mat4 {
        self.projection.matrix.multiply(&self.camera.view_matrix())
    }
}

impl SceneEvents for SceneState {
    fn on_tick(&mut self) {
        self.scene.advance(&mut self.rng);
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.projection = Projection::new(width, height, &self.config);
        log::debug!(
            "Projection updated for {}x{} (aspect {:.3})",
            self.projection.width,
            self.projection.height,
            self.projection.aspect
        );
    }

    fn on_key(&mut self, key: &Key) {
        if let Some(intent) = keys::winit_key_to_intent(key) {
            self.apply(intent);
        }
    }

    fn on_button(&mut self, button: MouseButton, state: ElementState) {
        if let Some(intent) = keys::mouse_button_to_intent(button, state) {
            self.apply(intent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    fn state() -> SceneState {
        SceneState::new(&SceneConfig::default(), 1234, 1000, 700)
    }

    /// Tests the startup layout of the scene.
    #[test]
    fn test_new_state_defaults() {
        let state = state();
        assert_eq!(state.scene.boat.x, -300.0);
        assert_eq!(state.scene.boat.speed, 0.2);
        assert!(!state.scene.boat.moving);
        assert_eq!(state.camera.depth, 250.0);
        assert_eq!(state.camera.lateral, 0.0);
        assert_eq!(state.scene.birds[7].x, -400.0 + 7.0 * 70.0);
    }

    /// Tests the full keyboard path from a winit key to the camera.
    #[test]
    fn test_on_key_moves_camera() {
        let mut state = state();
        state.on_key(&Key::Character(SmolStr::new("w")));
        state.on_key(&Key::Character(SmolStr::new("W")));
        assert_eq!(state.camera.depth, 240.0);
        state.on_key(&Key::Character(SmolStr::new("a")));
        assert_eq!(state.camera.lateral, -5.0);
        state.on_key(&Key::Character(SmolStr::new("x")));
        assert_eq!(state.camera.depth, 240.0);
        assert_eq!(state.camera.lateral, -5.0);
    }

    /// Tests that boat buttons are idempotent and releases do nothing.
    #[test]
    fn test_on_button_controls_boat() {
        let mut state = state();
        state.on_button(MouseButton::Left, ElementState::Pressed);
        state.on_button(MouseButton::Left, ElementState::Pressed);
        assert!(state.scene.boat.moving);
        state.on_button(MouseButton::Right, ElementState::Released);
        assert!(state.scene.boat.moving);
        state.on_button(MouseButton::Right, ElementState::Pressed);
        assert!(!state.scene.boat.moving);
        state.on_button(MouseButton::Right, ElementState::Pressed);
        assert!(!state.scene.boat.moving);
    }

    /// Tests that ticks only move the boat while it is under way.
    #[test]
    fn test_on_tick_gates_boat() {
        let mut state = state();
        state.on_tick();
        assert_eq!(state.scene.boat.x, -300.0);
        state.apply(Intent::StartBoat);
        state.on_tick();
        assert!((state.scene.boat.x - (-299.8)).abs() < 1e-4);
    }

    #[test]
    fn test_on_resize_zero_height() {
        let mut state = state();
        state.on_resize(800, 0);
        assert_eq!(state.projection.height, 1);
        assert_eq!(state.projection.aspect, 800.0);
    }

    /// Tests that two states from the same seed evolve identically.
    #[test]
    fn test_same_seed_same_evolution() {
        let mut a = state();
        let mut b = state();
        for _ in 0..5000 {
            a.on_tick();
            b.on_tick();
        }
        assert_eq!(a.scene, b.scene);
    }
}
