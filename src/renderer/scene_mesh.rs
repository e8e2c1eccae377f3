//! Scene geometry assembly.
//!
//! [`SceneMesh::build`] turns the current [`Scene`] into world-space triangle and line
//! streams, drawing the backdrop first and the actors after it. The vertex buffers are reused
//! from frame to frame.

use crate::math::mat::Mat4;
use crate::renderer::shapes::MeshBuilder;
use crate::renderer::vertex::{rgb, rgba};
use crate::scene::Scene;
use crate::scene::entities::{Entity, Fish};
use std::f32::consts::PI;

const SUN_CENTER: [f32; 3] = [300.0, 200.0, -280.0];
const SUN_RADIUS: f32 = 18.0;
const SUN_GLOW_RADIUS: f32 = 26.0;

/// `(x, y, z, scale)` for each cloud.
const CLOUDS: [[f32; 4]; 4] = [
    [-520.0, 200.0, -220.0, 7.0],
    [80.0, 210.0, -250.0, 4.8],
    [460.0, 95.0, -200.0, 10.0],
    [-100.0, 100.0, -220.0, 4.0],
];

/// `(centre, radius)` of the puffs making up one cloud, in cloud-local units.
const CLOUD_PUFFS: [([f32; 3], f32); 5] = [
    ([0.0, 0.0, 0.0], 4.5),
    ([3.5, 0.5, 0.0], 3.5),
    ([-3.5, 0.3, 0.0], 3.8),
    ([-1.0, 0.9, 0.0], 3.2),
    ([-2.0, 0.4, 0.0], 2.5),
];
const CLOUD_SQUASH: f32 = 0.6;

const SEA_Y: f32 = 0.01;
const WORLD_HALF_WIDTH: f32 = 600.0;
const SEA_NEAR_Z: f32 = 200.0;
const SEA_FAR_Z: f32 = -300.0;
const BEACH_NEAR_Z: f32 = 250.0;

const BOAT_SCALE: f32 = 3.0;
const HULL_SEGMENTS: i32 = 20;

/// One element of the painter's order. Test builds record one per draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawItem {
    Sun,
    Cloud(usize),
    Bird(usize),
    Sea,
    Beach,
    Fish(usize),
    Boat,
}

#[derive(Debug, Default)]
pub struct SceneMesh {
    pub mesh: MeshBuilder,
    /// Draw calls of the last build, in order.
    #[cfg(test)]
    pub items: Vec<DrawItem>,
}

impl SceneMesh {
    pub fn new() -> Self {
        Self {
            mesh: MeshBuilder::new(),
            #[cfg(test)]
            items: Vec::new(),
        }
    }

    /// Rebuilds both vertex streams from `scene`.
    pub fn build(&mut self, scene: &Scene) {
        self.mesh.clear();
        #[cfg(test)]
        self.items.clear();

        self.draw_sun();
        for (index, cloud) in CLOUDS.iter().enumerate() {
            self.draw_cloud(index, *cloud);
        }
        for (index, bird) in scene.bird_entities().enumerate() {
            self.draw_entity(index, bird);
        }
        self.draw_sea();
        self.draw_beach();
        for (index, fish) in scene.fish_entities().enumerate() {
            self.draw_entity(index, fish);
        }
        self.draw_entity(0, scene.boat_entity());
    }

    fn record(&mut self, _item: DrawItem) {
        #[cfg(test)]
        self.items.push(_item);
    }

    fn draw_entity(&mut self, index: usize, entity: Entity) {
        let [x, y, z] = entity.position();
        let origin = Mat4::translation(x, y, z);
        match entity {
            Entity::Bird(_) => self.draw_bird(index, &origin),
            Entity::Fish(fish) => self.draw_fish(index, &origin, &fish),
            Entity::Boat(_) => self.draw_boat(&origin),
        }
    }

    fn draw_sun(&mut self) {
        self.record(DrawItem::Sun);
        let [x, y, z] = SUN_CENTER;
        let model = Mat4::translation(x, y, z);
        self.mesh
            .push_sphere(&model, SUN_RADIUS, 30, 30, rgb(1.0, 0.45, 0.0));
        self.mesh.push_sphere(
            &model,
            SUN_GLOW_RADIUS,
            30,
            30,
            rgba(1.0, 0.3, 0.0, 0.25),
        );
    }

    fn draw_cloud(&mut self, index: usize, [x, y, z, scale]: [f32; 4]) {
        self.record(DrawItem::Cloud(index));
        let cloud = Mat4::translation(x, y, z).multiply(&Mat4::scaling(
            scale,
            scale * CLOUD_SQUASH,
            1.0,
        ));
        let white = rgb(1.0, 1.0, 1.0);

        for ([dx, dy, dz], radius) in CLOUD_PUFFS {
            let puff = cloud.multiply(&Mat4::translation(dx, dy, dz));
            self.mesh.push_sphere(&puff, radius, 20, 20, white);
        }
    }

    fn draw_bird(&mut self, index: usize, model: &Mat4) {
        self.record(DrawItem::Bird(index));
        let color = rgb(0.1, 0.1, 0.1);
        self.mesh
            .push_line(model, [0.0, 0.0, 0.0], [2.0, 1.0, 0.0], color);
        self.mesh
            .push_line(model, [0.0, 0.0, 0.0], [-2.0, 1.0, 0.0], color);
    }

    fn draw_sea(&mut self) {
        self.record(DrawItem::Sea);
        self.mesh.push_quad(
            &Mat4::identity(),
            [
                [-WORLD_HALF_WIDTH, SEA_Y, SEA_FAR_Z],
                [-WORLD_HALF_WIDTH, SEA_Y, SEA_NEAR_Z],
                [WORLD_HALF_WIDTH, SEA_Y, SEA_NEAR_Z],
                [WORLD_HALF_WIDTH, SEA_Y, SEA_FAR_Z],
            ],
            rgb(0.3, 0.7, 0.9),
        );
    }

    fn draw_beach(&mut self) {
        self.record(DrawItem::Beach);
        self.mesh.push_quad(
            &Mat4::identity(),
            [
                [-WORLD_HALF_WIDTH, 0.0, SEA_NEAR_Z],
                [-WORLD_HALF_WIDTH, 0.0, BEACH_NEAR_Z],
                [WORLD_HALF_WIDTH, 0.0, BEACH_NEAR_Z],
                [WORLD_HALF_WIDTH, 0.0, SEA_NEAR_Z],
            ],
            rgb(0.84, 0.72, 0.54),
        );
    }

    fn draw_fish(&mut self, index: usize, origin: &Mat4, fish: &Fish) {
        self.record(DrawItem::Fish(index));
        let model = origin.multiply(&Mat4::scaling(
            fish.scale,
            fish.scale * 0.5,
            fish.scale * 0.5,
        ));

        self.mesh
            .push_sphere(&model, 1.0, 14, 14, fish_tint(fish));
        self.mesh.push_triangle(
            &model,
            [[-1.2, 0.0, 0.0], [-2.0, 0.6, 0.0], [-2.0, -0.6, 0.0]],
            rgb(0.9, 0.3, 0.1),
        );
    }

    fn draw_boat(&mut self, origin: &Mat4) {
        self.record(DrawItem::Boat);
        let model = origin.multiply(&Mat4::scaling(BOAT_SCALE, BOAT_SCALE, BOAT_SCALE));
        let wall = rgb(0.5, 0.3, 0.2);

        let hull: Vec<[f32; 3]> = (-HULL_SEGMENTS..=HULL_SEGMENTS)
            .flat_map(|i| {
                let theta = i as f32 * PI / (2 * HULL_SEGMENTS) as f32;
                let x = theta.sin() * 12.0;
                let y = -4.0 + 0.3 * theta.sin();
                let half_beam = theta.cos() * 3.0;
                [[x, y, half_beam], [x, y, -half_beam]]
            })
            .collect();
        self.mesh
            .push_triangle_strip(&model, &hull, rgb(0.45, 0.26, 0.1));

        self.mesh.push_quad(
            &model,
            [[-12.0, 0.0, -3.0], [-12.0, 0.0, 3.0], [12.0, 0.0, 3.0], [12.0, 0.0, -3.0]],
            rgb(0.55, 0.35, 0.2),
        );

        for side in [-3.0, 3.0] {
            self.mesh.push_quad(
                &model,
                [[-12.0, 0.0, side], [-12.0, 3.0, side], [12.0, 3.0, side], [12.0, 0.0, side]],
                wall,
            );
        }
        self.mesh.push_quad(
            &model,
            [[-12.0, 0.0, -3.0], [-12.0, 3.0, -3.0], [-12.0, 3.0, 3.0], [-12.0, 0.0, 3.0]],
            wall,
        );

        // bow
        self.mesh.push_triangle(
            &model,
            [[12.0, 0.0, -3.0], [12.0, 0.0, 3.0], [14.0, 2.0, 0.0]],
            wall,
        );

        self.mesh
            .push_line(&model, [0.0, 0.0, 0.0], [0.0, 10.0, 0.0], rgb(0.3, 0.2, 0.1));
        self.mesh.push_triangle(
            &model,
            [[0.0, 10.0, 0.0], [0.0, 3.0, 0.0], [6.0, 6.0, 0.0]],
            rgb(1.0, 1.0, 0.9),
        );

        self.mesh.push_quad(
            &model,
            [[-4.0, 2.8, -3.0], [-4.0, 2.8, 3.0], [4.0, 2.8, 3.0], [4.0, 2.8, -3.0]],
            rgb(0.6, 0.4, 0.25),
        );
    }
}

/// Body colour of a fish, shifted by its truncated depth and position.
///
/// Remainders keep the sign of the dividend, so fish at negative coordinates come out
/// slightly darker.
pub fn fish_tint(fish: &Fish) -> [u8; 4] {
    let depth_band = (fish.z as i32 % 5) as f32;
    let lane_band = (fish.x as i32 % 4) as f32;
    rgb(1.0, 0.3 + 0.05 * depth_band, 0.1 + 0.05 * lane_band)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::renderer::shapes::sphere_triangle_count;
    use crate::scene::SceneState;
    use crate::scene::entities::{NUM_BIRDS, NUM_FISH};

    fn scene() -> Scene {
        SceneState::new(&SceneConfig::default(), 99, 1000, 700).scene
    }

    /// Tests that backdrop and actors are drawn in painter's order.
    #[test]
    fn test_draw_order() {
        let mut mesh = SceneMesh::new();
        mesh.build(&scene());

        let mut expected = vec![DrawItem::Sun];
        expected.extend((0..4).map(DrawItem::Cloud));
        expected.extend((0..NUM_BIRDS).map(DrawItem::Bird));
        expected.push(DrawItem::Sea);
        expected.push(DrawItem::Beach);
        expected.extend((0..NUM_FISH).map(DrawItem::Fish));
        expected.push(DrawItem::Boat);
        assert_eq!(mesh.items, expected);
    }

    #[test]
    fn test_streams_are_well_formed() {
        let mut mesh = SceneMesh::new();
        mesh.build(&scene());
        assert_eq!(mesh.mesh.triangles.len() % 3, 0);
        assert_eq!(mesh.mesh.lines.len() % 2, 0);
        // two wings per bird plus the mast
        assert_eq!(mesh.mesh.line_count(), NUM_BIRDS * 2 + 1);
    }

    /// Tests that a second build replaces the previous frame instead of appending.
    #[test]
    fn test_rebuild_is_idempotent() {
        let scene = scene();
        let mut mesh = SceneMesh::new();
        mesh.build(&scene);
        let first = mesh.mesh.triangles.clone();
        mesh.build(&scene);
        assert_eq!(mesh.mesh.triangles, first);
    }

    #[test]
    fn test_sun_comes_first() {
        let mut mesh = SceneMesh::new();
        mesh.build(&scene());
        let sun = sphere_triangle_count(30, 30);
        let core = mesh.mesh.triangles[0];
        let glow = mesh.mesh.triangles[sun * 3];
        assert_eq!(core.color, rgb(1.0, 0.45, 0.0));
        assert_eq!(glow.color[3], 64);
    }

    /// Tests that every puff of a cloud is centred on its own local offset.
    #[test]
    fn test_cloud_puffs_at_local_offsets() {
        let mut mesh = SceneMesh::new();
        mesh.build(&scene());

        let [cx, cy, cz, scale] = CLOUDS[0];
        let puff_len = sphere_triangle_count(20, 20) * 3;
        let first = 2 * sphere_triangle_count(30, 30) * 3;
        for (puff, ([dx, dy, dz], _)) in CLOUD_PUFFS.iter().enumerate() {
            let start = first + puff * puff_len;
            let vertices = &mesh.mesh.triangles[start..start + puff_len];
            let mut min = [f32::MAX; 3];
            let mut max = [f32::MIN; 3];
            for vertex in vertices {
                for axis in 0..3 {
                    min[axis] = min[axis].min(vertex.position[axis]);
                    max[axis] = max[axis].max(vertex.position[axis]);
                }
            }
            let centre = [
                (min[0] + max[0]) / 2.0,
                (min[1] + max[1]) / 2.0,
                (min[2] + max[2]) / 2.0,
            ];
            let expected = [cx + scale * dx, cy + scale * CLOUD_SQUASH * dy, cz + dz];
            for axis in 0..3 {
                assert!(
                    (centre[axis] - expected[axis]).abs() < 1e-2,
                    "puff {puff} centred at {centre:?}, expected {expected:?}"
                );
            }
        }
    }

    /// Tests that moving the boat shifts its geometry and nothing else.
    #[test]
    fn test_boat_geometry_follows_x() {
        let mut scene = scene();
        let mut before = SceneMesh::new();
        before.build(&scene);

        scene.boat.x += 10.0;
        let mut after = SceneMesh::new();
        after.build(&scene);

        let mast_before = before.mesh.lines[NUM_BIRDS * 4];
        let mast_after = after.mesh.lines[NUM_BIRDS * 4];
        assert!((mast_after.position[0] - mast_before.position[0] - 10.0).abs() < 1e-3);
        assert_eq!(mast_after.position[1], mast_before.position[1]);
        assert_eq!(before.mesh.lines[..NUM_BIRDS * 4], after.mesh.lines[..NUM_BIRDS * 4]);
    }

    #[test]
    fn test_fish_tint_bands() {
        let fish = Fish {
            x: 7.9,
            z: 3.5,
            ..Fish::default()
        };
        assert_eq!(fish_tint(&fish), rgb(1.0, 0.45, 0.25));

        let negative = Fish {
            x: -1.5,
            z: -6.0,
            ..Fish::default()
        };
        assert_eq!(fish_tint(&negative), rgb(1.0, 0.25, 0.05));
    }
}
