// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use lightcone_geom::Transform;
use lightcone_math::{deg_to_rad, Vec3};

use crate::ports::{SceneMesh, SceneSource};

/// Scene name of the first rod marker.
pub const MARKER_A: &str = "marker-a";
/// Scene name of the second rod marker.
pub const MARKER_B: &str = "marker-b";

const MARKER_HALF_EXTENT: f32 = 0.25;
const FLOOR_EXTENT: f32 = 40.0;
const FLOOR_CELLS: usize = 16;

/// Axis-aligned cube of eight corner vertices, placed at `center`.
///
/// The corner set is symmetric about the local origin, so the center of its
/// bounds tracks the boosted center exactly.
pub fn cube_mesh(name: &str, center: Vec3, half_extent: f32) -> SceneMesh {
    let h = half_extent;
    let mut vertices = Vec::with_capacity(8);
    for x in [-h, h] {
        for y in [-h, h] {
            for z in [-h, h] {
                vertices.push(Vec3::new(x, y, z));
            }
        }
    }
    SceneMesh::new(name, Transform::from_translation(center), vertices)
}

/// Flat XZ grid of `(cells + 1)²` vertices spanning `[-extent, extent]`.
pub fn grid_mesh(name: &str, extent: f32, cells: usize) -> SceneMesh {
    let cells = cells.max(1);
    let step = 2.0 * extent / cells as f32;
    let mut vertices = Vec::with_capacity((cells + 1) * (cells + 1));
    for i in 0..=cells {
        for j in 0..=cells {
            vertices.push(Vec3::new(
                -extent + step * i as f32,
                0.0,
                -extent + step * j as f32,
            ));
        }
    }
    SceneMesh::new(name, Transform::identity(), vertices)
}

/// Two marker cubes `length` apart at `angle_degrees` from +Z (in the XZ
/// plane), over a floor grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RodScene {
    meshes: Vec<SceneMesh>,
    rest_length: f32,
    angle_degrees: f32,
}

impl RodScene {
    /// Rest separation between the markers.
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Rod angle from the +Z axis.
    pub fn angle_degrees(&self) -> f32 {
        self.angle_degrees
    }

    /// Appends an extra mesh to the scene.
    pub fn push(&mut self, mesh: SceneMesh) {
        self.meshes.push(mesh);
    }
}

impl SceneSource for RodScene {
    fn meshes(&self) -> &[SceneMesh] {
        &self.meshes
    }
}

/// Builds a [`RodScene`]. Marker A sits 5 units ahead of the origin along
/// +Z and 1 unit above the floor.
pub fn rod_scene(length: f32, angle_degrees: f32) -> RodScene {
    let (s, c) = deg_to_rad(angle_degrees).sin_cos();
    let a = Vec3::new(0.0, 1.0, 5.0);
    let b = a + Vec3::new(s, 0.0, c) * length;
    RodScene {
        meshes: vec![
            grid_mesh("floor", FLOOR_EXTENT, FLOOR_CELLS),
            cube_mesh(MARKER_A, a, MARKER_HALF_EXTENT),
            cube_mesh(MARKER_B, b, MARKER_HALF_EXTENT),
        ],
        rest_length: length,
        angle_degrees,
    }
}
