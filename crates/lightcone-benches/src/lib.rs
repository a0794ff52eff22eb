// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared fixtures for the Lightcone benchmarks.

use lightcone_core::demo::{cube_mesh, grid_mesh};
use lightcone_core::SceneMesh;
use lightcone_math::Vec3;

/// Floor grid plus `cubes` marker-sized cubes spread along +Z.
///
/// The grid has `(cells + 1)²` vertices, so `cells` sets the size of the one
/// large mesh while `cubes` sets how many small meshes share the frame.
pub fn bench_scene(cells: usize, cubes: usize) -> Vec<SceneMesh> {
    let mut meshes = Vec::with_capacity(cubes + 1);
    meshes.push(grid_mesh("floor", 50.0, cells));
    for i in 0..cubes {
        let x = (i % 16) as f32 - 8.0;
        let z = (i / 16) as f32 * 2.0 + 3.0;
        meshes.push(cube_mesh(&format!("cube-{i}"), Vec3::new(x, 0.5, z), 0.5));
    }
    meshes
}
