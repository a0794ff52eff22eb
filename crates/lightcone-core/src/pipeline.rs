// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-frame vertex transform.
//!
//! For every rest vertex `p` and observer origin `o`:
//!
//! ```text
//! rel    = p − o
//! t      = dot(−b, rel)          simultaneity slice of the observer's frame
//! X      = (t, rel)
//! X'     = Λ·X
//! world' = o + X'.xyz            time component discarded
//! local' = world_to_local · world'
//! ```
//!
//! Using a uniform `t = 0` instead of the per-vertex slice gives the wrong
//! geometry: points along the boost axis would be read at different
//! observer times.

use lightcone_math::{Mat4, Vec3, Vec4};

use crate::boost::BoostMatrix;
use crate::cache::{CachedMesh, GeometryCache, MeshId};
use crate::frame::FrameSnapshot;
use crate::ports::RenderSink;

/// Boosts one rest-frame world position as seen by the observer at
/// `observer`. Pure and deterministic.
pub fn boost_vertex(rest_world: Vec3, boost: &BoostMatrix, beta_vector: Vec3, observer: Vec3) -> Vec3 {
    let rel = rest_world - observer;
    let t = (-beta_vector).dot(&rel);
    let x_prime = boost.apply(&Vec4::from_time_space(t, rel));
    observer + x_prime.spatial()
}

fn boost_mesh(rest_world: &[Vec3], world_to_local: &Mat4, working: &mut [Vec3], frame: &FrameSnapshot) {
    let boost = frame.boost();
    let beta_vector = frame.beta_vector();
    let observer = frame.observer_position();
    for (dst, src) in working.iter_mut().zip(rest_world) {
        let world = boost_vertex(*src, boost, beta_vector, observer);
        *dst = world_to_local.transform_point(&world);
    }
}

fn apply_frame(mesh: &mut CachedMesh, frame: &FrameSnapshot) {
    // Λ = I leaves every spatial offset unchanged whatever t is, so the
    // duplicated source buffer is the exact answer.
    if frame.boost().is_identity() {
        mesh.restore_rest();
    } else {
        let (rest_world, world_to_local, working) = mesh.split_buffers();
        boost_mesh(rest_world, world_to_local, working, frame);
    }
    mesh.recompute_bounds();
}

/// Counts from one pipeline step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct StepStats {
    /// Meshes rewritten.
    pub meshes: usize,
    /// Vertices rewritten.
    pub vertices: usize,
}

/// Rewrites every cached mesh's working buffer for one frame.
///
/// Only working buffers and their bounds are written; rest arrays are never
/// touched. Each mesh's buffer has exactly one writer per step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct VertexPipeline {
    parallel: bool,
}

impl VertexPipeline {
    /// Single-threaded pipeline.
    pub const fn serial() -> Self {
        Self { parallel: false }
    }

    /// Pipeline that spreads meshes across the rayon pool when the
    /// `parallel` feature is enabled, and runs serially otherwise.
    pub const fn parallel() -> Self {
        Self { parallel: true }
    }

    /// `true` if this pipeline will actually fan out.
    pub const fn is_parallel(&self) -> bool {
        self.parallel && cfg!(feature = "parallel")
    }

    /// Transforms all meshes with the single snapshot `frame`, then hands
    /// each updated buffer and its bounds to `sink`.
    pub fn step(
        &self,
        cache: &mut GeometryCache,
        frame: &FrameSnapshot,
        sink: Option<&mut dyn RenderSink>,
    ) -> StepStats {
        if self.is_parallel() {
            step_parallel(cache.meshes_mut(), frame);
        } else {
            for mesh in cache.meshes_mut() {
                apply_frame(mesh, frame);
            }
        }

        if let Some(sink) = sink {
            for (id, mesh) in cache.iter() {
                sink.mesh_updated(id, mesh.name(), mesh.working(), mesh.bounds());
            }
        }

        StepStats {
            meshes: cache.len(),
            vertices: cache.vertex_count(),
        }
    }

    /// Transforms a single mesh. Returns `false` if `id` is unknown.
    pub fn step_mesh(&self, cache: &mut GeometryCache, id: MeshId, frame: &FrameSnapshot) -> bool {
        match cache.meshes_mut().get_mut(id.index()) {
            Some(mesh) => {
                apply_frame(mesh, frame);
                true
            }
            None => false,
        }
    }
}

#[cfg(feature = "parallel")]
fn step_parallel(meshes: &mut [CachedMesh], frame: &FrameSnapshot) {
    use rayon::prelude::*;
    meshes.par_iter_mut().for_each(|mesh| apply_frame(mesh, frame));
}

#[cfg(not(feature = "parallel"))]
fn step_parallel(meshes: &mut [CachedMesh], frame: &FrameSnapshot) {
    for mesh in meshes {
        apply_frame(mesh, frame);
    }
}
