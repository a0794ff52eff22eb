// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rest-frame geometry cache.
//!
//! Captured once at scene load. Each entry owns an immutable world-space
//! rest array and a mutable local-space working array of the same length;
//! the source mesh is copied, never mutated.

use lightcone_geom::{Aabb, Transform};
use lightcone_math::{Mat4, Vec3};
use thiserror::Error;
use tracing::{info, warn};

use crate::ports::SceneMesh;

/// Dense handle to a cached mesh (capture order).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(usize);

impl MeshId {
    /// Position of the mesh in the cache.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Why a scene mesh was left out of the cache.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum MeshRejection {
    /// The vertex buffer is empty.
    #[error("mesh has no vertices")]
    Empty,
    /// No local → world transform was supplied.
    #[error("mesh has no transform")]
    MissingTransform,
    /// The transform cannot be inverted (zero scale or non-finite data).
    #[error("mesh transform is not invertible")]
    SingularTransform,
    /// A vertex (local or after placement) is NaN or infinite.
    #[error("mesh vertex {index} is not finite")]
    NonFiniteVertex {
        /// Offending vertex index.
        index: usize,
    },
}

/// A mesh that was skipped during capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMesh {
    /// Scene name of the mesh.
    pub name: String,
    /// Reason it was skipped.
    pub reason: MeshRejection,
}

/// Summary of a capture pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheReport {
    /// Meshes accepted into the cache.
    pub meshes: usize,
    /// Total vertices across accepted meshes.
    pub vertices: usize,
    /// Meshes skipped.
    pub skipped: usize,
}

/// One captured mesh.
#[derive(Debug, Clone)]
pub struct CachedMesh {
    name: String,
    local_to_world: Mat4,
    world_to_local: Mat4,
    rest_local: Box<[Vec3]>,
    rest_world: Box<[Vec3]>,
    rest_world_bounds: Aabb,
    working: Vec<Vec3>,
    bounds: Aabb,
}

impl CachedMesh {
    fn capture(mesh: &SceneMesh) -> Result<Self, MeshRejection> {
        let transform: Transform = mesh.transform.ok_or(MeshRejection::MissingTransform)?;
        let bounds = Aabb::from_points(&mesh.vertices).ok_or(MeshRejection::Empty)?;
        let world_to_local = transform
            .inverse_mat4()
            .ok_or(MeshRejection::SingularTransform)?;
        let local_to_world = transform.to_mat4();

        let rest_local: Box<[Vec3]> = mesh.vertices.clone().into_boxed_slice();
        let rest_world: Box<[Vec3]> = rest_local
            .iter()
            .map(|v| local_to_world.transform_point(v))
            .collect();
        if let Some(index) = rest_local
            .iter()
            .zip(rest_world.iter())
            .position(|(l, w)| !l.is_finite() || !w.is_finite())
        {
            return Err(MeshRejection::NonFiniteVertex { index });
        }
        let rest_world_bounds = Aabb::from_points(&rest_world).ok_or(MeshRejection::Empty)?;

        Ok(Self {
            name: mesh.name.clone(),
            local_to_world,
            world_to_local,
            working: rest_local.to_vec(),
            rest_local,
            rest_world,
            rest_world_bounds,
            bounds,
        })
    }

    /// Scene name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local → world matrix captured at scene load.
    pub fn local_to_world(&self) -> &Mat4 {
        &self.local_to_world
    }

    /// World → local matrix captured at scene load.
    pub fn world_to_local(&self) -> &Mat4 {
        &self.world_to_local
    }

    /// Copy of the source vertex buffer (local space).
    pub fn rest_local(&self) -> &[Vec3] {
        &self.rest_local
    }

    /// Immutable rest-frame positions in world space.
    pub fn rest_world(&self) -> &[Vec3] {
        &self.rest_world
    }

    /// World-space bounds of the rest positions.
    pub fn rest_world_bounds(&self) -> &Aabb {
        &self.rest_world_bounds
    }

    /// Current-frame positions in local space.
    pub fn working(&self) -> &[Vec3] {
        &self.working
    }

    /// Mutable current-frame buffer. Length is fixed at capture.
    pub fn working_mut(&mut self) -> &mut [Vec3] {
        &mut self.working
    }

    /// Local-space bounds of the working buffer as of the last recompute.
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// World-space center of the current bounds.
    pub fn world_center(&self) -> Vec3 {
        self.local_to_world.transform_point(&self.bounds.center())
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.rest_world.len()
    }

    /// Always `false`: empty meshes are rejected at capture.
    pub fn is_empty(&self) -> bool {
        self.rest_world.is_empty()
    }

    pub(crate) fn split_buffers(&mut self) -> (&[Vec3], &Mat4, &mut [Vec3]) {
        (&self.rest_world, &self.world_to_local, &mut self.working)
    }

    pub(crate) fn restore_rest(&mut self) {
        self.working.copy_from_slice(&self.rest_local);
    }

    pub(crate) fn recompute_bounds(&mut self) {
        if let Some(bounds) = Aabb::from_points(&self.working) {
            self.bounds = bounds;
        }
    }
}

/// Owns every captured mesh for the session.
#[derive(Debug, Clone, Default)]
pub struct GeometryCache {
    meshes: Vec<CachedMesh>,
    skipped: Vec<SkippedMesh>,
}

impl GeometryCache {
    /// Captures `meshes` into a new cache.
    ///
    /// Malformed meshes are skipped with a warning; they never abort the
    /// capture of the others. There is no way to re-capture: the rest frame
    /// is fixed for the life of the cache.
    pub fn initialize<'a, I>(meshes: I) -> Self
    where
        I: IntoIterator<Item = &'a SceneMesh>,
    {
        let mut cache = Self::default();
        for mesh in meshes {
            match CachedMesh::capture(mesh) {
                Ok(entry) => cache.meshes.push(entry),
                Err(reason) => {
                    warn!(mesh = %mesh.name, %reason, "skipping mesh");
                    cache.skipped.push(SkippedMesh {
                        name: mesh.name.clone(),
                        reason,
                    });
                }
            }
        }
        let report = cache.report();
        info!(
            meshes = report.meshes,
            vertices = report.vertices,
            skipped = report.skipped,
            "geometry cache initialised"
        );
        cache
    }

    /// Counts for the capture pass.
    pub fn report(&self) -> CacheReport {
        CacheReport {
            meshes: self.meshes.len(),
            vertices: self.vertex_count(),
            skipped: self.skipped.len(),
        }
    }

    /// Meshes rejected at capture.
    pub fn skipped(&self) -> &[SkippedMesh] {
        &self.skipped
    }

    /// Number of cached meshes.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// `true` when nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Total vertex count across meshes.
    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(CachedMesh::len).sum()
    }

    /// Entry for `id`.
    pub fn mesh(&self, id: MeshId) -> Option<&CachedMesh> {
        self.meshes.get(id.0)
    }

    /// First mesh with the given scene name.
    pub fn find(&self, name: &str) -> Option<MeshId> {
        self.meshes.iter().position(|m| m.name == name).map(MeshId)
    }

    /// Immutable rest-frame world positions for `id`.
    pub fn rest(&self, id: MeshId) -> Option<&[Vec3]> {
        self.mesh(id).map(CachedMesh::rest_world)
    }

    /// Current-frame local positions for `id`.
    pub fn working(&self, id: MeshId) -> Option<&[Vec3]> {
        self.mesh(id).map(CachedMesh::working)
    }

    /// Writable current-frame buffer for `id`.
    pub fn working_mut(&mut self, id: MeshId) -> Option<&mut [Vec3]> {
        self.meshes.get_mut(id.0).map(CachedMesh::working_mut)
    }

    /// Iterates `(id, mesh)` in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &CachedMesh)> + '_ {
        self.meshes.iter().enumerate().map(|(i, m)| (MeshId(i), m))
    }

    pub(crate) fn meshes_mut(&mut self) -> &mut [CachedMesh] {
        &mut self.meshes
    }
}
