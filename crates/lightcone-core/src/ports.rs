// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ports to the collaborators the core does not own (input/physics, scene
//! authoring, rendering). Implementations are injected once at setup.

use lightcone_geom::{Aabb, Transform};
use lightcone_math::Vec3;

use crate::cache::MeshId;

/// Supplies the observer's motion. Sampled once per frame.
pub trait ObserverSource {
    /// Current velocity in world units per second.
    fn velocity(&self) -> Vec3;
    /// Reference ("light") speed; β = |velocity| / reference speed.
    fn reference_speed(&self) -> f32;
    /// Current world position; used as the boost origin.
    fn position(&self) -> Vec3;
}

impl<T: ObserverSource + ?Sized> ObserverSource for &T {
    fn velocity(&self) -> Vec3 {
        (**self).velocity()
    }
    fn reference_speed(&self) -> f32 {
        (**self).reference_speed()
    }
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

/// One static mesh as authored in the scene.
///
/// `transform` is `None` when the authoring side has no placement for the
/// object; such meshes are skipped by the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMesh {
    /// Object name, used for lookup and log lines.
    pub name: String,
    /// Local → world placement.
    pub transform: Option<Transform>,
    /// Local-space vertex positions.
    pub vertices: Vec<Vec3>,
}

impl SceneMesh {
    /// Convenience constructor for a placed mesh.
    pub fn new(name: impl Into<String>, transform: Transform, vertices: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            transform: Some(transform),
            vertices,
        }
    }
}

/// Enumerates the static environment at startup.
pub trait SceneSource {
    /// Meshes to capture. Borrowed: the cache copies what it keeps.
    fn meshes(&self) -> &[SceneMesh];
}

impl SceneSource for [SceneMesh] {
    fn meshes(&self) -> &[SceneMesh] {
        self
    }
}

impl SceneSource for Vec<SceneMesh> {
    fn meshes(&self) -> &[SceneMesh] {
        self
    }
}

/// Receives each mesh after the pipeline rewrites it.
pub trait RenderSink {
    /// `vertices` are local space; `bounds` is their freshly recomputed box.
    fn mesh_updated(&mut self, id: MeshId, name: &str, vertices: &[Vec3], bounds: &Aabb);
}
