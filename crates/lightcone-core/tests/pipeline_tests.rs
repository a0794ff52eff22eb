// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use lightcone_core::demo::{cube_mesh, grid_mesh, rod_scene, MARKER_A, MARKER_B};
use lightcone_core::{
    boost_vertex, BoostMatrix, FrameSnapshot, GeometryCache, Kinematics, MeshId, RenderSink,
    SceneMesh, SceneSource, VertexPipeline,
};
use lightcone_geom::{Aabb, Transform};
use lightcone_math::{Quat, Vec3};

fn rotated_scene() -> Vec<SceneMesh> {
    vec![
        grid_mesh("floor", 10.0, 4),
        SceneMesh::new(
            "tilted",
            Transform::new(
                Vec3::new(2.0, 1.0, 8.0),
                Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.7),
                Vec3::new(1.5, 0.5, 2.0),
            ),
            cube_mesh("unused", Vec3::ZERO, 1.0).vertices,
        ),
    ]
}

fn frame(v: Vec3, observer: Vec3) -> FrameSnapshot {
    FrameSnapshot::new(0, Kinematics::from_velocity(v, 1.0), observer)
}

#[test]
fn snapshot_boost_matches_its_kinematics() {
    let rest = FrameSnapshot::at_rest(3, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(rest.frame(), 3);
    assert!(rest.boost().is_identity());
    assert_eq!(rest.beta_vector(), Vec3::ZERO);

    let moving = frame(Vec3::new(0.0, 0.0, 0.6), Vec3::ZERO);
    assert_eq!(*moving.boost(), BoostMatrix::from_kinematics(moving.kinematics()));
    assert_eq!(moving.beta_vector(), moving.kinematics().beta_vector());
    assert_eq!(moving.observer_position(), Vec3::ZERO);
}

#[test]
fn velocity_zero_leaves_rest_geometry_bit_identical() {
    let scene = rotated_scene();
    let mut cache = GeometryCache::initialize(&scene);
    VertexPipeline::serial().step(&mut cache, &frame(Vec3::new(0.0, 0.0, 0.7), Vec3::ZERO), None);
    VertexPipeline::serial().step(&mut cache, &frame(Vec3::ZERO, Vec3::new(3.0, 1.0, -2.0)), None);
    for (i, mesh) in scene.iter().enumerate() {
        let id = cache.find(&mesh.name).expect("cached");
        assert_eq!(id.index(), i);
        assert_eq!(cache.working(id).expect("working"), mesh.vertices.as_slice());
    }
}

#[test]
fn identity_boost_maps_world_points_to_themselves() {
    let p = Vec3::new(4.0, -1.0, 2.5);
    let out = boost_vertex(p, &BoostMatrix::identity(), Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
    assert!((out - p).length() < 1e-6);
}

#[test]
fn repeated_steps_are_deterministic() {
    let scene = rotated_scene();
    let f = frame(Vec3::new(0.3, 0.1, 0.8), Vec3::new(0.5, 1.0, -3.0));
    let mut a = GeometryCache::initialize(&scene);
    let mut b = GeometryCache::initialize(&scene);
    VertexPipeline::serial().step(&mut a, &f, None);
    VertexPipeline::serial().step(&mut b, &f, None);
    // A second pass over the same cache must not depend on the previous output.
    VertexPipeline::serial().step(&mut a, &f, None);
    for (id, mesh) in a.iter() {
        let other = b.working(id).expect("same layout");
        let bits: Vec<_> = mesh.working().iter().map(|v| v.to_array().map(f32::to_bits)).collect();
        let other_bits: Vec<_> = other.iter().map(|v| v.to_array().map(f32::to_bits)).collect();
        assert_eq!(bits, other_bits);
    }
}

#[test]
fn parallel_pipeline_matches_serial() {
    let scene = rotated_scene();
    let f = frame(Vec3::new(-0.4, 0.0, 0.6), Vec3::new(1.0, 0.0, 1.0));
    let mut serial = GeometryCache::initialize(&scene);
    let mut parallel = GeometryCache::initialize(&scene);
    VertexPipeline::serial().step(&mut serial, &f, None);
    VertexPipeline::parallel().step(&mut parallel, &f, None);
    for (id, mesh) in serial.iter() {
        assert_eq!(mesh.working(), parallel.working(id).expect("same layout"));
    }
}

#[test]
fn rest_arrays_survive_steps() {
    let scene = rotated_scene();
    let mut cache = GeometryCache::initialize(&scene);
    let before: Vec<Vec<Vec3>> = cache.iter().map(|(_, m)| m.rest_world().to_vec()).collect();
    for i in 0..5 {
        let v = Vec3::new(0.1 * i as f32, 0.0, 0.9);
        VertexPipeline::serial().step(&mut cache, &frame(v, Vec3::new(0.0, 0.0, i as f32)), None);
    }
    let after: Vec<Vec<Vec3>> = cache.iter().map(|(_, m)| m.rest_world().to_vec()).collect();
    assert_eq!(before, after);
}

#[test]
fn parallel_rod_contracts_rather_than_stretches() {
    // With a uniform t = 0 slice the rod would read γ·L0 = 12.5.
    let scene = rod_scene(10.0, 0.0);
    let mut cache = GeometryCache::initialize(scene.meshes());
    VertexPipeline::serial().step(&mut cache, &frame(Vec3::new(0.0, 0.0, 0.6), Vec3::ZERO), None);
    let a = cache.mesh(cache.find(MARKER_A).expect("a")).expect("a").world_center();
    let b = cache.mesh(cache.find(MARKER_B).expect("b")).expect("b").world_center();
    assert!((a.distance(&b) - 8.0).abs() < 1e-3, "measured {}", a.distance(&b));
}

#[test]
fn observer_position_is_the_boost_origin() {
    let k = Kinematics::from_velocity(Vec3::new(0.0, 0.0, 0.6), 1.0);
    let boost = BoostMatrix::from_kinematics(&k);
    let observer = Vec3::new(3.0, 2.0, 1.0);
    let p = observer + Vec3::new(0.0, 0.0, 5.0);
    let out = boost_vertex(p, &boost, k.beta_vector(), observer);
    assert!((out - (observer + Vec3::new(0.0, 0.0, 4.0))).length() < 1e-5);
    // Offsets across the motion are untouched.
    let side = observer + Vec3::new(2.0, 0.0, 0.0);
    let out = boost_vertex(side, &boost, k.beta_vector(), observer);
    assert!((out - side).length() < 1e-5);
}

#[derive(Default)]
struct RecordingSink {
    seen: Vec<(MeshId, String, usize, Aabb)>,
}

impl RenderSink for RecordingSink {
    fn mesh_updated(&mut self, id: MeshId, name: &str, vertices: &[Vec3], bounds: &Aabb) {
        self.seen.push((id, name.to_owned(), vertices.len(), *bounds));
    }
}

#[test]
fn sink_receives_each_mesh_with_fresh_bounds() {
    let scene = rotated_scene();
    let mut cache = GeometryCache::initialize(&scene);
    let mut sink = RecordingSink::default();
    let stats = VertexPipeline::serial().step(
        &mut cache,
        &frame(Vec3::new(0.0, 0.0, 0.9), Vec3::ZERO),
        Some(&mut sink),
    );
    assert_eq!(stats.meshes, 2);
    assert_eq!(stats.vertices, 25 + 8);
    assert_eq!(sink.seen.len(), 2);
    for (id, name, len, bounds) in &sink.seen {
        let mesh = cache.mesh(*id).expect("mesh");
        assert_eq!(mesh.name(), name);
        assert_eq!(mesh.len(), *len);
        assert_eq!(Aabb::from_points(mesh.working()).as_ref(), Some(bounds));
    }
    // The floor is contracted along Z (γ ≈ 2.29): its local extent shrinks.
    let floor = cache.mesh(cache.find("floor").expect("floor")).expect("floor");
    assert!(floor.bounds().size().z() < 20.0 / 2.0);
    assert!((floor.bounds().size().x() - 20.0).abs() < 1e-4);
}

#[test]
fn step_mesh_rewrites_only_that_mesh() {
    let scene = rotated_scene();
    let mut cache = GeometryCache::initialize(&scene);
    let tilted = cache.find("tilted").expect("tilted");
    let floor = cache.find("floor").expect("floor");
    let f = frame(Vec3::new(0.0, 0.0, 0.8), Vec3::ZERO);
    assert!(VertexPipeline::serial().step_mesh(&mut cache, tilted, &f));
    assert_eq!(cache.working(floor).expect("floor"), scene[0].vertices.as_slice());
    assert_ne!(cache.working(tilted).expect("tilted"), scene[1].vertices.as_slice());
}
