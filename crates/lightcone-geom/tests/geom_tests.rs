// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::FRAC_PI_3;

use lightcone_geom::{Aabb, Transform};
use lightcone_math::{Quat, Vec3};

fn approx_eq3(a: Vec3, b: Vec3, eps: f32) {
    let (a, b) = (a.to_array(), b.to_array());
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= eps, "index {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn inverse_round_trips_points() {
    let t = Transform::new(
        Vec3::new(3.0, -1.0, 7.5),
        Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), FRAC_PI_3),
        Vec3::new(2.0, 0.5, 3.0),
    );
    let fwd = t.to_mat4();
    let inv = t.inverse_mat4().expect("invertible");
    for p in [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-4.0, 0.25, 9.0),
    ] {
        let world = fwd.transform_point(&p);
        approx_eq3(inv.transform_point(&world), p, 1e-4);
    }
}

#[test]
fn zero_scale_is_not_invertible() {
    let t = Transform::new(Vec3::ZERO, Quat::identity(), Vec3::new(1.0, 0.0, 1.0));
    assert!(t.inverse_mat4().is_none());
    let bad = Transform::from_translation(Vec3::new(f32::NAN, 0.0, 0.0));
    assert!(bad.inverse_mat4().is_none());
}

#[test]
fn translation_only_transform_point() {
    let t = Transform::from_translation(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.transform_point(&Vec3::UNIT_X).to_array(), [2.0, 2.0, 3.0]);
}

#[test]
fn aabb_from_points_and_center() {
    assert!(Aabb::from_points(&[]).is_none());
    let pts = [
        Vec3::new(1.0, -2.0, 0.0),
        Vec3::new(-1.0, 4.0, 2.0),
        Vec3::new(0.0, 0.0, -2.0),
    ];
    let b = Aabb::from_points(&pts).expect("non-empty");
    assert_eq!(b.min().to_array(), [-1.0, -2.0, -2.0]);
    assert_eq!(b.max().to_array(), [1.0, 4.0, 2.0]);
    assert_eq!(b.center().to_array(), [0.0, 1.0, 0.0]);
    assert_eq!(b.size().to_array(), [2.0, 6.0, 4.0]);
}

#[test]
fn aabb_new_orders_corners() {
    let b = Aabb::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, 2.0, 0.0));
    assert_eq!(b.min().to_array(), [-1.0, 1.0, 0.0]);
    assert_eq!(b.max().to_array(), [1.0, 2.0, 1.0]);
}
