// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::FRAC_PI_2;

use lightcone_math::{Mat4, Quat, Vec3, Vec4};

const EPS: f32 = 1e-6;

fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn mat4_mul_operator_matches_method() {
    let s = Mat4::scale(2.0, 3.0, 4.0);
    let t = Mat4::translation(1.0, 2.0, 3.0);
    assert_eq!((t * s).to_array(), t.multiply(&s).to_array());
    assert_eq!((s * t).to_array(), s.multiply(&t).to_array());
}

#[test]
fn transform_vec4_identity_is_noop() {
    let v = Vec4::new(0.5, -1.0, 2.0, 3.5);
    assert_eq!(Mat4::identity().transform_vec4(&v), v);
    assert_eq!(Mat4::identity() * v, v);
}

#[test]
fn transform_vec4_reads_rows() {
    // Column-major: element (row 0, col 1) sits at index 4.
    let mut data = Mat4::identity().to_array();
    data[4] = 2.0;
    let m = Mat4::new(data);
    assert_eq!(m.at(0, 1), 2.0);
    let out = m.transform_vec4(&Vec4::new(1.0, 1.0, 0.0, 0.0));
    assert_eq!(out.to_array(), [3.0, 1.0, 0.0, 0.0]);
}

#[test]
fn transpose_swaps_rows_and_cols() {
    let m = Mat4::translation(4.0, 5.0, 6.0);
    let t = m.transpose();
    assert_eq!(t.at(3, 0), 4.0);
    assert_eq!(t.at(0, 3), 0.0);
    assert_eq!(t.transpose(), m);
}

#[test]
fn from_cols_matches_new() {
    let m = Mat4::from_cols(
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    );
    let expected: [f32; 16] = core::array::from_fn(|i| (i + 1) as f32);
    assert_eq!(m.to_array(), expected);
}

#[test]
fn rotation_transpose_undoes_rotation() {
    let q = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    let p = Vec3::new(0.0, 0.0, 1.0);
    let rotated = q.to_mat4().transform_point(&p);
    approx_eq3(rotated.to_array(), [1.0, 0.0, 0.0]);
    let back = q.to_mat4().transpose().transform_point(&rotated);
    approx_eq3(back.to_array(), p.to_array());
}

#[test]
fn zero_axis_yields_identity_rotation() {
    let q = Quat::from_axis_angle(Vec3::ZERO, 1.0);
    assert_eq!(q, Quat::identity());
    assert_eq!(q.to_mat4(), Mat4::identity());
}
