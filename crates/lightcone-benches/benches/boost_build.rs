// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Per-frame setup cost: kinematics, Λ and a single vertex.
use criterion::{criterion_group, criterion_main, Criterion};
use lightcone_core::{boost_vertex, BoostMatrix, Kinematics};
use lightcone_math::Vec3;
use std::hint::black_box;

fn bench_boost(c: &mut Criterion) {
    let velocity = Vec3::new(1.0, 0.25, 3.0);
    c.bench_function("kinematics_from_velocity", |b| {
        b.iter(|| Kinematics::from_velocity(black_box(velocity), black_box(5.0)));
    });

    let kinematics = Kinematics::from_velocity(velocity, 5.0);
    c.bench_function("boost_from_kinematics", |b| {
        b.iter(|| BoostMatrix::from_kinematics(black_box(&kinematics)));
    });

    let boost = BoostMatrix::from_kinematics(&kinematics);
    let beta_vector = kinematics.beta_vector();
    c.bench_function("boost_vertex", |b| {
        b.iter(|| {
            boost_vertex(
                black_box(Vec3::new(3.0, 1.0, 12.0)),
                &boost,
                beta_vector,
                black_box(Vec3::ZERO),
            )
        });
    });
}

criterion_group!(benches, bench_boost);
criterion_main!(benches);
