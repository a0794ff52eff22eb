// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Demo observer and procedural scene.

mod observer;
mod scene;

pub use observer::ConstantVelocityObserver;
pub use scene::{cube_mesh, grid_mesh, rod_scene, RodScene, MARKER_A, MARKER_B};
