// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic math helpers for the Lorentz pipeline: scalar utilities,
//! spatial vectors, spacetime 4-vectors, matrices and quaternions.
//!
//! All operations round to `f32` and avoid fused multiply-add so replaying
//! the same inputs yields bit-identical outputs on every target.
#![forbid(unsafe_code)]

use std::f32::consts::TAU;

mod mat4;
mod quat;
mod vec3;
mod vec4;

pub use mat4::Mat4;
pub use quat::Quat;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
///
/// A `NaN` input collapses to `min`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_nan_collapses_to_min() {
        assert_eq!(clamp(f32::NAN, 0.0, 0.99).to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn clamp_caps_at_max_exactly() {
        assert_eq!(clamp(10.0, 0.0, 0.99), 0.99);
        assert_eq!(clamp(f32::INFINITY, 0.0, 0.99), 0.99);
    }

    #[test]
    fn degree_round_trip() {
        let r = deg_to_rad(60.0);
        assert!((rad_to_deg(r) - 60.0).abs() < 1e-4);
    }
}
