// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Object transforms mapping mesh vertices between local and world space.

use lightcone_math::{Mat4, Quat, Vec3, EPSILON};

/// Object transform with non-uniform scale, used for local ↔ world mapping of
/// mesh vertices.
///
/// Conventions:
/// - `translation` in world units.
/// - `rotation` as a unit quaternion (normalized internally when converting).
/// - `scale` is non-uniform and applied before rotation/translation.
///
/// Determinism:
/// - `to_mat4` constructs `M = T * R * S` with `f32` ops; no FMA.
/// - `inverse_mat4` constructs `M⁻¹ = S⁻¹ * Rᵀ * T⁻¹` analytically rather
///   than by general inversion, so round trips stay tight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::new(0.0, 0.0, 0.0),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Pure translation.
    #[must_use]
    pub const fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::identity(), Vec3::new(1.0, 1.0, 1.0))
    }

    /// Translation component.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Returns the column-major local → world matrix.
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        let [sx, sy, sz] = self.scale.to_array();
        let [tx, ty, tz] = self.translation.to_array();
        let s = Mat4::scale(sx, sy, sz);
        let r = self.rotation.to_mat4();
        let t = Mat4::translation(tx, ty, tz);
        t.multiply(&r).multiply(&s)
    }

    /// Returns the world → local matrix, or `None` when any scale component
    /// is degenerate (`|s| ≤ EPSILON`) or the transform is not finite.
    #[must_use]
    pub fn inverse_mat4(&self) -> Option<Mat4> {
        let finite = self.translation.is_finite()
            && self.scale.is_finite()
            && self.rotation.to_array().iter().all(|c| c.is_finite());
        let [sx, sy, sz] = self.scale.to_array();
        if !finite || sx.abs() <= EPSILON || sy.abs() <= EPSILON || sz.abs() <= EPSILON {
            return None;
        }
        let [tx, ty, tz] = self.translation.to_array();
        let s_inv = Mat4::scale(1.0 / sx, 1.0 / sy, 1.0 / sz);
        let r_inv = self.rotation.to_mat4().transpose();
        let t_inv = Mat4::translation(-tx, -ty, -tz);
        Some(s_inv.multiply(&r_inv).multiply(&t_inv))
    }

    /// Maps a local-space point into world space.
    #[must_use]
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.to_mat4().transform_point(point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
