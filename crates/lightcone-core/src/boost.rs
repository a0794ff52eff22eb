// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lorentz boost matrix Λ over the basis `(ct, x, y, z)`.

use lightcone_math::{Mat4, Vec3, Vec4};

use crate::kinematics::Kinematics;

/// Below this β the boost is the identity. The closed form divides by β², so
/// the branch replaces a `0/0` whose limit is the identity anyway.
pub const BOOST_EPSILON: f32 = 1e-6;

/// Symmetric 4×4 Lorentz boost.
///
/// With `b` the β-vector, `g = γ·b` and `f = (γ − 1)/β²`:
///
/// ```text
/// Λ = | γ    gx         gy         gz        |
///     | gx   1+f·bx·bx  f·bx·by    f·bx·bz   |
///     | gy   f·by·bx    1+f·by·by  f·by·bz   |
///     | gz   f·bz·bx    f·bz·by    1+f·bz·bz |
/// ```
///
/// Rebuilt every frame; never cached beyond the frame it was built for.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoostMatrix {
    matrix: Mat4,
}

impl BoostMatrix {
    /// The identity boost.
    pub const fn identity() -> Self {
        Self {
            matrix: Mat4::identity(),
        }
    }

    /// Builds Λ from β, γ and the β-vector.
    ///
    /// Returns the identity exactly when `β < BOOST_EPSILON` (or β is NaN).
    pub fn build(beta: f32, gamma: f32, beta_vector: Vec3) -> Self {
        if beta.is_nan() || beta < BOOST_EPSILON {
            return Self::identity();
        }
        let [bx, by, bz] = beta_vector.to_array();
        let [gx, gy, gz] = beta_vector.scale(gamma).to_array();
        let f = (gamma - 1.0) / (beta * beta);

        // Symmetric, so column order equals row order.
        let matrix = Mat4::from_cols(
            [gamma, gx, gy, gz],
            [gx, 1.0 + f * bx * bx, f * bx * by, f * bx * bz],
            [gy, f * by * bx, 1.0 + f * by * by, f * by * bz],
            [gz, f * bz * bx, f * bz * by, 1.0 + f * bz * bz],
        );
        Self { matrix }
    }

    /// Builds Λ for an observer state.
    pub fn from_kinematics(kinematics: &Kinematics) -> Self {
        Self::build(
            kinematics.beta(),
            kinematics.gamma(),
            kinematics.beta_vector(),
        )
    }

    /// Builds Λ directly from a β-vector, treating it as a velocity with unit
    /// reference speed (so `|b|` is clamped like any other velocity).
    pub fn from_beta_vector(beta_vector: Vec3) -> Self {
        Self::from_kinematics(&Kinematics::from_velocity(beta_vector, 1.0))
    }

    /// The inverse boost, i.e. the boost by the negated β-vector.
    ///
    /// Flips the sign of the mixed time/space entries; the spatial block is
    /// even in `b` and stays unchanged.
    pub fn inverse(&self) -> Self {
        let mut data = self.matrix.to_array();
        for k in 1..4 {
            // (row 0, col k) and (row k, col 0) in column-major storage.
            data[k * 4] = -data[k * 4];
            data[k] = -data[k];
        }
        Self {
            matrix: Mat4::new(data),
        }
    }

    /// Applies the boost: `X' = Λ·X`.
    pub fn apply(&self, x: &Vec4) -> Vec4 {
        self.matrix.transform_vec4(x)
    }

    /// Underlying matrix.
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// `true` when Λ is exactly the identity matrix.
    pub fn is_identity(&self) -> bool {
        self.matrix == Mat4::identity()
    }
}

impl Default for BoostMatrix {
    fn default() -> Self {
        Self::identity()
    }
}
