// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Observer kinematics: β, γ, direction and β-vector from a raw velocity.

use lightcone_math::{clamp, Vec3, EPSILON};

/// Upper bound for β. Kept strictly below 1 so γ stays finite.
pub const MAX_BETA: f32 = 0.99;

/// Canonical direction used when the observer is (numerically) at rest.
pub const FORWARD: Vec3 = Vec3::UNIT_Z;

/// Lorentz factor `1 / sqrt(1 − β²)`.
///
/// Callers keep `β < 1`; [`Kinematics`] guarantees this through its clamp.
pub fn lorentz_factor(beta: f32) -> f32 {
    1.0 / (1.0 - beta * beta).sqrt()
}

/// Unit direction of a finite velocity whose squared length overflows.
fn direction_of_huge(velocity: Vec3) -> Vec3 {
    let [x, y, z] = velocity.to_array();
    let m = x.abs().max(y.abs()).max(z.abs());
    Vec3::new(x / m, y / m, z / m).normalize()
}

/// Relativistic state of the observer for one frame.
///
/// Derived, never stored across frames: velocity changes continuously under
/// control input, so the state is recomputed from scratch each frame.
///
/// Invariants:
/// - `beta ∈ [0, max_beta]` with `max_beta < 1`.
/// - `gamma ≥ 1`.
/// - `|beta_vector| = beta` (up to `f32` rounding).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Kinematics {
    velocity: Vec3,
    beta: f32,
    gamma: f32,
    direction: Vec3,
    beta_vector: Vec3,
}

impl Kinematics {
    /// Observer at rest: β = 0, γ = 1, direction = [`FORWARD`].
    pub const fn at_rest() -> Self {
        Self {
            velocity: Vec3::ZERO,
            beta: 0.0,
            gamma: 1.0,
            direction: FORWARD,
            beta_vector: Vec3::ZERO,
        }
    }

    /// Derives the state from `velocity` (world units per second) and the
    /// reference ("light") speed, clamping β to [`MAX_BETA`].
    ///
    /// # Examples
    /// ```
    /// use lightcone_core::Kinematics;
    /// use lightcone_math::Vec3;
    /// let k = Kinematics::from_velocity(Vec3::new(0.0, 0.0, 3.0), 5.0);
    /// assert!((k.beta() - 0.6).abs() < 1e-6);
    /// assert!((k.gamma() - 1.25).abs() < 1e-5);
    /// ```
    pub fn from_velocity(velocity: Vec3, reference_speed: f32) -> Self {
        Self::from_velocity_capped(velocity, reference_speed, MAX_BETA)
    }

    /// Same as [`Kinematics::from_velocity`] with an explicit β cap.
    ///
    /// A cap outside `[0, 1)` falls back to [`MAX_BETA`]. A non-positive or
    /// non-finite reference speed, or a non-finite velocity, yields the
    /// at-rest state rather than an error.
    pub fn from_velocity_capped(velocity: Vec3, reference_speed: f32, max_beta: f32) -> Self {
        if !velocity.is_finite() || !reference_speed.is_finite() || reference_speed <= 0.0 {
            return Self {
                velocity,
                ..Self::at_rest()
            };
        }
        let cap = if (0.0..1.0).contains(&max_beta) {
            max_beta
        } else {
            MAX_BETA
        };

        let speed = velocity.length();
        let beta = clamp(speed / reference_speed, 0.0, cap);
        let direction = if speed < EPSILON {
            FORWARD
        } else if speed.is_finite() {
            let [x, y, z] = velocity.to_array();
            Vec3::new(x / speed, y / speed, z / speed)
        } else {
            direction_of_huge(velocity)
        };

        Self {
            velocity,
            beta,
            gamma: lorentz_factor(beta),
            direction,
            beta_vector: direction.scale(beta),
        }
    }

    /// Raw velocity this state was derived from.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Speed `|velocity|` in world units per second.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Velocity as a fraction of the reference speed, clamped.
    pub fn beta(&self) -> f32 {
        self.beta
    }

    /// Lorentz factor γ.
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Unit direction of motion ([`FORWARD`] at rest).
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// `direction · β`.
    pub fn beta_vector(&self) -> Vec3 {
        self.beta_vector
    }

    /// Rapidity `atanh β`; additive under collinear boosts.
    pub fn rapidity(&self) -> f32 {
        self.beta.atanh()
    }
}

impl Default for Kinematics {
    fn default() -> Self {
        Self::at_rest()
    }
}
