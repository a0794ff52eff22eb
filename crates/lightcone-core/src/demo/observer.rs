// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use lightcone_math::Vec3;

use crate::ports::ObserverSource;

/// Observer coasting at a fixed velocity; position advances only when the
/// owner calls [`ConstantVelocityObserver::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantVelocityObserver {
    position: Vec3,
    velocity: Vec3,
    reference_speed: f32,
}

impl ConstantVelocityObserver {
    /// Observer at `position` moving with `velocity`.
    pub fn new(position: Vec3, velocity: Vec3, reference_speed: f32) -> Self {
        Self {
            position,
            velocity,
            reference_speed,
        }
    }

    /// Observer at the origin moving along +Z at `beta · reference_speed`.
    pub fn along_forward(beta: f32, reference_speed: f32) -> Self {
        Self::new(
            Vec3::ZERO,
            Vec3::UNIT_Z.scale(beta * reference_speed),
            reference_speed,
        )
    }

    /// Moves the observer by `velocity · dt`.
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Replaces the velocity.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }
}

impl ObserverSource for ConstantVelocityObserver {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn reference_speed(&self) -> f32 {
        self.reference_speed
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}
