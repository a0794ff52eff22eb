// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-frame observer snapshot: kinematics, boost matrix and observer position.

use lightcone_math::Vec3;

use crate::boost::BoostMatrix;
use crate::kinematics::Kinematics;

/// Immutable per-frame snapshot shared by every consumer of one frame.
///
/// Kinematics and Λ are derived exactly once, upstream of the per-mesh loop,
/// so all meshes in a frame see the same boost and the same observer origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameSnapshot {
    frame: u64,
    kinematics: Kinematics,
    boost: BoostMatrix,
    observer_position: Vec3,
}

impl FrameSnapshot {
    /// Captures a frame, building Λ from `kinematics`.
    pub fn new(frame: u64, kinematics: Kinematics, observer_position: Vec3) -> Self {
        Self {
            frame,
            kinematics,
            boost: BoostMatrix::from_kinematics(&kinematics),
            observer_position,
        }
    }

    /// Frame with the observer at rest at `observer_position`.
    pub fn at_rest(frame: u64, observer_position: Vec3) -> Self {
        Self::new(frame, Kinematics::at_rest(), observer_position)
    }

    /// Monotonic frame counter.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Observer state sampled for this frame.
    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    /// Λ for this frame.
    pub fn boost(&self) -> &BoostMatrix {
        &self.boost
    }

    /// β-vector for this frame.
    pub fn beta_vector(&self) -> Vec3 {
        self.kinematics.beta_vector()
    }

    /// Boost origin (observer world position) for this frame.
    pub fn observer_position(&self) -> Vec3 {
        self.observer_position
    }
}
