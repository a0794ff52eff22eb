// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Analytical length-contraction check.
//!
//! Two markers are captured at rest; afterwards their boosted separation is
//! compared with `L0·sqrt(1 − β²cos²θ)`, where θ is the angle between the
//! rest separation and the direction of motion. The check never looks at Λ,
//! so it catches regressions in the matrix and the simultaneity slice alike.

use lightcone_math::{rad_to_deg, Vec3, EPSILON};
use thiserror::Error;

use crate::cache::{GeometryCache, MeshId};
use crate::kinematics::Kinematics;

const EXPECTED_FLOOR: f32 = 1e-9;

/// Validator failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    /// A marker id is not in the cache.
    #[error("marker {0:?} is not in the geometry cache")]
    UnknownMarker(MeshId),
    /// A marker name is not in the cache.
    #[error("marker '{0}' is not in the geometry cache")]
    UnknownMarkerName(String),
    /// The validator was built from raw points and has no markers to read.
    #[error("validator has no bound markers")]
    Unbound,
    /// The markers coincide at rest, so no length can be compared.
    #[error("markers coincide at rest")]
    DegenerateRestLength,
}

/// Expected contracted length for rest length `l0` at speed β and
/// `cos θ` between the separation and the motion direction.
pub fn expected_length(l0: f32, beta: f32, cos_theta: f32) -> f32 {
    l0 * (1.0 - beta * beta * cos_theta * cos_theta).sqrt()
}

/// One comparison of measured against predicted length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContractionReport {
    /// β used for the prediction.
    pub beta: f32,
    /// `|cos θ|` between rest separation and motion direction.
    pub cos_theta: f32,
    /// θ in degrees, in `[0, 90]`.
    pub angle_degrees: f32,
    /// Rest length L0.
    pub rest_length: f32,
    /// Predicted length.
    pub expected: f32,
    /// Measured boosted separation.
    pub measured: f32,
    /// `|measured − expected| / expected`, or 0 when expected ≈ 0.
    pub relative_error: f32,
}

impl ContractionReport {
    /// `true` when the relative error is at most `tolerance`.
    pub fn within(&self, tolerance: f32) -> bool {
        self.relative_error <= tolerance
    }
}

/// Rest-length reference between two markers.
#[derive(Debug, Clone, PartialEq)]
pub struct TheoryValidator {
    markers: Option<(MeshId, MeshId)>,
    rest_vector: Vec3,
    rest_length: f32,
}

impl TheoryValidator {
    /// Captures the rest separation of two cached meshes, measured between
    /// the centers of their rest-frame world bounds.
    pub fn capture(cache: &GeometryCache, a: MeshId, b: MeshId) -> Result<Self, ValidatorError> {
        let ma = cache.mesh(a).ok_or(ValidatorError::UnknownMarker(a))?;
        let mb = cache.mesh(b).ok_or(ValidatorError::UnknownMarker(b))?;
        let mut validator = Self::from_rest_points(
            ma.rest_world_bounds().center(),
            mb.rest_world_bounds().center(),
        )?;
        validator.markers = Some((a, b));
        Ok(validator)
    }

    /// [`TheoryValidator::capture`] by scene name.
    pub fn capture_by_name(cache: &GeometryCache, a: &str, b: &str) -> Result<Self, ValidatorError> {
        let ia = cache
            .find(a)
            .ok_or_else(|| ValidatorError::UnknownMarkerName(a.to_owned()))?;
        let ib = cache
            .find(b)
            .ok_or_else(|| ValidatorError::UnknownMarkerName(b.to_owned()))?;
        Self::capture(cache, ia, ib)
    }

    /// Validator over two raw rest points; only [`TheoryValidator::evaluate`]
    /// is usable on it.
    pub fn from_rest_points(a0: Vec3, b0: Vec3) -> Result<Self, ValidatorError> {
        let rest_vector = b0 - a0;
        let rest_length = rest_vector.length();
        if rest_length <= EPSILON {
            return Err(ValidatorError::DegenerateRestLength);
        }
        Ok(Self {
            markers: None,
            rest_vector,
            rest_length,
        })
    }

    /// Rest separation `B0 − A0`.
    pub fn rest_vector(&self) -> Vec3 {
        self.rest_vector
    }

    /// Rest length L0.
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Bound marker ids, if any.
    pub fn markers(&self) -> Option<(MeshId, MeshId)> {
        self.markers
    }

    /// Compares the current positions `a_now`, `b_now` with the prediction
    /// for `kinematics`.
    pub fn evaluate(&self, kinematics: &Kinematics, a_now: Vec3, b_now: Vec3) -> ContractionReport {
        let axis = self.rest_vector.scale(1.0 / self.rest_length);
        let cos_theta = axis.dot(&kinematics.direction()).abs().min(1.0);
        let beta = kinematics.beta();
        let expected = expected_length(self.rest_length, beta, cos_theta);
        let measured = a_now.distance(&b_now);
        let relative_error = if expected > EXPECTED_FLOOR {
            (measured - expected).abs() / expected
        } else {
            0.0
        };
        ContractionReport {
            beta,
            cos_theta,
            angle_degrees: rad_to_deg(cos_theta.acos()),
            rest_length: self.rest_length,
            expected,
            measured,
            relative_error,
        }
    }

    /// Reads the markers' current world centers from `cache` and evaluates.
    pub fn check(&self, cache: &GeometryCache, kinematics: &Kinematics) -> Result<ContractionReport, ValidatorError> {
        let (a, b) = self.markers.ok_or(ValidatorError::Unbound)?;
        let ma = cache.mesh(a).ok_or(ValidatorError::UnknownMarker(a))?;
        let mb = cache.mesh(b).ok_or(ValidatorError::UnknownMarker(b))?;
        Ok(self.evaluate(kinematics, ma.world_center(), mb.world_center()))
    }
}
