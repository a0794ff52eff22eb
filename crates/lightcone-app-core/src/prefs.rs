// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted relativity preferences (observer, pipeline, validator).

use lightcone_core::demo::{MARKER_A, MARKER_B};
use lightcone_core::{RuntimeConfig, RuntimeConfigError, MAX_BETA};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default reference ("light") speed in world units per second.
pub const DEFAULT_REFERENCE_SPEED: f32 = 5.0;

/// Saved preferences that make no sense together.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrefsError {
    /// Reference speed must be positive and finite.
    #[error("reference speed must be positive and finite, got {0}")]
    ReferenceSpeed(f32),
    /// Marker names must be non-empty and distinct.
    #[error("validator markers must be two distinct names, got '{0}' and '{1}'")]
    Markers(String, String),
    /// Rejected by the runtime.
    #[error(transparent)]
    Runtime(#[from] RuntimeConfigError),
}

/// Saved preferences for a relativity session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RelativityPrefs {
    /// Observer motion limits.
    pub observer: ObserverPrefs,
    /// Vertex pipeline switches.
    pub pipeline: PipelinePrefs,
    /// Contraction check settings.
    pub validator: ValidatorPrefs,
}

/// Observer motion limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverPrefs {
    /// Speed that maps to β = 1.
    pub reference_speed: f32,
    /// β cap, in `[0, 1)`.
    pub max_beta: f32,
}

impl Default for ObserverPrefs {
    fn default() -> Self {
        Self {
            reference_speed: DEFAULT_REFERENCE_SPEED,
            max_beta: MAX_BETA,
        }
    }
}

/// Vertex pipeline switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelinePrefs {
    /// Spread meshes over the rayon pool when available.
    pub parallel: bool,
}

/// Contraction check settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorPrefs {
    /// Relative error logged as drift.
    pub tolerance: f32,
    /// Scene names of the two marker meshes.
    pub markers: [String; 2],
}

impl Default for ValidatorPrefs {
    fn default() -> Self {
        Self {
            tolerance: RuntimeConfig::DEFAULT_TOLERANCE,
            markers: [MARKER_A.to_owned(), MARKER_B.to_owned()],
        }
    }
}

impl RelativityPrefs {
    /// Checks every field without building anything.
    pub fn validate(&self) -> Result<(), PrefsError> {
        self.to_runtime_config().map(|_| ())
    }

    /// Converts to the runtime's validated config.
    pub fn to_runtime_config(&self) -> Result<RuntimeConfig, PrefsError> {
        let speed = self.observer.reference_speed;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(PrefsError::ReferenceSpeed(speed));
        }
        let [a, b] = &self.validator.markers;
        if a.is_empty() || b.is_empty() || a == b {
            return Err(PrefsError::Markers(a.clone(), b.clone()));
        }
        Ok(RuntimeConfig::new(
            self.observer.max_beta,
            self.pipeline.parallel,
            self.validator.tolerance,
        )?)
    }
}
