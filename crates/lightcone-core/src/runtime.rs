// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame driver wiring the injected collaborators to the pipeline.

use lightcone_math::Vec3;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::cache::GeometryCache;
use crate::frame::FrameSnapshot;
use crate::kinematics::{Kinematics, MAX_BETA};
use crate::pipeline::{StepStats, VertexPipeline};
use crate::ports::{ObserverSource, RenderSink, SceneSource};
use crate::validator::{ContractionReport, TheoryValidator, ValidatorError};

/// Invalid runtime settings.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RuntimeConfigError {
    /// β cap outside `[0, 1)`.
    #[error("max beta must lie in [0, 1), got {0}")]
    MaxBeta(f32),
    /// Negative or non-finite validator tolerance.
    #[error("validator tolerance must be finite and non-negative, got {0}")]
    Tolerance(f32),
}

/// Runtime settings, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeConfig {
    max_beta: f32,
    parallel: bool,
    validator_tolerance: f32,
}

impl RuntimeConfig {
    /// Default relative-error budget for the contraction check.
    pub const DEFAULT_TOLERANCE: f32 = 1e-3;

    /// Builds a config, rejecting values that would break the invariants.
    pub fn new(max_beta: f32, parallel: bool, validator_tolerance: f32) -> Result<Self, RuntimeConfigError> {
        if !(0.0..1.0).contains(&max_beta) {
            return Err(RuntimeConfigError::MaxBeta(max_beta));
        }
        if !validator_tolerance.is_finite() || validator_tolerance < 0.0 {
            return Err(RuntimeConfigError::Tolerance(validator_tolerance));
        }
        Ok(Self {
            max_beta,
            parallel,
            validator_tolerance,
        })
    }

    /// β cap.
    pub fn max_beta(&self) -> f32 {
        self.max_beta
    }

    /// Whether the pipeline may fan out across threads.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Relative error above which a contraction check is logged as drift.
    pub fn validator_tolerance(&self) -> f32 {
        self.validator_tolerance
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_beta: MAX_BETA,
            parallel: false,
            validator_tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

/// What one frame produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Frame counter, starting at 0.
    pub frame: u64,
    /// Observer state used for every mesh this frame.
    pub kinematics: Kinematics,
    /// Boost origin used this frame.
    pub observer_position: Vec3,
    /// Pipeline counts.
    pub stats: StepStats,
    /// Contraction check, when a validator is attached.
    pub contraction: Option<ContractionReport>,
}

/// Drives the per-frame pipeline from an injected observer and a cache
/// captured from an injected scene.
///
/// Missing either collaborator leaves the runtime disabled: `tick` does
/// nothing and the rest geometry stays as captured.
#[derive(Debug)]
pub struct RelativityRuntime<O> {
    observer: Option<O>,
    cache: GeometryCache,
    pipeline: VertexPipeline,
    validator: Option<TheoryValidator>,
    config: RuntimeConfig,
    frame: u64,
    enabled: bool,
}

impl<O: ObserverSource> RelativityRuntime<O> {
    /// Captures the scene (if any) and wires the observer (if any).
    pub fn new<S>(observer: Option<O>, scene: Option<&S>, config: RuntimeConfig) -> Self
    where
        S: SceneSource + ?Sized,
    {
        let cache = scene.map_or_else(GeometryCache::default, |s| {
            GeometryCache::initialize(s.meshes())
        });
        let enabled = match (&observer, scene) {
            (Some(_), Some(_)) => true,
            (None, _) => {
                warn!("no observer source; relativistic pipeline disabled");
                false
            }
            (_, None) => {
                warn!("no scene source; relativistic pipeline disabled");
                false
            }
        };
        let pipeline = if config.parallel() {
            VertexPipeline::parallel()
        } else {
            VertexPipeline::serial()
        };
        Self {
            observer,
            cache,
            pipeline,
            validator: None,
            config,
            frame: 0,
            enabled,
        }
    }

    /// Binds a contraction check to two cached meshes by name. On failure
    /// the error is logged and no validator is attached.
    pub fn attach_validator(&mut self, a: &str, b: &str) -> Result<(), ValidatorError> {
        match TheoryValidator::capture_by_name(&self.cache, a, b) {
            Ok(v) => {
                debug!(rest_length = v.rest_length(), "validator attached");
                self.validator = Some(v);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "validator not attached");
                self.validator = None;
                Err(err)
            }
        }
    }

    /// `false` when a collaborator was missing at setup.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The captured geometry.
    pub fn cache(&self) -> &GeometryCache {
        &self.cache
    }

    /// Attached validator.
    pub fn validator(&self) -> Option<&TheoryValidator> {
        self.validator.as_ref()
    }

    /// Runtime settings.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// The injected observer, for callers that own its motion.
    pub fn observer_mut(&mut self) -> Option<&mut O> {
        self.observer.as_mut()
    }

    /// Number of frames processed so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Samples the observer once, builds the frame snapshot once and runs
    /// the pipeline and validator against it.
    #[instrument(level = "trace", skip_all, fields(frame = self.frame))]
    pub fn tick(&mut self, sink: Option<&mut dyn RenderSink>) -> Option<FrameReport> {
        if !self.enabled {
            return None;
        }
        let observer = self.observer.as_ref()?;
        let kinematics = Kinematics::from_velocity_capped(
            observer.velocity(),
            observer.reference_speed(),
            self.config.max_beta(),
        );
        let snapshot = FrameSnapshot::new(self.frame, kinematics, observer.position());
        let stats = self.pipeline.step(&mut self.cache, &snapshot, sink);

        let contraction = match self.validator.as_ref().map(|v| v.check(&self.cache, &kinematics)) {
            Some(Ok(report)) => {
                if !report.within(self.config.validator_tolerance()) {
                    warn!(
                        beta = report.beta,
                        angle = report.angle_degrees,
                        error = report.relative_error,
                        "contraction drift above tolerance"
                    );
                }
                Some(report)
            }
            Some(Err(err)) => {
                warn!(%err, "contraction check failed");
                None
            }
            None => None,
        };

        debug!(
            beta = kinematics.beta(),
            gamma = kinematics.gamma(),
            meshes = stats.meshes,
            vertices = stats.vertices,
            error = ?contraction.map(|c| c.relative_error),
            "frame"
        );

        let report = FrameReport {
            frame: snapshot.frame(),
            kinematics,
            observer_position: snapshot.observer_position(),
            stats,
            contraction,
        };
        self.frame += 1;
        Some(report)
    }
}
