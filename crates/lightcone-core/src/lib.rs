// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! lightcone-core: relativistic deformation of static scene geometry.
//!
//! Each frame the runtime samples a single observer, derives β, γ and the
//! β-vector ([`Kinematics`]), builds the Lorentz boost Λ ([`BoostMatrix`])
//! once, and pushes every cached rest-frame vertex through the
//! simultaneity-correct boost ([`VertexPipeline`]). A [`TheoryValidator`]
//! cross-checks the result against the analytical contraction formula.
//!
//! All per-frame consumers read the same immutable [`FrameSnapshot`]; the
//! rest-frame cache is captured exactly once and never mutated.
#![forbid(unsafe_code)]

mod boost;
mod cache;
/// Self-contained demo scene and observer used by the CLI, benches and tests.
pub mod demo;
mod frame;
mod kinematics;
mod pipeline;
mod ports;
mod runtime;
mod validator;

pub use boost::{BoostMatrix, BOOST_EPSILON};
pub use cache::{CacheReport, CachedMesh, GeometryCache, MeshId, MeshRejection, SkippedMesh};
pub use frame::FrameSnapshot;
pub use kinematics::{lorentz_factor, Kinematics, FORWARD, MAX_BETA};
pub use pipeline::{boost_vertex, StepStats, VertexPipeline};
pub use ports::{ObserverSource, RenderSink, SceneMesh, SceneSource};
pub use runtime::{FrameReport, RelativityRuntime, RuntimeConfig, RuntimeConfigError};
pub use validator::{expected_length, ContractionReport, TheoryValidator, ValidatorError};
