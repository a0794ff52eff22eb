// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lightcone developer CLI: drive the rod scene, sweep β × θ against the
//! analytical contraction, and manage saved preferences.

pub mod app;
pub mod logging;
pub mod render;

pub use app::{entrypoint, execute, Cli, Commands, PrefsAction};
