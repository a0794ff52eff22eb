// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Lightcone tools (config, prefs).
//! Keeps front-ends thin: they pick a store, load prefs, and hand the
//! resulting `RuntimeConfig` to the core.

pub mod config;
pub mod config_port;
pub mod memory;
pub mod prefs;
