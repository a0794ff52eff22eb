// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Row types and table/JSON rendering for CLI output.

use comfy_table::{presets::ASCII_FULL, Table};
use lightcone_core::{ContractionReport, FrameReport};
use serde::Serialize;

/// Speed of light in m/s, for the apparent-speed readout.
pub const SPEED_OF_LIGHT_MPS: f64 = 299_792_458.0;

/// One `run` frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRow {
    /// Frame counter.
    pub frame: u64,
    /// Clamped β.
    pub beta: f32,
    /// Lorentz factor.
    pub gamma: f32,
    /// Observer position along the motion axis.
    pub observer_z: f32,
    /// Contraction check, if the markers were found.
    pub contraction: Option<ContractionRow>,
}

/// The contraction part of a row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContractionRow {
    /// θ between rod and motion, degrees.
    pub angle_degrees: f32,
    /// Rest length L0.
    pub rest_length: f32,
    /// Predicted length.
    pub expected: f32,
    /// Measured length.
    pub measured: f32,
    /// Relative error.
    pub relative_error: f32,
}

impl From<&ContractionReport> for ContractionRow {
    fn from(r: &ContractionReport) -> Self {
        Self {
            angle_degrees: r.angle_degrees,
            rest_length: r.rest_length,
            expected: r.expected,
            measured: r.measured,
            relative_error: r.relative_error,
        }
    }
}

impl From<&FrameReport> for FrameRow {
    fn from(r: &FrameReport) -> Self {
        Self {
            frame: r.frame,
            beta: r.kinematics.beta(),
            gamma: r.kinematics.gamma(),
            observer_z: r.observer_position.z(),
            contraction: r.contraction.as_ref().map(ContractionRow::from),
        }
    }
}

/// One `sweep` cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepRow {
    /// Requested β (before clamping).
    pub requested_beta: f32,
    /// Clamped β.
    pub beta: f32,
    /// Lorentz factor.
    pub gamma: f32,
    /// Contraction check.
    pub contraction: ContractionRow,
    /// Whether the error is within the configured tolerance.
    pub within_tolerance: bool,
}

/// `β·c` in m/s.
pub fn apparent_speed_mps(beta: f32) -> f64 {
    f64::from(beta) * SPEED_OF_LIGHT_MPS
}

fn contraction_cells(c: Option<&ContractionRow>) -> [String; 4] {
    c.map_or_else(
        || ["-".to_owned(), "-".to_owned(), "-".to_owned(), "-".to_owned()],
        |c| {
            [
                format!("{:.2}", c.angle_degrees),
                format!("{:.4}", c.expected),
                format!("{:.4}", c.measured),
                format!("{:.2e}", c.relative_error),
            ]
        },
    )
}

/// Table of `run` frames.
pub fn frame_table(rows: &[FrameRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        "frame", "beta", "gamma", "observer z", "theta", "expected", "measured", "error",
    ]);
    for row in rows {
        let [theta, expected, measured, error] = contraction_cells(row.contraction.as_ref());
        table.add_row(vec![
            row.frame.to_string(),
            format!("{:.3}", row.beta),
            format!("{:.4}", row.gamma),
            format!("{:.3}", row.observer_z),
            theta,
            expected,
            measured,
            error,
        ]);
    }
    table
}

/// Table of `sweep` cells.
pub fn sweep_table(rows: &[SweepRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        "beta", "gamma", "theta", "expected", "measured", "error", "ok",
    ]);
    for row in rows {
        let [theta, expected, measured, error] = contraction_cells(Some(&row.contraction));
        table.add_row(vec![
            format!("{:.3}", row.beta),
            format!("{:.4}", row.gamma),
            theta,
            expected,
            measured,
            error,
            if row.within_tolerance { "yes" } else { "NO" }.to_owned(),
        ]);
    }
    table
}
