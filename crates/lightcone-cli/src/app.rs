// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Argument parsing and command dispatch.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use lightcone_app_core::config::{ConfigService, ConfigStore};
use lightcone_app_core::config_port::ConfigPort;
use lightcone_app_core::prefs::RelativityPrefs;
use lightcone_config_fs::FsConfigStore;
use lightcone_core::demo::{rod_scene, ConstantVelocityObserver};
use lightcone_core::{RelativityRuntime, RuntimeConfig};
use tracing::info;

use crate::logging;
use crate::render::{apparent_speed_mps, frame_table, sweep_table, ContractionRow, FrameRow, SweepRow};

/// Relativistic length-contraction sandbox
#[derive(Parser, Debug)]
#[command(name = "lightcone", version)]
pub struct Cli {
    /// Directory holding saved preferences (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    /// What to do
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fly an observer past a rod and report its measured length per frame
    #[command(allow_negative_numbers = true)]
    Run {
        /// Observer speed as a fraction of the reference speed
        #[arg(long, default_value_t = 0.6)]
        beta: f32,
        /// Rod angle from the direction of motion, degrees
        #[arg(long, default_value_t = 0.0)]
        angle: f32,
        /// Rod rest length
        #[arg(long, default_value_t = 10.0)]
        length: f32,
        /// Frames to simulate
        #[arg(long, default_value_t = 5)]
        frames: u32,
        /// Seconds per frame
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compare measured and predicted lengths over a grid of speeds and angles
    #[command(allow_negative_numbers = true)]
    Sweep {
        /// Comma-separated β values
        #[arg(long, value_delimiter = ',', default_values_t = [0.0, 0.3, 0.6, 0.9, 0.99])]
        betas: Vec<f32>,
        /// Comma-separated rod angles, degrees
        #[arg(long, value_delimiter = ',', default_values_t = [0.0, 30.0, 45.0, 60.0, 90.0])]
        angles: Vec<f32>,
        /// Rod rest length
        #[arg(long, default_value_t = 10.0)]
        length: f32,
        /// Exit with an error if any cell exceeds the tolerance
        #[arg(long)]
        strict: bool,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show or edit saved preferences
    Prefs {
        /// Preference operation
        #[command(subcommand)]
        action: PrefsAction,
    },
}

/// `prefs` operations.
#[derive(Subcommand, Debug)]
pub enum PrefsAction {
    /// Print the effective preferences as JSON
    Show,
    /// Restore defaults
    Reset,
    /// Set the reference speed (world units per second for β = 1)
    SetSpeed {
        /// New reference speed
        speed: f32,
    },
    /// Set the β cap
    SetMaxBeta {
        /// New cap in [0, 1)
        max_beta: f32,
    },
    /// Enable or disable the parallel pipeline
    SetParallel {
        /// `true` or `false`
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
}

/// Parses `std::env::args`, installs logging and runs the command against stdout.
pub fn entrypoint() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

/// Runs a parsed command, writing results to `out`.
pub fn execute(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let service = ConfigService::new(open_store(cli.config_dir)?);
    match cli.command {
        Commands::Run {
            beta,
            angle,
            length,
            frames,
            dt,
            json,
        } => {
            let prefs = service.load_prefs().context("failed to load preferences")?;
            let rows = run_rod(&prefs, beta, angle, length, frames, dt)?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &rows)?;
                writeln!(out)?;
            } else {
                if let Some(first) = rows.first() {
                    writeln!(
                        out,
                        "beta = {:.3}  gamma = {:.4}  apparent speed = {:.4e} m/s",
                        first.beta,
                        first.gamma,
                        apparent_speed_mps(first.beta)
                    )?;
                }
                writeln!(out, "{}", frame_table(&rows))?;
            }
        }
        Commands::Sweep {
            betas,
            angles,
            length,
            strict,
            json,
        } => {
            let prefs = service.load_prefs().context("failed to load preferences")?;
            let rows = sweep(&prefs, &betas, &angles, length)?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &rows)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", sweep_table(&rows))?;
            }
            let failed = rows.iter().filter(|r| !r.within_tolerance).count();
            if strict && failed > 0 {
                bail!(
                    "{failed} of {} cells exceed tolerance {}",
                    rows.len(),
                    prefs.validator.tolerance
                );
            }
        }
        Commands::Prefs { action } => prefs_command(&service, action, out)?,
    }
    Ok(())
}

fn open_store(config_dir: Option<PathBuf>) -> Result<FsConfigStore> {
    let store = match config_dir {
        Some(dir) => FsConfigStore::with_root(&dir)
            .with_context(|| format!("failed to open config dir {}", dir.display()))?,
        None => FsConfigStore::new().context("failed to open platform config dir")?,
    };
    Ok(store)
}

fn runtime_for(
    prefs: &RelativityPrefs,
    config: RuntimeConfig,
    beta: f32,
    angle: f32,
    length: f32,
) -> Result<RelativityRuntime<ConstantVelocityObserver>> {
    if !beta.is_finite() || beta < 0.0 {
        bail!("beta must be finite and non-negative, got {beta}");
    }
    if !length.is_finite() || length <= 0.0 {
        bail!("rod length must be positive, got {length}");
    }
    let scene = rod_scene(length, angle);
    let observer = ConstantVelocityObserver::along_forward(beta, prefs.observer.reference_speed);
    let mut runtime = RelativityRuntime::new(Some(observer), Some(&scene), config);
    let [a, b] = &prefs.validator.markers;
    runtime
        .attach_validator(a, b)
        .with_context(|| format!("validator markers '{a}' and '{b}' are not usable in the rod scene"))?;
    Ok(runtime)
}

fn run_rod(
    prefs: &RelativityPrefs,
    beta: f32,
    angle: f32,
    length: f32,
    frames: u32,
    dt: f32,
) -> Result<Vec<FrameRow>> {
    let config = prefs.to_runtime_config().context("invalid preferences")?;
    let mut runtime = runtime_for(prefs, config, beta, angle, length)?;
    let mut rows = Vec::with_capacity(frames as usize);
    for _ in 0..frames {
        let Some(report) = runtime.tick(None) else {
            bail!("relativity runtime is disabled");
        };
        rows.push(FrameRow::from(&report));
        if let Some(observer) = runtime.observer_mut() {
            observer.advance(dt);
        }
    }
    info!(frames = rows.len(), "run complete");
    Ok(rows)
}

fn sweep(prefs: &RelativityPrefs, betas: &[f32], angles: &[f32], length: f32) -> Result<Vec<SweepRow>> {
    let config = prefs.to_runtime_config().context("invalid preferences")?;
    let mut rows = Vec::with_capacity(betas.len() * angles.len());
    for &beta in betas {
        for &angle in angles {
            let mut runtime = runtime_for(prefs, config, beta, angle, length)?;
            let Some(report) = runtime.tick(None) else {
                bail!("relativity runtime is disabled");
            };
            let Some(contraction) = report.contraction else {
                bail!("contraction check failed at beta {beta}, angle {angle}");
            };
            rows.push(SweepRow {
                requested_beta: beta,
                beta: report.kinematics.beta(),
                gamma: report.kinematics.gamma(),
                contraction: ContractionRow::from(&contraction),
                within_tolerance: contraction.within(config.validator_tolerance()),
            });
        }
    }
    info!(cells = rows.len(), "sweep complete");
    Ok(rows)
}

fn prefs_command<S>(service: &ConfigService<S>, action: PrefsAction, out: &mut dyn Write) -> Result<()>
where
    S: ConfigStore,
{
    let mut prefs = service.load_prefs().context("failed to load preferences")?;
    match action {
        PrefsAction::Show => {
            serde_json::to_writer_pretty(&mut *out, &prefs)?;
            writeln!(out)?;
            return Ok(());
        }
        PrefsAction::Reset => prefs = RelativityPrefs::default(),
        PrefsAction::SetSpeed { speed } => prefs.observer.reference_speed = speed,
        PrefsAction::SetMaxBeta { max_beta } => prefs.observer.max_beta = max_beta,
        PrefsAction::SetParallel { enabled } => prefs.pipeline.parallel = enabled,
    }
    prefs.validate().context("refusing to save invalid preferences")?;
    service.save_prefs(&prefs).context("failed to save preferences")?;
    info!("preferences saved");
    writeln!(out, "saved")?;
    Ok(())
}
