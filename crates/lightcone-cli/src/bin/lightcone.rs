// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! CLI entry point for Lightcone.

use anyhow::Result;
use lightcone_cli::entrypoint;

fn main() -> Result<()> {
    entrypoint()
}
