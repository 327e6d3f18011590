//! # Dodge Runtime
//!
//! Command-line entry point. Runs the cube orientation environment headless
//! and prints a summary once the requested episodes have finished.

use anyhow::Result;
use clap::Parser;
use dodge::app::{self, PolicyKind, RunOptions};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about = "Run cube orientation episodes headless")]
struct Args {
    /// Scenario JSON file (defaults to the built-in slot wall)
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Number of episodes to run
    #[arg(long, default_value_t = 10)]
    episodes: u32,
    #[arg(long, value_enum, default_value_t = PolicyKind::Random)]
    policy: PolicyKind,
    /// Seed overriding the scenario's
    #[arg(long)]
    seed: Option<u64>,
    /// Vertical input axis for the heuristic policy
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    vertical: f32,
    /// Horizontal input axis for the heuristic policy
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    horizontal: f32,
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,
    /// trace, debug, info, warn or error
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt().with_max_level(args.log_level).init();

    let options = RunOptions {
        scenario: args.scenario,
        episodes: args.episodes,
        policy: args.policy,
        seed: args.seed,
        axes: (args.vertical, args.horizontal),
        max_ticks: args.max_ticks,
    };
    let summary = app::run(&options)?;

    tracing::info!(
        episodes = summary.episodes,
        passed = summary.passed,
        collided = summary.collided,
        cleared = summary.cleared,
        timed_out = summary.timed_out,
        ticks = summary.ticks,
        "Run finished. Mean return: {:.3}",
        summary.mean_return()
    );
    Ok(())
}
