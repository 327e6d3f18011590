//! # Headless episode loop
//!
//! [`run`] builds the world from a scenario, wraps it in a [`CubeEnv`] and
//! steps it at the configured fixed timestep until the requested number of
//! episodes has finished. Contacts reported by the obstacle field are fed
//! back to the agent after every tick, standing in for physics callbacks.

use anyhow::Result;
use clap::ValueEnum;
use rl::{CubeEnv, Env, EpisodeOrchestrator, HeuristicPolicy, LogDisplay, Policy, RandomPolicy, Transition};
use scenario::Scenario;
use std::path::PathBuf;

/// Policies selectable from the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Uniform random actions
    #[default]
    Random,
    /// Fixed manual axes
    Heuristic,
}

#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Scenario file; the built-in slot wall when `None`
    pub scenario: Option<PathBuf>,
    pub episodes: u32,
    pub policy: PolicyKind,
    /// Overrides the scenario seed
    pub seed: Option<u64>,
    /// Manual axes for the heuristic policy
    pub axes: (f32, f32),
    /// Hard stop regardless of how many episodes finished
    pub max_ticks: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            scenario: None,
            episodes: 10,
            policy: PolicyKind::Random,
            seed: None,
            axes: (0.0, 0.0),
            max_ticks: 1_000_000,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub episodes: u32,
    pub passed: u32,
    pub collided: u32,
    pub cleared: u32,
    pub timed_out: u32,
    pub ticks: u64,
    pub total_return: f32,
}

impl RunSummary {
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_return(&self) -> f32 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_return / self.episodes as f32
        }
    }
}

fn build_policy(options: &RunOptions, seed: u64) -> Box<dyn Policy> {
    match options.policy {
        PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
        PolicyKind::Heuristic => Box::new(HeuristicPolicy { vertical: options.axes.0, horizontal: options.axes.1 }),
    }
}

/// Run episodes until `options.episodes` have finished.
///
/// # Errors
///
/// Returns an error if the scenario cannot be loaded or its configuration is
/// invalid.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let scenario = match &options.scenario {
        Some(path) => Scenario::from_path(path)?,
        None => Scenario::builtin()?,
    };
    let (field, mut config) = scenario.into_world()?;
    if let Some(seed) = options.seed {
        config.seed = seed;
    }
    let seed = config.seed;

    tracing::info!(
        episodes = options.episodes,
        policy = ?options.policy,
        seed,
        dt = config.tick_duration,
        "Starting episode loop..."
    );

    let orchestrator = EpisodeOrchestrator::new(config, field)?.with_display(Box::new(LogDisplay));
    let mut env = CubeEnv::from_orchestrator(orchestrator);
    let mut policy = build_policy(options, seed);
    env.reset();

    let mut summary = RunSummary::default();
    let mut episode_return = 0.0;
    while summary.episodes < options.episodes {
        if summary.ticks >= options.max_ticks {
            tracing::warn!(ticks = summary.ticks, "tick budget exhausted before all episodes finished");
            break;
        }
        let action = policy.act(env.last_observation());
        let outcome = env.tick(action);
        summary.ticks += 1;
        episode_return += outcome.reward;

        match outcome.transition {
            Some(Transition::Cleared { reward }) => {
                summary.cleared += 1;
                tracing::debug!(reward, "all corner rays clear");
            }
            Some(Transition::TimedOut) => summary.timed_out += 1,
            Some(Transition::Finished { collided }) => {
                summary.episodes += 1;
                if collided {
                    summary.collided += 1;
                } else {
                    summary.passed += 1;
                }
                if let Some(point) = env.last_contact() {
                    tracing::info!(?point, "explosion");
                }
                tracing::info!(
                    "Episode {} complete. Return: {:.2}, collided: {}",
                    summary.episodes,
                    episode_return,
                    collided
                );
                summary.total_return += episode_return;
                episode_return = 0.0;
            }
            None => {}
        }
    }

    Ok(summary)
}
