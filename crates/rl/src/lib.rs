#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
//! # Cube Orientation Environment
//!
//! Single-agent reinforcement learning environment: a cube must rotate until
//! none of the rays cast from its eight bounding-box corners hit an obstacle,
//! then slides to a goal and is judged on whether it touched anything.
//!
//! -   [`CubeAgent`] owns the cube: perception, reward shaping, action
//!     application and the move primitives.
//! -   [`EpisodeOrchestrator`] owns the orient/translate state machine and its
//!     timers, and is driven by an explicit `tick(dt, action)`.
//! -   [`CubeEnv`] wraps both behind the gym-style [`Env`] trait.
//!
//! Geometry queries go through the capabilities defined in the `physics`
//! crate, so everything here runs against a deterministic fake in tests.

pub mod agent;
pub mod config;
pub mod display;
pub mod env;
pub mod error;
pub mod observation;
pub mod orchestrator;
pub mod policy;
pub mod reward;
pub mod sensor;

pub use agent::{Action, CubeAgent, CubeState};
pub use config::EnvConfig;
pub use display::{LogDisplay, TimerDisplay};
pub use env::{CubeEnv, Env};
pub use error::ConfigError;
pub use observation::{Observation, OBS_SIZE};
pub use orchestrator::{EpisodeOrchestrator, EpisodePhase, PhaseTimer, TickOutcome, Transition};
pub use policy::{HeuristicPolicy, Policy, RandomPolicy};
pub use reward::shaped_reward;
pub use sensor::{CornerSensor, RayHitMask};
