//! Gym-style environment interface and the cube environment adapter.

use physics::{ContactProbe, ObstaclePivot, RayCaster};

use crate::agent::Action;
use crate::config::EnvConfig;
use crate::error::ConfigError;
use crate::observation::{Observation, OBS_SIZE};
use crate::orchestrator::{EpisodeOrchestrator, TickOutcome};

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one action and returns the new observation vector, a reward
/// signal, and whether the episode has terminated.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one action.
    ///
    /// Returns `(obs, reward, done)` where `obs` is the new observation vector,
    /// `reward` is the scalar reward, and `done` indicates episode termination.
    fn step(&mut self, action: &[f32]) -> (Vec<f32>, f32, bool);

    /// Reset the environment to its starting state and return the initial
    /// observation vector.
    fn reset(&mut self) -> Vec<f32>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action space.
    fn action_size(&self) -> usize;
}

/// Runs an [`EpisodeOrchestrator`] at the configured fixed timestep and feeds
/// it contacts from the world after every tick.
pub struct CubeEnv<W> {
    orchestrator: EpisodeOrchestrator<W>,
    last_observation: Observation,
    last_contact: Option<glam::Vec3>,
}

impl<W: RayCaster + ObstaclePivot + ContactProbe> CubeEnv<W> {
    /// # Errors
    ///
    /// Fails when the configuration does not validate.
    pub fn new(config: EnvConfig, world: W) -> Result<Self, ConfigError> {
        Ok(Self::from_orchestrator(EpisodeOrchestrator::new(config, world)?))
    }

    pub fn from_orchestrator(orchestrator: EpisodeOrchestrator<W>) -> Self {
        let last_observation = orchestrator.agent().collect_observation();
        Self { orchestrator, last_observation, last_contact: None }
    }

    pub fn orchestrator(&self) -> &EpisodeOrchestrator<W> {
        &self.orchestrator
    }

    pub fn orchestrator_mut(&mut self) -> &mut EpisodeOrchestrator<W> {
        &mut self.orchestrator
    }

    pub fn last_observation(&self) -> &Observation {
        &self.last_observation
    }

    /// Point of the first contact in the most recent episode, if any.
    pub fn last_contact(&self) -> Option<glam::Vec3> {
        self.last_contact
    }

    /// One fixed-length tick, followed by a contact check on the new pose.
    pub fn tick(&mut self, action: Action) -> TickOutcome {
        if self.orchestrator.agent().is_episode_done() {
            self.last_contact = None;
        }
        let dt = self.orchestrator.config().tick_duration;
        let outcome = self.orchestrator.tick(dt, action);
        if let Some(observation) = outcome.observation {
            self.last_observation = observation;
        }
        if !outcome.done {
            let agent = self.orchestrator.agent();
            if let Some(contact) = self.orchestrator.world().probe_contact(agent.pose(), agent.shape()) {
                if let Some(point) = self.orchestrator.notify_collision(contact.point) {
                    self.last_contact = Some(point);
                }
            }
        }
        outcome
    }
}

impl<W: RayCaster + ObstaclePivot + ContactProbe> Env for CubeEnv<W> {
    fn step(&mut self, action: &[f32]) -> (Vec<f32>, f32, bool) {
        let outcome = self.tick(Action::from_slice(action));
        (self.last_observation.to_vec(), outcome.reward, outcome.done)
    }

    fn reset(&mut self) -> Vec<f32> {
        self.last_contact = None;
        self.last_observation = self.orchestrator.reset();
        self.last_observation.to_vec()
    }

    fn obs_size(&self) -> usize {
        OBS_SIZE
    }

    fn action_size(&self) -> usize {
        2
    }
}
