//! # Episode Orchestrator
//!
//! A two-state machine driven by a fixed-timestep tick. During
//! [`EpisodePhase::Orient`] the agent is asked for a decision each tick until
//! either every corner ray is clear or the time limit runs out. The machine
//! then switches to [`EpisodePhase::Translate`], slides the cube from start to
//! goal over a fixed duration, ends the episode and flips back.
//!
//! Transitions happen at most once per tick. The tick after a finished
//! episode starts the next one by resetting the agent, so the terminal state
//! stays observable until then.

use fastrand::Rng;
use glam::Vec3;
use physics::{ObstaclePivot, Quat, RayCaster};

use crate::agent::{Action, CubeAgent};
use crate::config::EnvConfig;
use crate::display::{format_remaining, TimerDisplay};
use crate::error::ConfigError;
use crate::observation::Observation;
use crate::reward::{early_clear_reward, TIMEOUT_REWARD};

/// Accumulated time is compared with this slack so that summing a
/// non-representable timestep (e.g. 0.1) still lands on the limit.
const TIME_EPSILON: f32 = 1e-5;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EpisodePhase {
    #[default]
    Orient,
    Translate,
}

/// Why the machine changed phase during a tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transition {
    /// All rays cleared; carries the early-clear reward.
    Cleared { reward: f32 },
    /// Orient time ran out.
    TimedOut,
    /// Translate finished and the episode ended.
    Finished { collided: bool },
}

/// Elapsed-time counter for one phase.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PhaseTimer {
    elapsed: f32,
}

impl PhaseTimer {
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn reached(&self, limit: f32) -> bool {
        self.elapsed >= limit - TIME_EPSILON
    }
}

/// Result of a single tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome {
    /// Phase after the tick
    pub phase: EpisodePhase,
    /// Present when a decision was taken or the episode ended
    pub observation: Option<Observation>,
    /// Sum of rewards emitted during the tick
    pub reward: f32,
    /// The episode terminated on this tick
    pub done: bool,
    pub transition: Option<Transition>,
}

pub struct EpisodeOrchestrator<W> {
    config: EnvConfig,
    agent: CubeAgent,
    world: W,
    phase: EpisodePhase,
    orient_timer: PhaseTimer,
    translate_timer: PhaseTimer,
    rng: Rng,
    display: Option<Box<dyn TimerDisplay>>,
    restart_pending: bool,
    episodes_finished: u64,
}

impl<W: RayCaster + ObstaclePivot> EpisodeOrchestrator<W> {
    /// Builds the orchestrator with a generator seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Fails when the configuration does not validate.
    pub fn new(config: EnvConfig, world: W) -> Result<Self, ConfigError> {
        let rng = Rng::with_seed(config.seed);
        Self::with_rng(config, world, rng)
    }

    /// Builds the orchestrator around an explicit generator. The obstacle is
    /// randomized and the agent reset before returning.
    ///
    /// # Errors
    ///
    /// Fails when the configuration does not validate.
    pub fn with_rng(config: EnvConfig, world: W, rng: Rng) -> Result<Self, ConfigError> {
        let agent = CubeAgent::new(&config)?;
        let mut orchestrator = Self {
            config,
            agent,
            world,
            phase: EpisodePhase::Orient,
            orient_timer: PhaseTimer::default(),
            translate_timer: PhaseTimer::default(),
            rng,
            display: None,
            restart_pending: false,
            episodes_finished: 0,
        };
        orchestrator.randomize_obstacle();
        orchestrator.agent.reset(&mut orchestrator.rng);
        Ok(orchestrator)
    }

    /// Attaches a display and shows the full time limit on it.
    #[must_use]
    pub fn with_display(mut self, display: Box<dyn TimerDisplay>) -> Self {
        self.display = Some(display);
        self.show_remaining(self.config.orient_time_limit);
        self
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    pub fn agent(&self) -> &CubeAgent {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut CubeAgent {
        &mut self.agent
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn orient_elapsed(&self) -> f32 {
        self.orient_timer.elapsed()
    }

    pub fn translate_elapsed(&self) -> f32 {
        self.translate_timer.elapsed()
    }

    pub fn episodes_finished(&self) -> u64 {
        self.episodes_finished
    }

    /// Restarts the orient phase from scratch: new obstacle angle, fresh
    /// agent, timers at zero. Returns the first observation.
    pub fn reset(&mut self) -> Observation {
        self.phase = EpisodePhase::Orient;
        self.orient_timer.reset();
        self.translate_timer.reset();
        self.restart_pending = false;
        self.randomize_obstacle();
        self.agent.reset(&mut self.rng);
        self.agent.take_reward();
        self.show_remaining(self.config.orient_time_limit);
        self.agent.collect_observation()
    }

    /// Forwards a physics contact to the agent.
    pub fn notify_collision(&mut self, point: Vec3) -> Option<Vec3> {
        self.agent.on_collision(point)
    }

    /// Advances the machine by one tick of length `dt`. `action` is only
    /// consumed on ticks that request a decision.
    pub fn tick(&mut self, dt: f32, action: Action) -> TickOutcome {
        if self.restart_pending {
            self.restart_pending = false;
            self.agent.reset(&mut self.rng);
        }

        let mut observation = None;
        let mut transition = None;
        let mut done = false;

        match self.phase {
            EpisodePhase::Orient => {
                let limit = self.config.orient_time_limit;
                if self.orient_timer.reached(limit) {
                    self.agent.set_reward(TIMEOUT_REWARD);
                    self.enter_translate();
                    transition = Some(Transition::TimedOut);
                } else if self.agent.all_rays_clear() {
                    let reward = early_clear_reward(limit, self.orient_timer.elapsed());
                    self.agent.set_reward(reward);
                    self.enter_translate();
                    transition = Some(Transition::Cleared { reward });
                } else {
                    self.agent.on_action_received(action, dt, &self.world);
                    observation = Some(self.agent.collect_observation());
                    self.orient_timer.advance(dt);
                    self.show_remaining(limit - self.orient_timer.elapsed());
                }
            }
            EpisodePhase::Translate => {
                let duration = self.config.translate_duration;
                self.agent.move_to(self.translate_timer.elapsed() / duration);

                if self.translate_timer.reached(duration) {
                    self.orient_timer.reset();
                    self.show_remaining(self.config.orient_time_limit);
                    self.randomize_obstacle();
                    let collided = self.agent.is_collided();
                    self.agent.end_move();
                    self.phase = EpisodePhase::Orient;
                    self.restart_pending = true;
                    self.episodes_finished += 1;
                    observation = Some(self.agent.collect_observation());
                    transition = Some(Transition::Finished { collided });
                    done = true;
                } else {
                    self.translate_timer.advance(dt);
                }
            }
        }

        if let Some(transition) = transition {
            tracing::info!(?transition, phase = ?self.phase, "phase transition");
        }

        TickOutcome {
            phase: self.phase,
            observation,
            reward: self.agent.take_reward(),
            done,
            transition,
        }
    }

    fn enter_translate(&mut self) {
        self.translate_timer.reset();
        self.agent.begin_move();
        self.phase = EpisodePhase::Translate;
    }

    /// Spins the obstacle to a uniform random angle about world Z.
    fn randomize_obstacle(&mut self) {
        let degrees = self.rng.f32() * 360.0 - 180.0;
        self.world.set_obstacle_rotation(Quat::from_rotation_z(degrees.to_radians()));
    }

    fn show_remaining(&mut self, seconds: f32) {
        if let Some(display) = self.display.as_mut() {
            display.show(&format_remaining(seconds));
        }
    }
}
