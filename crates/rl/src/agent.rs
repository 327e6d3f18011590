//! The controllable cube
//!
//! [`CubeAgent`] owns the cube's pose and flags, runs the corner-ray
//! perception, shapes rewards, turns two continuous action scalars into
//! incremental rotations, and exposes the move/end-of-episode primitives the
//! orchestrator drives during the translate phase.

use fastrand::Rng;
use glam::Vec3;
use physics::{box_corners, euler_degrees, rotate_about_world_axis, BoxShape, Pose, RayCaster};

use crate::config::EnvConfig;
use crate::error::ConfigError;
use crate::observation::Observation;
use crate::reward::{shaped_reward, terminal_reward};
use crate::sensor::{CornerSensor, RayHitMask};

/// World axis driven by the vertical action scalar.
pub const VERTICAL_AXIS: Vec3 = Vec3::X;
/// World axis driven by the horizontal action scalar.
pub const HORIZONTAL_AXIS: Vec3 = Vec3::Z;

/// Two continuous action scalars, nominally in [-1, 1].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Action {
    /// Rotation about world X
    pub vertical: f32,
    /// Rotation about world Z
    pub horizontal: f32,
}

impl Action {
    pub const fn new(vertical: f32, horizontal: f32) -> Self {
        Self { vertical, horizontal }
    }

    /// Reads the first two entries; missing entries count as zero.
    pub fn from_slice(values: &[f32]) -> Self {
        Self {
            vertical: values.first().copied().unwrap_or(0.0),
            horizontal: values.get(1).copied().unwrap_or(0.0),
        }
    }
}

/// Mutable state of the cube for one episode.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeState {
    pub pose: Pose,
    /// Zeroed on reset; kept for hosts that integrate physics on the cube.
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    /// Sticky until reset once any contact arrives.
    pub collided: bool,
    /// Set while the orchestrator is translating the cube.
    pub moving: bool,
    pub hit_mask: RayHitMask,
    /// Euler angles (degrees) drawn at the last reset
    pub spawn_euler: Vec3,
}

pub struct CubeAgent {
    start: Vec3,
    goal: Vec3,
    shape: BoxShape,
    sensor: CornerSensor,
    dead_zone: f32,
    rotate_speed: f32,
    state: CubeState,
    pending_reward: f32,
    episode_reward: f32,
    episode_done: bool,
}

impl CubeAgent {
    /// Builds an agent at the start pose with identity orientation.
    ///
    /// # Errors
    ///
    /// Fails when the configuration does not validate.
    pub fn new(config: &EnvConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            start: config.start_position,
            goal: config.goal_position,
            shape: config.shape()?,
            sensor: CornerSensor { ray_length: config.ray_length, layers: config.layers() },
            dead_zone: config.dead_zone,
            rotate_speed: config.rotate_speed,
            state: CubeState {
                pose: Pose::at(config.start_position),
                velocity: Vec3::ZERO,
                angular_velocity: Vec3::ZERO,
                collided: false,
                moving: false,
                hit_mask: RayHitMask::BLOCKED,
                spawn_euler: Vec3::ZERO,
            },
            pending_reward: 0.0,
            episode_reward: 0.0,
            episode_done: false,
        })
    }

    pub fn set_rotate_speed(&mut self, degrees_per_second: f32) {
        self.rotate_speed = degrees_per_second;
    }

    pub fn rotate_speed(&self) -> f32 {
        self.rotate_speed
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn pose(&self) -> &Pose {
        &self.state.pose
    }

    pub fn shape(&self) -> &BoxShape {
        &self.shape
    }

    pub fn is_collided(&self) -> bool {
        self.state.collided
    }

    pub fn is_moving(&self) -> bool {
        self.state.moving
    }

    pub fn hit_mask(&self) -> RayHitMask {
        self.state.hit_mask
    }

    /// True when the latest perception saw all eight rays clear.
    pub fn all_rays_clear(&self) -> bool {
        self.state.hit_mask.all_clear()
    }

    /// Starts a new episode: start pose with a random orientation, all flags
    /// cleared and the mask back to fully blocked.
    pub fn reset(&mut self, rng: &mut Rng) {
        let random_angle = || rng.f32() * 360.0 - 180.0;
        let (x, y, z) = (random_angle(), random_angle(), random_angle());
        self.state = CubeState {
            pose: Pose::new(self.start, euler_degrees(x, y, z)),
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            collided: false,
            moving: false,
            hit_mask: RayHitMask::BLOCKED,
            spawn_euler: Vec3::new(x, y, z),
        };
        self.pending_reward = 0.0;
        self.episode_reward = 0.0;
        self.episode_done = false;
        tracing::debug!(euler = ?(x, y, z), "cube reset");
    }

    /// Bounding-box corners for the current pose.
    pub fn corners(&self) -> [Vec3; 8] {
        box_corners(&self.state.pose, &self.shape)
    }

    /// Recomputes the hit mask from the current pose and returns the number
    /// of blocked rays.
    pub fn perceive<C: RayCaster + ?Sized>(&mut self, caster: &C) -> u32 {
        self.state.hit_mask = self.sensor.scan(&self.corners(), caster);
        self.state.hit_mask.hit_count()
    }

    /// Observation of the pose as it is right now. Corners are recomputed here
    /// rather than reused from the last perception.
    pub fn collect_observation(&self) -> Observation {
        Observation::encode(self.state.pose.orientation, &self.corners(), self.state.hit_mask)
    }

    /// One decision: rotate by `action`, perceive, and emit the shaped reward.
    ///
    /// Does nothing while the cube is being translated. Returns the shaped
    /// reward, or `None` when the decision was skipped.
    pub fn on_action_received<C: RayCaster + ?Sized>(&mut self, action: Action, dt: f32, caster: &C) -> Option<f32> {
        if self.state.moving {
            tracing::warn!(?action, "action received while translating; ignored");
            return None;
        }
        self.apply_action(action, dt);
        let hits = self.perceive(caster);
        let reward = shaped_reward(hits);
        self.set_reward(reward);
        tracing::trace!(hits, reward, mask = self.state.hit_mask.bits(), "decision");
        Some(reward)
    }

    /// Applies the dead-zoned rotation for one tick about the two fixed world
    /// axes. Skipped while the cube is moving.
    pub fn apply_action(&mut self, action: Action, dt: f32) {
        if self.state.moving {
            return;
        }
        let step = self.rotate_speed * dt;
        let mut orientation = self.state.pose.orientation;
        orientation = rotate_about_world_axis(orientation, VERTICAL_AXIS, self.axis_sign(action.vertical) * step);
        orientation = rotate_about_world_axis(orientation, HORIZONTAL_AXIS, self.axis_sign(action.horizontal) * step);
        self.state.pose.orientation = orientation;
    }

    fn axis_sign(&self, value: f32) -> f32 {
        if value < -self.dead_zone {
            -1.0
        } else if value > self.dead_zone {
            1.0
        } else {
            0.0
        }
    }

    /// Manual control fallback: input axes map straight onto the action.
    pub fn heuristic(vertical_input: f32, horizontal_input: f32) -> Action {
        Action::new(vertical_input, horizontal_input)
    }

    /// Marks the start of the translate phase. Rotation is locked until reset.
    pub fn begin_move(&mut self) {
        self.state.moving = true;
    }

    /// Places the cube `progress` of the way from start to goal.
    ///
    /// No-op for zero progress or once collided. `progress` is not clamped.
    #[allow(clippy::float_cmp)]
    pub fn move_to(&mut self, progress: f32) {
        if progress == 0.0 || self.state.collided {
            return;
        }
        self.state.pose.position = self.start + (self.goal - self.start) * progress;
    }

    /// Emits the terminal reward and flags the episode as finished.
    pub fn end_move(&mut self) -> f32 {
        let reward = terminal_reward(self.state.collided);
        self.set_reward(reward);
        self.episode_done = true;
        tracing::info!(
            collided = self.state.collided,
            reward,
            episode_reward = self.episode_reward,
            "episode finished"
        );
        reward
    }

    /// Physics contact callback. Only the first contact of an episode counts;
    /// its point is returned so the host can spawn an effect there.
    pub fn on_collision(&mut self, point: Vec3) -> Option<Vec3> {
        if self.state.collided {
            return None;
        }
        self.state.collided = true;
        tracing::info!(?point, "cube hit an obstacle");
        Some(point)
    }

    /// Emits a reward. Rewards add up within a tick and within the episode.
    pub fn set_reward(&mut self, reward: f32) {
        self.pending_reward += reward;
        self.episode_reward += reward;
    }

    /// Drains the reward emitted since the last call.
    pub fn take_reward(&mut self) -> f32 {
        std::mem::take(&mut self.pending_reward)
    }

    pub fn episode_reward(&self) -> f32 {
        self.episode_reward
    }

    pub fn is_episode_done(&self) -> bool {
        self.episode_done
    }
}
