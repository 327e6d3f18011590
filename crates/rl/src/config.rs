//! Environment configuration, fixed for the lifetime of an orchestrator.

use crate::error::ConfigError;
use glam::Vec3;
use physics::{BoxShape, LayerMask};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RAY_LENGTH: f32 = 200.0;
pub const DEFAULT_ROTATE_SPEED: f32 = 120.0;
pub const DEFAULT_ORIENT_TIME_LIMIT: f32 = 10.0;
pub const DEFAULT_TRANSLATE_DURATION: f32 = 1.0;
pub const DEFAULT_DEAD_ZONE: f32 = 0.330;
pub const DEFAULT_TICK_DURATION: f32 = 0.02;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Cube position at episode start
    pub start_position: Vec3,
    /// Cube position at the end of the translate phase
    pub goal_position: Vec3,
    /// Half size of the cube's box collider
    pub half_extents: Vec3,
    /// Local offset of the collider centre from the cube origin
    pub center_offset: Vec3,
    /// Layers the corner rays may hit (bit `n` = layer `n`)
    pub hit_layers: u32,
    pub ray_length: f32,
    /// Degrees per second about each controlled world axis
    pub rotate_speed: f32,
    /// Seconds the agent has to clear all corner rays
    pub orient_time_limit: f32,
    /// Seconds taken to travel from start to goal
    pub translate_duration: f32,
    /// Action magnitudes at or below this threshold are ignored
    pub dead_zone: f32,
    /// Fixed timestep used by hosts that do not supply their own
    pub tick_duration: f32,
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 0.0, -6.0),
            goal_position: Vec3::new(0.0, 0.0, 6.0),
            half_extents: Vec3::splat(0.5),
            center_offset: Vec3::ZERO,
            hit_layers: 1,
            ray_length: DEFAULT_RAY_LENGTH,
            rotate_speed: DEFAULT_ROTATE_SPEED,
            orient_time_limit: DEFAULT_ORIENT_TIME_LIMIT,
            translate_duration: DEFAULT_TRANSLATE_DURATION,
            dead_zone: DEFAULT_DEAD_ZONE,
            tick_duration: DEFAULT_TICK_DURATION,
            seed: 0,
        }
    }
}

impl EnvConfig {
    /// Checks every value once so the tick loop never has to.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, v) in [
            ("start_position", self.start_position),
            ("goal_position", self.goal_position),
            ("center_offset", self.center_offset),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }
        for (field, value) in [
            ("ray_length", self.ray_length),
            ("rotate_speed", self.rotate_speed),
            ("orient_time_limit", self.orient_time_limit),
            ("translate_duration", self.translate_duration),
            ("tick_duration", self.tick_duration),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !(0.0..1.0).contains(&self.dead_zone) {
            return Err(ConfigError::DeadZone(self.dead_zone));
        }
        if self.hit_layers == 0 {
            return Err(ConfigError::NoHitLayers);
        }
        self.shape()?;
        Ok(())
    }

    /// Box collider of the cube.
    ///
    /// # Errors
    ///
    /// Fails when the half extents are not positive.
    pub fn shape(&self) -> Result<BoxShape, ConfigError> {
        Ok(BoxShape::new(self.center_offset, self.half_extents)?)
    }

    pub fn layers(&self) -> LayerMask {
        LayerMask(self.hit_layers)
    }
}
