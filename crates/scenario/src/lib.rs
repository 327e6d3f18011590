#![deny(clippy::all, clippy::pedantic)]
//! JSON scenario files: the obstacle layout around a pivot plus any
//! environment settings that differ from the defaults.

use anyhow::{Context, Result};
use physics::{euler_degrees, BoxShape, ObstacleField, Pose, Vec3};
use rl::EnvConfig;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Scene shipped with the binary: a wall with a rectangular slot.
pub const BUILTIN_SLOT_WALL: &str = include_str!("../scenes/slot_wall.json");

#[derive(Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    #[serde(default = "zero_vec")]
    pub pivot: [f32; 3],
    pub obstacles: Vec<ObstacleDef>,
    #[serde(default)]
    pub env: EnvConfig,
}

#[derive(Deserialize)]
pub struct ObstacleDef {
    pub id: String,
    pub half_extents: [f32; 3],
    pub pos: [f32; 3],
    /// Euler angles in degrees relative to the pivot
    #[serde(default = "zero_vec")]
    pub rotation: [f32; 3],
    #[serde(default)]
    pub layer: u8,
}

fn zero_vec() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

impl Scenario {
    /// # Errors
    ///
    /// Fails on malformed JSON or missing required fields.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_str(&json).with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// # Errors
    ///
    /// Only fails if the embedded scene is broken.
    pub fn builtin() -> Result<Self> {
        Self::from_str(BUILTIN_SLOT_WALL)
    }

    /// Builds the obstacle field and validates the environment settings.
    ///
    /// # Errors
    ///
    /// Fails on duplicate obstacle ids, degenerate boxes, or an invalid
    /// environment configuration.
    pub fn into_world(self) -> Result<(ObstacleField, EnvConfig)> {
        self.env.validate().context("invalid env section")?;

        let mut field = ObstacleField::new(Vec3::from_array(self.pivot));
        let mut seen = HashSet::new();
        for def in self.obstacles {
            if !seen.insert(def.id.clone()) {
                anyhow::bail!("duplicate obstacle id {}", def.id);
            }
            let shape = BoxShape::new(Vec3::ZERO, Vec3::from_array(def.half_extents))
                .with_context(|| format!("obstacle {}", def.id))?;
            let [rx, ry, rz] = def.rotation;
            let pose = Pose::new(Vec3::from_array(def.pos), euler_degrees(rx, ry, rz));
            field.add_box(def.id, pose, shape, def.layer);
        }
        tracing::info!(scenario = %self.name, obstacles = field.obstacles().len(), "scenario loaded");

        Ok((field, self.env))
    }
}
