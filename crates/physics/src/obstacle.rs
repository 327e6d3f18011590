//! Layered box obstacles arranged around a rotatable pivot.

use crate::collision::{detect_box_box_collision, Contact, ContactProbe};
use crate::raycast::{ray_box_distance, RayCaster};
use crate::types::{BoxShape, LayerMask, Pose, Quat, Vec3};

/// Capability to re-orient the obstacle set as a whole.
pub trait ObstaclePivot {
    fn set_obstacle_rotation(&mut self, rotation: Quat);
}

/// A single box obstacle. `pose` is relative to the field's pivot.
#[derive(Clone, Debug)]
pub struct Obstacle {
    pub name: String,
    pub pose: Pose,
    pub shape: BoxShape,
    pub layer: u8,
}

/// Collection of box obstacles that share one pivot transform.
#[derive(Clone, Debug)]
pub struct ObstacleField {
    pivot: Pose,
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    /// Create an empty field whose pivot sits at `pivot_position`
    pub fn new(pivot_position: Vec3) -> Self {
        Self { pivot: Pose::at(pivot_position), obstacles: Vec::new() }
    }

    /// Add a box obstacle posed relative to the pivot and return its index
    pub fn add_box(&mut self, name: impl Into<String>, pose: Pose, shape: BoxShape, layer: u8) -> usize {
        self.obstacles.push(Obstacle { name: name.into(), pose, shape, layer });
        self.obstacles.len() - 1
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn pivot(&self) -> &Pose {
        &self.pivot
    }

    /// World pose of an obstacle after applying the pivot transform.
    pub fn world_pose(&self, obstacle: &Obstacle) -> Pose {
        Pose::new(
            self.pivot.transform_point(obstacle.pose.position),
            (self.pivot.orientation * obstacle.pose.orientation).normalize(),
        )
    }
}

impl ObstaclePivot for ObstacleField {
    fn set_obstacle_rotation(&mut self, rotation: Quat) {
        self.pivot.orientation = rotation.normalize();
        tracing::debug!(rotation = ?self.pivot.orientation, "obstacle field re-oriented");
    }
}

impl RayCaster for ObstacleField {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32, layers: LayerMask) -> bool {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return false;
        }
        self.obstacles
            .iter()
            .filter(|obstacle| layers.contains(obstacle.layer))
            .filter_map(|obstacle| ray_box_distance(origin, direction, &self.world_pose(obstacle), &obstacle.shape))
            .any(|distance| distance <= max_distance)
    }
}

impl ContactProbe for ObstacleField {
    fn probe_contact(&self, pose: &Pose, shape: &BoxShape) -> Option<Contact> {
        self.obstacles
            .iter()
            .find_map(|obstacle| detect_box_box_collision(pose, shape, &self.world_pose(obstacle), &obstacle.shape))
    }
}
