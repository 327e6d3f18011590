#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
//! # Cube Dodge Geometry Layer
//!
//! The small amount of rigid-body geometry the cube environment needs: poses,
//! oriented boxes, corner extraction, world-axis rotations, ray casts against
//! layered obstacles and a box/box overlap test that reports a contact point.
//!
//! ## Key Components
//!
//! -   **Types:** [`Pose`], [`BoxShape`] and [`LayerMask`] in the [`types`]
//!     module. Vectors and quaternions are `glam` types re-exported here.
//! -   **Transforms:** [`box_corners`] and [`rotate_about_world_axis`] in the
//!     [`transform`] module.
//! -   **Ray casting:** the [`RayCaster`] capability. Environments only ever
//!     see this trait, so tests can plug in a deterministic fake.
//! -   **Obstacles:** [`ObstacleField`] is a concrete world made of oriented
//!     boxes that can be rotated as a whole about its pivot.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{BoxShape, LayerMask, ObstacleField, Pose, RayCaster, Vec3};
//!
//! let mut field = ObstacleField::new(Vec3::ZERO);
//! field.add_box("wall", Pose::at(Vec3::ZERO), BoxShape::cube(1.0), 0);
//! let hit = field.cast_ray(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, 200.0, LayerMask::ALL);
//! assert!(hit);
//! ```

pub mod collision;
pub mod error;
pub mod obstacle;
pub mod raycast;
pub mod transform;
pub mod types;

pub use collision::{detect_box_box_collision, Contact, ContactProbe};
pub use error::GeometryError;
pub use obstacle::{Obstacle, ObstacleField, ObstaclePivot};
pub use raycast::{ray_box_distance, RayCaster};
pub use transform::{box_corners, euler_degrees, rotate_about_world_axis, to_transform_matrix};
pub use types::{BoxShape, LayerMask, Pose, Quat, Vec3};
