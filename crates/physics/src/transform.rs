//! Transform utilities for posed boxes
//!
//! Converts between the pose representation (position + quaternion) and 4x4
//! matrices, extracts oriented bounding-box corners and applies incremental
//! rotations about fixed world axes.

use crate::types::{BoxShape, Pose};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Local corner signs in the order the sensor bits are assigned.
///
/// The first four corners lie on the +Z face, walking top-left, top-right,
/// bottom-right, bottom-left; the last four are their point reflections
/// through the box centre.
const CORNER_SIGNS: [[f32; 3]; 8] = [
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
];

/// Convert a pose to a 4x4 rigid transformation matrix
pub fn to_transform_matrix(pose: &Pose) -> Mat4 {
    Mat4::from_rotation_translation(pose.orientation, pose.position)
}

/// World-space corners of `shape` attached to a body at `pose`.
pub fn box_corners(pose: &Pose, shape: &BoxShape) -> [Vec3; 8] {
    let transform = to_transform_matrix(pose);
    CORNER_SIGNS.map(|sign| {
        let local = shape.center + Vec3::from_array(sign) * shape.half_extents;
        transform.transform_point3(local)
    })
}

/// Rotates `orientation` about a fixed world axis by `degrees`.
///
/// The rotation is applied in world space (pre-multiplied), so successive
/// calls about different axes do not drag each other's axes along.
#[allow(clippy::float_cmp)]
pub fn rotate_about_world_axis(orientation: Quat, axis: Vec3, degrees: f32) -> Quat {
    if degrees == 0.0 {
        return orientation;
    }
    (Quat::from_axis_angle(axis.normalize(), degrees.to_radians()) * orientation).normalize()
}

/// Orientation from Euler angles in degrees.
///
/// Applied as Z first, then X, then Y, the convention used by the scene
/// files this environment loads.
pub fn euler_degrees(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, y.to_radians(), x.to_radians(), z.to_radians())
}
