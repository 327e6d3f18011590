//! Box-box contact detection
//!
//! Separating-axis test between two oriented boxes. Only the contact point
//! and penetration are reported; this crate does not resolve contacts.

use crate::types::{BoxShape, Pose, Vec3};

const AXIS_EPSILON: f32 = 1e-6;

/// Contact information for a single overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Contact point in world space
    pub point: Vec3,
    /// Contact normal (from body A to body B)
    pub normal: Vec3,
    /// Penetration depth along `normal`
    pub depth: f32,
}

/// Source of contact events for a moving box, standing in for a physics
/// engine's collision callbacks.
pub trait ContactProbe {
    /// Returns the first contact between a box at `pose` and the world.
    fn probe_contact(&self, pose: &Pose, shape: &BoxShape) -> Option<Contact>;
}

struct Oriented {
    center: Vec3,
    axes: [Vec3; 3],
    half: Vec3,
}

impl Oriented {
    fn new(pose: &Pose, shape: &BoxShape) -> Self {
        Self {
            center: pose.transform_point(shape.center),
            axes: [
                pose.orientation * Vec3::X,
                pose.orientation * Vec3::Y,
                pose.orientation * Vec3::Z,
            ],
            half: shape.half_extents,
        }
    }

    /// Half length of the box projected onto `axis`.
    fn radius_along(&self, axis: Vec3) -> f32 {
        (0..3).map(|i| self.axes[i].dot(axis).abs() * self.half[i]).sum()
    }
}

/// Detect overlap between two oriented boxes
pub fn detect_box_box_collision(
    pose_a: &Pose,
    shape_a: &BoxShape,
    pose_b: &Pose,
    shape_b: &BoxShape,
) -> Option<Contact> {
    let a = Oriented::new(pose_a, shape_a);
    let b = Oriented::new(pose_b, shape_b);
    let center_diff = b.center - a.center;

    let mut candidates = Vec::with_capacity(15);
    candidates.extend_from_slice(&a.axes);
    candidates.extend_from_slice(&b.axes);
    for axis_a in a.axes {
        for axis_b in b.axes {
            let cross = axis_a.cross(axis_b);
            // Parallel edges add nothing the face axes have not covered.
            if cross.length_squared() > AXIS_EPSILON {
                candidates.push(cross.normalize());
            }
        }
    }

    let mut min_overlap = f32::INFINITY;
    let mut normal = Vec3::Z;
    for axis in candidates {
        let distance = center_diff.dot(axis);
        let overlap = a.radius_along(axis) + b.radius_along(axis) - distance.abs();
        if overlap <= 0.0 {
            return None;
        }
        if overlap < min_overlap {
            min_overlap = overlap;
            normal = if distance < 0.0 { -axis } else { axis };
        }
    }

    // Contact point sits on A's surface along the separation normal
    let contact_point = a.center + normal * (a.radius_along(normal) - min_overlap * 0.5);

    Some(Contact { point: contact_point, normal, depth: min_overlap })
}
