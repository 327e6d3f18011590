//! Ray casting against oriented boxes.

use crate::types::{BoxShape, LayerMask, Pose, Vec3};

const PARALLEL_EPSILON: f32 = 1e-8;

/// Capability to answer "does a ray hit anything on these layers?".
///
/// Implemented by [`crate::ObstacleField`]; tests substitute scripted fakes.
pub trait RayCaster {
    /// Casts a ray from `origin` along `direction` and reports whether any
    /// collider on `layers` lies within `max_distance`.
    ///
    /// Colliders that contain `origin` are not reported.
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32, layers: LayerMask) -> bool;
}

impl<T: RayCaster + ?Sized> RayCaster for &T {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32, layers: LayerMask) -> bool {
        (**self).cast_ray(origin, direction, max_distance, layers)
    }
}

/// Distance along a unit `direction` at which the ray enters the box, using
/// the slab method in the box's local frame.
///
/// Returns `None` on a miss, when the box lies behind the origin, or when the
/// origin is already inside the box.
pub fn ray_box_distance(origin: Vec3, direction: Vec3, pose: &Pose, shape: &BoxShape) -> Option<f32> {
    let local_origin = pose.inverse_transform_point(origin) - shape.center;
    let local_dir = pose.orientation.conjugate() * direction;

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let o = local_origin[axis];
        let d = local_dir[axis];
        let h = shape.half_extents[axis];
        if d.abs() < PARALLEL_EPSILON {
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let t1 = (-h - o) / d;
        let t2 = (h - o) / d;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
        if t_near > t_far {
            return None;
        }
    }

    if t_near < 0.0 {
        // Behind the origin, or the origin sits inside the box.
        return None;
    }
    Some(t_near)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    #[test]
    fn ray_hits_box_face() {
        let d = ray_box_distance(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, &Pose::IDENTITY, &BoxShape::cube(1.0));
        assert!((d.unwrap() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn ray_misses_box_beside_path() {
        let d = ray_box_distance(Vec3::new(1.5, 0.0, -5.0), Vec3::Z, &Pose::IDENTITY, &BoxShape::cube(1.0));
        assert!(d.is_none());
    }

    #[test]
    fn box_behind_origin_is_ignored() {
        let d = ray_box_distance(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, &Pose::IDENTITY, &BoxShape::cube(1.0));
        assert!(d.is_none());
    }

    #[test]
    fn origin_inside_box_is_ignored() {
        let d = ray_box_distance(Vec3::ZERO, Vec3::Z, &Pose::IDENTITY, &BoxShape::cube(1.0));
        assert!(d.is_none());
    }

    #[test]
    fn rotated_box_changes_outcome() {
        // A thin slab 4 wide in X; turned 90 degrees about Z it becomes 4 tall.
        let shape = BoxShape { center: Vec3::ZERO, half_extents: Vec3::new(2.0, 0.1, 0.1) };
        let origin = Vec3::new(1.5, 0.0, -5.0);
        assert!(ray_box_distance(origin, Vec3::Z, &Pose::IDENTITY, &shape).is_some());
        let turned = Pose::new(Vec3::ZERO, Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
        assert!(ray_box_distance(origin, Vec3::Z, &turned, &shape).is_none());
    }
}
