//! Corner-ray collision avoidance sensor.
//!
//! Eight rays, one from each bounding-box corner, are cast along a fixed world
//! direction. The result is packed into a [`RayHitMask`] where a set bit means
//! the corresponding ray found nothing.

use glam::Vec3;
use physics::{LayerMask, RayCaster};

/// Direction every corner ray is cast along.
pub const RAY_DIRECTION: Vec3 = Vec3::Z;

/// One bit per corner; 1 = clear, 0 = blocked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RayHitMask(u8);

impl RayHitMask {
    /// State after reset: nothing known, treated as fully blocked.
    pub const BLOCKED: Self = Self(0);
    pub const CLEAR: Self = Self(0xFF);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn all_clear(self) -> bool {
        self.0 == 0xFF
    }

    pub const fn is_clear(self, corner: usize) -> bool {
        corner < 8 && self.0 & (1 << corner) != 0
    }

    /// Number of blocked corners.
    pub const fn hit_count(self) -> u32 {
        self.0.count_zeros()
    }

    /// Numeric encoding used in observations.
    pub fn as_f32(self) -> f32 {
        f32::from(self.0)
    }
}

/// Static parameters of the corner sensor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CornerSensor {
    pub ray_length: f32,
    pub layers: LayerMask,
}

impl CornerSensor {
    /// Cast every corner ray and build the mask in one go.
    pub fn scan<C: RayCaster + ?Sized>(&self, corners: &[Vec3; 8], caster: &C) -> RayHitMask {
        let bits = corners.iter().enumerate().fold(0xFFu8, |flags, (i, &corner)| {
            if caster.cast_ray(corner, RAY_DIRECTION, self.ray_length, self.layers) {
                flags & !(1 << i)
            } else {
                flags
            }
        });
        RayHitMask(bits)
    }
}
