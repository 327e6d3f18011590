use glam::{Quat, Vec3};

use crate::sensor::RayHitMask;

/// Orientation (4) + eight corners (24) + hit mask (1).
pub const OBS_SIZE: usize = 29;

const CORNERS_OFFSET: usize = 4;
const MASK_INDEX: usize = 28;

/// Fixed-size observation vector handed to the policy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Observation([f32; OBS_SIZE]);

impl Observation {
    /// Packs quaternion `(x, y, z, w)`, the world-space corners in sensor
    /// order and the mask's byte value.
    pub fn encode(orientation: Quat, corners: &[Vec3; 8], mask: RayHitMask) -> Self {
        let mut data = [0.0; OBS_SIZE];
        data[..CORNERS_OFFSET].copy_from_slice(&orientation.to_array());
        for (slot, corner) in data[CORNERS_OFFSET..MASK_INDEX].chunks_exact_mut(3).zip(corners) {
            slot.copy_from_slice(&corner.to_array());
        }
        data[MASK_INDEX] = mask.as_f32();
        Self(data)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.0.to_vec()
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_slice(&self.0[..CORNERS_OFFSET])
    }

    pub fn corner(&self, index: usize) -> Vec3 {
        let start = CORNERS_OFFSET + index * 3;
        Vec3::from_slice(&self.0[start..start + 3])
    }

    // Always written from a u8, so the cast is lossless.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn hit_mask(&self) -> RayHitMask {
        RayHitMask::from_bits(self.0[MASK_INDEX] as u8)
    }
}
