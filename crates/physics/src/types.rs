pub use glam::{Quat, Vec3};

use crate::error::GeometryError;

/// Position plus unit orientation of a rigid body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self::new(Vec3::ZERO, Quat::IDENTITY);

    #[must_use]
    pub const fn new(position: Vec3, orientation: Quat) -> Self {
        Self { position, orientation }
    }

    /// Unrotated pose at `position`.
    #[must_use]
    pub const fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// Maps a point from this pose's local space into world space.
    #[must_use]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.orientation * local
    }

    /// Maps a world-space point into this pose's local space.
    #[must_use]
    pub fn inverse_transform_point(&self, world: Vec3) -> Vec3 {
        self.orientation.conjugate() * (world - self.position)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Box collider: `center` is the local offset of the box centre from the
/// owning body's origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxShape {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl BoxShape {
    /// Creates a box, rejecting non-positive or non-finite half extents.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidExtents`] when any half extent is not a
    /// positive finite number.
    pub fn new(center: Vec3, half_extents: Vec3) -> Result<Self, GeometryError> {
        if !half_extents.is_finite() || half_extents.min_element() <= 0.0 {
            return Err(GeometryError::InvalidExtents(half_extents.to_array()));
        }
        Ok(Self { center, half_extents })
    }

    /// Centred cube with the given half side length.
    #[must_use]
    pub fn cube(half_side: f32) -> Self {
        Self { center: Vec3::ZERO, half_extents: Vec3::splat(half_side) }
    }
}

/// Bit set of collision layers (layer `n` is bit `n`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u32::MAX);

    /// Mask selecting a single layer. Layers above 31 select nothing.
    #[must_use]
    pub const fn from_layer(layer: u8) -> Self {
        if layer < 32 {
            Self(1 << layer)
        } else {
            Self::NONE
        }
    }

    #[must_use]
    pub const fn contains(self, layer: u8) -> bool {
        layer < 32 && self.0 & (1 << layer) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}
