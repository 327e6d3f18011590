use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("half extents must be positive and finite, got {0:?}")]
    InvalidExtents([f32; 3]),
    #[error("direction vector has zero length")]
    ZeroDirection,
}
