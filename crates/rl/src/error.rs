use thiserror::Error;

/// Invalid environment configuration, reported once at construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },
    #[error("dead zone must lie in [0, 1), got {0}")]
    DeadZone(f32),
    #[error("hit layer mask selects no layers")]
    NoHitLayers,
    #[error(transparent)]
    Geometry(#[from] physics::GeometryError),
}
