//! Geometry errors

/// Errors raised while building ring and mount geometry
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Cluster scale must be finite and not negative, got {0}")]
    InvalidClusterScale(f64),
    #[error("Unknown cluster configuration: {0}")]
    UnknownCluster(String),
}

/// Result type for geometry construction
pub type GeometryResult<T> = Result<T, GeometryError>;
