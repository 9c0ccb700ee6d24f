//! Centering ring geometry

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

/// Radii of a centering ring, in the caller's physical unit
///
/// Validated on construction, so a `RingSpec` always has a positive outer
/// radius and an inner radius in `[0, outer]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRingSpec")]
pub struct RingSpec {
    outer_radius: f64,
    inner_radius: f64,
}

#[derive(Deserialize)]
struct RawRingSpec {
    outer_radius: f64,
    inner_radius: f64,
}

impl TryFrom<RawRingSpec> for RingSpec {
    type Error = GeometryError;

    fn try_from(raw: RawRingSpec) -> GeometryResult<Self> {
        RingSpec::new(raw.outer_radius, raw.inner_radius)
    }
}

impl RingSpec {
    /// Create a ring, rejecting degenerate radii
    pub fn new(outer_radius: f64, inner_radius: f64) -> GeometryResult<Self> {
        if !outer_radius.is_finite() || !inner_radius.is_finite() {
            return Err(GeometryError::InvalidGeometry(format!(
                "radii must be finite (outer={}, inner={})",
                outer_radius, inner_radius
            )));
        }
        if outer_radius <= 0.0 {
            return Err(GeometryError::InvalidGeometry(format!(
                "outer radius must be positive, got {}",
                outer_radius
            )));
        }
        if inner_radius < 0.0 {
            return Err(GeometryError::InvalidGeometry(format!(
                "inner radius must not be negative, got {}",
                inner_radius
            )));
        }
        if inner_radius > outer_radius {
            return Err(GeometryError::InvalidGeometry(format!(
                "inner radius {} exceeds outer radius {}",
                inner_radius, outer_radius
            )));
        }
        Ok(Self {
            outer_radius,
            inner_radius,
        })
    }

    /// Outer radius of the ring
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Radius of each mount cutout
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Outer diameter, the side of the ring's bounding square
    pub fn outer_diameter(&self) -> f64 {
        2.0 * self.outer_radius
    }
}

/// Lateral displacement of a motor mount from the ring axis
///
/// `y` maps to the horizontal drawing axis and `z` to the vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MountOffset {
    /// Horizontal offset
    pub y: f64,
    /// Vertical offset
    pub z: f64,
}

impl MountOffset {
    /// Offset of a mount sitting on the ring axis
    pub const CENTER: MountOffset = MountOffset { y: 0.0, z: 0.0 };

    /// Create an offset from its horizontal and vertical components
    pub fn new(y: f64, z: f64) -> Self {
        Self { y, z }
    }
}

impl From<DVec2> for MountOffset {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}
