//! Motor mount tubes supported by a centering ring

use serde::{Deserialize, Serialize};

use crate::cluster::ClusterConfiguration;
use crate::constants::DEFAULT_CLUSTER_SCALE;
use crate::error::{GeometryError, GeometryResult};
use crate::ring::MountOffset;

/// An inner tube holding one motor or a cluster of motors
///
/// Deserialization goes through [`MotorMount::with_cluster_scale`], so a
/// loaded mount never carries a negative or non-finite cluster scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMotorMount")]
pub struct MotorMount {
    /// Outer radius of a single tube in the cluster
    pub outer_radius: f64,
    /// Arrangement of the tubes around the mount axis
    pub cluster: ClusterConfiguration,
    /// Tube separation as a multiple of the tube diameter
    pub cluster_scale: f64,
    /// Cluster rotation around the mount axis (radians)
    pub cluster_rotation: f64,
    /// Displacement of the mount axis from the ring axis
    pub radial_shift: MountOffset,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawMotorMount {
    outer_radius: f64,
    cluster: ClusterConfiguration,
    cluster_scale: f64,
    cluster_rotation: f64,
    radial_shift: MountOffset,
}

impl Default for RawMotorMount {
    fn default() -> Self {
        let mount = MotorMount::default();
        Self {
            outer_radius: mount.outer_radius,
            cluster: mount.cluster,
            cluster_scale: mount.cluster_scale,
            cluster_rotation: mount.cluster_rotation,
            radial_shift: mount.radial_shift,
        }
    }
}

impl TryFrom<RawMotorMount> for MotorMount {
    type Error = GeometryError;

    fn try_from(raw: RawMotorMount) -> GeometryResult<Self> {
        MotorMount::new(raw.outer_radius)
            .with_cluster(raw.cluster)
            .with_cluster_rotation(raw.cluster_rotation)
            .with_radial_shift(raw.radial_shift.y, raw.radial_shift.z)
            .with_cluster_scale(raw.cluster_scale)
    }
}

impl Default for MotorMount {
    fn default() -> Self {
        Self {
            outer_radius: 0.0,
            cluster: ClusterConfiguration::Single,
            cluster_scale: DEFAULT_CLUSTER_SCALE,
            cluster_rotation: 0.0,
            radial_shift: MountOffset::CENTER,
        }
    }
}

impl MotorMount {
    /// Create a single-tube mount on the ring axis
    pub fn new(outer_radius: f64) -> Self {
        Self {
            outer_radius,
            ..Default::default()
        }
    }

    /// Set the tube arrangement
    pub fn with_cluster(mut self, cluster: ClusterConfiguration) -> Self {
        self.cluster = cluster;
        self
    }

    /// Set the cluster rotation (radians)
    pub fn with_cluster_rotation(mut self, rotation: f64) -> Self {
        self.cluster_rotation = rotation;
        self
    }

    /// Set the displacement of the mount axis from the ring axis
    pub fn with_radial_shift(mut self, y: f64, z: f64) -> Self {
        self.radial_shift = MountOffset::new(y, z);
        self
    }

    /// Set the cluster scale; must be finite and not negative
    pub fn with_cluster_scale(mut self, scale: f64) -> GeometryResult<Self> {
        if !(scale >= 0.0) || !scale.is_finite() {
            return Err(GeometryError::InvalidClusterScale(scale));
        }
        self.cluster_scale = scale;
        Ok(self)
    }

    /// True when the mount carries more than one tube
    pub fn is_clustered(&self) -> bool {
        !self.cluster.is_single()
    }

    /// Distance between adjacent tube centers
    pub fn cluster_separation(&self) -> f64 {
        2.0 * self.outer_radius * self.cluster_scale
    }

    /// Tube centers relative to the mount axis
    ///
    /// The radial shift is not applied: a clustered mount is positioned by
    /// its cluster points alone.
    pub fn cluster_points(&self) -> Vec<MountOffset> {
        let separation = self.cluster_separation();
        self.cluster
            .points(self.cluster_rotation)
            .into_iter()
            .map(|p| MountOffset::from(p * separation))
            .collect()
    }
}
