//! Motor cluster configurations
//!
//! Each preset is a list of tube centers in normalized units, where a
//! distance of 1.0 is one tube diameter. At a cluster scale of 1.0,
//! neighboring tubes touch.

use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Arrangement of the motor tubes carried by one mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClusterConfiguration {
    #[default]
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "3-row")]
    TripleRow,
    #[serde(rename = "3-ring")]
    TripleRing,
    #[serde(rename = "4-row")]
    QuadRow,
    #[serde(rename = "4-ring")]
    QuadRing,
    #[serde(rename = "4-star")]
    QuadStar,
    #[serde(rename = "5-ring")]
    PentaRing,
    #[serde(rename = "6-ring")]
    HexRing,
    #[serde(rename = "7-ring")]
    HeptaRing,
}

impl ClusterConfiguration {
    /// All presets, ordered by tube count
    pub const ALL: [ClusterConfiguration; 10] = [
        ClusterConfiguration::Single,
        ClusterConfiguration::Double,
        ClusterConfiguration::TripleRow,
        ClusterConfiguration::TripleRing,
        ClusterConfiguration::QuadRow,
        ClusterConfiguration::QuadRing,
        ClusterConfiguration::QuadStar,
        ClusterConfiguration::PentaRing,
        ClusterConfiguration::HexRing,
        ClusterConfiguration::HeptaRing,
    ];

    /// Preset name, as shown in component editors
    pub fn name(self) -> &'static str {
        match self {
            ClusterConfiguration::Single => "single",
            ClusterConfiguration::Double => "double",
            ClusterConfiguration::TripleRow => "3-row",
            ClusterConfiguration::TripleRing => "3-ring",
            ClusterConfiguration::QuadRow => "4-row",
            ClusterConfiguration::QuadRing => "4-ring",
            ClusterConfiguration::QuadStar => "4-star",
            ClusterConfiguration::PentaRing => "5-ring",
            ClusterConfiguration::HexRing => "6-ring",
            ClusterConfiguration::HeptaRing => "7-ring",
        }
    }

    /// Unrotated tube centers
    fn raw_points(self) -> &'static [[f64; 2]] {
        match self {
            ClusterConfiguration::Single => &[[0.0, 0.0]],
            ClusterConfiguration::Double => &[[-0.5, 0.0], [0.5, 0.0]],
            ClusterConfiguration::TripleRow => &[[-1.0, 0.0], [0.0, 0.0], [1.0, 0.0]],
            ClusterConfiguration::TripleRing => &[
                [-0.5, -0.288675],
                [0.5, -0.288675],
                [0.0, 0.577350],
            ],
            ClusterConfiguration::QuadRow => &[[-1.5, 0.0], [-0.5, 0.0], [0.5, 0.0], [1.5, 0.0]],
            ClusterConfiguration::QuadRing => &[[-0.5, 0.5], [0.5, 0.5], [0.5, -0.5], [-0.5, -0.5]],
            ClusterConfiguration::QuadStar => &[
                [0.0, 0.0],
                [0.0, 1.0],
                [-0.866025, -0.5],
                [0.866025, -0.5],
            ],
            ClusterConfiguration::PentaRing => &[
                [0.0, 0.850651],
                [0.809017, 0.262866],
                [0.5, -0.688191],
                [-0.5, -0.688191],
                [-0.809017, 0.262866],
            ],
            ClusterConfiguration::HexRing => &[
                [0.5, 0.866025],
                [1.0, 0.0],
                [0.5, -0.866025],
                [-0.5, -0.866025],
                [-1.0, 0.0],
                [-0.5, 0.866025],
            ],
            ClusterConfiguration::HeptaRing => &[
                [0.0, 0.0],
                [1.0, 0.0],
                [0.5, 0.866025],
                [-0.5, 0.866025],
                [-1.0, 0.0],
                [-0.5, -0.866025],
                [0.5, -0.866025],
            ],
        }
    }

    /// Number of tubes in the cluster
    pub fn cluster_count(self) -> usize {
        self.raw_points().len()
    }

    /// True when the mount carries a single tube on its own axis
    pub fn is_single(self) -> bool {
        self == ClusterConfiguration::Single
    }

    /// Tube centers rotated counter-clockwise by `rotation` radians
    pub fn points(self, rotation: f64) -> Vec<DVec2> {
        let rot = DVec2::from_angle(rotation);
        self.raw_points()
            .iter()
            .map(|&[x, y]| rot.rotate(DVec2::new(x, y)))
            .collect()
    }
}

impl std::fmt::Display for ClusterConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClusterConfiguration {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeometryError::UnknownCluster(s.to_string()))
    }
}
