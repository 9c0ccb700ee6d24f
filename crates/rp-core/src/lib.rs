//! Rocket part print model
//!
//! This crate provides the geometry consumed by the print renderers:
//! - Centering ring radii ([`RingSpec`]) and mount offsets ([`MountOffset`])
//! - Motor mount tubes with cluster arrangements ([`MotorMount`], [`ClusterConfiguration`])
//! - Physical to printer unit conversion ([`PrintUnit`])

pub mod cluster;
pub mod constants;
pub mod error;
pub mod mount;
pub mod ring;
pub mod unit;

pub use cluster::ClusterConfiguration;
pub use error::{GeometryError, GeometryResult};
pub use mount::MotorMount;
pub use ring::{MountOffset, RingSpec};
pub use unit::PrintUnit;
