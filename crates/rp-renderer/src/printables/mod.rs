//! Built-in part printables
//!
//! - [`CenteringRingRenderer`]: centering ring with motor mount cutouts

pub mod centering_ring;

pub use centering_ring::{CenterPoint, CenterPointSet, CenteringRingRenderer, mount_offsets};
