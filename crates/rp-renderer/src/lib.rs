//! Rocket Part Print Renderer
//!
//! Immediate-mode 2D drawings of rocket parts for printed templates.
//!
//! # Architecture
//!
//! - [`surface::DrawSurface`] - Drawing target abstraction (color, stroke, shapes, lines)
//! - [`surface::SurfaceStateGuard`] - Restores surface graphics state on drop
//! - [`printable::Printable`] - Trait for part drawings with an intrinsic size
//! - [`recording::RecordingSurface`] - Surface that records draw calls
//! - [`config::RenderStyle`] - Colors and stroke widths
//!
//! # Module Structure
//!
//! ```text
//! rp-renderer/
//! ├── surface.rs       # DrawSurface trait, state guard
//! ├── printable.rs     # Printable trait
//! ├── printables/      # Part printables (CenteringRingRenderer)
//! ├── recording.rs     # RecordingSurface, DrawCommand
//! ├── config.rs        # RenderStyle
//! ├── color.rs         # Color
//! ├── shape.rs         # Shape, Size
//! └── constants.rs     # Default lengths in points
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod printable;
pub mod printables;
pub mod recording;
pub mod shape;
pub mod surface;

pub use color::Color;
pub use config::{ConfigError, RenderStyle};
pub use printable::Printable;
pub use printables::{CenterPoint, CenterPointSet, CenteringRingRenderer};
pub use recording::{DrawCommand, RecordingSurface};
pub use shape::{Shape, Size};
pub use surface::{DrawSurface, SurfaceState, SurfaceStateGuard};
