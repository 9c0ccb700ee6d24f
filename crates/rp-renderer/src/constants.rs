//! Renderer constants (all lengths in printer points)

/// Length of each center cross-hair segment
pub const CROSSHAIR_LENGTH: f32 = 10.0;

/// Stroke width of cross-hairs and other construction marks
pub const THIN_STROKE_WIDTH: f32 = 0.3;

/// Stroke width of part outlines
pub const OUTLINE_STROKE_WIDTH: f32 = 1.0;
