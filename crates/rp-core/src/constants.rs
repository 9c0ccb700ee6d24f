//! Global constants for rp-core

/// Printer points per inch (PostScript point)
pub const POINTS_PER_INCH: f64 = 72.0;

/// Millimeters per inch
pub const MILLIMETERS_PER_INCH: f64 = 25.4;

/// Default cluster scale (adjacent tubes touching)
pub const DEFAULT_CLUSTER_SCALE: f64 = 1.0;
