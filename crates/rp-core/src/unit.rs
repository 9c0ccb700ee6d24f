//! Print unit conversion
//!
//! Converts physical lengths to and from printer points (1/72 inch).
//! Every conversion is a pure linear scale.

use serde::{Deserialize, Serialize};

use crate::constants::{MILLIMETERS_PER_INCH, POINTS_PER_INCH};

/// A length unit understood by the print pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintUnit {
    Inches,
    Feet,
    Millimeters,
    Centimeters,
    #[default]
    Meters,
    Points,
}

impl PrintUnit {
    /// All supported units
    pub const ALL: [PrintUnit; 6] = [
        PrintUnit::Inches,
        PrintUnit::Feet,
        PrintUnit::Millimeters,
        PrintUnit::Centimeters,
        PrintUnit::Meters,
        PrintUnit::Points,
    ];

    /// Millimeters in one of this unit
    fn millis_per_unit(self) -> f64 {
        match self {
            PrintUnit::Inches => MILLIMETERS_PER_INCH,
            PrintUnit::Feet => 12.0 * MILLIMETERS_PER_INCH,
            PrintUnit::Millimeters => 1.0,
            PrintUnit::Centimeters => 10.0,
            PrintUnit::Meters => 1000.0,
            PrintUnit::Points => MILLIMETERS_PER_INCH / POINTS_PER_INCH,
        }
    }

    /// Convert a length in this unit to millimeters
    pub fn to_millis(self, value: f64) -> f64 {
        value * self.millis_per_unit()
    }

    /// Convert a length in millimeters to this unit
    pub fn from_millis(self, millis: f64) -> f64 {
        millis / self.millis_per_unit()
    }

    /// Convert a length in this unit to meters
    pub fn to_meters(self, value: f64) -> f64 {
        self.to_millis(value) / 1000.0
    }

    /// Convert a length in this unit to printer points
    pub fn to_points(self, value: f64) -> f64 {
        match self {
            PrintUnit::Points => value,
            _ => self.to_millis(value) * POINTS_PER_INCH / MILLIMETERS_PER_INCH,
        }
    }

    /// Convert a length in printer points to this unit
    pub fn from_points(self, points: f64) -> f64 {
        match self {
            PrintUnit::Points => points,
            _ => self.from_millis(points * MILLIMETERS_PER_INCH / POINTS_PER_INCH),
        }
    }

    /// Convert a length in this unit to `target`
    pub fn convert(self, value: f64, target: PrintUnit) -> f64 {
        if self == target {
            return value;
        }
        target.from_millis(self.to_millis(value))
    }

    /// Short label used on printed dimensions
    pub fn abbreviation(self) -> &'static str {
        match self {
            PrintUnit::Inches => "in",
            PrintUnit::Feet => "ft",
            PrintUnit::Millimeters => "mm",
            PrintUnit::Centimeters => "cm",
            PrintUnit::Meters => "m",
            PrintUnit::Points => "pt",
        }
    }
}

impl std::fmt::Display for PrintUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inch_is_72_points() {
        assert_relative_eq!(PrintUnit::Inches.to_points(1.0), 72.0);
        assert_relative_eq!(PrintUnit::Millimeters.to_points(25.4), 72.0, epsilon = 1e-9);
        assert_relative_eq!(PrintUnit::Feet.to_points(1.0), 864.0, epsilon = 1e-9);
    }

    #[test]
    fn test_meters_to_points() {
        // 1 m = 1000 / 25.4 in
        let expected = 1000.0 / 25.4 * 72.0;
        assert_relative_eq!(PrintUnit::Meters.to_points(1.0), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_points_is_identity() {
        assert_eq!(PrintUnit::Points.to_points(12.5), 12.5);
        assert_eq!(PrintUnit::Points.from_points(12.5), 12.5);
    }

    #[test]
    fn test_conversion_is_linear() {
        for unit in PrintUnit::ALL {
            let r = 0.0381;
            assert_relative_eq!(
                unit.to_points(2.0 * r),
                2.0 * unit.to_points(r),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_from_points_inverts_to_points() {
        for unit in PrintUnit::ALL {
            let value = 3.25;
            assert_relative_eq!(
                unit.from_points(unit.to_points(value)),
                value,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_convert_between_units() {
        assert_relative_eq!(
            PrintUnit::Centimeters.convert(2.54, PrintUnit::Inches),
            1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(PrintUnit::Meters.to_meters(1.5), 1.5);
        assert_eq!(PrintUnit::Feet.convert(4.0, PrintUnit::Feet), 4.0);
    }

    #[test]
    fn test_display_uses_abbreviation() {
        assert_eq!(PrintUnit::Millimeters.to_string(), "mm");
        assert_eq!(PrintUnit::default(), PrintUnit::Meters);
    }
}
