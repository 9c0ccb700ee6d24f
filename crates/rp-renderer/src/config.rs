//! Print style configuration
//!
//! Colors and stroke settings used by the part printables. Styles can be
//! loaded from and saved to RON documents.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::{CROSSHAIR_LENGTH, OUTLINE_STROKE_WIDTH, THIN_STROKE_WIDTH};

/// Visual style of a printed centering ring
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderStyle {
    /// Fill of the ring body
    pub ring_fill: Color,
    /// Outline of the ring and its cutouts
    pub outline: Color,
    /// Fill of the motor mount cutouts
    pub cutout_fill: Color,
    /// Color of the center cross-hairs
    pub crosshair: Color,
    /// Length of each cross-hair segment (points)
    pub crosshair_length: f32,
    /// Stroke width of the cross-hairs (points)
    pub thin_stroke_width: f32,
    /// Stroke width of circle outlines (points)
    pub outline_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::classic()
    }
}

impl RenderStyle {
    /// Gray ring with white cutouts
    pub fn classic() -> Self {
        Self {
            ring_fill: Color::LIGHT_GRAY,
            outline: Color::BLACK,
            cutout_fill: Color::WHITE,
            crosshair: Color::BLACK,
            crosshair_length: CROSSHAIR_LENGTH,
            thin_stroke_width: THIN_STROKE_WIDTH,
            outline_width: OUTLINE_STROKE_WIDTH,
        }
    }

    /// Outline-only style for printing templates without toner fill
    pub fn monochrome() -> Self {
        Self {
            ring_fill: Color::WHITE,
            ..Self::classic()
        }
    }

    /// Parse a style from a RON document; missing fields take classic values
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        ron::from_str(source).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Serialize the style as pretty RON
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Style configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The document is not a valid style
    #[error("Failed to parse style: {0}")]
    Deserialize(String),
    /// The style could not be written
    #[error("Failed to serialize style: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic() {
        let style = RenderStyle::default();
        assert_eq!(style, RenderStyle::classic());
        assert_eq!(style.crosshair_length, 10.0);
        assert_eq!(style.ring_fill, Color::LIGHT_GRAY);
    }

    #[test]
    fn test_ron_round_trip() {
        let style = RenderStyle {
            crosshair_length: 14.0,
            ..RenderStyle::monochrome()
        };
        let text = style.to_ron().unwrap();
        assert_eq!(RenderStyle::from_ron(&text).unwrap(), style);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let style = RenderStyle::from_ron("(crosshair_length: 6.0)").unwrap();
        assert_eq!(style.crosshair_length, 6.0);
        assert_eq!(style.outline, Color::BLACK);
    }

    #[test]
    fn test_malformed_document() {
        let err = RenderStyle::from_ron("(crosshair_length: \"long\")").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialize(_)));
    }
}
