//! Shapes and sizes in device space (printer points)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A closed shape that can be filled or outlined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Ellipse inscribed in the box at `origin` (top-left) with `size`
    Ellipse {
        /// Top-left corner of the bounding box
        origin: Vec2,
        /// Width and height of the bounding box
        size: Vec2,
    },
}

impl Shape {
    /// Ellipse from its bounding box
    pub fn ellipse(x: f32, y: f32, width: f32, height: f32) -> Self {
        Shape::Ellipse {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Circle from its center and radius
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Shape::Ellipse {
            origin: center - Vec2::splat(radius),
            size: Vec2::splat(2.0 * radius),
        }
    }

    /// Bounding box as (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        match *self {
            Shape::Ellipse { origin, size } => (origin, origin + size),
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec2 {
        let (min, max) = self.bounds();
        (min + max) * 0.5
    }
}

/// Intrinsic size of a printable, in points
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
}

impl Size {
    /// Create a size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square of the given side
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }
}
