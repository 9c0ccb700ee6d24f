//! In-memory surface that records draw calls
//!
//! Used to inspect what a printable emits without a real print device,
//! and as a display list that a device backend can replay later.

use std::convert::Infallible;

use glam::Vec2;

use crate::color::Color;
use crate::shape::Shape;
use crate::surface::DrawSurface;

/// A single recorded draw call, with the state it was drawn in
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled shape
    Fill {
        /// Shape that was filled
        shape: Shape,
        /// Fill color
        color: Color,
    },
    /// Outlined shape
    Stroke {
        /// Shape that was outlined
        shape: Shape,
        /// Outline color
        color: Color,
        /// Outline width
        width: f32,
    },
    /// Line segment
    Line {
        /// Start point
        from: Vec2,
        /// End point
        to: Vec2,
        /// Line color
        color: Color,
        /// Line width
        width: f32,
    },
    /// Origin moved by an offset
    Translate(Vec2),
}

/// Surface that stores every draw call instead of rasterizing
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    color: Color,
    background: Color,
    stroke_width: f32,
    origin: Vec2,
    commands: Vec<DrawCommand>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            background: Color::WHITE,
            stroke_width: 1.0,
            origin: Vec2::ZERO,
            commands: Vec::new(),
        }
    }
}

impl RecordingSurface {
    /// Create an empty surface with black paint on white
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in call order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Filled shapes with their colors
    pub fn fills(&self) -> impl Iterator<Item = (&Shape, Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill { shape, color } => Some((shape, *color)),
            _ => None,
        })
    }

    /// Outlined shapes
    pub fn strokes(&self) -> impl Iterator<Item = &Shape> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke { shape, .. } => Some(shape),
            _ => None,
        })
    }

    /// Line segments as (from, to)
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    /// Accumulated translation of the origin
    pub fn origin(&self) -> Vec2 {
        self.origin
    }
}

impl DrawSurface for RecordingSurface {
    type Error = Infallible;

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    fn fill(&mut self, shape: &Shape) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Fill {
            shape: *shape,
            color: self.color,
        });
        Ok(())
    }

    fn stroke(&mut self, shape: &Shape) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Stroke {
            shape: *shape,
            color: self.color,
            width: self.stroke_width,
        });
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: self.color,
            width: self.stroke_width,
        });
        Ok(())
    }

    fn translate(&mut self, offset: Vec2) -> Result<(), Infallible> {
        self.origin += offset;
        self.commands.push(DrawCommand::Translate(offset));
        Ok(())
    }
}
