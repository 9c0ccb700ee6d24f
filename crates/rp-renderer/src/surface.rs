//! Drawing surface abstraction
//!
//! A [`DrawSurface`] is an immediate-mode 2D canvas in printer points with a
//! small amount of mutable graphics state (current color, background color,
//! stroke width). Renderers borrow the surface for one draw call and must
//! hand it back with that state unchanged; [`SurfaceStateGuard`] restores it
//! on every exit path.

use std::ops::{Deref, DerefMut};

use glam::Vec2;

use crate::color::Color;
use crate::shape::Shape;

/// An immediate-mode 2D drawing target
pub trait DrawSurface {
    /// Error raised by the backing device
    type Error;

    /// Current paint color
    fn color(&self) -> Color;

    /// Set the paint color for subsequent calls
    fn set_color(&mut self, color: Color);

    /// Current background color
    fn background(&self) -> Color;

    /// Set the background color
    fn set_background(&mut self, color: Color);

    /// Current stroke width in points
    fn stroke_width(&self) -> f32;

    /// Set the stroke width for outlines and lines
    fn set_stroke_width(&mut self, width: f32);

    /// Fill a shape with the current color
    fn fill(&mut self, shape: &Shape) -> Result<(), Self::Error>;

    /// Outline a shape with the current color and stroke width
    fn stroke(&mut self, shape: &Shape) -> Result<(), Self::Error>;

    /// Draw a straight line segment
    fn draw_line(&mut self, from: Vec2, to: Vec2) -> Result<(), Self::Error>;

    /// Move the origin for subsequent calls
    fn translate(&mut self, offset: Vec2) -> Result<(), Self::Error>;
}

/// Snapshot of the mutable graphics state of a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceState {
    /// Paint color
    pub color: Color,
    /// Background color
    pub background: Color,
    /// Stroke width
    pub stroke_width: f32,
}

impl SurfaceState {
    /// Read the current state of `surface`
    pub fn capture<S: DrawSurface + ?Sized>(surface: &S) -> Self {
        Self {
            color: surface.color(),
            background: surface.background(),
            stroke_width: surface.stroke_width(),
        }
    }

    /// Write this state back to `surface`
    pub fn apply<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_color(self.color);
        surface.set_background(self.background);
        surface.set_stroke_width(self.stroke_width);
    }
}

/// Restores a surface's graphics state when dropped
///
/// Derefs to the wrapped surface, so drawing goes through the guard.
pub struct SurfaceStateGuard<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
    saved: SurfaceState,
}

impl<'a, S: DrawSurface + ?Sized> SurfaceStateGuard<'a, S> {
    /// Capture the state of `surface` and borrow it for drawing
    pub fn new(surface: &'a mut S) -> Self {
        let saved = SurfaceState::capture(surface);
        Self { surface, saved }
    }

    /// State that will be restored on drop
    pub fn saved(&self) -> SurfaceState {
        self.saved
    }
}

impl<S: DrawSurface + ?Sized> Deref for SurfaceStateGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for SurfaceStateGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for SurfaceStateGuard<'_, S> {
    fn drop(&mut self) {
        self.saved.apply(&mut *self.surface);
    }
}
