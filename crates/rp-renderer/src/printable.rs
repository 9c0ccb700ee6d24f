//! Printable trait
//!
//! A printable is a self-contained drawing of one rocket part with an
//! intrinsic size. The page layout code allocates `size()` points for it and
//! calls [`Printable::paint`] with the position it was given on the page.

use glam::Vec2;

use crate::shape::Size;
use crate::surface::DrawSurface;

/// A part drawing that can be placed on a print page
pub trait Printable {
    /// Intrinsic size in points
    fn size(&self) -> Size;

    /// Draw the part with its bounding box at the surface origin
    fn draw<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error>;

    /// Draw the part with its bounding box at `offset`
    ///
    /// The surface origin is moved back even when drawing fails.
    fn paint<S: DrawSurface>(&self, surface: &mut S, offset: Vec2) -> Result<(), S::Error> {
        surface.translate(offset)?;
        let drawn = self.draw(surface);
        surface.translate(-offset)?;
        drawn
    }
}
