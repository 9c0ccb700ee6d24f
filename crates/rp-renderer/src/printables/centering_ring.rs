//! Centering ring printable
//!
//! Draws a centering ring as a filled disk with one cutout per motor mount
//! tube. Each cutout carries a cross-hair marking its center so the hole
//! can be located when the template is glued to stock.

use glam::Vec2;
use rp_core::{MotorMount, MountOffset, PrintUnit, RingSpec};

use crate::config::RenderStyle;
use crate::printable::Printable;
use crate::shape::{Shape, Size};
use crate::surface::{DrawSurface, SurfaceStateGuard};

/// Center of a mount cutout in points, relative to the ring's bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterPoint(pub Vec2);

impl CenterPoint {
    /// Create a center point
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Horizontal position
    pub fn x(&self) -> f32 {
        self.0.x
    }

    /// Vertical position
    pub fn y(&self) -> f32 {
        self.0.y
    }
}

/// Cutout centers in insertion order, without duplicates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CenterPointSet {
    points: Vec<CenterPoint>,
}

impl CenterPointSet {
    /// Convert mount offsets to points and shift them into the bounding box
    ///
    /// Offsets that land on the same point collapse into one cutout.
    pub fn from_offsets(offsets: &[MountOffset], unit: PrintUnit, outer_radius: f64) -> Self {
        let radius = unit.to_points(outer_radius) as f32;
        let mut points: Vec<CenterPoint> = Vec::with_capacity(offsets.len());
        for offset in offsets {
            let point = CenterPoint::new(
                unit.to_points(offset.y) as f32 + radius,
                unit.to_points(offset.z) as f32 + radius,
            );
            if points.contains(&point) {
                tracing::warn!(
                    "Mount offset ({}, {}) duplicates an existing cutout, skipping",
                    offset.y,
                    offset.z
                );
                continue;
            }
            points.push(point);
        }
        Self { points }
    }

    /// Number of distinct cutouts
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when there are no cutouts
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when `point` is one of the cutout centers
    pub fn contains(&self, point: &CenterPoint) -> bool {
        self.points.contains(point)
    }

    /// Iterate cutout centers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CenterPoint> {
        self.points.iter()
    }
}

/// Offsets of the mount cutouts for the given motor mounts
///
/// - no mounts: one cutout on the ring axis
/// - one single-tube mount: one cutout on the ring axis, whatever its shift
/// - one clustered mount: one cutout per tube in the cluster
/// - several mounts: one cutout per mount at its radial shift
pub fn mount_offsets(mounts: Option<&[MotorMount]>) -> Vec<MountOffset> {
    match mounts {
        None | Some([]) => {
            tracing::debug!("No motor mounts, centering single cutout");
            vec![MountOffset::CENTER]
        }
        Some([mount]) if !mount.is_clustered() => {
            tracing::debug!("Single motor mount, centering cutout");
            vec![MountOffset::CENTER]
        }
        Some([mount]) => {
            tracing::debug!(
                "Clustered motor mount ({}), {} cutouts",
                mount.cluster,
                mount.cluster.cluster_count()
            );
            mount.cluster_points()
        }
        Some(mounts) => {
            tracing::debug!("{} motor mounts, placing cutouts by radial shift", mounts.len());
            mounts.iter().map(|m| m.radial_shift).collect()
        }
    }
}

/// Printable drawing of a centering ring and its motor mount cutouts
#[derive(Debug, Clone)]
pub struct CenteringRingRenderer {
    ring: RingSpec,
    unit: PrintUnit,
    style: RenderStyle,
    center_points: CenterPointSet,
}

impl CenteringRingRenderer {
    /// Create a renderer for a ring measured in meters
    pub fn create(ring: RingSpec, mounts: Option<&[MotorMount]>) -> Self {
        Self::create_in(PrintUnit::Meters, ring, mounts)
    }

    /// Create a renderer for a ring and mounts measured in `unit`
    pub fn create_in(unit: PrintUnit, ring: RingSpec, mounts: Option<&[MotorMount]>) -> Self {
        let offsets = mount_offsets(mounts);
        let center_points = CenterPointSet::from_offsets(&offsets, unit, ring.outer_radius());
        tracing::debug!(
            "Centering ring {}{} OD with {} cutout(s)",
            ring.outer_diameter(),
            unit,
            center_points.len()
        );
        Self {
            ring,
            unit,
            style: RenderStyle::default(),
            center_points,
        }
    }

    /// Replace the drawing style
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Ring geometry
    pub fn ring(&self) -> &RingSpec {
        &self.ring
    }

    /// Physical unit of the ring and mount dimensions
    pub fn unit(&self) -> PrintUnit {
        self.unit
    }

    /// Drawing style
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Cutout centers in points
    pub fn center_points(&self) -> &CenterPointSet {
        &self.center_points
    }

    fn to_points(&self, length: f64) -> f32 {
        self.unit.to_points(length) as f32
    }

    /// Draw one mount cutout with its center cross-hair
    fn draw_inner_circle<S: DrawSurface>(
        &self,
        surface: &mut S,
        center: CenterPoint,
    ) -> Result<(), S::Error> {
        let radius = self.to_points(self.ring.inner_radius());
        let circle = Shape::circle(center.0, radius);
        surface.set_color(self.style.cutout_fill);
        surface.fill(&circle)?;
        surface.set_color(self.style.outline);
        surface.set_stroke_width(self.style.outline_width);
        surface.stroke(&circle)?;

        self.draw_cross(surface, center.0)
    }

    /// Draw a cross-hair centered on `center`, snapped to whole points
    fn draw_cross<S: DrawSurface>(&self, surface: &mut S, center: Vec2) -> Result<(), S::Error> {
        let center = center.trunc();
        let half = (self.style.crosshair_length / 2.0).trunc();
        surface.set_color(self.style.crosshair);
        surface.set_stroke_width(self.style.thin_stroke_width);
        surface.draw_line(center - Vec2::X * half, center + Vec2::X * half)?;
        surface.draw_line(center - Vec2::Y * half, center + Vec2::Y * half)
    }
}

impl Printable for CenteringRingRenderer {
    fn size(&self) -> Size {
        Size::square(self.to_points(self.ring.outer_diameter()))
    }

    fn draw<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let mut surface = SurfaceStateGuard::new(surface);

        let diameter = self.to_points(self.ring.outer_diameter());
        let outer = Shape::ellipse(0.0, 0.0, diameter, diameter);
        surface.set_color(self.style.ring_fill);
        surface.fill(&outer)?;
        surface.set_color(self.style.outline);
        surface.set_stroke_width(self.style.outline_width);
        surface.stroke(&outer)?;

        for center in self.center_points.iter() {
            tracing::trace!("Drawing cutout at ({}, {})", center.x(), center.y());
            self.draw_inner_circle(&mut *surface, *center)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rp_core::ClusterConfiguration;

    use crate::color::Color;
    use crate::recording::RecordingSurface;
    use crate::surface::SurfaceState;

    fn unit_ring() -> RingSpec {
        RingSpec::new(1.0, 0.2).unwrap()
    }

    #[test]
    fn test_no_mounts_single_center() {
        let renderer = CenteringRingRenderer::create_in(PrintUnit::Points, unit_ring(), None);
        let points: Vec<_> = renderer.center_points().iter().copied().collect();
        assert_eq!(points, vec![CenterPoint::new(1.0, 1.0)]);
    }

    #[test]
    fn test_empty_mount_list_single_center() {
        let renderer = CenteringRingRenderer::create_in(
            PrintUnit::Points,
            unit_ring(),
            Some(&[] as &[MotorMount]),
        );
        assert_eq!(renderer.center_points().len(), 1);
        assert!(renderer.center_points().contains(&CenterPoint::new(1.0, 1.0)));
    }

    #[test]
    fn test_single_mount_ignores_radial_shift() {
        let mount = MotorMount::new(0.1).with_radial_shift(0.4, -0.3);
        let renderer = CenteringRingRenderer::create_in(
            PrintUnit::Points,
            unit_ring(),
            Some(std::slice::from_ref(&mount)),
        );
        let points: Vec<_> = renderer.center_points().iter().copied().collect();
        assert_eq!(points, vec![CenterPoint::new(1.0, 1.0)]);
    }

    #[test]
    fn test_single_clustered_mount_uses_cluster_points() {
        let mount = MotorMount::new(0.25)
            .with_cluster(ClusterConfiguration::Double)
            .with_radial_shift(0.5, 0.5);
        let renderer = CenteringRingRenderer::create_in(
            PrintUnit::Points,
            unit_ring(),
            Some(std::slice::from_ref(&mount)),
        );
        let points: Vec<_> = renderer.center_points().iter().copied().collect();
        assert_eq!(
            points,
            vec![CenterPoint::new(0.75, 1.0), CenterPoint::new(1.25, 1.0)]
        );
    }

    #[test]
    fn test_multiple_mounts_use_radial_shift() {
        let mounts = [
            MotorMount::new(0.1).with_radial_shift(0.5, 0.0),
            MotorMount::new(0.1).with_radial_shift(-0.5, 0.0),
            MotorMount::new(0.1).with_radial_shift(0.0, 0.5),
        ];
        let renderer =
            CenteringRingRenderer::create_in(PrintUnit::Points, unit_ring(), Some(&mounts[..]));
        let points: Vec<_> = renderer.center_points().iter().copied().collect();
        assert_eq!(
            points,
            vec![
                CenterPoint::new(1.5, 1.0),
                CenterPoint::new(0.5, 1.0),
                CenterPoint::new(1.0, 1.5),
            ]
        );
    }

    #[test]
    fn test_duplicate_mounts_collapse() {
        let mounts = [
            MotorMount::new(0.1).with_radial_shift(0.25, 0.25),
            MotorMount::new(0.1).with_radial_shift(0.25, 0.25),
            MotorMount::new(0.1).with_radial_shift(-0.25, 0.25),
        ];
        let renderer =
            CenteringRingRenderer::create_in(PrintUnit::Points, unit_ring(), Some(&mounts[..]));
        assert_eq!(renderer.center_points().len(), 2);
    }

    #[test]
    fn test_meters_are_converted() {
        let ring = RingSpec::new(0.0254, 0.0127).unwrap();
        let mounts = [
            MotorMount::new(0.005).with_radial_shift(0.0127, 0.0),
            MotorMount::new(0.005).with_radial_shift(-0.0127, 0.0),
        ];
        let renderer = CenteringRingRenderer::create(ring, Some(&mounts[..]));
        let points: Vec<_> = renderer.center_points().iter().copied().collect();
        // 1 in radius = 72 pt, 0.5 in shift = 36 pt
        assert_relative_eq!(points[0].x(), 108.0, epsilon = 1e-3);
        assert_relative_eq!(points[1].x(), 36.0, epsilon = 1e-3);
        assert_relative_eq!(points[0].y(), 72.0, epsilon = 1e-3);
        assert_relative_eq!(renderer.size().width, 144.0, epsilon = 1e-3);
    }

    #[test]
    fn test_size_is_square_regardless_of_mounts() {
        let mounts = [
            MotorMount::new(0.1).with_radial_shift(0.9, 0.0),
            MotorMount::new(0.1).with_radial_shift(0.0, 0.9),
        ];
        for mounts in [None, Some(&mounts[..])] {
            let renderer = CenteringRingRenderer::create_in(PrintUnit::Points, unit_ring(), mounts);
            assert_eq!(renderer.size(), Size::square(2.0));
        }
    }

    #[test]
    fn test_draw_order_and_colors() {
        let renderer = CenteringRingRenderer::create_in(PrintUnit::Points, unit_ring(), None);
        let mut surface = RecordingSurface::new();
        renderer.draw(&mut surface).unwrap();

        let fills: Vec<_> = surface.fills().collect();
        assert_eq!(fills.len(), 2);
        assert_eq!(*fills[0].0, Shape::ellipse(0.0, 0.0, 2.0, 2.0));
        assert_eq!(fills[0].1, Color::LIGHT_GRAY);
        assert_eq!(fills[1].1, Color::WHITE);
        assert_relative_eq!(fills[1].0.center().x, 1.0, epsilon = 1e-6);
        assert_eq!(surface.strokes().count(), 2);
    }

    #[test]
    fn test_crosshair_uses_style() {
        let style = RenderStyle {
            crosshair: Color::GRAY,
            crosshair_length: 20.0,
            ..RenderStyle::classic()
        };
        let ring = RingSpec::new(50.0, 10.0).unwrap();
        let renderer = CenteringRingRenderer::create_in(PrintUnit::Points, ring, None)
            .with_style(style);
        let mut surface = RecordingSurface::new();
        renderer.draw(&mut surface).unwrap();

        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(
            lines,
            vec![
                (Vec2::new(40.0, 50.0), Vec2::new(60.0, 50.0)),
                (Vec2::new(50.0, 40.0), Vec2::new(50.0, 60.0)),
            ]
        );
        assert!(surface.commands().iter().any(|c| matches!(
            c,
            crate::recording::DrawCommand::Line { color, width, .. }
                if *color == Color::GRAY && *width == 0.3
        )));
    }

    #[test]
    fn test_draw_restores_surface_state() {
        let renderer = CenteringRingRenderer::create_in(PrintUnit::Points, unit_ring(), None);
        let mut surface = RecordingSurface::new();
        surface.set_background(Color::rgb(10, 20, 30));
        surface.set_color(Color::rgb(200, 0, 0));
        surface.set_stroke_width(2.5);
        let before = SurfaceState::capture(&surface);

        renderer.draw(&mut surface).unwrap();
        assert_eq!(SurfaceState::capture(&surface), before);
    }

    #[test]
    fn test_draw_is_repeatable() {
        let mounts = [
            MotorMount::new(0.1).with_radial_shift(0.5, 0.0),
            MotorMount::new(0.1).with_radial_shift(-0.5, 0.0),
        ];
        let renderer =
            CenteringRingRenderer::create_in(PrintUnit::Points, unit_ring(), Some(&mounts[..]));
        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        renderer.draw(&mut first).unwrap();
        renderer.draw(&mut second).unwrap();
        assert_eq!(first.commands(), second.commands());
    }
}
