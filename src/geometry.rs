//! Orbit geometry in view-box units and the mapping onto the widget.
//!
//! The view box is sized to fit the orbit plus the orbiting body and a fixed
//! margin; it is scaled uniformly (letterboxed) into whatever size the
//! widget is laid out at.

use floem::kurbo::{Affine, Ellipse, Point, Rect, Size, Vec2};

use crate::angle::OrbitAngle;
use crate::config::PickerConfig;
use crate::constants;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGeometry {
    pub rx: f64,
    pub ry: f64,
    pub sun_radius: f64,
    pub body_radius: f64,
}

impl From<&PickerConfig> for OrbitGeometry {
    fn from(config: &PickerConfig) -> Self {
        Self {
            rx: config.orbit_rx,
            ry: config.orbit_ry,
            sun_radius: config.sun_radius,
            body_radius: config.body_radius,
        }
    }
}

impl OrbitGeometry {
    pub fn view_box(&self) -> Size {
        Size::new(
            (self.rx + self.body_radius) * 2.0 + constants::VIEW_BOX_MARGIN,
            (self.ry + self.body_radius) * 2.0 + constants::VIEW_BOX_MARGIN,
        )
    }

    pub fn aspect_ratio(&self) -> f64 {
        let vb = self.view_box();
        vb.width / vb.height
    }

    pub fn center(&self) -> Point {
        let vb = self.view_box();
        Point::new(vb.width / 2.0, vb.height / 2.0)
    }

    pub fn orbit(&self) -> Ellipse {
        Ellipse::new(self.center(), (self.rx, self.ry), 0.0)
    }

    /// `(cx + rx cos a, cy + ry sin a)`. The ellipse only affects drawing; the
    /// date mapping stays linear in the angle.
    pub fn body_position(&self, angle: OrbitAngle) -> Point {
        let c = self.center();
        let a = angle.radians();
        Point::new(c.x + self.rx * a.cos(), c.y + self.ry * a.sin())
    }

    /// View-box to widget transform for a widget of `size`, centered and
    /// uniformly scaled. `None` when the widget has no area.
    pub fn to_widget(&self, size: Size) -> Option<Affine> {
        if size.width <= 0.0 || size.height <= 0.0 {
            return None;
        }
        let vb = self.view_box();
        let scale = (size.width / vb.width).min(size.height / vb.height);
        let offset = Vec2::new(
            (size.width - vb.width * scale) / 2.0,
            (size.height - vb.height * scale) / 2.0,
        );
        Some(Affine::translate(offset) * Affine::scale(scale))
    }

    /// Rect the view box occupies inside a widget of `size`.
    pub fn frame(&self, size: Size) -> Option<Rect> {
        let transform = self.to_widget(size)?;
        Some(transform.transform_rect_bbox(self.view_box().to_rect()))
    }
}
