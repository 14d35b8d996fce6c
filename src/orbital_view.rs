//! The orbital picker view.
//!
//! Draws a dashed orbit ellipse around a sun with a small body on the orbit.
//! The body's angle is the selected date's position in its year; dragging
//! anywhere on the widget spins the body around the center and moves the
//! date with it.

use floem::kurbo::{Circle, Point, Size, Stroke};

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::style::CursorStyle;
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::angle::OrbitAngle;
use crate::config::PickerConfig;
use crate::constants;
use crate::date::CalendarDate;
use crate::drag::DragController;
use crate::geometry::OrbitGeometry;

enum PickerUpdate {
    Date(CalendarDate),
}

/// What an incoming event does to the drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragAction {
    Begin(Point),
    Update(Point),
    End,
    Cancel,
}

/// Maps a Floem event onto the drag controller.
///
/// `PointerLeave` maps to nothing. Floem sends it per view whenever the view
/// drops out of the hovered set, which happens mid-drag, and sends the same
/// event when the cursor leaves the window. The active view keeps receiving
/// moves and the release in both cases; losing the window arrives as
/// `WindowLostFocus`.
fn drag_action(event: &Event, dragging: bool) -> Option<DragAction> {
    match event {
        Event::PointerDown(e) => Some(DragAction::Begin(e.pos)),
        Event::PointerMove(e) if dragging => Some(DragAction::Update(e.pos)),
        Event::PointerUp(_) if dragging => Some(DragAction::End),
        Event::FocusLost | Event::WindowLostFocus if dragging => Some(DragAction::Cancel),
        _ => None,
    }
}

/// Floem has no grab cursor: the hand marks the draggable surface and the
/// plain arrow shows while the body is held.
fn cursor_for(dragging: bool) -> CursorStyle {
    if dragging {
        CursorStyle::Default
    } else {
        CursorStyle::Pointer
    }
}

pub struct OrbitalPicker {
    id: ViewId,
    date: CalendarDate,
    config: PickerConfig,
    geometry: OrbitGeometry,
    drag: DragController,
    dragging: RwSignal<bool>,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(CalendarDate)>>,
    warned_degenerate: bool,
}

/// Creates an orbital date picker bound to `date`.
///
/// External changes to `date` move the body; drags write new dates back.
pub fn orbital_picker(date: RwSignal<CalendarDate>, config: PickerConfig) -> OrbitalPicker {
    let id = ViewId::new();

    create_effect(move |_| {
        let d = date.get();
        id.update_state(PickerUpdate::Date(d));
    });

    let geometry = OrbitGeometry::from(&config);
    let aspect = geometry.aspect_ratio() as f32;
    let dragging = RwSignal::new(false);

    OrbitalPicker {
        id,
        date: date.get_untracked(),
        drag: DragController::new(config.strategy),
        dragging,
        config,
        geometry,
        size: Default::default(),
        on_change: Some(Box::new(move |d| {
            if date.get_untracked() != d {
                date.set(d);
            }
        })),
        warned_degenerate: false,
    }
    .style(move |s| {
        s.width_full()
            .max_width(constants::MAX_PICKER_WIDTH)
            .aspect_ratio(aspect)
            .cursor(cursor_for(dragging.get()))
    })
}

impl OrbitalPicker {
    fn widget_size(&self) -> Size {
        Size::new(self.size.width as f64, self.size.height as f64)
    }

    /// Center of the widget's bounds, which is also the orbit center.
    fn center(&mut self) -> Point {
        let size = self.widget_size();
        if (size.width <= 0.0 || size.height <= 0.0) && !self.warned_degenerate {
            log::warn!("orbital picker received pointer input before it was laid out");
            self.warned_degenerate = true;
        }
        Point::new(size.width / 2.0, size.height / 2.0)
    }

    fn emit(&mut self, date: CalendarDate) {
        self.date = date;
        if let Some(cb) = &self.on_change {
            cb(date);
        }
        self.id.request_layout();
    }

    /// Mirrors the controller state into the signal the cursor style reads.
    fn sync_dragging(&self) {
        let dragging = self.drag.is_dragging();
        if self.dragging.get_untracked() != dragging {
            self.dragging.set(dragging);
        }
    }
}

impl View for OrbitalPicker {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<PickerUpdate>() {
            match *update {
                PickerUpdate::Date(d) => self.date = d,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let Some(action) = drag_action(event, self.drag.is_dragging()) else {
            return EventPropagation::Continue;
        };
        let propagation = match action {
            DragAction::Begin(pos) => {
                cx.update_active(self.id());
                let center = self.center();
                self.drag.begin(pos, center, self.date);
                EventPropagation::Stop
            }
            DragAction::Update(pos) => {
                let center = self.center();
                if let Some(date) = self.drag.update(pos, center, self.date) {
                    self.emit(date);
                }
                // Moves reach the active view directly. Continuing keeps it in
                // the hovered set so the drag cursor applies.
                EventPropagation::Continue
            }
            DragAction::End => {
                self.drag.end();
                EventPropagation::Continue
            }
            DragAction::Cancel => {
                self.drag.cancel();
                EventPropagation::Continue
            }
        };
        self.sync_dragging();
        propagation
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<floem::kurbo::Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let Some(transform) = self.geometry.to_widget(self.widget_size()) else {
            return;
        };
        let scale = transform.as_coeffs()[0];
        let theme = &self.config.theme;
        let center = transform * self.geometry.center();

        // Dashed orbit
        let orbit = transform * self.geometry.orbit();
        let dashes = constants::ORBIT_DASH.map(|d| d * scale);
        cx.stroke(
            &orbit,
            theme.orbit.to_color(),
            &Stroke::new(constants::ORBIT_STROKE * scale).with_dashes(0.0, dashes),
        );

        // Sun glow: outermost ring first, each a little more opaque
        let sun_radius = self.geometry.sun_radius * scale;
        if theme.glow {
            for layer in (1..=constants::GLOW_LAYERS).rev() {
                let t = layer as f64 / constants::GLOW_LAYERS as f64;
                let r = sun_radius * (1.0 + constants::GLOW_SPREAD * t);
                let color = theme.sun.faded(0.35 * (1.0 - t) + 0.05);
                cx.fill(&Circle::new(center, r), color.to_color(), 0.0);
            }
        }
        cx.fill(&Circle::new(center, sun_radius), theme.sun.to_color(), 0.0);

        // Orbiting body
        let angle = OrbitAngle::for_date(&self.date);
        let body_pt = transform * self.geometry.body_position(angle);
        let body = Circle::new(body_pt, self.geometry.body_radius * scale);
        cx.fill(&body, theme.body.to_color(), 0.0);
        cx.stroke(
            &body,
            theme.body_outline.to_color(),
            &Stroke::new(constants::BODY_STROKE * scale),
        );
    }
}
