//! # floem-orbital
//!
//! An orbital date picker widget for [Floem](https://github.com/lapce/floem).
//!
//! A small body orbits a sun along an ellipse; its angle along the orbit is
//! the selected date's position within the year. Dragging spins it around,
//! and a full lap moves the date by one year.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_orbital::{date_picker, CalendarDate};
//!
//! let date = RwSignal::new(CalendarDate::today());
//! // Use `date_picker(date)` in your Floem view tree.
//! ```
//!
//! The calendar arithmetic ([`calendar`]) and drag tracking
//! ([`DragController`]) have no Floem dependency beyond `kurbo::Point` and
//! can be driven directly.

pub mod calendar;

mod angle;
mod config;
mod constants;
mod controls;
mod date;
mod drag;
mod geometry;
mod orbital_view;
mod panel;

pub use angle::OrbitAngle;
pub use config::{ConfigError, PickerConfig, Theme, ThemeColor};
#[cfg(feature = "clipboard")]
pub use controls::copy_button;
pub use controls::submit_button;
pub use date::CalendarDate;
pub use drag::{AccumulationStrategy, DragController, DragSession};
pub use geometry::OrbitGeometry;
pub use orbital_view::{OrbitalPicker, orbital_picker};

use floem::prelude::*;
use floem::reactive::RwSignal;

/// Creates the picker panel with the default configuration.
///
/// The panel reads from and writes to `date`. External changes to the
/// signal move the orbiting body, and drags update the signal.
pub fn date_picker(date: RwSignal<CalendarDate>) -> impl IntoView {
    date_picker_with(date, PickerConfig::default())
}

/// Creates the picker panel with a custom configuration.
pub fn date_picker_with(date: RwSignal<CalendarDate>, config: PickerConfig) -> impl IntoView {
    controls::load_icon_font();
    panel::date_panel(date, config)
}
