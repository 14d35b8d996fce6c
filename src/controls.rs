//! Buttons shared by the panel and the demo page.

use std::sync::Once;

use floem::prelude::*;
#[cfg(feature = "clipboard")]
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::text::FONT_SYSTEM;

use crate::constants;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Registers the lucide icon font with Floem's font system (once per process).
pub(crate) fn load_icon_font() {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
}

/// A small icon button that copies the result of `get_text` to the clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    load_icon_font();
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(constants::ICON_FONT)
                .font_family("lucide".to_string())
                .color(c)
        }),
    )
    .style(|s| {
        s.size(constants::ICON_BUTTON_SIZE, constants::ICON_BUTTON_SIZE)
            .items_center()
            .justify_center()
            .border_radius(constants::ICON_BUTTON_RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                log::warn!("Failed to copy to clipboard: {}", e);
            }
        }
        Err(e) => log::warn!("Clipboard unavailable: {}", e),
    }
}

/// A filled button with a calendar icon, e.g. "Submit Date".
pub fn submit_button(text: &'static str, on_submit: impl Fn() + 'static) -> impl IntoView {
    load_icon_font();
    h_stack((
        label(|| lucide_icons::Icon::CalendarDays.unicode().to_string()).style(|s| {
            s.font_size(constants::ICON_FONT)
                .font_family("lucide".to_string())
                .color(Color::WHITE)
        }),
        label(move || text).style(|s| {
            s.font_size(constants::BUTTON_FONT)
                .font_bold()
                .color(Color::WHITE)
        }),
    ))
    .style(|s| {
        s.gap(constants::GAP)
            .items_center()
            .padding_horiz(20.0)
            .padding_vert(10.0)
            .border_radius(constants::RADIUS)
            .background(Color::rgb8(37, 99, 235))
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(29, 78, 216)))
            .active(|s| s.background(Color::rgb8(30, 64, 175)))
    })
    .on_click_stop(move |_| on_submit())
}
