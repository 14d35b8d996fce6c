//! Date panel: the orbital picker with a "Selected Date" readout below it.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::config::PickerConfig;
#[cfg(feature = "clipboard")]
use crate::controls::copy_button;
use crate::constants;
use crate::date::CalendarDate;
use crate::orbital_view::orbital_picker;

/// Picker plus readout, laid out as a centered column.
pub(crate) fn date_panel(date: RwSignal<CalendarDate>, config: PickerConfig) -> impl IntoView {
    let background = config.theme.background.to_color();
    let text = config.theme.text.to_color();
    let muted = config.theme.muted_text.to_color();

    v_stack((
        orbital_picker(date, config),
        v_stack((
            label(|| "Selected Date")
                .style(move |s| s.font_size(constants::CAPTION_FONT).color(muted)),
            h_stack((
                label(move || date.get().to_long_string()).style(move |s| {
                    s.font_size(constants::DATE_FONT).font_bold().color(text)
                }),
                #[cfg(feature = "clipboard")]
                copy_button(move || date.get_untracked().to_long_string()),
            ))
            .style(|s| s.gap(constants::GAP).items_center()),
        ))
        .style(|s| s.items_center().gap(constants::GAP / 2.0)),
    ))
    .style(move |s| {
        s.gap(constants::GAP * 2.0)
            .padding(constants::PADDING)
            .width_full()
            .items_center()
            .justify_center()
            .border_radius(constants::RADIUS * 2.0)
            .background(background)
    })
}
