//! Standalone demo: the orbital date picker page.
//!
//! Pass a TOML file as the first argument to override the picker config:
//! `cargo run --example basic -- night.toml`. Set `RUST_LOG=floem_orbital=debug`
//! to watch drag sessions.

use std::time::Duration;

use floem::action::exec_after;
use floem::prelude::*;
use floem::window::WindowConfig;
use floem_orbital::{CalendarDate, PickerConfig, date_picker_with, submit_button};

const TOAST_DURATION: Duration = Duration::from_secs(3);

fn load_config() -> PickerConfig {
    let Some(path) = std::env::args().nth(1) else {
        return PickerConfig::default();
    };
    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => {
            log::error!("Failed to read {}: {}", path, e);
            return PickerConfig::default();
        }
    };
    match PickerConfig::from_toml_str(&source) {
        Ok(config) => {
            log::info!("Loaded picker config from {}", path);
            config
        }
        Err(e) => {
            log::error!("{}: {}", path, e);
            PickerConfig::default()
        }
    }
}

/// Transient notification under the submit button.
fn toast(message: RwSignal<Option<(String, String)>>) -> impl IntoView {
    v_stack((
        label(move || message.get().map(|(title, _)| title).unwrap_or_default())
            .style(|s| s.font_size(14.0).font_bold()),
        label(move || message.get().map(|(_, body)| body).unwrap_or_default())
            .style(|s| s.font_size(13.0).color(Color::rgb8(82, 82, 91))),
    ))
    .style(move |s| {
        let s = s
            .gap(2.0)
            .padding(12.0)
            .border(1.0)
            .border_color(Color::rgb8(228, 228, 231))
            .border_radius(6.0)
            .background(Color::WHITE);
        if message.get().is_none() { s.hide() } else { s }
    })
}

fn main() {
    env_logger::init();

    let config = load_config();
    let date = RwSignal::new(CalendarDate::today());
    let message = RwSignal::new(None);
    let shown = RwSignal::new(0_u64);

    let on_submit = move || {
        let selected = date.get_untracked();
        log::info!("Date submitted: {}", selected);
        message.set(Some((
            "Date Submitted!".to_string(),
            format!("You have selected: {}", selected.to_ordinal_string()),
        )));
        // only the latest toast's timer may dismiss it
        let generation = shown.get_untracked() + 1;
        shown.set(generation);
        exec_after(TOAST_DURATION, move |_| {
            if shown.get_untracked() == generation {
                message.set(None);
            }
        });
    };

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    label(|| "Orbital Date Picker").style(|s| s.font_size(30.0).font_bold()),
                    label(|| "Drag the Earth to select a date.")
                        .style(|s| s.font_size(16.0).color(Color::rgb8(113, 113, 122))),
                    date_picker_with(date, config.clone()),
                    submit_button("Submit Date", on_submit),
                    toast(message),
                ))
                .style(|s| {
                    s.size_full()
                        .items_center()
                        .justify_center()
                        .gap(16.0)
                        .padding(24.0)
                        .background(Color::rgb8(244, 244, 245))
                })
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((640.0, 720.0))
                    .title("Orbital Date Picker"),
            ),
        )
        .run();
}
