//! Tastatur-Eingaben für den Viewport.
//!
//! Ausgewertet werden Text-Events, damit `+` unabhängig vom Tastaturlayout
//! als Zeichen ankommt.

use crate::app::{intent_for_key, AppIntent};

/// Sammelt alle belegten Zeichen dieses Frames als AppIntents.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Text(text) => Some(text.chars()),
                _ => None,
            })
            .flatten()
            .filter_map(intent_for_key)
            .collect()
    })
}
