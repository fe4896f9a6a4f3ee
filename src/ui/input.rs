//! Viewport-Input-Handling: Größe, Mausrad und Tastatur → AppIntent.

use super::keyboard;
use crate::app::{intent_for_scroll, AppIntent};

/// Sammelt die Intents des Viewports für diesen Frame.
///
/// `current_size` ist die im State bekannte Viewport-Größe; eine Änderung
/// erzeugt `ViewportResized`. Mausrad wirkt nur, solange der Zeiger über
/// dem Viewport ist.
pub fn collect_viewport_intents(
    ui: &egui::Ui,
    response: &egui::Response,
    current_size: [f32; 2],
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let size = [response.rect.width(), response.rect.height()];
    if size != current_size {
        events.push(AppIntent::ViewportResized { size });
    }

    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        events.extend(intent_for_scroll(scroll));
    }

    events.extend(keyboard::collect_keyboard_intents(ui));
    events
}
