//! Use-Case-Funktionen für Viewport-Änderungen.

use crate::app::AppState;

/// Übernimmt eine neue Viewport-Größe. Ungültige Maße werden als 0 gespeichert.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    state.view.viewport_size = [sanitize(size[0]), sanitize(size[1])];
}
