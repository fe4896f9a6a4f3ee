//! Use-Case-Funktionen für den Benutzer-Zoom.

use crate::app::AppState;

/// Multipliziert den Benutzer-Zoom mit `factor` (geklemmt auf die Optionen-Grenzen).
pub fn zoom(state: &mut AppState, factor: f32) {
    state.view.camera.zoom_by_clamped(
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
    log::debug!("Benutzer-Zoom: {:.3}", state.view.camera.zoom);
}
