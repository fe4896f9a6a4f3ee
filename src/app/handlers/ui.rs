//! Handler für Debug-Overlay und FPS-Messung.

use crate::app::AppState;

/// Blendet das Debug-Overlay ein oder aus.
pub fn toggle_debug_overlay(state: &mut AppState) {
    state.ui.show_debug_overlay = !state.ui.show_debug_overlay;
}

/// Übernimmt eine gemessene Frame-Dauer in die FPS-Historie.
pub fn record_frame_time(state: &mut AppState, seconds: f32) {
    let capacity = state.options.fps_history_len;
    state.ui.record_frame_time(seconds, capacity);
}
