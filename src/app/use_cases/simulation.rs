//! Use-Case-Funktionen für die Simulationssteuerung.

use crate::app::state::SimulationState;
use crate::app::AppState;
use crate::core::Camera2D;

/// Pausiert bzw. setzt die Animation fort.
pub fn toggle_pause(state: &mut AppState) {
    state.simulation.clock.toggle_pause();
    log::debug!(
        "Animation {}",
        if state.simulation.clock.is_paused() {
            "pausiert"
        } else {
            "fortgesetzt"
        }
    );
}

/// Ändert die Abklingzeit zwischen Iterationen.
pub fn adjust_delay(state: &mut AppState, delta_frames: i32) {
    state.simulation.clock.adjust_delay(delta_frames);
    log::debug!(
        "Abklingzeit: {} Frames",
        state.simulation.clock.delay_frames()
    );
}

/// Setzt Generator, Uhr, Konsolidierung und Kamera auf den Startzustand.
///
/// Die Viewport-Größe bleibt erhalten, der Benutzer-Zoom wird zurückgesetzt.
/// Eine zur Laufzeit geänderte Abklingzeit wird beibehalten.
pub fn reset(state: &mut AppState) {
    let delay = state.simulation.clock.delay_frames();
    state.simulation = SimulationState::from_options(&state.options);
    let configured = i64::from(state.simulation.clock.delay_frames());
    let delta = (i64::from(delay) - configured).clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    state.simulation.clock.adjust_delay(delta as i32);

    state.view.camera = Camera2D::new();
    state.reset_camera_policy();

    log::info!(
        "Simulation zurückgesetzt (Segment-Länge {})",
        state.options.initial_segment_length
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::tick::advance_frame;
    use approx::assert_relative_eq;

    #[test]
    fn reset_restores_single_seed_segment() {
        let mut state = AppState::new();
        for _ in 0..300 {
            advance_frame(&mut state);
        }
        assert!(state.iteration() > 0);

        state.view.camera.zoom = 3.0;
        reset(&mut state);

        assert_eq!(state.iteration(), 0);
        assert_eq!(state.segment_count(), 1);
        assert_eq!(state.square_count(), 0);
        assert_eq!(state.simulation.clock.frame_count(), 0);
        assert_relative_eq!(state.view.camera.zoom, 1.0);
    }

    #[test]
    fn reset_keeps_adjusted_delay() {
        let mut state = AppState::new();
        adjust_delay(&mut state, -15);
        reset(&mut state);
        assert_eq!(state.simulation.clock.delay_frames(), 45);
    }

    #[test]
    fn pause_toggles_back_and_forth() {
        let mut state = AppState::new();
        toggle_pause(&mut state);
        assert!(state.simulation.clock.is_paused());
        toggle_pause(&mut state);
        assert!(!state.simulation.clock.is_paused());
    }
}
