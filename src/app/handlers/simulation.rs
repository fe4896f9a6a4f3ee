//! Handler für Frame-Tick, Pause, Abklingzeit und Neustart.

use crate::app::use_cases;
use crate::app::AppState;

/// Rückt die Simulation um einen Frame vor.
pub fn advance_frame(state: &mut AppState) {
    use_cases::tick::advance_frame(state);
}

/// Schaltet die Pause um.
pub fn toggle_pause(state: &mut AppState) {
    use_cases::simulation::toggle_pause(state);
}

/// Ändert die Abklingzeit um `delta_frames`.
pub fn adjust_delay(state: &mut AppState, delta_frames: i32) {
    use_cases::simulation::adjust_delay(state, delta_frames);
}

/// Startet die Simulation neu.
pub fn reset(state: &mut AppState) {
    use_cases::simulation::reset(state);
}
