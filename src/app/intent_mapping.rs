//! Mapping von Eingaben auf Intents und von Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt ein eingegebenes Zeichen in einen Intent.
///
/// Groß- und Kleinschreibung sind gleichwertig, `=` und `_` gelten als
/// `+` und `-` ohne Umschalttaste.
pub fn intent_for_key(key: char) -> Option<AppIntent> {
    match key {
        'd' | 'D' => Some(AppIntent::ToggleDebugOverlayRequested),
        'p' | 'P' => Some(AppIntent::PauseToggleRequested),
        '+' | '=' => Some(AppIntent::DelayIncreaseRequested),
        '-' | '_' => Some(AppIntent::DelayDecreaseRequested),
        'r' | 'R' => Some(AppIntent::RestartRequested),
        _ => None,
    }
}

/// Übersetzt eine Mausrad-Bewegung in einen Intent (egui-Konvention: positiv = hoch).
pub fn intent_for_scroll(delta: f32) -> Option<AppIntent> {
    if !delta.is_finite() || delta == 0.0 {
        return None;
    }
    Some(AppIntent::ScrollZoomed { delta })
}

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FrameTick => vec![AppCommand::AdvanceFrame],
        AppIntent::FrameTimeMeasured { seconds } => {
            vec![AppCommand::RecordFrameTime { seconds }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ToggleDebugOverlayRequested => vec![AppCommand::ToggleDebugOverlay],
        AppIntent::PauseToggleRequested => vec![AppCommand::TogglePause],
        AppIntent::DelayIncreaseRequested => vec![AppCommand::AdjustDelay {
            delta_frames: delay_step(state),
        }],
        AppIntent::DelayDecreaseRequested => vec![AppCommand::AdjustDelay {
            delta_frames: -delay_step(state),
        }],
        AppIntent::ScrollZoomed { delta } => {
            // Rad nach unten vergrößert
            let factor = if delta < 0.0 {
                state.options.scroll_zoom_in
            } else {
                state.options.scroll_zoom_out
            };
            vec![AppCommand::ZoomCamera { factor }]
        }
        AppIntent::RestartRequested => vec![AppCommand::ResetSimulation],
    }
}

fn delay_step(state: &AppState) -> i32 {
    i32::try_from(state.options.delay_step_frames).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests;
