use crate::app::{AppCommand, AppIntent, AppState};

use super::{intent_for_key, intent_for_scroll, map_intent_to_commands};

#[test]
fn keys_map_case_insensitive() {
    assert_eq!(
        intent_for_key('d'),
        Some(AppIntent::ToggleDebugOverlayRequested)
    );
    assert_eq!(
        intent_for_key('D'),
        Some(AppIntent::ToggleDebugOverlayRequested)
    );
    assert_eq!(intent_for_key('P'), Some(AppIntent::PauseToggleRequested));
    assert_eq!(intent_for_key('r'), Some(AppIntent::RestartRequested));
}

#[test]
fn unshifted_plus_and_minus_keys_adjust_delay() {
    assert_eq!(intent_for_key('+'), Some(AppIntent::DelayIncreaseRequested));
    assert_eq!(intent_for_key('='), Some(AppIntent::DelayIncreaseRequested));
    assert_eq!(intent_for_key('-'), Some(AppIntent::DelayDecreaseRequested));
    assert_eq!(intent_for_key('_'), Some(AppIntent::DelayDecreaseRequested));
}

#[test]
fn unknown_keys_are_ignored() {
    for key in ['x', ' ', '1', 'ö'] {
        assert_eq!(intent_for_key(key), None);
    }
}

#[test]
fn zero_or_invalid_scroll_is_ignored() {
    assert_eq!(intent_for_scroll(0.0), None);
    assert_eq!(intent_for_scroll(f32::NAN), None);
    assert_eq!(
        intent_for_scroll(-3.0),
        Some(AppIntent::ScrollZoomed { delta: -3.0 })
    );
}

#[test]
fn wheel_down_zooms_in_and_wheel_up_zooms_out() {
    let state = AppState::new();

    let up = map_intent_to_commands(&state, AppIntent::ScrollZoomed { delta: 1.0 });
    let down = map_intent_to_commands(&state, AppIntent::ScrollZoomed { delta: -120.0 });

    assert_eq!(down, vec![AppCommand::ZoomCamera { factor: 1.1 }]);
    assert_eq!(up, vec![AppCommand::ZoomCamera { factor: 0.9 }]);
}

#[test]
fn delay_intents_use_configured_step() {
    let mut state = AppState::new();
    state.options.delay_step_frames = 7;

    let increase = map_intent_to_commands(&state, AppIntent::DelayIncreaseRequested);
    let decrease = map_intent_to_commands(&state, AppIntent::DelayDecreaseRequested);

    assert_eq!(increase, vec![AppCommand::AdjustDelay { delta_frames: 7 }]);
    assert_eq!(decrease, vec![AppCommand::AdjustDelay { delta_frames: -7 }]);
}

#[test]
fn frame_tick_maps_to_single_advance() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::FrameTick);

    assert_eq!(commands, vec![AppCommand::AdvanceFrame]);
}
