use dragon_curve_animator::{
    AppCommand, AppController, AppIntent, AppState, CameraMode, FractalOptions, RecordingSink,
};

fn state_with(options: FractalOptions) -> AppState {
    let mut state = AppState::with_options(options);
    state.view.viewport_size = [800.0, 600.0];
    state
}

fn fast_options() -> FractalOptions {
    FractalOptions {
        transition_step: 0.25,
        iteration_delay_frames: 0,
        consolidation_enabled: false,
        ..FractalOptions::default()
    }
}

fn tick(controller: &mut AppController, state: &mut AppState, frames: usize) {
    for _ in 0..frames {
        controller
            .frame_tick(state)
            .expect("Frame-Tick sollte nie fehlschlagen");
    }
}

#[test]
fn test_three_iterations_give_eight_segments() {
    let mut controller = AppController::new();
    let mut state = state_with(fast_options());

    tick(&mut controller, &mut state, 12);

    assert_eq!(state.iteration(), 3);
    assert_eq!(state.segment_count(), 8);
    // Die Duplikate der dritten Iteration starten gerade erst
    assert!(!state.simulation.generator.all_complete());
}

/// Mittelpunkte aller Segmente und Quadrate, gerundet und sortiert.
fn element_centers(state: &AppState) -> Vec<(i64, i64)> {
    let generator = &state.simulation.generator;
    let mut centers: Vec<(i64, i64)> = generator
        .segments()
        .iter()
        .map(|s| s.midpoint())
        .chain(generator.squares().iter().map(|sq| sq.center))
        .map(|p| (p.x.round() as i64, p.y.round() as i64))
        .collect();
    centers.sort_unstable();
    centers
}

#[test]
fn test_element_count_doubles_with_consolidation_enabled() {
    let options = FractalOptions {
        transition_step: 0.5,
        iteration_delay_frames: 0,
        consolidation_interval_frames: 1,
        // Große Schwelle: praktisch jedes abgeschlossene Segment wird konsolidiert
        consolidation_threshold_px: 1.0e6,
        max_iterations: 8,
        ..FractalOptions::default()
    };
    let mut controller = AppController::new();
    let mut state = state_with(options.clone());

    tick(&mut controller, &mut state, 200);

    assert_eq!(state.iteration(), 8);
    assert_eq!(state.segment_count() + state.square_count(), 256);
    assert!(state.square_count() > 0);
    assert!(state.simulation.generator.end_segment().is_some());

    // Gleiche Kurve wie ohne Konsolidierung
    let mut plain_controller = AppController::new();
    let mut plain = state_with(FractalOptions {
        consolidation_enabled: false,
        ..options
    });
    tick(&mut plain_controller, &mut plain, 200);

    assert_eq!(plain.iteration(), 8);
    assert_eq!(plain.square_count(), 0);
    assert_eq!(element_centers(&state), element_centers(&plain));
}

#[test]
fn test_delay_defers_next_iteration() {
    let mut controller = AppController::new();
    let mut state = state_with(FractalOptions {
        transition_step: 0.5,
        iteration_delay_frames: 10,
        consolidation_enabled: false,
        ..FractalOptions::default()
    });

    // t erreicht 1 nach 2 Frames, danach 10 Frames Abklingzeit
    tick(&mut controller, &mut state, 11);
    assert_eq!(state.iteration(), 0);
    assert!(state.simulation.clock.remaining_delay().is_some());

    tick(&mut controller, &mut state, 1);
    assert_eq!(state.iteration(), 1);
    assert!(state.simulation.clock.remaining_delay().is_none());
}

#[test]
fn test_pause_key_freezes_animation() {
    let mut controller = AppController::new();
    let mut state = state_with(fast_options());

    tick(&mut controller, &mut state, 5);
    let iteration = state.iteration();
    let transition = state.simulation.clock.transition();

    assert!(controller.on_key(&mut state, 'p').expect("Taste p"));
    tick(&mut controller, &mut state, 40);
    assert_eq!(state.iteration(), iteration);
    assert_eq!(state.simulation.clock.transition(), transition);

    assert!(controller.on_key(&mut state, 'P').expect("Taste P"));
    tick(&mut controller, &mut state, 40);
    assert!(state.iteration() > iteration);
}

#[test]
fn test_delay_keys_adjust_and_clamp() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller.on_key(&mut state, '+').expect("Taste +");
    assert_eq!(state.simulation.clock.delay_frames(), 75);

    for _ in 0..10 {
        controller.on_key(&mut state, '-').expect("Taste -");
    }
    assert_eq!(state.simulation.clock.delay_frames(), 0);
}

#[test]
fn test_unbound_key_is_not_consumed() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let consumed = controller.on_key(&mut state, 'q').expect("Taste q");

    assert!(!consumed);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_scroll_zooms_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller.on_scroll(&mut state, -1.0).expect("Scroll runter");
    controller.on_scroll(&mut state, 0.0).expect("Scroll 0");
    assert!((state.view.camera.zoom - 1.1).abs() < 1e-6);

    controller.on_scroll(&mut state, 1.0).expect("Scroll hoch");
    assert!((state.view.camera.zoom - 0.99).abs() < 1e-6);

    assert_eq!(
        state.command_log.entries(),
        &[
            AppCommand::ZoomCamera { factor: 1.1 },
            AppCommand::ZoomCamera { factor: 0.9 }
        ]
    );
}

#[test]
fn test_debug_toggle_via_key() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller.on_key(&mut state, 'd').expect("Taste d");
    assert!(state.ui.show_debug_overlay);
    controller.on_key(&mut state, 'D').expect("Taste D");
    assert!(!state.ui.show_debug_overlay);
}

#[test]
fn test_restart_returns_to_seed() {
    let mut controller = AppController::new();
    let mut state = state_with(fast_options());
    tick(&mut controller, &mut state, 20);
    assert!(state.iteration() > 0);

    controller
        .handle_intent(&mut state, AppIntent::RestartRequested)
        .expect("Neustart");

    assert_eq!(state.iteration(), 0);
    assert_eq!(state.segment_count(), 1);
    assert_eq!(state.view.viewport_size, [800.0, 600.0]);
}

#[test]
fn test_draw_is_pure_and_idempotent() {
    let mut controller = AppController::new();
    let mut state = state_with(fast_options());
    tick(&mut controller, &mut state, 14);

    let frames_before = state.simulation.clock.frame_count();
    let mut first = RecordingSink::new();
    let mut second = RecordingSink::new();
    controller.draw(&state, &mut first);
    controller.draw(&state, &mut second);

    assert_eq!(first.calls(), second.calls());
    assert_eq!(state.simulation.clock.frame_count(), frames_before);
    assert!(first.line_count() > 0);
}

#[test]
fn test_bounds_fit_keeps_curve_on_screen() {
    let mut controller = AppController::new();
    let mut state = state_with(FractalOptions {
        transition_step: 0.1,
        iteration_delay_frames: 0,
        consolidation_enabled: false,
        max_iterations: 10,
        ..FractalOptions::default()
    });

    // Nach dem Ende des Wachstums hat die Glättung genug Frames zum Einschwingen
    tick(&mut controller, &mut state, 400);

    let mut sink = RecordingSink::new();
    let stats = controller.draw(&state, &mut sink);
    assert_eq!(stats.culled, 0);
    assert_eq!(stats.drawn, 1024);
}

#[test]
fn test_growth_policy_keeps_center_of_mass_centered() {
    let mut controller = AppController::new();
    let mut state = state_with(FractalOptions {
        camera_mode: CameraMode::GrowthCenterOfMass,
        ..fast_options()
    });

    tick(&mut controller, &mut state, 10);

    let center = state
        .simulation
        .generator
        .center_of_mass()
        .expect("Schwerpunkt");
    let transform = state.view.camera.view_transform(state.view.viewport_size);
    let screen = transform.world_to_screen(center);
    assert!((screen.x - 400.0).abs() < 1e-2);
    assert!((screen.y - 300.0).abs() < 1e-2);
}

#[test]
fn test_options_from_toml_drive_simulation() {
    let options = FractalOptions::from_toml_str(
        r#"
        transition_step = 0.5
        iteration_delay_frames = 0
        consolidation_enabled = false
        camera_mode = "GrowthCenterOfMass"
        "#,
    )
    .expect("TOML gültig");
    let mut controller = AppController::new();
    let mut state = state_with(options);

    tick(&mut controller, &mut state, 4);

    assert_eq!(state.iteration(), 2);
    assert_eq!(state.view.camera_policy.name(), "Growth + Center-of-Mass");
}
