//! Use-Case: ein Frame der Simulation.
//!
//! Reihenfolge pro Frame:
//! 1. Uhr vorrücken (Frame-Zähler immer, `t` nur ohne Pause)
//! 2. ohne Pause: laufende Segmente auf `t` setzen
//! 3. ohne Pause und unter `max_iterations`: ggf. Iterationsschritt
//! 4. Kamera-Strategie nachführen
//! 5. Konsolidierungs-Durchlauf

use crate::app::state::{SimulationState, ViewState};
use crate::app::AppState;
use crate::core::CameraContext;

/// Rückt die Simulation um genau einen Frame vor.
pub fn advance_frame(state: &mut AppState) {
    let max_iterations = state.options.max_iterations;
    let AppState {
        simulation, view, ..
    } = state;

    simulation.clock.advance();

    if !simulation.clock.is_paused() {
        simulation
            .generator
            .update_segments(simulation.clock.transition());

        if simulation.generator.iteration_count() < max_iterations {
            if simulation
                .clock
                .poll_iteration(simulation.generator.all_complete())
            {
                step_iteration(simulation, view);
            }
        } else if !simulation.iteration_cap_reported {
            simulation.iteration_cap_reported = true;
            log::info!(
                "Maximale Iterationszahl {} erreicht, Animation steht",
                max_iterations
            );
        }
    }

    let ctx = CameraContext {
        generator: &simulation.generator,
        transition: simulation.clock.transition(),
        viewport_size: view.viewport_size,
    };
    view.camera_policy.update(&mut view.camera, &ctx);

    simulation.consolidation.run(
        &mut simulation.generator,
        view.camera.effective_scale(),
        simulation.clock.frame_count(),
    );
}

/// Iterationsschritt mit den Kamera-Hooks davor und danach.
fn step_iteration(simulation: &mut SimulationState, view: &mut ViewState) {
    let ctx = CameraContext {
        generator: &simulation.generator,
        transition: simulation.clock.transition(),
        viewport_size: view.viewport_size,
    };
    view.camera_policy.before_iteration(&mut view.camera, &ctx);

    simulation.generator.step_iteration();
    simulation.clock.reset_transition();

    let ctx = CameraContext {
        generator: &simulation.generator,
        transition: simulation.clock.transition(),
        viewport_size: view.viewport_size,
    };
    view.camera_policy.after_iteration(&mut view.camera, &ctx);
}
