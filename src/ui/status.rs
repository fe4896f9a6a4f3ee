//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Segments: {} | Squares: {}",
                state.segment_count(),
                state.square_count()
            ));

            ui.separator();

            ui.label(format!("Iteration: {}", state.iteration()));
            if state.at_iteration_cap() {
                ui.label("(max)");
            }

            ui.separator();

            match state.ui.fps() {
                Some(fps) => ui.label(format!("FPS: {:.0}", fps)),
                None => ui.label("FPS: -"),
            };

            let clock = &state.simulation.clock;
            if clock.is_paused() {
                ui.separator();
                ui.label(egui::RichText::new("PAUSED").color(egui::Color32::YELLOW));
            } else if let Some(remaining) = clock.remaining_delay() {
                ui.separator();
                ui.label(format!("Next iteration in {} frames", remaining));
            }
        });
    });
}
