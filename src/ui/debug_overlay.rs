//! Debug-Overlay: FPS-Verlauf, Kamera- und Uhr-Werte, Tastenbelegung.

use crate::app::AppState;

/// FPS, die der vollen Diagrammhöhe entsprechen.
const CHART_FULL_SCALE_FPS: f32 = 60.0;
const CHART_SIZE: egui::Vec2 = egui::vec2(240.0, 60.0);

/// Rendert das Overlay, falls aktiviert.
pub fn render_debug_overlay(ctx: &egui::Context, state: &AppState) {
    if !state.ui.show_debug_overlay {
        return;
    }

    egui::Window::new("Debug")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            draw_fps_chart(ui, state);

            let camera = &state.view.camera;
            let clock = &state.simulation.clock;
            egui::Grid::new("debug_values").num_columns(2).show(ui, |ui| {
                ui.label("Camera");
                ui.label(state.view.camera_policy.name());
                ui.end_row();
                ui.label("Scale");
                ui.label(format!("{:.4}", camera.scale));
                ui.end_row();
                ui.label("Target scale");
                ui.label(format!("{:.4}", camera.target_scale));
                ui.end_row();
                ui.label("User zoom");
                ui.label(format!("{:.2}x", camera.zoom));
                ui.end_row();
                ui.label("Transition");
                ui.label(format!("{:.2}", clock.transition()));
                ui.end_row();
                ui.label("Iteration");
                ui.label(state.iteration().to_string());
                ui.end_row();
                ui.label("Delay");
                ui.label(match clock.cooldown_elapsed() {
                    Some(elapsed) => format!("{} / {} frames", elapsed, clock.delay_frames()),
                    None => format!("{} frames", clock.delay_frames()),
                });
                ui.end_row();
                ui.label("Consolidation");
                ui.label(state.simulation.consolidation.name());
                ui.end_row();
            });

            ui.separator();
            ui.label("d: debug  p: pause  +/-: delay  r: restart  wheel: zoom");
        });
}

fn draw_fps_chart(ui: &mut egui::Ui, state: &AppState) {
    let (rect, _) = ui.allocate_exact_size(CHART_SIZE, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::from_black_alpha(160));

    let history = &state.ui.fps_history;
    let capacity = state.options.fps_history_len.max(2);
    if history.len() < 2 {
        return;
    }

    let dx = rect.width() / (capacity - 1) as f32;
    let start = capacity.saturating_sub(history.len());
    let points: Vec<egui::Pos2> = history
        .iter()
        .enumerate()
        .map(|(i, fps)| {
            let level = (fps / CHART_FULL_SCALE_FPS).clamp(0.0, 1.0);
            egui::pos2(
                rect.left() + (start + i) as f32 * dx,
                rect.bottom() - level * rect.height(),
            )
        })
        .collect();

    painter.add(egui::Shape::line(
        points,
        egui::Stroke::new(1.5, egui::Color32::LIGHT_GREEN),
    ));
}
