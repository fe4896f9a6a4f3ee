//! Dragon-Curve-Animator.
//!
//! Animierte Drachenkurve: jede Iteration dupliziert alle Segmente und dreht
//! die Kopien um 90° um das Kurvenende, bis die Kurve den Bildschirm füllt.

use dragon_curve_animator::{render, ui, AppController, AppIntent, AppState, FractalOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Dragon-Curve-Animator v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Dragon Curve Animator"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Dragon Curve Animator",
            options,
            Box::new(|_cc| Ok(Box::new(FractalApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct FractalApp {
    state: AppState,
    controller: AppController,
}

impl FractalApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = FractalOptions::config_path();
        let options = FractalOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
        }
    }
}

impl eframe::App for FractalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let seconds = ctx.input(|i| i.unstable_dt);
        self.process_events(vec![AppIntent::FrameTimeMeasured { seconds }]);

        ui::render_status_bar(ctx, &self.state);
        ui::render_debug_overlay(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |panel| {
                let (rect, response) =
                    panel.allocate_exact_size(panel.available_size(), egui::Sense::hover());

                let events =
                    ui::collect_viewport_intents(panel, &response, self.state.view.viewport_size);
                self.process_events(events);

                if let Err(e) = self.controller.frame_tick(&mut self.state) {
                    log::error!("Frame-Tick fehlgeschlagen: {:#}", e);
                }

                let painter = panel.painter_at(rect);
                painter.rect_filled(
                    rect,
                    egui::CornerRadius::ZERO,
                    render::to_color32(self.state.options.background_color),
                );
                let mut sink = render::PainterSink::new(&painter, rect.min);
                self.controller.draw(&self.state, &mut sink);
            });

        // Animation läuft dauerhaft
        ctx.request_repaint();
    }
}

impl FractalApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
