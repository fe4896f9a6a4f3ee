//! Application Controller für zentrale Event-Verarbeitung.

use super::intent_mapping::{intent_for_key, intent_for_scroll};
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::render::{self, DrawStats, RenderSink};
use crate::shared::RenderScene;

/// Orchestriert Eingaben, Frame-Ticks und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Simulation ===
            AppCommand::AdvanceFrame => handlers::simulation::advance_frame(state),
            AppCommand::TogglePause => handlers::simulation::toggle_pause(state),
            AppCommand::AdjustDelay { delta_frames } => {
                handlers::simulation::adjust_delay(state, delta_frames)
            }
            AppCommand::ResetSimulation => handlers::simulation::reset(state),

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ZoomCamera { factor } => handlers::view::zoom(state, factor),

            // === UI ===
            AppCommand::ToggleDebugOverlay => handlers::ui::toggle_debug_overlay(state),
            AppCommand::RecordFrameTime { seconds } => {
                handlers::ui::record_frame_time(state, seconds)
            }
        }

        Ok(())
    }

    /// Genau ein Simulationsschritt pro Frame.
    pub fn frame_tick(&mut self, state: &mut AppState) -> anyhow::Result<()> {
        self.handle_intent(state, AppIntent::FrameTick)
    }

    /// Verarbeitet ein eingegebenes Zeichen. Gibt `true` zurück, wenn es belegt ist.
    pub fn on_key(&mut self, state: &mut AppState, key: char) -> anyhow::Result<bool> {
        match intent_for_key(key) {
            Some(intent) => {
                self.handle_intent(state, intent)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Verarbeitet eine Mausrad-Bewegung (positiv = hoch).
    pub fn on_scroll(&mut self, state: &mut AppState, delta: f32) -> anyhow::Result<()> {
        match intent_for_scroll(delta) {
            Some(intent) => self.handle_intent(state, intent),
            None => Ok(()),
        }
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene<'a>(&self, state: &'a AppState) -> RenderScene<'a> {
        render_scene::build(state)
    }

    /// Zeichnet den aktuellen Zustand in die Senke. Verändert den State nicht.
    pub fn draw(&self, state: &AppState, sink: &mut dyn RenderSink) -> DrawStats {
        render::draw_scene(&self.build_render_scene(state), sink)
    }
}
