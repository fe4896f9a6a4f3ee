use crate::app::CommandLog;
use crate::core::CameraContext;
use crate::shared::FractalOptions;

use super::{SimulationState, UiState, ViewState};

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Generator, Uhr, Konsolidierung
    pub simulation: SimulationState,
    /// Kamera und Viewport
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Benutzer-Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (nur gelesen)
    pub options: FractalOptions,
}

impl AppState {
    /// Erstellt den Startzustand mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(FractalOptions::default())
    }

    /// Erstellt den Startzustand mit gegebenen Optionen.
    pub fn with_options(options: FractalOptions) -> Self {
        let mut state = Self {
            simulation: SimulationState::from_options(&options),
            view: ViewState::from_options(&options),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
        };
        state.reset_camera_policy();
        state
    }

    /// Setzt die Kamera über die aktive Strategie auf den Startzustand.
    pub fn reset_camera_policy(&mut self) {
        let ctx = CameraContext {
            generator: &self.simulation.generator,
            transition: self.simulation.clock.transition(),
            viewport_size: self.view.viewport_size,
        };
        self.view.camera_policy.reset(&mut self.view.camera, &ctx);
    }

    /// Anzahl aktiver Segmente (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.simulation.generator.segments().len()
    }

    /// Anzahl konsolidierter Quadrate (für UI-Anzeige)
    pub fn square_count(&self) -> usize {
        self.simulation.generator.squares().len()
    }

    pub fn iteration(&self) -> u32 {
        self.simulation.generator.iteration_count()
    }

    /// `true`, wenn keine weiteren Iterationen mehr ausgelöst werden.
    pub fn at_iteration_cap(&self) -> bool {
        self.iteration() >= self.options.max_iterations
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
