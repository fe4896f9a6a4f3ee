/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Uhr, Segmente, Kamera und Konsolidierung um einen Frame vorrücken
    AdvanceFrame,
    /// Frame-Dauer in die FPS-Historie übernehmen
    RecordFrameTime { seconds: f32 },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Debug-Overlay umschalten
    ToggleDebugOverlay,
    /// Pause umschalten
    TogglePause,
    /// Abklingzeit um Delta-Frames ändern
    AdjustDelay { delta_frames: i32 },
    /// Benutzer-Zoom mit Faktor multiplizieren
    ZoomCamera { factor: f32 },
    /// Generator, Uhr und Kamera auf den Startzustand setzen
    ResetSimulation,
}

impl AppCommand {
    /// Commands, die in jedem Frame anfallen und das Command-Log nur fluten würden.
    pub fn is_per_frame(&self) -> bool {
        matches!(
            self,
            AppCommand::AdvanceFrame | AppCommand::RecordFrameTime { .. }
        )
    }
}
