/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Ein neuer Frame beginnt (genau einmal pro Frame)
    FrameTick,
    /// Gemessene Frame-Dauer in Sekunden (für die FPS-Anzeige)
    FrameTimeMeasured { seconds: f32 },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Debug-Overlay ein-/ausblenden (`d`)
    ToggleDebugOverlayRequested,
    /// Animation pausieren/fortsetzen (`p`)
    PauseToggleRequested,
    /// Abklingzeit zwischen Iterationen erhöhen (`+`)
    DelayIncreaseRequested,
    /// Abklingzeit zwischen Iterationen verringern (`-`)
    DelayDecreaseRequested,
    /// Mausrad bewegt (positiv = hoch)
    ScrollZoomed { delta: f32 },
    /// Simulation neu starten (`r`)
    RestartRequested,
}
