//! Zentrale Konfiguration für den Dragon-Curve-Animator.
//!
//! `FractalOptions` bündelt alle einstellbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::CameraMode;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

// ── Fraktal ─────────────────────────────────────────────────────────

/// Länge des Start-Segments in Welteinheiten.
pub const INITIAL_SEGMENT_LENGTH: f32 = 100.0;
/// Obergrenze der Iterationen (Segmentzahl verdoppelt sich pro Iteration).
pub const MAX_ITERATIONS: u32 = 18;

// ── Animation ───────────────────────────────────────────────────────

/// Zuwachs des Übergangsparameters pro Frame.
pub const TRANSITION_STEP: f32 = 0.01;
/// Abklingzeit zwischen zwei Iterationen in Frames.
pub const ITERATION_DELAY_FRAMES: u32 = 60;
/// Schrittweite für `+` / `-`.
pub const DELAY_STEP_FRAMES: u32 = 15;

// ── Kamera ──────────────────────────────────────────────────────────

/// Wachstum der Kurvenausdehnung pro Iteration.
pub const GROWTH_FACTOR: f32 = std::f32::consts::SQRT_2;
/// Anteil des Viewports, den die Bounds ausfüllen.
pub const VIEW_FILL_RATIO: f32 = 0.8;
/// Polsterung der Bounds in Welteinheiten.
pub const BOUNDS_PADDING: f32 = 50.0;
/// Glättungsfaktor für Skalierung und Pan pro Frame.
pub const SCALE_SMOOTHING: f32 = 0.1;
/// Zoom-Faktor bei Mausrad nach unten.
pub const SCROLL_ZOOM_IN: f32 = 1.1;
/// Zoom-Faktor bei Mausrad nach oben.
pub const SCROLL_ZOOM_OUT: f32 = 0.9;
/// Minimaler Benutzer-Zoom.
pub const CAMERA_ZOOM_MIN: f32 = 0.01;
/// Maximaler Benutzer-Zoom.
pub const CAMERA_ZOOM_MAX: f32 = 100.0;

// ── Konsolidierung ──────────────────────────────────────────────────

/// Segmente unterhalb dieser Bildschirmlänge werden zu Quadraten.
pub const CONSOLIDATION_THRESHOLD_PX: f32 = 3.0;
/// Konsolidierung nur in jedem n-ten Frame.
pub const CONSOLIDATION_INTERVAL_FRAMES: u32 = 30;

// ── Darstellung ─────────────────────────────────────────────────────

/// Basis-Linienstärke der adaptiven Strichbreite.
pub const STROKE_BASE_WIDTH: f32 = 12.0;
/// Minimale Linienstärke in Pixeln.
pub const STROKE_MIN_WIDTH: f32 = 1.0;
/// Maximale Linienstärke in Pixeln.
pub const STROKE_MAX_WIDTH: f32 = 16.0;
/// Segment-Farbe (RGBA: Grün).
pub const SEGMENT_COLOR: [f32; 4] = [0.0, 238.0 / 255.0, 0.0, 1.0];
/// Quadrat-Farbe (RGBA: Türkisgrün, leicht transparent).
pub const SQUARE_COLOR: [f32; 4] = [0.0, 200.0 / 255.0, 100.0 / 255.0, 200.0 / 255.0];
/// Hintergrund (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Anzahl FPS-Messwerte im Debug-Diagramm.
pub const FPS_HISTORY_LEN: usize = 120;

/// Strichbreiten-Politik für Segmente.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StrokeWidth {
    /// Immer dieselbe Breite in Pixeln
    Fixed(f32),
    /// `clamp(base * sqrt(scale), min, max)`
    Adaptive { base: f32, min: f32, max: f32 },
}

impl StrokeWidth {
    /// Strichbreite in Pixeln für eine effektive Skalierung.
    pub fn width_for_scale(&self, scale: f32) -> f32 {
        match *self {
            StrokeWidth::Fixed(width) => width.max(0.0),
            StrokeWidth::Adaptive { base, min, max } => {
                let scale = if scale.is_finite() { scale.max(0.0) } else { 0.0 };
                (base * scale.sqrt()).clamp(min, max.max(min))
            }
        }
    }
}

impl Default for StrokeWidth {
    fn default() -> Self {
        StrokeWidth::Adaptive {
            base: STROKE_BASE_WIDTH,
            min: STROKE_MIN_WIDTH,
            max: STROKE_MAX_WIDTH,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle einstellbaren Optionen.
/// Wird beim Start optional aus `dragon_curve_animator.toml` neben der Binary gelesen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalOptions {
    // ── Fraktal ─────────────────────────────────────────────────
    /// Länge des Start-Segments
    pub initial_segment_length: f32,
    /// Keine Iterationen über diese Anzahl hinaus
    pub max_iterations: u32,

    // ── Animation ───────────────────────────────────────────────
    /// Zuwachs von `t` pro Frame
    pub transition_step: f32,
    /// Abklingzeit nach Abschluss einer Iteration (0 = sofort weiter)
    pub iteration_delay_frames: u32,
    /// Schrittweite der Abklingzeit-Anpassung
    pub delay_step_frames: u32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Kamera-Strategie
    pub camera_mode: CameraMode,
    /// Wachstumsfaktor (nur `GrowthCenterOfMass`)
    pub growth_factor: f32,
    /// Anteil des Viewports für die Einpassung
    pub view_fill_ratio: f32,
    /// Polsterung der Bounds (nur `BoundsFit`)
    pub bounds_padding: f32,
    /// Glättungsfaktor pro Frame (nur `BoundsFit`)
    pub scale_smoothing: f32,
    /// Zoom-Faktor Mausrad runter
    pub scroll_zoom_in: f32,
    /// Zoom-Faktor Mausrad hoch
    pub scroll_zoom_out: f32,
    /// Minimaler Benutzer-Zoom
    pub camera_zoom_min: f32,
    /// Maximaler Benutzer-Zoom
    pub camera_zoom_max: f32,

    // ── Konsolidierung ──────────────────────────────────────────
    /// Konsolidierung aktiv
    pub consolidation_enabled: bool,
    /// Pixel-Schwelle
    pub consolidation_threshold_px: f32,
    /// Intervall in Frames
    pub consolidation_interval_frames: u32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Strichbreiten-Politik
    pub stroke: StrokeWidth,
    /// Segment-Farbe (RGBA)
    pub segment_color: [f32; 4],
    /// Quadrat-Farbe (RGBA)
    pub square_color: [f32; 4],
    /// Hintergrundfarbe (RGBA)
    pub background_color: [f32; 4],
    /// FPS-Messwerte im Debug-Diagramm
    pub fps_history_len: usize,
}

impl Default for FractalOptions {
    fn default() -> Self {
        Self {
            initial_segment_length: INITIAL_SEGMENT_LENGTH,
            max_iterations: MAX_ITERATIONS,

            transition_step: TRANSITION_STEP,
            iteration_delay_frames: ITERATION_DELAY_FRAMES,
            delay_step_frames: DELAY_STEP_FRAMES,

            camera_mode: CameraMode::default(),
            growth_factor: GROWTH_FACTOR,
            view_fill_ratio: VIEW_FILL_RATIO,
            bounds_padding: BOUNDS_PADDING,
            scale_smoothing: SCALE_SMOOTHING,
            scroll_zoom_in: SCROLL_ZOOM_IN,
            scroll_zoom_out: SCROLL_ZOOM_OUT,
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,

            consolidation_enabled: true,
            consolidation_threshold_px: CONSOLIDATION_THRESHOLD_PX,
            consolidation_interval_frames: CONSOLIDATION_INTERVAL_FRAMES,

            stroke: StrokeWidth::default(),
            segment_color: SEGMENT_COLOR,
            square_color: SQUARE_COLOR,
            background_color: BACKGROUND_COLOR,
            fps_history_len: FPS_HISTORY_LEN,
        }
    }
}

impl FractalOptions {
    /// Prüft die Optionen auf Werte, mit denen die Simulation entarten würde.
    pub fn validate(&self) -> anyhow::Result<()> {
        fn positive(value: f32) -> bool {
            value.is_finite() && value > 0.0
        }

        ensure!(
            positive(self.initial_segment_length),
            "initial_segment_length muss > 0 sein (ist {})",
            self.initial_segment_length
        );
        ensure!(
            positive(self.transition_step) && self.transition_step <= 1.0,
            "transition_step muss in (0, 1] liegen (ist {})",
            self.transition_step
        );
        ensure!(
            self.growth_factor.is_finite() && self.growth_factor >= 1.0,
            "growth_factor muss ≥ 1 sein (ist {})",
            self.growth_factor
        );
        ensure!(
            positive(self.view_fill_ratio) && self.view_fill_ratio <= 1.0,
            "view_fill_ratio muss in (0, 1] liegen (ist {})",
            self.view_fill_ratio
        );
        ensure!(
            positive(self.scale_smoothing) && self.scale_smoothing <= 1.0,
            "scale_smoothing muss in (0, 1] liegen (ist {})",
            self.scale_smoothing
        );
        ensure!(
            self.bounds_padding.is_finite() && self.bounds_padding >= 0.0,
            "bounds_padding muss ≥ 0 sein (ist {})",
            self.bounds_padding
        );
        ensure!(
            positive(self.scroll_zoom_in) && positive(self.scroll_zoom_out),
            "Zoom-Faktoren müssen > 0 sein"
        );
        ensure!(
            positive(self.camera_zoom_min)
                && positive(self.camera_zoom_max)
                && self.camera_zoom_min <= self.camera_zoom_max,
            "Zoom-Grenzen ungültig: {}..{}",
            self.camera_zoom_min,
            self.camera_zoom_max
        );
        ensure!(
            self.consolidation_threshold_px.is_finite() && self.consolidation_threshold_px >= 0.0,
            "consolidation_threshold_px muss ≥ 0 sein"
        );
        Ok(())
    }

    /// Parst und validiert Optionen aus einem TOML-String.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let options: Self = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("dragon_curve_animator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("dragon_curve_animator.toml")
    }
}
