//! 2D-Kamera für Skalierung, Pan und Benutzer-Zoom.

use glam::Vec2;

/// 2D-Kamera mit automatischer Skalierung und manuellem Zoom.
///
/// `scale` und `pan` werden von der aktiven `CameraPolicy` geführt,
/// `zoom` ausschließlich vom Benutzer (Mausrad).
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Aktuelle (geglättete) Welt→Pixel-Skalierung
    pub scale: f32,
    /// Zielskalierung, der `scale` pro Frame angenähert wird
    pub target_scale: f32,
    /// Welt-Punkt, der in der Viewport-Mitte liegt
    pub pan: Vec2,
    /// Benutzer-Zoom (1.0 = neutral)
    pub zoom: f32,
}

impl Camera2D {
    /// Standard-Skalierung, falls keine Einpassung möglich ist.
    pub const DEFAULT_SCALE: f32 = 1.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.01;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 100.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            scale: Self::DEFAULT_SCALE,
            target_scale: Self::DEFAULT_SCALE,
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Setzt Skalierung und Ziel ohne Glättung.
    pub fn snap_scale(&mut self, scale: f32) {
        let scale = sanitize_scale(scale);
        self.scale = scale;
        self.target_scale = scale;
    }

    /// Setzt nur das Ziel, `scale` folgt über `smooth_towards_target`.
    pub fn set_target_scale(&mut self, scale: f32) {
        self.target_scale = sanitize_scale(scale);
    }

    /// Exponentielle Glättung: `scale += (target - scale) * factor`.
    pub fn smooth_towards_target(&mut self, factor: f32) {
        let factor = factor.clamp(0.0, 1.0);
        self.scale = sanitize_scale(self.scale + (self.target_scale - self.scale) * factor);
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level mit konfigurierbaren Grenzen.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Tatsächliche Welt→Pixel-Skalierung inklusive Benutzer-Zoom.
    pub fn effective_scale(&self) -> f32 {
        self.scale * self.zoom
    }

    /// Transformation für einen Frame mit gegebener Viewport-Größe.
    pub fn view_transform(&self, viewport_size: [f32; 2]) -> ViewTransform {
        let scale = self.effective_scale();
        let center = Vec2::new(viewport_size[0], viewport_size[1]) * 0.5;
        ViewTransform {
            scale,
            offset: center - self.pan * scale,
            viewport_size,
        }
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

fn sanitize_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        Camera2D::DEFAULT_SCALE
    }
}

/// Welt→Screen-Abbildung: `screen = world * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub offset: Vec2,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
}

impl ViewTransform {
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.scale + self.offset
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }
}
