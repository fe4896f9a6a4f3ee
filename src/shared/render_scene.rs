//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Segmente und Quadrate werden nur geliehen: bei 2^n Elementen wäre ein
//! Klon pro Frame teurer als das Zeichnen selbst.

use crate::core::{Segment, Square, ViewTransform};

/// Read-only Daten für einen Render-Frame.
#[derive(Clone, Copy)]
pub struct RenderScene<'a> {
    /// Aktive (animierte) Segmente in Zeichenreihenfolge
    pub segments: &'a [Segment],
    /// Konsolidierte statische Quadrate
    pub squares: &'a [Square],
    /// Welt→Screen-Abbildung dieses Frames
    pub transform: ViewTransform,
    /// Strichbreite der Segmente in Pixeln
    pub stroke_width: f32,
    /// Segment-Farbe (RGBA)
    pub segment_color: [f32; 4],
    /// Quadrat-Farbe (RGBA)
    pub square_color: [f32; 4],
}

impl RenderScene<'_> {
    /// Anzahl aller zu zeichnenden Elemente (vor Culling).
    pub fn element_count(&self) -> usize {
        self.segments.len() + self.squares.len()
    }
}
