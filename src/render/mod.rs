//! Zeichen-Grenze: Render-Senke, Zeichenpass und Viewport-Culling.
//!
//! Der Renderer kennt nur `RenderScene` und die `RenderSink`-Schnittstelle.
//! `PainterSink` zeichnet über egui, `RecordingSink` zeichnet Aufrufe auf.

mod culling;
mod drawable;
mod painter;
mod recording;

pub use crate::shared::RenderScene;
pub use drawable::Drawable;
pub use painter::{to_color32, PainterSink};
pub use recording::{DrawCall, RecordingSink};

use culling::ScreenRect;
use drawable::DrawStyle;
use glam::Vec2;

/// Ziel der Zeichenaufrufe. Alle Koordinaten in Screen-Pixeln.
pub trait RenderSink {
    /// Zeichnet eine Linie mit runder Kappe.
    fn draw_line(&mut self, p1: Vec2, p2: Vec2, stroke_width: f32, color: [f32; 4]);

    /// Zeichnet ein gefülltes, achsparalleles Quadrat ohne Kontur.
    fn draw_filled_rect(&mut self, center: Vec2, half_size: f32, color: [f32; 4]);
}

/// Statistik eines Zeichenpasses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub drawn: usize,
    pub culled: usize,
}

/// Zeichnet die komplette Szene: erst Quadrate, dann Segmente.
///
/// Liest nur aus der Szene; mehrfaches Zeichnen derselben Szene erzeugt
/// identische Aufrufe.
pub fn draw_scene(scene: &RenderScene<'_>, sink: &mut dyn RenderSink) -> DrawStats {
    let style = DrawStyle {
        transform: scene.transform,
        stroke_width: scene.stroke_width,
        segment_color: scene.segment_color,
        square_color: scene.square_color,
    };
    let visible = ScreenRect::from_viewport(scene.transform.viewport_size, scene.stroke_width * 0.5);

    let drawables = scene
        .squares
        .iter()
        .map(Drawable::Square)
        .chain(scene.segments.iter().map(Drawable::Segment));

    let mut stats = DrawStats::default();
    for drawable in drawables {
        if drawable.draw(&style, &visible, sink) {
            stats.drawn += 1;
        } else {
            stats.culled += 1;
        }
    }
    stats
}
