//! Zeichenbare Elemente als Tagged-Variant mit einer einzigen Dispatch-Stelle.

use super::culling::ScreenRect;
use super::RenderSink;
use crate::core::{Segment, Square, ViewTransform};

/// Ein zeichenbares Element der Szene.
#[derive(Debug, Clone, Copy)]
pub enum Drawable<'a> {
    Segment(&'a Segment),
    Square(&'a Square),
}

/// Stil-Parameter, die für alle Elemente eines Frames gleich sind.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawStyle {
    pub transform: ViewTransform,
    pub stroke_width: f32,
    pub segment_color: [f32; 4],
    pub square_color: [f32; 4],
}

impl Drawable<'_> {
    /// Bildet das Element auf Screen-Koordinaten ab und gibt es an die Senke.
    ///
    /// Gibt `false` zurück, wenn das Element außerhalb des Viewports liegt.
    pub(crate) fn draw(
        &self,
        style: &DrawStyle,
        visible: &ScreenRect,
        sink: &mut dyn RenderSink,
    ) -> bool {
        let t = &style.transform;
        match *self {
            Drawable::Segment(segment) => {
                let p1 = t.world_to_screen(segment.a());
                let p2 = t.world_to_screen(segment.b());
                if !visible.intersects_line(p1, p2) {
                    return false;
                }
                sink.draw_line(p1, p2, style.stroke_width, style.segment_color);
            }
            Drawable::Square(square) => {
                let center = t.world_to_screen(square.center);
                let half_size = square.half_size * t.scale;
                if !visible.intersects_square(center, half_size) {
                    return false;
                }
                sink.draw_filled_rect(center, half_size, style.square_color);
            }
        }
        true
    }
}
