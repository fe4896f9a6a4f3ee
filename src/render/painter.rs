//! Render-Senke auf Basis von `egui::Painter`.

use super::RenderSink;
use glam::Vec2;

/// Zeichnet in einen egui-Bereich. Screen-Koordinaten sind relativ zu `origin`.
pub struct PainterSink<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> PainterSink<'a> {
    /// `origin`: linke obere Ecke des Viewports im egui-Koordinatensystem.
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_pos(&self, p: Vec2) -> egui::Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

/// RGBA in [0, 1] → `Color32`.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

impl RenderSink for PainterSink<'_> {
    fn draw_line(&mut self, p1: Vec2, p2: Vec2, stroke_width: f32, color: [f32; 4]) {
        self.painter.line_segment(
            [self.to_pos(p1), self.to_pos(p2)],
            egui::Stroke::new(stroke_width, to_color32(color)),
        );
    }

    fn draw_filled_rect(&mut self, center: Vec2, half_size: f32, color: [f32; 4]) {
        let rect = egui::Rect::from_center_size(
            self.to_pos(center),
            egui::Vec2::splat(half_size * 2.0),
        );
        self.painter
            .rect_filled(rect, egui::CornerRadius::ZERO, to_color32(color));
    }
}
