//! Aufzeichnende Render-Senke für Tests und Benchmarks.

use super::RenderSink;
use glam::Vec2;

/// Ein aufgezeichneter Zeichenaufruf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Line {
        p1: Vec2,
        p2: Vec2,
        stroke_width: f32,
        color: [f32; 4],
    },
    FilledRect {
        center: Vec2,
        half_size: f32,
        color: [f32; 4],
    },
}

/// Speichert alle Zeichenaufrufe in Reihenfolge.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Vec<DrawCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle Aufrufe seit Erstellung bzw. letztem `clear`.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn line_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .count()
    }

    pub fn rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FilledRect { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderSink for RecordingSink {
    fn draw_line(&mut self, p1: Vec2, p2: Vec2, stroke_width: f32, color: [f32; 4]) {
        self.calls.push(DrawCall::Line {
            p1,
            p2,
            stroke_width,
            color,
        });
    }

    fn draw_filled_rect(&mut self, center: Vec2, half_size: f32, color: [f32; 4]) {
        self.calls.push(DrawCall::FilledRect {
            center,
            half_size,
            color,
        });
    }
}
