//! Statisches Quadrat als Ersatz für ein zu kleines Segment.

use super::vector::quarter_turn_about;
use super::Segment;
use glam::Vec2;

/// Gefülltes, achsparalleles Quadrat in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    /// Mittelpunkt (Mittelpunkt des ersetzten Segments)
    pub center: Vec2,
    /// Halbe Kantenlänge (halbe Länge des ersetzten Segments)
    pub half_size: f32,
}

impl Square {
    pub fn new(center: Vec2, half_size: f32) -> Self {
        Self {
            center,
            half_size: half_size.max(0.0),
        }
    }

    /// Erzeugt das Ersatz-Quadrat für ein Segment.
    pub fn from_segment(segment: &Segment) -> Self {
        Self::new(segment.midpoint(), segment.length() * 0.5)
    }

    /// Liefert das Duplikat nach einer vollen Vierteldrehung um `pivot`.
    ///
    /// Quadrate werden nicht animiert: das Duplikat erscheint direkt in der Endlage.
    pub fn quarter_turned(&self, pivot: Vec2) -> Self {
        Self {
            center: quarter_turn_about(self.center, pivot),
            half_size: self.half_size,
        }
    }

    /// Minimale Ecke (links unten in Welt-Koordinaten).
    pub fn min(&self) -> Vec2 {
        self.center - Vec2::splat(self.half_size)
    }

    /// Maximale Ecke.
    pub fn max(&self) -> Vec2 {
        self.center + Vec2::splat(self.half_size)
    }
}
