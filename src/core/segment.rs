//! Liniensegment mit animierbarer Drehung um einen Pivot.

use super::vector::{lerp, midpoint, quarter_turn_about, rotate_about};
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Zielwinkel einer Iteration (Vierteldrehung).
pub const QUARTER_TURN: f32 = FRAC_PI_2;

/// Ein Segment der Drachenkurve.
///
/// `start_a`, `start_b` und `origin` sind ab der Erzeugung fest. Pro Frame
/// ändern sich nur `angle`, `a`, `b` und `completed`.
///
/// Invariante: `a == rotate(start_a - origin, angle) + origin`, analog für `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    start_a: Vec2,
    start_b: Vec2,
    a: Vec2,
    b: Vec2,
    origin: Vec2,
    angle: f32,
    completed: bool,
}

impl Segment {
    /// Erstellt ein neues, noch nicht gedrehtes Segment.
    pub fn new(a: Vec2, b: Vec2, origin: Vec2) -> Self {
        Self {
            start_a: a,
            start_b: b,
            a,
            b,
            origin,
            angle: 0.0,
            completed: false,
        }
    }

    /// Erstellt ein Segment, das bereits als abgeschlossen gilt (Start-Segment).
    pub fn settled(a: Vec2, b: Vec2, origin: Vec2) -> Self {
        Self {
            completed: true,
            ..Self::new(a, b, origin)
        }
    }

    /// Dupliziert das Segment für die nächste Iteration.
    ///
    /// Das Duplikat startet an der *aktuellen* (bereits gedrehten) Lage
    /// `a`/`b` und dreht sich um `new_origin`.
    pub fn duplicate(&self, new_origin: Vec2) -> Self {
        Self::new(self.a, self.b, new_origin)
    }

    /// Setzt den Drehfortschritt auf `t` ∈ [0, 1].
    ///
    /// Bei `t >= 1` wird der Winkel auf die Vierteldrehung geklemmt und das
    /// Segment als abgeschlossen markiert. Die Endlage wird dann exakt über
    /// `perp()` berechnet, damit sich Rundungsfehler nicht über Iterationen
    /// aufsummieren.
    pub fn update(&mut self, t: f32) {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

        if t >= 1.0 {
            self.angle = QUARTER_TURN;
            self.completed = true;
            self.a = quarter_turn_about(self.start_a, self.origin);
            self.b = quarter_turn_about(self.start_b, self.origin);
            return;
        }

        self.angle = lerp(0.0, QUARTER_TURN, t);
        self.a = rotate_about(self.start_a, self.origin, self.angle);
        self.b = rotate_about(self.start_b, self.origin, self.angle);
    }

    /// Aktueller Endpunkt A.
    pub fn a(&self) -> Vec2 {
        self.a
    }

    /// Aktueller Endpunkt B.
    pub fn b(&self) -> Vec2 {
        self.b
    }

    /// Endpunkt A zu Beginn der aktuellen Drehung.
    pub fn start_a(&self) -> Vec2 {
        self.start_a
    }

    /// Endpunkt B zu Beginn der aktuellen Drehung.
    pub fn start_b(&self) -> Vec2 {
        self.start_b
    }

    /// Pivot der Drehung.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Aktueller Drehwinkel in Radiant.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Endpunkte nach Abschluss der laufenden Drehung.
    pub fn settled_endpoints(&self) -> [Vec2; 2] {
        if self.completed {
            [self.a, self.b]
        } else {
            [
                quarter_turn_about(self.start_a, self.origin),
                quarter_turn_about(self.start_b, self.origin),
            ]
        }
    }

    /// Länge in Welteinheiten.
    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }

    pub fn midpoint(&self) -> Vec2 {
        midpoint(self.a, self.b)
    }
}
