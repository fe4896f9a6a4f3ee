//! Vektor-Hilfsfunktionen auf Basis von `glam::Vec2`.
//!
//! Addition, Subtraktion, Skalierung und Distanz liefert `glam` direkt.
//! Hier liegen nur die Operationen, die die Faltung zusätzlich braucht.
//!
//! Drehsinn: positiver Winkel = mathematisch positiv (gegen den Uhrzeigersinn
//! bei Y nach oben). Auf dem Bildschirm (Y nach unten) erscheint dieselbe
//! Drehung im Uhrzeigersinn. `(0, 1)` um 90° gedreht ergibt `(-1, 0)`.

use glam::Vec2;

/// Dreht `point` um `pivot` um `angle` (Radiant).
pub fn rotate_about(point: Vec2, pivot: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(point - pivot) + pivot
}

/// Exakte Vierteldrehung (+90°) von `point` um `pivot`.
///
/// Ohne Sinus/Kosinus, damit ganzzahlige Gitterpunkte ganzzahlig bleiben.
pub fn quarter_turn_about(point: Vec2, pivot: Vec2) -> Vec2 {
    (point - pivot).perp() + pivot
}

/// Mittelpunkt zwischen zwei Punkten.
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Lineare Interpolation zwischen zwei Skalaren.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Schwerpunkt einer Punktmenge. `None` bei leerer Menge.
pub fn centroid(points: impl IntoIterator<Item = Vec2>) -> Option<Vec2> {
    let mut sum = Vec2::ZERO;
    let mut count = 0usize;
    for p in points {
        sum += p;
        count += 1;
    }
    (count > 0).then(|| sum / count as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn rotate_about_origin_quarter_turn_is_counter_clockwise() {
        let p = rotate_about(Vec2::new(0.0, 1.0), Vec2::ZERO, FRAC_PI_2);
        assert_relative_eq!(p.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn rotate_about_pivot_keeps_distance() {
        let pivot = Vec2::new(3.0, -2.0);
        let point = Vec2::new(7.0, 1.0);
        let rotated = rotate_about(point, pivot, 1.234);
        assert_relative_eq!(rotated.distance(pivot), point.distance(pivot), epsilon = 1e-4);
    }

    #[test]
    fn quarter_turn_matches_trigonometric_rotation() {
        let pivot = Vec2::new(0.0, 100.0);
        let point = Vec2::new(0.0, 0.0);
        let exact = quarter_turn_about(point, pivot);
        let trig = rotate_about(point, pivot, FRAC_PI_2);
        assert_eq!(exact, Vec2::new(100.0, 100.0));
        assert_relative_eq!(trig.x, exact.x, epsilon = 1e-3);
        assert_relative_eq!(trig.y, exact.y, epsilon = 1e-3);
    }

    #[test]
    fn centroid_of_empty_set_is_none() {
        assert!(centroid(std::iter::empty()).is_none());
    }

    #[test]
    fn centroid_averages_points() {
        let c = centroid([Vec2::new(0.0, 0.0), Vec2::new(2.0, 4.0)]).unwrap();
        assert_eq!(c, Vec2::new(1.0, 2.0));
        assert_eq!(midpoint(Vec2::ZERO, Vec2::new(2.0, 4.0)), c);
    }

    #[test]
    fn lerp_hits_endpoints() {
        assert_relative_eq!(lerp(0.0, FRAC_PI_2, 0.0), 0.0);
        assert_relative_eq!(lerp(0.0, FRAC_PI_2, 1.0), FRAC_PI_2);
    }
}
