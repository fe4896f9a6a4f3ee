//! Viewport-Culling in Screen-Koordinaten.

use glam::Vec2;

/// Sichtbarer Screen-Bereich, um einen Rand (z.B. halbe Strichbreite) erweitert.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScreenRect {
    min: Vec2,
    max: Vec2,
    unbounded: bool,
}

impl ScreenRect {
    pub(crate) fn from_viewport(viewport_size: [f32; 2], margin: f32) -> Self {
        let [width, height] = viewport_size;
        let margin = Vec2::splat(margin.max(0.0));
        Self {
            min: -margin,
            max: Vec2::new(width, height) + margin,
            unbounded: !(width > 0.0 && height > 0.0),
        }
    }

    /// Ohne bekannte Viewport-Größe wird nichts verworfen.
    pub(crate) fn is_unbounded(&self) -> bool {
        self.unbounded
    }

    fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Prüft ob eine Linie das Rechteck schneidet oder darin liegt.
    pub(crate) fn intersects_line(&self, start: Vec2, end: Vec2) -> bool {
        if self.is_unbounded() {
            return true;
        }
        // Schneller Ausschluss über die Bounding-Box der Linie
        let lo = start.min(end);
        let hi = start.max(end);
        if hi.x < self.min.x || lo.x > self.max.x || hi.y < self.min.y || lo.y > self.max.y {
            return false;
        }
        if self.contains(start) || self.contains(end) {
            return true;
        }

        let corners = [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ];
        (0..4).any(|i| lines_intersect(start, end, corners[i], corners[(i + 1) % 4]))
    }

    /// Prüft ob ein achsparalleles Quadrat das Rechteck überlappt.
    pub(crate) fn intersects_square(&self, center: Vec2, half_size: f32) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let half = Vec2::splat(half_size);
        let lo = center - half;
        let hi = center + half;
        !(hi.x < self.min.x || lo.x > self.max.x || hi.y < self.min.y || lo.y > self.max.y)
    }
}

fn lines_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);
    o1 * o2 <= 0.0 && o3 * o4 <= 0.0
}

fn orientation(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

#[cfg(test)]
mod tests {
    use super::ScreenRect;
    use glam::Vec2;

    fn view() -> ScreenRect {
        ScreenRect::from_viewport([100.0, 100.0], 0.0)
    }

    #[test]
    fn line_inside_is_visible() {
        assert!(view().intersects_line(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)));
    }

    #[test]
    fn line_crossing_view_is_visible() {
        assert!(view().intersects_line(Vec2::new(-50.0, 50.0), Vec2::new(150.0, 50.0)));
    }

    #[test]
    fn line_outside_is_culled() {
        assert!(!view().intersects_line(Vec2::new(150.0, 0.0), Vec2::new(200.0, 100.0)));
        // Bounding-Box überlappt, Linie verläuft aber an der Ecke vorbei
        assert!(!view().intersects_line(Vec2::new(90.0, -20.0), Vec2::new(130.0, 20.0)));
    }

    #[test]
    fn margin_keeps_thick_lines_near_edge() {
        let rect = ScreenRect::from_viewport([100.0, 100.0], 5.0);
        assert!(rect.intersects_line(Vec2::new(-3.0, 0.0), Vec2::new(-3.0, 100.0)));
    }

    #[test]
    fn square_overlap() {
        assert!(view().intersects_square(Vec2::new(-1.0, 50.0), 2.0));
        assert!(!view().intersects_square(Vec2::new(-5.0, 50.0), 2.0));
    }

    #[test]
    fn zero_viewport_culls_nothing() {
        let rect = ScreenRect::from_viewport([0.0, 0.0], 4.0);
        assert!(rect.intersects_line(Vec2::new(1e6, 1e6), Vec2::new(2e6, 2e6)));
    }
}
