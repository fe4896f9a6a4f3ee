//! Achsparallele Bounding-Box der Fraktal-Geometrie.

use glam::Vec2;

/// Minimale/maximale Welt-Koordinaten aller Segment-Endpunkte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl FractalBounds {
    /// Symmetrische Box `[-extent, extent]²` um den Ursprung.
    ///
    /// Dient als Startwert, bevor die erste Iteration Geometrie liefert.
    pub fn around_origin(extent: f32) -> Self {
        let e = extent.abs();
        Self {
            min: Vec2::splat(-e),
            max: Vec2::splat(e),
        }
    }

    /// Berechnet die Box über alle Punkte. `None` bei leerer Menge.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Vergrößert die Box auf allen Seiten um `padding`.
    pub fn padded(self, padding: f32) -> Self {
        let pad = Vec2::splat(padding.max(0.0));
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Prüft, ob ein Punkt innerhalb der Box liegt (Rand inklusive).
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Skalierung, mit der die Box `fill_ratio` des Viewports ausfüllt.
    ///
    /// `None`, wenn Viewport oder Box keine Fläche haben. Eine Box mit nur
    /// einer degenerierten Achse wird über die andere Achse eingepasst.
    pub fn fit_scale(&self, viewport_size: [f32; 2], fill_ratio: f32) -> Option<f32> {
        let [vw, vh] = viewport_size;
        if vw <= 0.0 || vh <= 0.0 {
            return None;
        }

        let width_scale = (self.width() > f32::EPSILON).then(|| vw * fill_ratio / self.width());
        let height_scale = (self.height() > f32::EPSILON).then(|| vh * fill_ratio / self.height());

        let scale = match (width_scale, height_scale) {
            (Some(w), Some(h)) => Some(w.min(h)),
            (Some(s), None) | (None, Some(s)) => Some(s),
            (None, None) => None,
        };
        scale.filter(|s| s.is_finite() && *s > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_points_covers_all_points() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(-3.0, 10.0),
            Vec2::new(7.0, -2.0),
        ];
        let bounds = FractalBounds::from_points(points).unwrap();
        assert_eq!(bounds.min, Vec2::new(-3.0, -2.0));
        assert_eq!(bounds.max, Vec2::new(7.0, 10.0));
        assert!(points.iter().all(|p| bounds.contains(*p)));
    }

    #[test]
    fn from_points_empty_is_none() {
        assert!(FractalBounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn padded_grows_every_side() {
        let bounds = FractalBounds::around_origin(10.0).padded(5.0);
        assert_eq!(bounds.min, Vec2::splat(-15.0));
        assert_eq!(bounds.max, Vec2::splat(15.0));
        assert_relative_eq!(bounds.width(), 30.0);
        assert_eq!(bounds.center(), Vec2::ZERO);
    }

    #[test]
    fn fit_scale_uses_smaller_axis() {
        let bounds = FractalBounds {
            min: Vec2::ZERO,
            max: Vec2::new(200.0, 100.0),
        };
        // 1000*0.8/200 = 4, 500*0.8/100 = 4 → 4
        assert_relative_eq!(bounds.fit_scale([1000.0, 500.0], 0.8).unwrap(), 4.0);
        // 1000*0.8/200 = 4, 200*0.8/100 = 1.6 → 1.6
        assert_relative_eq!(bounds.fit_scale([1000.0, 200.0], 0.8).unwrap(), 1.6);
    }

    #[test]
    fn fit_scale_handles_degenerate_boxes() {
        let point = FractalBounds::from_points([Vec2::new(1.0, 1.0)]).unwrap();
        assert!(point.fit_scale([800.0, 600.0], 0.8).is_none());

        let vertical = FractalBounds::from_points([Vec2::ZERO, Vec2::new(0.0, 100.0)]).unwrap();
        assert_relative_eq!(vertical.fit_scale([800.0, 600.0], 0.8).unwrap(), 4.8);

        let any = FractalBounds::around_origin(1.0);
        assert!(any.fit_scale([0.0, 600.0], 0.8).is_none());
    }
}
