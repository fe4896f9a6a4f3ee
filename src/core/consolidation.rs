//! Austauschbare Konsolidierung: zu kleine Segmente werden zu statischen Quadraten.

use super::FractalGenerator;

/// Vereinfacht die Geometrie, um die Arbeit pro Frame zu begrenzen.
pub trait ConsolidationPolicy: std::fmt::Debug {
    /// Anzeigename für Status und Logs.
    fn name(&self) -> &'static str;

    /// Führt einen Konsolidierungs-Durchlauf aus.
    ///
    /// `view_scale` ist die effektive Welt→Pixel-Skalierung, `frame` der
    /// laufende Frame-Zähler. Gibt die Anzahl umgewandelter Segmente zurück.
    fn run(&mut self, generator: &mut FractalGenerator, view_scale: f32, frame: u64) -> usize;
}

/// Keine Konsolidierung.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConsolidation;

impl ConsolidationPolicy for NoConsolidation {
    fn name(&self) -> &'static str {
        "Aus"
    }

    fn run(&mut self, _generator: &mut FractalGenerator, _view_scale: f32, _frame: u64) -> usize {
        0
    }
}

/// Wandelt abgeschlossene Segmente unterhalb einer Pixel-Länge in Quadrate um.
#[derive(Debug, Clone)]
pub struct PixelThreshold {
    threshold_px: f32,
    interval_frames: u32,
    converted_total: usize,
}

impl PixelThreshold {
    /// `interval_frames`: Durchlauf nur in jedem n-ten Frame (0 wird als 1 behandelt).
    pub fn new(threshold_px: f32, interval_frames: u32) -> Self {
        Self {
            threshold_px: threshold_px.max(0.0),
            interval_frames: interval_frames.max(1),
            converted_total: 0,
        }
    }

    pub fn threshold_px(&self) -> f32 {
        self.threshold_px
    }

    /// Summe aller bisher umgewandelten Segmente.
    pub fn converted_total(&self) -> usize {
        self.converted_total
    }
}

impl ConsolidationPolicy for PixelThreshold {
    fn name(&self) -> &'static str {
        "Pixel-Schwelle"
    }

    fn run(&mut self, generator: &mut FractalGenerator, view_scale: f32, frame: u64) -> usize {
        if frame % u64::from(self.interval_frames) != 0 {
            return 0;
        }
        if !view_scale.is_finite() || view_scale <= 0.0 {
            return 0;
        }

        let threshold = self.threshold_px;
        let converted = generator.consolidate(|s| s.length() * view_scale < threshold);
        if converted > 0 {
            self.converted_total += converted;
            log::debug!(
                "Konsolidierung: {} Segmente → Quadrate (gesamt {})",
                converted,
                self.converted_total
            );
        }
        converted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec2;

    /// Zwei abgeschlossene Iterationen: Seed, Duplikat, Anker, Duplikat.
    fn grown_generator() -> FractalGenerator {
        let mut generator = FractalGenerator::new(100.0);
        for _ in 0..2 {
            generator.step_iteration();
            generator.update_segments(1.0);
        }
        generator
    }

    #[test]
    fn small_segment_becomes_square_at_midpoint_exactly_once() {
        let mut generator = grown_generator();
        let first_midpoint = generator.segments()[1].midpoint();
        let mut policy = PixelThreshold::new(3.0, 1);

        // 100 Welteinheiten * 0.02 = 2 px < 3 px; Seed und Anker bleiben
        let converted = policy.run(&mut generator, 0.02, 1);

        assert_eq!(converted, 2);
        assert_eq!(generator.segments().len(), 2);
        assert_eq!(generator.squares().len(), 2);
        assert_eq!(generator.squares()[0].center, first_midpoint);
        assert_relative_eq!(generator.squares()[0].half_size, 50.0);

        assert_eq!(policy.run(&mut generator, 0.02, 2), 0);
        assert_eq!(generator.squares().len(), 2);
        assert_eq!(policy.converted_total(), 2);
    }

    #[test]
    fn segments_above_threshold_stay() {
        let mut generator = grown_generator();
        let mut policy = PixelThreshold::new(3.0, 1);

        assert_eq!(policy.run(&mut generator, 0.5, 1), 0);
        assert_eq!(generator.segments().len(), 4);
    }

    #[test]
    fn runs_only_on_interval_frames() {
        let mut generator = grown_generator();
        let mut policy = PixelThreshold::new(3.0, 30);

        assert_eq!(policy.run(&mut generator, 0.02, 29), 0);
        assert_eq!(policy.run(&mut generator, 0.02, 30), 2);
    }

    #[test]
    fn no_consolidation_never_converts() {
        let mut generator = grown_generator();
        let mut policy = NoConsolidation;
        assert_eq!(policy.run(&mut generator, 1e-6, 0), 0);
        assert!(generator.squares().is_empty());
        assert_eq!(generator.segments()[0].a(), Vec2::ZERO);
    }
}
