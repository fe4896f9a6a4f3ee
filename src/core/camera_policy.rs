//! Austauschbare Kamera-Strategien, die das wachsende Fraktal im Bild halten.
//!
//! - `BoundsFit`: Bounding-Box einpassen, Skalierung und Pan exponentiell glätten
//! - `GrowthCenterOfMass`: Skalierung pro Iteration durch √2 teilen,
//!   Pan folgt dem Schwerpunkt aller Endpunkte

use super::{Camera2D, FractalBounds, FractalGenerator};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Auswahl der Kamera-Strategie (Konfiguration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Bounding-Box einpassen mit geglätteter Skalierung
    #[default]
    BoundsFit,
    /// Fester Wachstumsfaktor + Schwerpunkt-Pan
    GrowthCenterOfMass,
}

/// Read-only Eingaben einer Kamera-Strategie für einen Frame.
#[derive(Clone, Copy)]
pub struct CameraContext<'a> {
    pub generator: &'a FractalGenerator,
    /// Übergangsparameter `t` der Animations-Uhr
    pub transition: f32,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
}

/// Führt Skalierung und Pan der Kamera nach.
pub trait CameraPolicy: std::fmt::Debug {
    /// Anzeigename für Status und Logs.
    fn name(&self) -> &'static str;

    /// Startzustand nach (Neu-)Initialisierung des Generators.
    fn reset(&mut self, camera: &mut Camera2D, ctx: &CameraContext<'_>);

    /// Unmittelbar vor `step_iteration`.
    fn before_iteration(&mut self, _camera: &mut Camera2D, _ctx: &CameraContext<'_>) {}

    /// Unmittelbar nach `step_iteration`.
    fn after_iteration(&mut self, _camera: &mut Camera2D, _ctx: &CameraContext<'_>) {}

    /// Einmal pro Frame.
    fn update(&mut self, camera: &mut Camera2D, ctx: &CameraContext<'_>);
}

/// Bounding-Box-Einpassung mit exponentieller Glättung.
#[derive(Debug, Clone)]
pub struct BoundsFit {
    fill_ratio: f32,
    padding: f32,
    smoothing: f32,
    initial_extent: f32,
    bounds: FractalBounds,
    fitted: bool,
}

impl BoundsFit {
    pub fn new(fill_ratio: f32, padding: f32, smoothing: f32, initial_extent: f32) -> Self {
        Self {
            fill_ratio,
            padding,
            smoothing,
            initial_extent,
            bounds: FractalBounds::around_origin(initial_extent),
            fitted: false,
        }
    }

    /// Aktuelle (gepolsterte) Fraktal-Bounds.
    pub fn bounds(&self) -> FractalBounds {
        self.bounds
    }

    /// Berechnet die Bounds aus der Endlage aller Segmente neu.
    pub fn update_bounds(&mut self, generator: &FractalGenerator) {
        if let Some(bounds) = generator.settled_bounds() {
            self.bounds = bounds.padded(self.padding);
        }
    }
}

impl CameraPolicy for BoundsFit {
    fn name(&self) -> &'static str {
        "Bounds-Fit"
    }

    fn reset(&mut self, camera: &mut Camera2D, ctx: &CameraContext<'_>) {
        self.bounds = FractalBounds::around_origin(self.initial_extent);
        self.fitted = false;
        camera.pan = self.bounds.center();
        match self.bounds.fit_scale(ctx.viewport_size, self.fill_ratio) {
            Some(scale) => {
                camera.snap_scale(scale);
                self.fitted = true;
            }
            None => camera.snap_scale(Camera2D::DEFAULT_SCALE),
        }
    }

    fn after_iteration(&mut self, _camera: &mut Camera2D, ctx: &CameraContext<'_>) {
        self.update_bounds(ctx.generator);
    }

    fn update(&mut self, camera: &mut Camera2D, ctx: &CameraContext<'_>) {
        let Some(target) = self.bounds.fit_scale(ctx.viewport_size, self.fill_ratio) else {
            return;
        };

        // Erster gültiger Viewport: ohne Glättung einrasten
        if !self.fitted {
            camera.snap_scale(target);
            camera.pan = self.bounds.center();
            self.fitted = true;
            return;
        }

        camera.set_target_scale(target);
        camera.smooth_towards_target(self.smoothing);
        camera.pan += (self.bounds.center() - camera.pan) * self.smoothing;
    }
}

/// Wachstumsfaktor-Skalierung mit Schwerpunkt-Pan.
///
/// Die Skalierung wird während des Übergangs linear auf `base / growth`
/// interpoliert; der eigentliche Teiler greift beim Iterationsschritt,
/// wenn `t` wieder bei 0 beginnt. Dadurch gibt es keinen Sprung.
#[derive(Debug, Clone)]
pub struct GrowthCenterOfMass {
    growth_factor: f32,
    fill_ratio: f32,
    initial_extent: f32,
    base_scale: Option<f32>,
}

impl GrowthCenterOfMass {
    pub fn new(growth_factor: f32, fill_ratio: f32, initial_extent: f32) -> Self {
        let growth_factor = if growth_factor.is_finite() && growth_factor >= 1.0 {
            growth_factor
        } else {
            std::f32::consts::SQRT_2
        };
        Self {
            growth_factor,
            fill_ratio,
            initial_extent,
            base_scale: None,
        }
    }

    /// Basis-Skalierung der laufenden Iteration (`None` vor der ersten Einpassung).
    pub fn base_scale(&self) -> Option<f32> {
        self.base_scale
    }

    /// Skalierung für Übergangsparameter `t`.
    pub fn scale_at(&self, base: f32, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        base * (1.0 - t * (1.0 - 1.0 / self.growth_factor))
    }

    fn initial_scale(&self, viewport_size: [f32; 2]) -> Option<f32> {
        FractalBounds::around_origin(self.initial_extent).fit_scale(viewport_size, self.fill_ratio)
    }
}

impl CameraPolicy for GrowthCenterOfMass {
    fn name(&self) -> &'static str {
        "Growth + Center-of-Mass"
    }

    fn reset(&mut self, camera: &mut Camera2D, ctx: &CameraContext<'_>) {
        self.base_scale = self.initial_scale(ctx.viewport_size);
        camera.snap_scale(self.base_scale.unwrap_or(Camera2D::DEFAULT_SCALE));
        camera.pan = ctx.generator.center_of_mass().unwrap_or(Vec2::ZERO);
    }

    fn before_iteration(&mut self, _camera: &mut Camera2D, _ctx: &CameraContext<'_>) {
        if let Some(base) = self.base_scale.as_mut() {
            *base /= self.growth_factor;
        }
    }

    fn update(&mut self, camera: &mut Camera2D, ctx: &CameraContext<'_>) {
        if self.base_scale.is_none() {
            // Viewport war beim Reset noch unbekannt: Einpassung nachholen,
            // dabei bereits erfolgte Iterationen berücksichtigen
            let iterations = ctx.generator.iteration_count() as i32;
            self.base_scale = self
                .initial_scale(ctx.viewport_size)
                .map(|s| s / self.growth_factor.powi(iterations));
        }

        if let Some(base) = self.base_scale {
            camera.snap_scale(self.scale_at(base, ctx.transition));
        }
        if let Some(center) = ctx.generator.center_of_mass() {
            camera.pan = center;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: [f32; 2] = [1500.0, 700.0];

    fn ctx(generator: &FractalGenerator, transition: f32) -> CameraContext<'_> {
        CameraContext {
            generator,
            transition,
            viewport_size: VIEWPORT,
        }
    }

    fn grow(generator: &mut FractalGenerator, iterations: usize) {
        for _ in 0..iterations {
            generator.step_iteration();
            generator.update_segments(1.0);
        }
    }

    #[test]
    fn bounds_fit_reset_fits_initial_extent() {
        let generator = FractalGenerator::new(100.0);
        let mut policy = BoundsFit::new(0.8, 50.0, 0.1, 100.0);
        let mut camera = Camera2D::new();

        policy.reset(&mut camera, &ctx(&generator, 0.0));

        // 700 * 0.8 / 200
        assert_relative_eq!(camera.scale, 2.8);
        assert_eq!(camera.pan, Vec2::ZERO);
    }

    #[test]
    fn bounds_fit_bounds_contain_all_endpoints_with_padding() {
        let mut generator = FractalGenerator::new(100.0);
        grow(&mut generator, 5);
        let mut policy = BoundsFit::new(0.8, 50.0, 0.1, 100.0);

        policy.update_bounds(&generator);
        let inner = policy.bounds();
        let shrunk = FractalBounds {
            min: inner.min + Vec2::splat(50.0),
            max: inner.max - Vec2::splat(50.0),
        };

        assert!(generator
            .segments()
            .iter()
            .all(|s| shrunk.contains(s.a()) && shrunk.contains(s.b())));
    }

    #[test]
    fn bounds_fit_smooths_towards_target() {
        let mut generator = FractalGenerator::new(100.0);
        let mut policy = BoundsFit::new(0.8, 50.0, 0.1, 100.0);
        let mut camera = Camera2D::new();
        policy.reset(&mut camera, &ctx(&generator, 0.0));
        let start = camera.scale;

        grow(&mut generator, 6);
        policy.after_iteration(&mut camera, &ctx(&generator, 0.0));
        let target = policy.bounds().fit_scale(VIEWPORT, 0.8).unwrap();
        assert!(target < start);

        policy.update(&mut camera, &ctx(&generator, 0.0));
        // Ein Schritt: nur 10 % des Wegs
        assert_relative_eq!(camera.scale, start + (target - start) * 0.1, epsilon = 1e-4);

        for _ in 0..300 {
            policy.update(&mut camera, &ctx(&generator, 0.0));
        }
        assert_relative_eq!(camera.scale, target, epsilon = 1e-3);
        let center = policy.bounds().center();
        assert_relative_eq!(camera.pan.x, center.x, epsilon = 1e-2);
        assert_relative_eq!(camera.pan.y, center.y, epsilon = 1e-2);
    }

    #[test]
    fn bounds_fit_waits_for_valid_viewport() {
        let generator = FractalGenerator::new(100.0);
        let mut policy = BoundsFit::new(0.8, 50.0, 0.1, 100.0);
        let mut camera = Camera2D::new();
        let empty = CameraContext {
            generator: &generator,
            transition: 0.0,
            viewport_size: [0.0, 0.0],
        };

        policy.reset(&mut camera, &empty);
        policy.update(&mut camera, &empty);
        assert_relative_eq!(camera.scale, Camera2D::DEFAULT_SCALE);

        policy.update(&mut camera, &ctx(&generator, 0.0));
        assert_relative_eq!(camera.scale, 2.8);
    }

    #[test]
    fn growth_policy_is_continuous_across_iteration() {
        let mut generator = FractalGenerator::new(100.0);
        let mut policy = GrowthCenterOfMass::new(std::f32::consts::SQRT_2, 0.8, 100.0);
        let mut camera = Camera2D::new();
        policy.reset(&mut camera, &ctx(&generator, 0.0));
        let base = policy.base_scale().unwrap();

        policy.update(&mut camera, &ctx(&generator, 1.0));
        let before_step = camera.scale;
        assert_relative_eq!(before_step, base / std::f32::consts::SQRT_2, epsilon = 1e-5);

        policy.before_iteration(&mut camera, &ctx(&generator, 1.0));
        generator.step_iteration();
        policy.update(&mut camera, &ctx(&generator, 0.0));

        assert_relative_eq!(camera.scale, before_step, epsilon = 1e-5);
    }

    #[test]
    fn growth_policy_pans_to_center_of_mass() {
        let mut generator = FractalGenerator::new(100.0);
        grow(&mut generator, 3);
        let mut policy = GrowthCenterOfMass::new(std::f32::consts::SQRT_2, 0.8, 100.0);
        let mut camera = Camera2D::new();
        policy.reset(&mut camera, &ctx(&generator, 0.0));

        policy.update(&mut camera, &ctx(&generator, 0.0));

        let com = generator.center_of_mass().unwrap();
        assert_eq!(camera.pan, com);
    }

    #[test]
    fn growth_policy_rejects_shrinking_factor() {
        let policy = GrowthCenterOfMass::new(0.5, 0.8, 100.0);
        assert_relative_eq!(policy.scale_at(1.0, 1.0), 1.0 / std::f32::consts::SQRT_2);
    }
}
