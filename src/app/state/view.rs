use crate::core::{BoundsFit, Camera2D, CameraMode, CameraPolicy, GrowthCenterOfMass};
use crate::shared::FractalOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktive Kamera-Strategie (führt Skalierung und Pan)
    pub camera_policy: Box<dyn CameraPolicy>,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand mit der konfigurierten Kamera-Strategie.
    pub fn from_options(options: &FractalOptions) -> Self {
        Self {
            camera: Camera2D::new(),
            camera_policy: build_camera_policy(options),
            viewport_size: [0.0, 0.0],
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_options(&FractalOptions::default())
    }
}

fn build_camera_policy(options: &FractalOptions) -> Box<dyn CameraPolicy> {
    let extent = options.initial_segment_length;
    match options.camera_mode {
        CameraMode::BoundsFit => Box::new(BoundsFit::new(
            options.view_fill_ratio,
            options.bounds_padding,
            options.scale_smoothing,
            extent,
        )),
        CameraMode::GrowthCenterOfMass => Box::new(GrowthCenterOfMass::new(
            options.growth_factor,
            options.view_fill_ratio,
            extent,
        )),
    }
}
