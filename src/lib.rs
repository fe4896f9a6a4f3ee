//! Dragon-Curve-Animator Library.
//! Simulation, Kamera und Zeichen-Grenze als Library exportiert für Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SimulationState, UiState, ViewState};
pub use core::{
    AnimationClock, BoundsFit, Camera2D, CameraMode, CameraPolicy, ConsolidationPolicy,
    FractalBounds, FractalGenerator, GrowthCenterOfMass, NoConsolidation, PixelThreshold, Segment,
    Square, ViewTransform,
};
pub use render::{draw_scene, DrawCall, RecordingSink, RenderSink};
pub use shared::{FractalOptions, RenderScene, StrokeWidth};
