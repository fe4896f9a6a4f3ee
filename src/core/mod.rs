//! Core-Domänentypen: Segmente, Generator, Animations-Uhr, Kamera, Strategien.

pub mod bounds;
pub mod camera;
pub mod camera_policy;
pub mod clock;
pub mod consolidation;
pub mod generator;
pub mod segment;
pub mod square;
pub mod vector;

pub use bounds::FractalBounds;
pub use camera::{Camera2D, ViewTransform};
pub use camera_policy::{BoundsFit, CameraContext, CameraMode, CameraPolicy, GrowthCenterOfMass};
pub use clock::AnimationClock;
pub use consolidation::{ConsolidationPolicy, NoConsolidation, PixelThreshold};
pub use generator::FractalGenerator;
pub use segment::{Segment, QUARTER_TURN};
pub use square::Square;
