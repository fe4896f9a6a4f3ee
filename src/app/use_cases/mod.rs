//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod simulation;
pub mod tick;
pub mod viewport;
