use crate::core::{
    AnimationClock, ConsolidationPolicy, FractalGenerator, NoConsolidation, PixelThreshold,
};
use crate::shared::FractalOptions;

/// Simulationsbezogener Zustand: Geometrie, Uhr und Konsolidierung.
#[derive(Debug)]
pub struct SimulationState {
    /// Besitzt alle Segmente und Quadrate
    pub generator: FractalGenerator,
    /// Übergangsparameter und Abklingzeit
    pub clock: AnimationClock,
    /// Aktive Konsolidierungs-Strategie
    pub consolidation: Box<dyn ConsolidationPolicy>,
    /// Ob das Erreichen von `max_iterations` bereits geloggt wurde
    pub iteration_cap_reported: bool,
}

impl SimulationState {
    /// Startzustand: ein Segment, `t = 0`.
    pub fn from_options(options: &FractalOptions) -> Self {
        Self {
            generator: FractalGenerator::new(options.initial_segment_length),
            clock: AnimationClock::new(options.transition_step, options.iteration_delay_frames),
            consolidation: build_consolidation(options),
            iteration_cap_reported: false,
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::from_options(&FractalOptions::default())
    }
}

fn build_consolidation(options: &FractalOptions) -> Box<dyn ConsolidationPolicy> {
    if options.consolidation_enabled {
        Box::new(PixelThreshold::new(
            options.consolidation_threshold_px,
            options.consolidation_interval_frames,
        ))
    } else {
        Box::new(NoConsolidation)
    }
}
