//! Application State: die einzige explizite Simulationsdatenhaltung.

mod app_state;
mod simulation;
mod ui;
mod view;

pub use app_state::AppState;
pub use simulation::SimulationState;
pub use ui::UiState;
pub use view::ViewState;
