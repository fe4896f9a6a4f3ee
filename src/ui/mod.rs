//! UI-Layer mit egui: Eingaben, Status-Bar und Debug-Overlay.
//!
//! Die UI liest den AppState nur und liefert `AppIntent`s zurück.

pub mod debug_overlay;
pub mod input;
mod keyboard;
pub mod status;

pub use debug_overlay::render_debug_overlay;
pub use input::collect_viewport_intents;
pub use status::render_status_bar;
