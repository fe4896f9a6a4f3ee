//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Die Strichbreite wird einmal pro Szene aus der effektiven Skalierung bestimmt.
pub fn build(state: &AppState) -> RenderScene<'_> {
    let camera = &state.view.camera;
    let generator = &state.simulation.generator;

    RenderScene {
        segments: generator.segments(),
        squares: generator.squares(),
        transform: camera.view_transform(state.view.viewport_size),
        stroke_width: state.options.stroke.width_for_scale(camera.effective_scale()),
        segment_color: state.options.segment_color,
        square_color: state.options.square_color,
    }
}
