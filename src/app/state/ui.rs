use std::collections::VecDeque;

/// Zeitraum für die angezeigte FPS (gleitender Mittelwert).
const FPS_AVERAGE_SAMPLES: usize = 30;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob das Debug-Overlay sichtbar ist
    pub show_debug_overlay: bool,
    /// Letzte FPS-Messwerte (älteste zuerst)
    pub fps_history: VecDeque<f32>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (Overlay aus).
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt eine Frame-Dauer. Ungültige Werte werden ignoriert.
    pub fn record_frame_time(&mut self, seconds: f32, capacity: usize) {
        if !seconds.is_finite() || seconds <= 0.0 || capacity == 0 {
            return;
        }
        while self.fps_history.len() >= capacity {
            self.fps_history.pop_front();
        }
        self.fps_history.push_back(1.0 / seconds);
    }

    /// Gemittelte FPS der letzten Frames (`None` ohne Messwerte).
    pub fn fps(&self) -> Option<f32> {
        let n = self.fps_history.len().min(FPS_AVERAGE_SAMPLES);
        if n == 0 {
            return None;
        }
        let sum: f32 = self.fps_history.iter().rev().take(n).sum();
        Some(sum / n as f32)
    }
}
