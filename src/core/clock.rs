//! Animations-Uhr: Übergangsparameter `t` und Abklingzeit zwischen Iterationen.

/// Treibt den globalen Interpolationsparameter `t` ∈ [0, 1].
///
/// `t` wird intern als ganzzahliger Frame-Zähler geführt, damit die
/// Schrittweite exakt nach `frames_per_transition` Frames bei 1.0 ankommt.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    frames_per_transition: u32,
    transition_frames: u32,
    frame_count: u64,
    paused: bool,
    delay_frames: u32,
    /// `Some(n)`: Abklingphase läuft seit `n` Frames
    cooldown_elapsed: Option<u32>,
}

impl AnimationClock {
    /// Erstellt eine Uhr mit Schrittweite `step` pro Frame und Abklingzeit `delay_frames`.
    ///
    /// `delay_frames == 0` löst die nächste Iteration im selben Frame aus, in dem
    /// alles abgeschlossen ist.
    pub fn new(step: f32, delay_frames: u32) -> Self {
        let frames_per_transition = if step.is_finite() && step > 0.0 {
            (1.0 / step).round().max(1.0) as u32
        } else {
            1
        };

        Self {
            frames_per_transition,
            transition_frames: 0,
            frame_count: 0,
            paused: false,
            delay_frames,
            cooldown_elapsed: None,
        }
    }

    /// Rückt die Uhr einen Frame vor.
    ///
    /// Der Frame-Zähler läuft immer, `t` nur ohne Pause.
    pub fn advance(&mut self) {
        self.frame_count += 1;
        if self.paused {
            return;
        }
        if self.transition_frames < self.frames_per_transition {
            self.transition_frames += 1;
        }
    }

    /// Aktueller Übergangsparameter `t` ∈ [0, 1].
    pub fn transition(&self) -> f32 {
        (self.transition_frames as f32 / self.frames_per_transition as f32).min(1.0)
    }

    /// `true`, sobald `t` den Wert 1 erreicht hat.
    pub fn is_transition_done(&self) -> bool {
        self.transition_frames >= self.frames_per_transition
    }

    /// Entscheidet, ob jetzt die nächste Iteration starten soll.
    ///
    /// Muss einmal pro Frame nach dem Segment-Update aufgerufen werden.
    /// Mit Abklingzeit beginnt die Phase im ersten Frame, in dem alles
    /// abgeschlossen ist; die Iteration folgt `delay_frames` Frames später.
    pub fn poll_iteration(&mut self, all_complete: bool) -> bool {
        if self.paused || !all_complete || !self.is_transition_done() {
            return false;
        }

        if self.delay_frames == 0 {
            return true;
        }

        match self.cooldown_elapsed {
            None => {
                self.cooldown_elapsed = Some(0);
                false
            }
            Some(elapsed) => {
                let elapsed = elapsed + 1;
                self.cooldown_elapsed = Some(elapsed);
                elapsed >= self.delay_frames
            }
        }
    }

    /// Setzt `t` auf 0 zurück und beendet eine laufende Abklingphase.
    pub fn reset_transition(&mut self) {
        self.transition_frames = 0;
        self.cooldown_elapsed = None;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Anzahl Frames seit Start (inklusive pausierter Frames).
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn delay_frames(&self) -> u32 {
        self.delay_frames
    }

    /// Ändert die Abklingzeit um `delta` Frames, geklemmt auf ≥ 0.
    pub fn adjust_delay(&mut self, delta: i32) {
        let adjusted = i64::from(self.delay_frames) + i64::from(delta);
        self.delay_frames = adjusted.clamp(0, i64::from(u32::MAX)) as u32;
    }

    /// Laufender Zähler der Abklingphase (`None` außerhalb der Phase).
    pub fn cooldown_elapsed(&self) -> Option<u32> {
        self.cooldown_elapsed
    }

    /// Verbleibende Abkling-Frames (`None` außerhalb der Phase).
    pub fn remaining_delay(&self) -> Option<u32> {
        self.cooldown_elapsed
            .map(|elapsed| self.delay_frames.saturating_sub(elapsed))
    }
}
