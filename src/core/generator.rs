//! Fraktal-Generator: Duplizieren, Drehen, Anhängen.

use super::vector::centroid;
use super::{FractalBounds, Segment, Square};
use glam::Vec2;

/// Besitzt alle Segmente und führt die Iterationsschritte aus.
///
/// Die Einfügereihenfolge der Segmente ist die Zeichenreihenfolge.
/// Der Anker (`end_index`) ist das zuletzt erzeugte Duplikat des Seeds und
/// liefert den Pivot des nächsten Schritts. Der Seed bleibt immer an Index 0.
#[derive(Debug, Clone)]
pub struct FractalGenerator {
    segments: Vec<Segment>,
    squares: Vec<Square>,
    end_index: usize,
    iteration_count: u32,
}

impl FractalGenerator {
    /// Ersatzlänge, falls eine ungültige Start-Länge übergeben wird.
    pub const FALLBACK_LENGTH: f32 = 100.0;

    /// Erstellt einen Generator mit einem einzelnen Start-Segment.
    pub fn new(length: f32) -> Self {
        let mut generator = Self {
            segments: Vec::new(),
            squares: Vec::new(),
            end_index: 0,
            iteration_count: 0,
        };
        generator.initialize(length);
        generator
    }

    /// Setzt auf ein senkrechtes Segment `(0,0)-(0,length)` zurück.
    ///
    /// Das Segment gilt sofort als abgeschlossen und ist der Anker.
    /// Ungültige Längen (≤ 0, NaN, ∞) werden durch `FALLBACK_LENGTH` ersetzt.
    pub fn initialize(&mut self, length: f32) {
        let length = if length.is_finite() && length > 0.0 {
            length
        } else {
            log::warn!(
                "Ungültige Segment-Länge {}, verwende {}",
                length,
                Self::FALLBACK_LENGTH
            );
            Self::FALLBACK_LENGTH
        };

        let a = Vec2::ZERO;
        let b = Vec2::new(0.0, length);

        self.segments.clear();
        self.squares.clear();
        self.segments.push(Segment::settled(a, b, b));
        self.end_index = 0;
        self.iteration_count = 0;
    }

    /// Führt einen Iterationsschritt aus.
    ///
    /// Jedes Segment wird mit Pivot `end.a` dupliziert. Nur beim allerersten
    /// Schritt (`iteration_count == 0`) dreht sich das erste Duplikat um
    /// `end.b`. Originale bleiben erhalten, der Anker wird das erste Duplikat.
    /// Konsolidierte Quadrate werden direkt in ihre Endlage dupliziert.
    ///
    /// Das Zurücksetzen des Übergangsparameters übernimmt der Aufrufer.
    pub fn step_iteration(&mut self) {
        let Some(end) = self.segments.get(self.end_index) else {
            log::warn!("Kein Anker-Segment vorhanden, Iteration übersprungen");
            return;
        };

        let pivot = end.a();
        let first_pivot = if self.iteration_count == 0 {
            end.b()
        } else {
            pivot
        };

        let base = self.segments.len();
        let duplicates: Vec<Segment> = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, s)| s.duplicate(if i == 0 { first_pivot } else { pivot }))
            .collect();
        let square_duplicates: Vec<Square> =
            self.squares.iter().map(|sq| sq.quarter_turned(pivot)).collect();

        self.segments.extend(duplicates);
        self.squares.extend(square_duplicates);
        self.end_index = base;
        self.iteration_count += 1;

        log::debug!(
            "Iteration {}: {} Segmente, {} Quadrate",
            self.iteration_count,
            self.segments.len(),
            self.squares.len()
        );
    }

    /// Aktualisiert alle noch nicht abgeschlossenen Segmente auf `t`.
    pub fn update_segments(&mut self, t: f32) {
        self.segments
            .iter_mut()
            .filter(|s| !s.is_completed())
            .for_each(|s| s.update(t));
    }

    /// `true`, wenn kein Segment mehr in Bewegung ist.
    pub fn all_complete(&self) -> bool {
        self.segments.iter().all(Segment::is_completed)
    }

    /// Ersetzt abgeschlossene Segmente durch Quadrate, wenn `should_convert` zustimmt.
    ///
    /// Seed und Anker werden nie ersetzt: das erste Duplikat jedes Schritts
    /// muss das Abbild des Seeds sein. Die Umwandlung ist endgültig.
    /// Gibt die Anzahl umgewandelter Segmente zurück.
    pub fn consolidate<F>(&mut self, mut should_convert: F) -> usize
    where
        F: FnMut(&Segment) -> bool,
    {
        let anchor = self.end_index;
        let old = std::mem::take(&mut self.segments);
        let mut kept = Vec::with_capacity(old.len());
        let mut converted = 0;

        for (i, segment) in old.into_iter().enumerate() {
            let protected = i == 0 || i == anchor;
            if !protected && segment.is_completed() && should_convert(&segment) {
                self.squares.push(Square::from_segment(&segment));
                converted += 1;
            } else {
                if i == anchor {
                    self.end_index = kept.len();
                }
                kept.push(segment);
            }
        }

        self.segments = kept;
        converted
    }

    /// Alle aktiven Segmente in Zeichenreihenfolge.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Alle konsolidierten Quadrate.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Aktueller Anker für den nächsten Pivot.
    pub fn end_segment(&self) -> Option<&Segment> {
        self.segments.get(self.end_index)
    }

    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    /// Segmente + Quadrate. Verdoppelt sich mit jeder Iteration.
    pub fn element_count(&self) -> usize {
        self.segments.len() + self.squares.len()
    }

    /// Bounding-Box über alle Segment-Endpunkte und Quadrat-Ecken.
    pub fn bounds(&self) -> Option<FractalBounds> {
        let segment_points = self.segments.iter().flat_map(|s| [s.a(), s.b()]);
        let square_points = self.squares.iter().flat_map(|sq| [sq.min(), sq.max()]);
        FractalBounds::from_points(segment_points.chain(square_points))
    }

    /// Bounding-Box der Endlage nach Abschluss der laufenden Iteration.
    ///
    /// Umfasst auch die aktuellen Endpunkte, damit die Box während der
    /// Animation nicht hinter der sichtbaren Geometrie zurückbleibt.
    pub fn settled_bounds(&self) -> Option<FractalBounds> {
        let segment_points = self.segments.iter().flat_map(|s| {
            let [fa, fb] = s.settled_endpoints();
            [s.a(), s.b(), fa, fb]
        });
        let square_points = self.squares.iter().flat_map(|sq| [sq.min(), sq.max()]);
        FractalBounds::from_points(segment_points.chain(square_points))
    }

    /// Schwerpunkt aller Endpunkte.
    ///
    /// Ein Quadrat zählt mit seinem Mittelpunkt doppelt, da es die beiden
    /// Endpunkte seines Segments vertritt (`a + b == 2 * mitte`).
    pub fn center_of_mass(&self) -> Option<Vec2> {
        let segment_points = self.segments.iter().flat_map(|s| [s.a(), s.b()]);
        let square_points = self.squares.iter().flat_map(|sq| [sq.center, sq.center]);
        centroid(segment_points.chain(square_points))
    }
}

impl Default for FractalGenerator {
    fn default() -> Self {
        Self::new(Self::FALLBACK_LENGTH)
    }
}
