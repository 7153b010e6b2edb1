// src/polygon/operations/clipping.rs

use crate::polygon::Polygon;
use crate::types::Point2D;
use crate::utils::simple_geometry::cross;

/// Slack für den Seiten-Test: fast-kollineare Vertices zählen zur
/// behaltenen Seite, damit numerisch grenzwertige Punkte nicht flattern
pub const DEFAULT_SIDE_TOLERANCE: f64 = 1e-12;
/// Nenner-Schwelle unter der zwei Richtungen als parallel gelten
pub const DEFAULT_PARALLEL_TOLERANCE: f64 = 1e-15;

/// Welche Seite der gerichteten Linie behalten wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipSide {
    /// Links der Linie A->B (das Innere eines CCW-Polygons)
    Left,
    /// Rechts der Linie A->B
    Right,
}

/// Sutherland-Hodgman-Clipping gegen eine einzelne gerichtete Linie.
///
/// Baustein für die konvexen Boolean-Operationen: wiederholtes Clippen
/// gegen jede Kante eines zweiten konvexen Polygons ergibt den
/// vollständigen konvex-konvex-Schnitt.
pub struct HalfPlaneClipper {
    side_tolerance: f64,
    parallel_tolerance: f64,
}

impl HalfPlaneClipper {
    pub fn new() -> Self {
        Self {
            side_tolerance: DEFAULT_SIDE_TOLERANCE,
            parallel_tolerance: DEFAULT_PARALLEL_TOLERANCE,
        }
    }

    /// Setzt die Toleranz des Seiten-Tests
    pub fn with_side_tolerance(mut self, tolerance: f64) -> Self {
        self.side_tolerance = tolerance;
        self
    }

    /// Setzt die Parallelitäts-Schwelle der Schnittpunktberechnung
    pub fn with_parallel_tolerance(mut self, tolerance: f64) -> Self {
        self.parallel_tolerance = tolerance;
        self
    }

    /// Clippt das Subjekt gegen die gerichtete Linie a->b und behält die
    /// gewählte Seite.
    ///
    /// Das leere Subjekt ergibt ein leeres Polygon. Die Ausgabe kann
    /// degeneriert sein (weniger als 3 Vertices) und wird unverändert
    /// geliefert; ob sie Fläche trägt entscheidet der Aufrufer.
    pub fn clip(&self, subject: &Polygon, a: Point2D, b: Point2D, keep: ClipSide) -> Polygon {
        if subject.is_empty() {
            return Polygon::empty();
        }

        let vertices = subject.vertices();
        let mut output: Vec<Point2D> = Vec::with_capacity(vertices.len() + 4);

        // Start bei der Umlauf-Kante: letzter -> erster Vertex
        let mut s = vertices[vertices.len() - 1];
        let mut s_inside = self.is_inside(s, a, b, keep);

        for &e in vertices {
            let e_inside = self.is_inside(e, a, b, keep);

            if e_inside {
                if !s_inside {
                    // Eintretende Kante: Schnittpunkt vor dem Endpunkt
                    if let Some(intersection) = self.line_intersection(s, e, a, b) {
                        output.push(intersection);
                    }
                }
                output.push(e);
            } else if s_inside {
                // Verlassende Kante: nur den Schnittpunkt
                if let Some(intersection) = self.line_intersection(s, e, a, b) {
                    output.push(intersection);
                }
            }

            s = e;
            s_inside = e_inside;
        }

        Polygon::from_ring(output)
    }

    fn is_inside(&self, point: Point2D, a: Point2D, b: Point2D, keep: ClipSide) -> bool {
        let turn = cross(a, b, point);
        match keep {
            ClipSide::Left => turn >= -self.side_tolerance,
            ClipSide::Right => turn <= self.side_tolerance,
        }
    }

    /// Parametrischer Linien-Schnitt. `None` bei (nahezu) parallelen
    /// Richtungen — das schützt die Division, entscheidet aber nicht
    /// zwischen echter Parallelität und degeneriertem Fast-Schnitt.
    fn line_intersection(
        &self,
        p1: Point2D,
        p2: Point2D,
        p3: Point2D,
        p4: Point2D,
    ) -> Option<Point2D> {
        let r = p2 - p1;
        let s = p4 - p3;

        let denominator = r.perp_dot(s);
        if denominator.abs() < self.parallel_tolerance {
            return None;
        }

        let t = (p3 - p1).perp_dot(s) / denominator;
        Some(p1 + r * t)
    }
}

impl Default for HalfPlaneClipper {
    fn default() -> Self {
        Self::new()
    }
}
