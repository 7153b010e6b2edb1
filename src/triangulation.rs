// src/triangulation.rs

use crate::types::{Bounds2D, Point2D, Triangle};
use log::{debug, trace};
use std::cmp::Ordering;

/// Fester Sicherheitszuschlag des Super-Dreiecks über die
/// Bounding-Box-Spannen hinaus
pub const DEFAULT_SUPER_MARGIN: f64 = 100.0;
/// Quadrierter Abstand unter dem ein Vertex als Super-Dreieck-Ecke gilt.
/// Approximative Koinzidenz — die Ecken werden nie strukturell
/// wiederbesucht, Float-Vergleiche dürfen sich nicht auf Identität
/// verlassen.
const SUPER_VERTEX_TOLERANCE_SQ: f64 = 1e-6;

/// Inkrementelle Delaunay-Triangulation (Bowyer-Watson).
///
/// Pro eingefügtem Punkt werden alle Dreiecke mit verletztem Umkreis
/// entfernt und die Randkanten des entstandenen Lochs mit dem Punkt neu
/// verbunden. O(N²) im schlechtesten Fall — für interaktive Punktmengen
/// ausreichend.
pub struct DelaunayTriangulator {
    super_margin: f64,
}

impl DelaunayTriangulator {
    pub fn new() -> Self {
        Self {
            super_margin: DEFAULT_SUPER_MARGIN,
        }
    }

    /// Setzt den Sicherheitszuschlag des Super-Dreiecks
    pub fn with_super_margin(mut self, margin: f64) -> Self {
        self.super_margin = margin;
        self
    }

    /// Trianguliert eine Punktmenge.
    ///
    /// Weniger als 3 Punkte ergeben eine leere Liste. Das Ergebnis
    /// überdeckt die konvexe Hülle der Eingabe und erfüllt die
    /// Leerer-Umkreis-Eigenschaft innerhalb von Float-Toleranz.
    pub fn triangulate(&self, points: &[Point2D]) -> Vec<Triangle> {
        if points.len() < 3 {
            return Vec::new();
        }

        let Some(bounds) = Bounds2D::from_points_iter(points.iter().copied()) else {
            return Vec::new();
        };

        let super_triangle = self.super_triangle(bounds);
        let mut triangles = vec![super_triangle];

        for &point in points {
            // Dreiecke deren Umkreis den Punkt enthält
            let bad: Vec<usize> = triangles
                .iter()
                .enumerate()
                .filter(|(_, triangle)| triangle.circumcircle_contains(point))
                .map(|(i, _)| i)
                .collect();

            // Randkanten des Lochs: jede Kante die in genau einem bad
            // triangle vorkommt (ungeordneter Vergleich, strukturelle
            // Punktgleichheit)
            let mut boundary: Vec<(Point2D, Point2D)> = Vec::new();
            for &i in &bad {
                for edge in triangles[i].edges() {
                    let shared = bad.iter().any(|&j| {
                        j != i
                            && triangles[j]
                                .edges()
                                .iter()
                                .any(|&other| unordered_edges_equal(edge, other))
                    });
                    if !shared {
                        boundary.push(edge);
                    }
                }
            }

            // Bad triangles entfernen (rückwärts, Indizes bleiben gültig)
            for &i in bad.iter().rev() {
                triangles.remove(i);
            }

            // Loch neu triangulieren: ein Dreieck pro Randkante
            for (a, b) in boundary {
                triangles.push(Triangle::new(a, b, point));
            }

            trace!("inserted point {:?}: {} triangles", point, triangles.len());
        }

        // Dreiecke mit Super-Dreieck-Ecken entfernen
        let super_vertices = super_triangle.vertices();
        triangles.retain(|triangle| {
            !super_vertices
                .iter()
                .any(|&v| triangle.has_vertex_near(v, SUPER_VERTEX_TOLERANCE_SQ))
        });

        debug!(
            "triangulated {} points into {} triangles",
            points.len(),
            triangles.len()
        );
        triangles
    }

    /// Super-Dreieck das alle Punkte großzügig umschließt
    fn super_triangle(&self, bounds: Bounds2D) -> Triangle {
        let dx = bounds.width();
        let dy = bounds.height();
        let margin = self.super_margin;

        Triangle::new(
            Point2D::new(bounds.min.x - dx - margin, bounds.min.y - dy - margin),
            Point2D::new(bounds.max.x + dx + margin, bounds.min.y - dy - margin),
            Point2D::new(
                (bounds.min.x + bounds.max.x) * 0.5,
                bounds.max.y + dy + margin,
            ),
        )
    }
}

impl Default for DelaunayTriangulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Ungeordneter Kantenvergleich über strukturelle Punktgleichheit
fn unordered_edges_equal(e1: (Point2D, Point2D), e2: (Point2D, Point2D)) -> bool {
    (e1.0 == e2.0 && e1.1 == e2.1) || (e1.0 == e2.1 && e1.1 == e2.0)
}

/// Triangulations-Utilities
pub struct TriangulationUtils;

impl TriangulationUtils {
    /// Berechnet die Gesamtfläche einer Triangulation
    pub fn total_area(triangles: &[Triangle]) -> f64 {
        triangles.iter().map(|t| t.area()).sum()
    }

    /// Findet das Dreieck das einen Punkt enthält
    pub fn find_containing_triangle(triangles: &[Triangle], point: Point2D) -> Option<usize> {
        triangles
            .iter()
            .position(|triangle| triangle.contains_point(point))
    }

    /// Eindeutige Kantenliste einer Triangulation (Wireframe)
    pub fn extract_unique_edges(triangles: &[Triangle]) -> Vec<(Point2D, Point2D)> {
        let mut edges: Vec<(Point2D, Point2D)> = Vec::new();

        for triangle in triangles {
            for (a, b) in triangle.edges() {
                // Normalisiere die Richtung, damit geteilte Kanten
                // zusammenfallen
                if lex_cmp(b, a) == Ordering::Less {
                    edges.push((b, a));
                } else {
                    edges.push((a, b));
                }
            }
        }

        edges.sort_by(|l, r| lex_cmp(l.0, r.0).then_with(|| lex_cmp(l.1, r.1)));
        edges.dedup();
        edges
    }
}

fn lex_cmp(a: Point2D, b: Point2D) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}
