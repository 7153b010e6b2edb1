// src/polygon/operations/classification.rs

use crate::polygon::{Polygon, PolygonProperties};
use crate::types::Point2D;
use crate::utils::simple_geometry::{
    cross, distance_point_to_segment, points_coincident, winding_number,
};

/// Toleranz für exakte Koinzidenz mit Vertex oder Kante
const COINCIDENCE_EPSILON: f64 = 1e-9;
/// Slack für den Kanten-Test konvexer Polygone
const CONVEX_EDGE_EPSILON: f64 = 1e-12;

/// Lage eines Punktes relativ zu einem Polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPosition {
    Inside,
    Outside,
    OnBoundary,
    NearBoundary,
}

/// Klassifiziert Punkte gegen Polygone (optional mit Löchern).
///
/// `tolerance` ist das vom Aufrufer gelieferte Delta für den
/// Rand-Nähe-Test. Übliche Ableitung: ein Zehntel des minimalen
/// Punktabstands der Polygon-Vertices (siehe [`min_pairwise_distance`]) —
/// das ist eine Entscheidung des Aufrufers, nicht dieser Routine.
pub struct PointClassifier {
    tolerance: f64,
    vertex_coincidence_is_boundary: bool,
}

impl PointClassifier {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            vertex_coincidence_is_boundary: false,
        }
    }

    /// Setzt ob exakte Koinzidenz mit Vertex/Kante als `OnBoundary`
    /// gemeldet wird statt in `NearBoundary` aufzugehen
    pub fn vertex_coincidence_is_boundary(mut self, enabled: bool) -> Self {
        self.vertex_coincidence_is_boundary = enabled;
        self
    }

    /// Klassifiziert einen Punkt gegen einen einzelnen Kontur
    /// (Ray-Casting-Paritätstest für das Innere).
    ///
    /// Der Rand-Test läuft VOR dem Innen/Außen-Test: Rand-Nähe hat
    /// Priorität.
    pub fn classify(&self, point: Point2D, polygon: &Polygon) -> PointPosition {
        if polygon.is_empty() {
            return PointPosition::Outside;
        }

        if let Some(position) = self.boundary_check(point, polygon) {
            return position;
        }

        if polygon.contains_point(point) {
            PointPosition::Inside
        } else {
            PointPosition::Outside
        }
    }

    /// Klassifiziert einen Punkt gegen ein Polygon mit Löchern.
    ///
    /// `contours[0]` ist der äußere Kontur, `contours[1..]` sind Löcher
    /// (jeweils unabhängig gewunden; das Vorzeichen der Windung spielt
    /// keine Rolle, getestet wird nur Windungszahl ungleich Null).
    pub fn classify_with_holes(&self, point: Point2D, contours: &[Polygon]) -> PointPosition {
        if contours.is_empty() {
            return PointPosition::Outside;
        }

        // Rand-Test über alle Konturen zuerst
        for contour in contours {
            if let Some(position) = self.boundary_check(point, contour) {
                return position;
            }
        }

        // Äußerer Kontur: Windungszahl Null bedeutet außerhalb
        if winding_number(point, contours[0].vertices()) == 0 {
            return PointPosition::Outside;
        }

        // In einem Loch gilt als außerhalb
        for hole in &contours[1..] {
            if winding_number(point, hole.vertices()) != 0 {
                return PointPosition::Outside;
            }
        }

        PointPosition::Inside
    }

    fn boundary_check(&self, point: Point2D, contour: &Polygon) -> Option<PointPosition> {
        for (a, b) in contour.edges() {
            if self.vertex_coincidence_is_boundary {
                if points_coincident(point, a, COINCIDENCE_EPSILON) {
                    return Some(PointPosition::OnBoundary);
                }
                if distance_point_to_segment(point, a, b) < COINCIDENCE_EPSILON {
                    return Some(PointPosition::OnBoundary);
                }
            }
            if distance_point_to_segment(point, a, b) < self.tolerance {
                return Some(PointPosition::NearBoundary);
            }
        }
        None
    }
}

/// Schneller Mitgliedstest für konvexe Polygone gegen den Uhrzeigersinn:
/// der Punkt liegt innen oder auf dem Rand wenn er links von (oder auf)
/// jeder gerichteten Kante liegt.
pub fn point_in_convex(polygon: &Polygon, point: Point2D) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    polygon
        .edges()
        .all(|(a, b)| cross(a, b, point) >= -CONVEX_EDGE_EPSILON)
}

/// Minimaler paarweiser Abstand einer Punktmenge (O(n²)).
/// `None` bei weniger als zwei Punkten.
pub fn min_pairwise_distance(points: &[Point2D]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }

    let mut min_sq = f64::INFINITY;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            min_sq = min_sq.min(points[i].distance_squared(points[j]));
        }
    }
    Some(min_sq.sqrt())
}
