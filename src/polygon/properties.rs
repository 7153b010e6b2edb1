// src/polygon/properties.rs

use crate::polygon::Polygon;
use crate::types::Point2D;
use crate::utils::{comparison, constants, simple_geometry};

/// Trait für Polygon-Eigenschaften
pub trait PolygonProperties {
    /// Vorzeichenbehaftete Fläche (Shoelace-Formel).
    /// Positiv für Gegen-Uhrzeigersinn, negativ für Uhrzeigersinn.
    fn signed_area(&self) -> f64;

    /// Berechnet die Fläche des Polygons
    fn area(&self) -> f64;

    /// Berechnet den Umfang des Polygons
    fn perimeter(&self) -> f64;

    /// Prüft die Orientierung (im Uhrzeigersinn oder gegen)
    fn orientation(&self) -> Orientation;

    /// Prüft ob das Polygon konvex ist
    fn is_convex(&self) -> bool;

    /// Prüft ob ein Punkt innerhalb des Polygons liegt (Ray-Casting,
    /// Paritätstest — ohne Rand-Toleranz)
    fn contains_point(&self, point: Point2D) -> bool;

    /// Berechnet den Schwerpunkt (geometrisch korrekt für Polygone)
    fn geometric_centroid(&self) -> Option<Point2D>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Degenerate,
}

impl PolygonProperties for Polygon {
    fn signed_area(&self) -> f64 {
        let vertices = self.vertices();
        let n = vertices.len();
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += vertices[i].x * vertices[j].y;
            area -= vertices[j].x * vertices[i].y;
        }

        area * 0.5
    }

    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn perimeter(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(a, b)| a.distance(b)).sum()
    }

    fn orientation(&self) -> Orientation {
        let signed = self.signed_area();
        if comparison::nearly_zero(signed) {
            Orientation::Degenerate
        } else if signed > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    fn is_convex(&self) -> bool {
        let vertices = self.vertices();
        let n = vertices.len();
        if n < 3 {
            return false;
        }

        let mut sign = None;
        for i in 0..n {
            let p1 = vertices[i];
            let p2 = vertices[(i + 1) % n];
            let p3 = vertices[(i + 2) % n];

            let cross = simple_geometry::cross(p1, p2, p3);
            if cross.abs() > constants::EPSILON {
                let current_sign = cross > 0.0;
                match sign {
                    None => sign = Some(current_sign),
                    Some(s) if s != current_sign => return false,
                    _ => {}
                }
            }
        }

        true
    }

    fn contains_point(&self, point: Point2D) -> bool {
        let vertices = self.vertices();
        let n = vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = vertices[i];
            let vj = vertices[j];

            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    fn geometric_centroid(&self) -> Option<Point2D> {
        let vertices = self.vertices();
        let n = vertices.len();
        if n < 3 {
            return self.vertex_centroid();
        }

        let signed = self.signed_area();
        if comparison::nearly_zero(signed) {
            // Entartetes Polygon: auf Vertex-Mittelwert zurückfallen
            return self.vertex_centroid();
        }

        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let w = vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
            cx += (vertices[i].x + vertices[j].x) * w;
            cy += (vertices[i].y + vertices[j].y) * w;
        }

        let factor = 1.0 / (6.0 * signed);
        Some(Point2D::new(cx * factor, cy * factor))
    }
}
