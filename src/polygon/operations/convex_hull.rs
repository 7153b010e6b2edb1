// src/polygon/operations/convex_hull.rs

use crate::error::*;
use crate::polygon::Polygon;
use crate::types::Point2D;
use crate::utils::simple_geometry::cross;
use log::trace;
use std::cmp::Ordering;

/// Konvexe Hülle über Andrew's Monotone Chain (O(n log n)).
///
/// Standardmäßig werden kollineare Punkte auf einer Hüllenkante NICHT in
/// die Ausgabe übernommen (Pop-Bedingung `<= 0`); `include_collinear`
/// schaltet auf die strikte Bedingung `< 0` um und behält sie.
pub struct ConvexHullComputer {
    include_collinear: bool,
}

impl ConvexHullComputer {
    pub fn new() -> Self {
        Self {
            include_collinear: false,
        }
    }

    /// Setzt ob kollineare Punkte inkludiert werden sollen
    pub fn include_collinear(mut self, include: bool) -> Self {
        self.include_collinear = include;
        self
    }

    /// Berechnet die konvexe Hülle, Vertices gegen den Uhrzeigersinn,
    /// ohne wiederholten Schlusspunkt.
    ///
    /// Weniger als 3 Eingabepunkte werden unverändert zurückgegeben; die
    /// Hüllen-Invarianten gelten dann nicht. Die Eingabe wird nicht
    /// mutiert.
    pub fn compute(&self, points: &[Point2D]) -> Vec<Point2D> {
        if points.len() < 3 {
            return points.to_vec();
        }

        // Sortiere Punkte lexikographisch (erst X, dann Y)
        let mut points = points.to_vec();
        points.sort_by(|a, b| lex_cmp(*a, *b));
        // Exakte Duplikate entfernen; mit strikter Pop-Bedingung würden
        // sie sonst in der Kette überleben
        points.dedup();

        if points.len() < 3 {
            return points;
        }

        let pops = |chain: &[Point2D], p: Point2D| -> bool {
            let turn = cross(chain[chain.len() - 2], chain[chain.len() - 1], p);
            if self.include_collinear {
                turn < 0.0
            } else {
                turn <= 0.0
            }
        };

        // Baue unteren Hull
        let mut lower: Vec<Point2D> = Vec::new();
        for &point in &points {
            while lower.len() >= 2 && pops(&lower, point) {
                lower.pop();
            }
            lower.push(point);
        }

        // Baue oberen Hull
        let mut upper: Vec<Point2D> = Vec::new();
        for &point in points.iter().rev() {
            while upper.len() >= 2 && pops(&upper, point) {
                upper.pop();
            }
            upper.push(point);
        }

        // Entferne die zwischen beiden Ketten duplizierten Endpunkte
        lower.pop();
        upper.pop();
        lower.extend(upper);

        trace!("convex hull: {} hull vertices", lower.len());
        lower
    }

    /// Berechnet die konvexe Hülle als geprüftes Polygon
    pub fn compute_polygon(&self, points: &[Point2D]) -> GeometryResult<Polygon> {
        if points.len() < 3 {
            return Err(GeometryError::InsufficientPoints {
                expected: 3,
                actual: points.len(),
            });
        }

        let hull = self.compute(points);
        if hull.len() < 3 {
            return Err(GeometryError::GeometricFailure {
                operation: "Convex hull collapsed to fewer than 3 points".to_string(),
            });
        }

        Polygon::new(hull)
    }
}

impl Default for ConvexHullComputer {
    fn default() -> Self {
        Self::new()
    }
}

/// Konvexe Hülle mit Standard-Konfiguration
pub fn convex_hull(points: &[Point2D]) -> Vec<Point2D> {
    ConvexHullComputer::new().compute(points)
}

fn lex_cmp(a: Point2D, b: Point2D) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}
