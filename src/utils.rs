// src/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-9;
    pub const TAU: f64 = std::f64::consts::TAU;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON
    }
}

/// Geometrische Hilfsfunktionen (einfach, ohne komplexe Strukturen)
pub mod simple_geometry {
    use crate::types::Point2D;

    /// Kreuzprodukt (z-Komponente) der gerichteten Kanten a->b und a->c.
    /// Positiv für eine Links-Kurve, negativ für eine Rechts-Kurve.
    pub fn cross(a: Point2D, b: Point2D, c: Point2D) -> f64 {
        (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
    }

    /// Prüft ob zwei Punkte innerhalb einer Toleranz zusammenfallen
    /// (quadrierter Abstand). Strukturelle Gleichheit ist `a == b`.
    pub fn points_coincident(a: Point2D, b: Point2D, tolerance: f64) -> bool {
        a.distance_squared(b) < tolerance * tolerance
    }

    /// Abstand von einem Punkt zu einem Segment a-b.
    /// Die Projektion wird auf die Segment-Endpunkte geklemmt.
    pub fn distance_point_to_segment(p: Point2D, a: Point2D, b: Point2D) -> f64 {
        let d = b - a;
        let len_sq = d.length_squared();
        if len_sq == 0.0 {
            return p.distance(a); // Segment ist ein Punkt
        }
        let t = ((p - a).dot(d) / len_sq).clamp(0.0, 1.0);
        p.distance(a + d * t)
    }

    /// Windungszahl eines geschlossenen Konturs um einen Punkt.
    /// Null bedeutet: der Punkt liegt außerhalb.
    pub fn winding_number(p: Point2D, contour: &[Point2D]) -> i32 {
        let n = contour.len();
        let mut wn = 0;
        for i in 0..n {
            let pi = contour[i];
            let pj = contour[(i + 1) % n];
            if pi.y <= p.y {
                if pj.y > p.y && cross(pi, pj, p) > 0.0 {
                    wn += 1;
                }
            } else if pj.y <= p.y && cross(pi, pj, p) < 0.0 {
                wn -= 1;
            }
        }
        wn
    }
}

/// Zufalls-Hilfsfunktionen für Punktmengen
pub mod random {
    use crate::types::Point2D;
    use crate::utils::constants::TAU;
    use rand::Rng;

    /// Generiert zufälligen Punkt in einem Rechteck
    pub fn random_point_in_rect(min: Point2D, max: Point2D, rng: &mut impl Rng) -> Point2D {
        Point2D::new(
            rng.random_range(min.x..=max.x),
            rng.random_range(min.y..=max.y),
        )
    }

    /// Generiert zufälligen Punkt in einem Kreis
    pub fn random_point_in_circle(center: Point2D, radius: f64, rng: &mut impl Rng) -> Point2D {
        let angle = rng.random_range(0.0..TAU);
        let r = radius * rng.random::<f64>().sqrt(); // Gleichmäßige Verteilung
        Point2D::new(center.x + r * angle.cos(), center.y + r * angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::simple_geometry::*;
    use crate::types::Point2D;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross_sign() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(1.0, 0.0);
        assert!(cross(a, b, Point2D::new(0.5, 1.0)) > 0.0); // left turn
        assert!(cross(a, b, Point2D::new(0.5, -1.0)) < 0.0); // right turn
        assert_eq!(cross(a, b, Point2D::new(2.0, 0.0)), 0.0); // collinear
    }

    #[test]
    fn test_distance_point_to_segment_clamps() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(4.0, 0.0);

        // Perpendicular foot inside the segment
        assert_relative_eq!(
            distance_point_to_segment(Point2D::new(2.0, 3.0), a, b),
            3.0
        );
        // Beyond the endpoint: distance to the endpoint, not the line
        assert_relative_eq!(
            distance_point_to_segment(Point2D::new(7.0, 4.0), a, b),
            5.0
        );
        // Degenerate segment
        assert_relative_eq!(
            distance_point_to_segment(Point2D::new(3.0, 4.0), a, a),
            5.0
        );
    }

    #[test]
    fn test_winding_number_square() {
        let square = [
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 4.0),
            Point2D::new(0.0, 4.0),
        ];
        assert_eq!(winding_number(Point2D::new(2.0, 2.0), &square), 1);
        assert_eq!(winding_number(Point2D::new(5.0, 5.0), &square), 0);

        let reversed: Vec<_> = square.iter().rev().copied().collect();
        assert_eq!(winding_number(Point2D::new(2.0, 2.0), &reversed), -1);
    }
}
