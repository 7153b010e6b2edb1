// src/types/triangle.rs

use crate::types::Point2D;

/// Determinanten-Schwelle unter der ein Dreieck als kollinear gilt
const COLLINEAR_EPSILON: f64 = 1e-10;
/// Ersatzradius für den Umkreis eines (nahezu) kollinearen Dreiecks
const DEGENERATE_RADIUS: f64 = 1e10;

/// Dreieck aus drei Punkten.
///
/// Das abgeleitete `PartialEq` vergleicht die Vertices positionsweise:
/// zwei Dreiecke mit denselben Vertices in anderer Reihenfolge sind NICHT
/// gleich. Genau diese strukturelle Gleichheit verwendet die
/// Triangulations-Buchführung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
}

/// Umkreis eines Dreiecks. Abgeleiteter, kurzlebiger Wert — wird bei
/// Bedarf berechnet und nie gespeichert.
#[derive(Debug, Clone, Copy)]
pub struct Circumcircle {
    pub center: Point2D,
    pub radius: f64,
}

impl Circumcircle {
    /// Prüft ob ein Punkt strikt im Umkreis liegt (quadrierte Abstände)
    pub fn contains(&self, point: Point2D) -> bool {
        self.center.distance_squared(point) < self.radius * self.radius
    }
}

impl Triangle {
    pub fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Self { a, b, c }
    }

    /// Berechnet die Fläche des Dreiecks
    pub fn area(&self) -> f64 {
        0.5 * ((self.b.x - self.a.x) * (self.c.y - self.a.y)
            - (self.c.x - self.a.x) * (self.b.y - self.a.y))
            .abs()
    }

    /// Schwerpunkt des Dreiecks
    pub fn centroid(&self) -> Point2D {
        (self.a + self.b + self.c) / 3.0
    }

    /// Die drei gerichteten Kanten des Dreiecks
    pub fn edges(&self) -> [(Point2D, Point2D); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Die drei Vertices als Array
    pub fn vertices(&self) -> [Point2D; 3] {
        [self.a, self.b, self.c]
    }

    /// Berechnet den Umkreis über die Determinanten-Formel.
    ///
    /// Bei (nahezu) kollinearen Vertices wird ein Ersatzkreis um den
    /// Schwerpunkt mit riesigem Radius geliefert: das Dreieck testet dann
    /// immer als "bad" und wird neu trianguliert statt durch Null zu
    /// teilen.
    pub fn circumcircle(&self) -> Circumcircle {
        let (a, b, c) = (self.a, self.b, self.c);
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));

        if d.abs() < COLLINEAR_EPSILON {
            return Circumcircle {
                center: self.centroid(),
                radius: DEGENERATE_RADIUS,
            };
        }

        let a_sq = a.x * a.x + a.y * a.y;
        let b_sq = b.x * b.x + b.y * b.y;
        let c_sq = c.x * c.x + c.y * c.y;

        let ux = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
        let uy = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;

        let center = Point2D::new(ux, uy);
        Circumcircle {
            center,
            radius: center.distance(a),
        }
    }

    /// Prüft ob ein Punkt strikt im Umkreis des Dreiecks liegt
    pub fn circumcircle_contains(&self, point: Point2D) -> bool {
        self.circumcircle().contains(point)
    }

    /// Prüft ob ein Punkt im Dreieck liegt (Vorzeichen-Test)
    pub fn contains_point(&self, point: Point2D) -> bool {
        let sign = |p1: Point2D, p2: Point2D, p3: Point2D| -> f64 {
            (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
        };

        let d1 = sign(point, self.a, self.b);
        let d2 = sign(point, self.b, self.c);
        let d3 = sign(point, self.c, self.a);

        let has_neg = (d1 < 0.0) || (d2 < 0.0) || (d3 < 0.0);
        let has_pos = (d1 > 0.0) || (d2 > 0.0) || (d3 > 0.0);

        !(has_neg && has_pos)
    }

    /// Prüft ob einer der Vertices innerhalb der Toleranz (quadrierter
    /// Abstand) mit dem gegebenen Punkt zusammenfällt. Approximative
    /// Koinzidenz, keine strukturelle Gleichheit.
    pub fn has_vertex_near(&self, point: Point2D, tolerance_sq: f64) -> bool {
        self.a.distance_squared(point) < tolerance_sq
            || self.b.distance_squared(point) < tolerance_sq
            || self.c.distance_squared(point) < tolerance_sq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_area_and_centroid() {
        let triangle = Triangle::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.5, 1.0),
        );

        assert_relative_eq!(triangle.area(), 0.5);
        assert_relative_eq!(triangle.centroid().x, 0.5);
    }

    #[test]
    fn test_contains_point() {
        let triangle = Triangle::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.5, 1.0),
        );

        assert!(triangle.contains_point(Point2D::new(0.5, 0.3)));
        assert!(!triangle.contains_point(Point2D::new(0.0, 1.0)));
    }

    #[test]
    fn test_circumcircle_right_triangle() {
        // Right triangle: circumcenter is the hypotenuse midpoint
        let triangle = Triangle::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(0.0, 3.0),
        );

        let circle = triangle.circumcircle();
        assert_relative_eq!(circle.center.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(circle.center.y, 1.5, epsilon = 1e-12);
        assert_relative_eq!(circle.radius, 2.5, epsilon = 1e-12);

        assert!(circle.contains(Point2D::new(1.0, 1.0)));
        assert!(!circle.contains(Point2D::new(5.0, 5.0)));
    }

    #[test]
    fn test_degenerate_circumcircle_is_always_bad() {
        // Collinear vertices: fallback circle must swallow everything
        let triangle = Triangle::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 2.0),
        );

        let circle = triangle.circumcircle();
        assert!(circle.radius >= 1e10);
        assert!(circle.contains(Point2D::new(1000.0, -1000.0)));
    }

    #[test]
    fn test_positional_equality() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(1.0, 0.0);
        let c = Point2D::new(0.0, 1.0);

        assert_eq!(Triangle::new(a, b, c), Triangle::new(a, b, c));
        // Same vertex set, rotated order: structurally different
        assert_ne!(Triangle::new(a, b, c), Triangle::new(b, c, a));
    }
}
