// src/polygon/builders.rs

use crate::error::*;
use crate::polygon::Polygon;
use crate::types::Point2D;
use crate::utils::constants::TAU;

/// Builder für Polygon-Erstellung
pub struct PolygonBuilder {
    vertices: Vec<Point2D>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn add_point(mut self, x: f64, y: f64) -> Self {
        self.vertices.push(Point2D::new(x, y));
        self
    }

    pub fn add_vertex(mut self, vertex: Point2D) -> Self {
        self.vertices.push(vertex);
        self
    }

    pub fn add_vertices(mut self, vertices: impl IntoIterator<Item = Point2D>) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Fügt die vier Ecken eines achsenparallelen Rechtecks hinzu
    pub fn rectangle(mut self, min: Point2D, max: Point2D) -> Self {
        self.vertices.extend(create_rectangle_vertices(min, max));
        self
    }

    /// Fügt eine Kreis-Approximation hinzu
    pub fn circle(mut self, center: Point2D, radius: f64, segments: usize) -> Self {
        self.vertices
            .extend(create_regular_polygon_vertices(center, radius, segments));
        self
    }

    pub fn build(self) -> GeometryResult<Polygon> {
        Polygon::new(self.vertices)
    }
}

impl Default for PolygonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Eckpunkte eines achsenparallelen Rechtecks, gegen den Uhrzeigersinn
pub fn create_rectangle_vertices(min: Point2D, max: Point2D) -> [Point2D; 4] {
    [
        Point2D::new(min.x, min.y),
        Point2D::new(max.x, min.y),
        Point2D::new(max.x, max.y),
        Point2D::new(min.x, max.y),
    ]
}

/// Eckpunkte eines regelmäßigen Polygons, gegen den Uhrzeigersinn
pub fn create_regular_polygon_vertices(
    center: Point2D,
    radius: f64,
    sides: usize,
) -> Vec<Point2D> {
    (0..sides)
        .map(|i| {
            let angle = TAU * i as f64 / sides as f64;
            Point2D::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Achsenparalleles Rechteck als Polygon
pub fn rectangle(min: Point2D, max: Point2D) -> Polygon {
    Polygon::from_ring(create_rectangle_vertices(min, max).to_vec())
}

/// Regelmäßiges Polygon mit mindestens 3 Seiten
pub fn regular_polygon(center: Point2D, radius: f64, sides: usize) -> GeometryResult<Polygon> {
    if sides < 3 {
        return Err(GeometryError::InvalidConfiguration {
            message: format!("Regular polygon needs at least 3 sides, got {}", sides),
        });
    }
    Polygon::new(create_regular_polygon_vertices(center, radius, sides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::properties::{Orientation, PolygonProperties};
    use approx::assert_relative_eq;

    #[test]
    fn test_builder_rectangle() {
        let polygon = PolygonBuilder::new()
            .rectangle(Point2D::new(0.0, 0.0), Point2D::new(4.0, 2.0))
            .build()
            .unwrap();

        assert_eq!(polygon.len(), 4);
        assert_relative_eq!(polygon.area(), 8.0);
        assert_eq!(polygon.orientation(), Orientation::CounterClockwise);
    }

    #[test]
    fn test_regular_polygon() {
        let hexagon = regular_polygon(Point2D::new(0.0, 0.0), 1.0, 6).unwrap();
        assert_eq!(hexagon.len(), 6);
        assert!(hexagon.is_convex());
        assert_eq!(hexagon.orientation(), Orientation::CounterClockwise);

        // Area of a regular hexagon with circumradius 1
        assert_relative_eq!(hexagon.area(), 3.0 * 3.0_f64.sqrt() / 2.0, epsilon = 1e-12);

        assert!(regular_polygon(Point2D::ZERO, 1.0, 2).is_err());
    }

    #[test]
    fn test_builder_circle() {
        let circle = PolygonBuilder::new()
            .circle(Point2D::new(1.0, 1.0), 2.0, 32)
            .build()
            .unwrap();

        assert_eq!(circle.len(), 32);
        assert!(circle.is_convex());
        // 32 segments approximate the disc area from below
        assert!(circle.area() < std::f64::consts::PI * 4.0);
        assert!(circle.area() > std::f64::consts::PI * 4.0 * 0.98);
    }

    #[test]
    fn test_builder_too_few_points() {
        let result = PolygonBuilder::new().add_point(0.0, 0.0).build();
        assert!(result.is_err());
    }
}
