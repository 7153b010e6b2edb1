// src/types/bounds.rs

use crate::error::*;
use crate::types::Point2D;
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> GeometryResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(GeometryError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box aus zwei beliebigen Punkten
    pub fn from_points(p1: Point2D, p2: Point2D) -> Self {
        Self {
            min: Point2D::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point2D::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Größe der Bounding Box
    pub fn size(&self) -> Point2D {
        Point2D::new(self.width(), self.height())
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point2D {
        (self.min + self.max) * 0.5
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Erweitert die Bounding Box um einen Margin
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: Point2D::new(self.min.x - margin, self.min.y - margin),
            max: Point2D::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Erzeugt die vier Eckpunkte der Bounding Box
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,                             // unten links
            Point2D::new(self.max.x, self.min.y), // unten rechts
            self.max,                             // oben rechts
            Point2D::new(self.min.x, self.max.y), // oben links
        ]
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds2D({:?} to {:?})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_iter() {
        let points = [
            Point2D::new(1.0, 5.0),
            Point2D::new(-2.0, 3.0),
            Point2D::new(4.0, -1.0),
        ];
        let bounds = Bounds2D::from_points_iter(points).unwrap();

        assert_eq!(bounds.min, Point2D::new(-2.0, -1.0));
        assert_eq!(bounds.max, Point2D::new(4.0, 5.0));
        assert!(bounds.contains_point(Point2D::new(0.0, 0.0)));
        assert!(!bounds.contains_point(Point2D::new(5.0, 0.0)));
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let result = Bounds2D::new(Point2D::new(1.0, 0.0), Point2D::new(0.0, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_expand() {
        let bounds = Bounds2D::from_points(Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0));
        let expanded = bounds.expand(1.0);

        assert_eq!(expanded.min, Point2D::new(-1.0, -1.0));
        assert_eq!(expanded.max, Point2D::new(3.0, 3.0));
        assert_eq!(expanded.center(), bounds.center());
    }
}
