// src/polygon/operations/boolean.rs

use crate::polygon::operations::clipping::{ClipSide, HalfPlaneClipper};
use crate::polygon::{Polygon, PolygonProperties};
use log::debug;

/// Boolean-Operationstypen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOperation {
    /// Intersection (A ∩ B)
    Intersection,
    /// Difference (A \ B)
    Difference,
    /// Union (A ∪ B), als Zerlegung
    Union,
}

/// Ergebnis einer Boolean-Operation.
///
/// Eine Vereinigung (und eine Differenz mit mehreren Teilen) wird als
/// Zerlegung in konvexe Teile geliefert, nie als verschmolzener Kontur.
/// Die getrennten Varianten verhindern dass ein mehrteiliges Ergebnis
/// versehentlich als ein einzelner Kontur behandelt wird.
#[derive(Debug, Clone)]
pub enum BooleanResult {
    Empty,
    Region(Polygon),
    Decomposition(Vec<Polygon>),
}

impl BooleanResult {
    /// Normalisiert eine Teil-Liste: 0 Teile -> Empty, 1 -> Region,
    /// mehrere -> Decomposition
    fn from_parts(mut parts: Vec<Polygon>) -> Self {
        match parts.len() {
            0 => BooleanResult::Empty,
            1 => BooleanResult::Region(parts.remove(0)),
            _ => BooleanResult::Decomposition(parts),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BooleanResult::Empty)
    }

    /// Anzahl der Teil-Polygone
    pub fn part_count(&self) -> usize {
        match self {
            BooleanResult::Empty => 0,
            BooleanResult::Region(_) => 1,
            BooleanResult::Decomposition(parts) => parts.len(),
        }
    }

    /// Gesamtfläche aller Teile
    pub fn total_area(&self) -> f64 {
        match self {
            BooleanResult::Empty => 0.0,
            BooleanResult::Region(polygon) => polygon.area(),
            BooleanResult::Decomposition(parts) => parts.iter().map(|p| p.area()).sum(),
        }
    }

    /// Zerlegt das Ergebnis in seine Teil-Polygone
    pub fn into_polygons(self) -> Vec<Polygon> {
        match self {
            BooleanResult::Empty => Vec::new(),
            BooleanResult::Region(polygon) => vec![polygon],
            BooleanResult::Decomposition(parts) => parts,
        }
    }
}

/// Boolean-Operationen für konvexe Polygone, aufgebaut aus wiederholtem
/// Halbebenen-Clipping.
///
/// Beide Eingaben müssen einfache konvexe Polygone gegen den
/// Uhrzeigersinn sein; das Verhalten für konkave oder falsch orientierte
/// Eingaben ist nicht spezifiziert.
pub struct ConvexBoolean {
    clipper: HalfPlaneClipper,
}

impl ConvexBoolean {
    pub fn new() -> Self {
        Self {
            clipper: HalfPlaneClipper::new(),
        }
    }

    /// Setzt die Toleranz des Seiten-Tests im Clipper
    pub fn with_side_tolerance(mut self, tolerance: f64) -> Self {
        self.clipper = HalfPlaneClipper::new().with_side_tolerance(tolerance);
        self
    }

    /// Führt eine Boolean-Operation durch
    pub fn execute(
        &self,
        polygon_a: &Polygon,
        polygon_b: &Polygon,
        operation: BooleanOperation,
    ) -> BooleanResult {
        match operation {
            BooleanOperation::Intersection => self.intersection(polygon_a, polygon_b),
            BooleanOperation::Difference => self.difference(polygon_a, polygon_b),
            BooleanOperation::Union => self.union(polygon_a, polygon_b),
        }
    }

    /// A ∩ B: clippt A nacheinander gegen jede gerichtete Kante von B
    /// und behält die linke Seite (das Innere, B ist CCW).
    pub fn intersection(&self, polygon_a: &Polygon, polygon_b: &Polygon) -> BooleanResult {
        if !polygon_a.is_area_bearing() || !polygon_b.is_area_bearing() {
            return BooleanResult::Empty;
        }

        let mut current = polygon_a.clone();
        for (a, b) in polygon_b.edges() {
            if current.is_empty() {
                break;
            }
            current = self.clipper.clip(&current, a, b, ClipSide::Left);
        }

        if current.is_area_bearing() {
            BooleanResult::Region(current)
        } else {
            BooleanResult::Empty
        }
    }

    /// A \ B über kantenweises Schälen: pro gerichteter Kante von B wird
    /// die rechte Seite des verbleibenden Rests als konvexer Teil
    /// abgetrennt, die linke Seite weitergereicht. Die Teile überdecken
    /// zusammen genau A minus A ∩ B.
    ///
    /// Leeres A ergibt Empty; leeres (oder nicht flächen-tragendes) B
    /// lässt A unverändert.
    pub fn difference(&self, polygon_a: &Polygon, polygon_b: &Polygon) -> BooleanResult {
        if polygon_a.is_empty() {
            return BooleanResult::Empty;
        }
        if !polygon_b.is_area_bearing() {
            return BooleanResult::Region(polygon_a.clone());
        }

        let mut parts = Vec::new();
        let mut remainder = polygon_a.clone();

        for (a, b) in polygon_b.edges() {
            if remainder.is_empty() {
                break;
            }

            let outside = self.clipper.clip(&remainder, a, b, ClipSide::Right);
            if outside.is_area_bearing() {
                parts.push(outside);
            }
            remainder = self.clipper.clip(&remainder, a, b, ClipSide::Left);
        }

        debug!("difference produced {} convex parts", parts.len());
        BooleanResult::from_parts(parts)
    }

    /// A ∪ B: KEIN verschmolzener Kontur, sondern die nicht-leere
    /// Teilmenge von {A\B, B\A, A∩B} als Zerlegung. Aufrufer die eine
    /// einzelne Region brauchen setzen die Teile selbst zusammen.
    pub fn union(&self, polygon_a: &Polygon, polygon_b: &Polygon) -> BooleanResult {
        let mut parts = self.difference(polygon_a, polygon_b).into_polygons();
        parts.extend(self.difference(polygon_b, polygon_a).into_polygons());
        parts.extend(self.intersection(polygon_a, polygon_b).into_polygons());

        debug!("union decomposition has {} parts", parts.len());
        BooleanResult::from_parts(parts)
    }
}

impl Default for ConvexBoolean {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::builders::{rectangle, regular_polygon};
    use crate::polygon::operations::classification::point_in_convex;
    use crate::types::Point2D;
    use approx::assert_relative_eq;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn square_a() -> Polygon {
        rectangle(Point2D::new(0.0, 0.0), Point2D::new(4.0, 4.0))
    }

    fn square_b() -> Polygon {
        rectangle(Point2D::new(2.0, 2.0), Point2D::new(6.0, 6.0))
    }

    #[test]
    fn test_intersection_of_overlapping_squares() {
        init_logger();
        let result = ConvexBoolean::new().intersection(&square_a(), &square_b());

        let BooleanResult::Region(region) = result else {
            panic!("expected a single region");
        };
        assert_relative_eq!(region.area(), 4.0, epsilon = 1e-9);
        assert!(region.is_convex());

        // [2,4] x [2,4]: contained in both inputs
        for &v in region.vertices() {
            assert!(point_in_convex(&square_a(), v));
            assert!(point_in_convex(&square_b(), v));
            assert!(v.x >= 2.0 - 1e-9 && v.x <= 4.0 + 1e-9);
            assert!(v.y >= 2.0 - 1e-9 && v.y <= 4.0 + 1e-9);
        }
    }

    #[test]
    fn test_difference_is_l_shaped_decomposition() {
        init_logger();
        let result = ConvexBoolean::new().difference(&square_a(), &square_b());

        // 16 - 4 = 12, split into convex parts
        assert_relative_eq!(result.total_area(), 12.0, epsilon = 1e-9);
        assert!(result.part_count() >= 2);

        for part in result.into_polygons() {
            assert!(part.is_convex());
            // No part reaches into the interior of B
            let Some(centroid) = part.geometric_centroid() else {
                panic!("part without centroid");
            };
            assert!(!point_in_convex(&square_b(), centroid) || part.area() < 1e-9);
        }
    }

    #[test]
    fn test_difference_with_empty_operands() {
        let boolean = ConvexBoolean::new();

        let b_empty = boolean.difference(&square_a(), &Polygon::empty());
        let BooleanResult::Region(region) = b_empty else {
            panic!("A \\ empty must be A unchanged");
        };
        assert_eq!(region.vertices(), square_a().vertices());

        assert!(boolean.difference(&Polygon::empty(), &square_b()).is_empty());
    }

    #[test]
    fn test_difference_of_disjoint_squares() {
        let far = rectangle(Point2D::new(10.0, 10.0), Point2D::new(12.0, 12.0));
        let result = ConvexBoolean::new().difference(&square_a(), &far);

        use crate::utils::comparison;
        assert!(comparison::nearly_equal_eps(result.total_area(), 16.0, 1e-9));
    }

    #[test]
    fn test_intersection_empty_cases() {
        let boolean = ConvexBoolean::new();
        assert!(boolean.intersection(&square_a(), &Polygon::empty()).is_empty());
        assert!(boolean.intersection(&Polygon::empty(), &square_b()).is_empty());

        let far = rectangle(Point2D::new(10.0, 10.0), Point2D::new(12.0, 12.0));
        assert!(boolean.intersection(&square_a(), &far).is_empty());
    }

    #[test]
    fn test_union_decomposition() {
        init_logger();
        let result = ConvexBoolean::new().union(&square_a(), &square_b());

        // |A| + |B| - |A ∩ B| = 16 + 16 - 4
        assert_relative_eq!(result.total_area(), 28.0, epsilon = 1e-9);
        assert!(result.part_count() >= 3);
    }

    #[test]
    fn test_union_with_one_empty_operand() {
        let result = ConvexBoolean::new().union(&square_a(), &Polygon::empty());
        let BooleanResult::Region(region) = result else {
            panic!("union with empty must collapse to the other operand");
        };
        assert_eq!(region.vertices(), square_a().vertices());
    }

    #[test]
    fn test_difference_plus_intersection_reconstructs_area() {
        // Rotated convex clip polygon instead of an axis-aligned one
        let hexagon = regular_polygon(Point2D::new(3.0, 2.0), 2.0, 6).unwrap();
        let boolean = ConvexBoolean::new();

        let difference = boolean.difference(&square_a(), &hexagon);
        let intersection = boolean.intersection(&square_a(), &hexagon);

        assert_relative_eq!(
            difference.total_area() + intersection.total_area(),
            square_a().area(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_execute_dispatch() {
        let boolean = ConvexBoolean::new();
        let via_execute =
            boolean.execute(&square_a(), &square_b(), BooleanOperation::Intersection);
        assert_relative_eq!(via_execute.total_area(), 4.0, epsilon = 1e-9);

        let difference = boolean.execute(&square_a(), &square_b(), BooleanOperation::Difference);
        assert_relative_eq!(difference.total_area(), 12.0, epsilon = 1e-9);

        let union = boolean.execute(&square_a(), &square_b(), BooleanOperation::Union);
        assert_relative_eq!(union.total_area(), 28.0, epsilon = 1e-9);
    }
}
