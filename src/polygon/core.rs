// src/polygon/core.rs

use crate::error::*;
use crate::polygon::properties::PolygonProperties;
use crate::types::{Bounds2D, Point2D};
use std::fmt;

/// Polygon als implizit geschlossener Ring.
///
/// Die Vertices werden OHNE wiederholten Schlusspunkt gespeichert; die
/// Kante vom letzten zum ersten Vertex ist implizit. Ein vom Aufrufer
/// mitgelieferter Schlusspunkt (erster == letzter, strukturell) wird beim
/// Konstruieren entfernt. Flächen-tragende Operationen erwarten
/// Gegen-Uhrzeigersinn-Orientierung.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Erstellt ein Polygon mit mindestens 3 Vertices
    pub fn new(vertices: Vec<Point2D>) -> GeometryResult<Self> {
        let polygon = Self::from_ring(vertices);
        if polygon.len() < 3 {
            return Err(GeometryError::InsufficientPoints {
                expected: 3,
                actual: polygon.len(),
            });
        }
        Ok(polygon)
    }

    /// Erstellt ein Polygon ohne Mindest-Vertex-Prüfung.
    ///
    /// Clip-Ausgaben können degeneriert sein (weniger als 3 Vertices);
    /// dieser Konstruktor ist total und normalisiert nur den
    /// wiederholten Schlusspunkt weg.
    pub fn from_ring(mut vertices: Vec<Point2D>) -> Self {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self { vertices }
    }

    /// Leeres Polygon
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Zugriff auf Vertices
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Anzahl der Vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Ist das Polygon leer?
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Trägt das Polygon Fläche (mindestens 3 Vertices)?
    pub fn is_area_bearing(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Iteriert über alle gerichteten Kanten, inklusive der impliziten
    /// Schlusskante vom letzten zum ersten Vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Bounding Box berechnen
    pub fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::from_points_iter(self.vertices.iter().copied())
    }

    /// Mittelwert der Vertices (nicht der geometrische Schwerpunkt)
    pub fn vertex_centroid(&self) -> Option<Point2D> {
        if self.vertices.is_empty() {
            return None;
        }

        let sum = self.vertices.iter().fold(Point2D::ZERO, |acc, v| acc + *v);
        Some(sum / self.vertices.len() as f64)
    }

    /// Polygon umkehren (Vertices in umgekehrter Reihenfolge)
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    /// Erstellt eine Kopie mit umgekehrten Vertices
    pub fn reversed(&self) -> Self {
        let mut copy = self.clone();
        copy.reverse();
        copy
    }

    /// Normalisiert auf Gegen-Uhrzeigersinn-Orientierung
    pub fn ensure_ccw(&mut self) {
        if self.is_area_bearing() && self.signed_area() < 0.0 {
            self.reverse();
        }
    }
}

/// Display-Implementierung für Debugging
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({} vertices)", self.vertices.len())
    }
}

/// Konvertierung von Vec<Point2D>
impl TryFrom<Vec<Point2D>> for Polygon {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Point2D>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

/// Konvertierung zu Vec<Point2D>
impl From<Polygon> for Vec<Point2D> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

impl IntoIterator for Polygon {
    type Item = Point2D;
    type IntoIter = std::vec::IntoIter<Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
