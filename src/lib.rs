// src/lib.rs

//! Planarer 2D-Geometrie-Kern: konvexe Hülle, Punkt-Klassifikation
//! (auch für Polygone mit Löchern), Halbebenen-Clipping mit konvexen
//! Boolean-Operationen und inkrementelle Delaunay-Triangulation.
//!
//! Alle Operationen sind reine Funktionen über Werte des Aufrufers:
//! kein globaler Zustand, keine Referenzen über den Aufruf hinaus.
//! Entartete Eingaben degradieren zu leeren oder durchgereichten
//! Ergebnissen statt zu Fehlern.

pub mod error;
pub mod polygon;
pub mod triangulation;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{GeometryError, GeometryResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{GeometryError, GeometryResult},
        polygon::{Orientation, Polygon, PolygonProperties, builders::*, operations::*},
        triangulation::{DelaunayTriangulator, TriangulationUtils},
        types::*,
    };
}
