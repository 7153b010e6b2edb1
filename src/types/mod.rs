// src/types/mod.rs
pub mod bounds;
pub mod triangle;

pub use bounds::*;
pub use triangle::*;

// Re-export häufig verwendete externe Typen
pub use glam::DVec2;

// Einheitliche Typen für das gesamte Modul. Subtraktion, Skalarprodukt,
// Kreuzprodukt (`perp_dot`) und quadrierter Abstand kommen von glam.
pub type Point2D = DVec2;
