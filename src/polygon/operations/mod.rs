// src/polygon/operations/mod.rs
pub mod boolean;
pub mod classification;
pub mod clipping;
pub mod convex_hull;

pub use boolean::{BooleanOperation, BooleanResult, ConvexBoolean};
pub use classification::{
    PointClassifier, PointPosition, min_pairwise_distance, point_in_convex,
};
pub use clipping::{ClipSide, HalfPlaneClipper};
pub use convex_hull::{ConvexHullComputer, convex_hull};
