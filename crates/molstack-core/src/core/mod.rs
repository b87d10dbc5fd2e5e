//! # Core Module
//!
//! Stateless building blocks for stack generation: the molecule data model, plain
//! geometry-file I/O, and the coordinate transforms applied to each layer.
//!
//! - **Molecular Representation** ([`models`]) - Centered molecules and the ordered library
//! - **File I/O** ([`io`]) - Reading and writing XYZ geometry files
//! - **Geometry** ([`utils`]) - Centroids, stacking-axis rotation, and layer offsets

pub mod io;
pub mod models;
pub mod utils;
