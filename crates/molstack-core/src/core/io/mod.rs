//! Provides input/output functionality for geometry files.
//!
//! Readers and writers implement the [`traits::GeometryFile`] trait. The
//! [`loader`] module turns a file path into a centered library molecule.

pub mod loader;
pub mod traits;
pub mod xyz;
