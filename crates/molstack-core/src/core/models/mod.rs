//! # Core Models Module
//!
//! - [`molecule`] - A named, centroid-centered list of labelled atoms
//! - [`library`] - The ordered collection of molecules available to the generator

pub mod library;
pub mod molecule;
