//! # molstack
//!
//! Generates layered molecular stack geometries. Given a library of small
//! molecules, every assignment of molecules to layers is combined with every
//! assignment of in-plane rotation angles, and each resulting stack is written as
//! its own XYZ file.
//!
//! ## Layers
//!
//! - **[`core`]: The Foundation.** Centered molecule models, XYZ file I/O, and the
//!   pure geometric transforms (stacking-axis rotation, layer translation).
//!
//! - **[`engine`]: The Generator.** Stack parameters, the combinatorial
//!   enumeration, per-pair assembly, output naming and writing, and the hooks for
//!   progress reporting and confirmation of oversized runs.
//!
//! - **[`workflows`]: The Public API.** Loading a library from input files and
//!   running a complete generation pass.

pub mod core;
pub mod engine;
pub mod workflows;
