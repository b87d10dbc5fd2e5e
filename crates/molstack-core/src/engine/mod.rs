//! # Engine Module
//!
//! The generation machinery: stack parameters, the combinatorial enumeration of
//! molecule orders and rotation sets, per-pair geometry assembly, artifact naming
//! and writing, and the progress and confirmation hooks used by front ends.
//!
//! - [`config`] - Validated stack parameters
//! - [`combinations`] - Rotation angle sampling and tuple enumeration
//! - [`assembly`] - Rotate, translate, and concatenate one stack
//! - [`layout`] - Output directory and file naming
//! - [`output`] - Writing artifacts to disk
//! - [`guard`] - Confirmation for oversized runs
//! - [`progress`] - Progress event reporting

pub mod assembly;
pub mod combinations;
pub mod config;
pub mod error;
pub mod guard;
pub mod layout;
pub mod output;
pub mod progress;
