//! # Workflows Module
//!
//! End-to-end entry points tying the [`crate::core`] and [`crate::engine`] layers
//! together.
//!
//! - **Loading** ([`load`]) - Build the molecule library from input paths, skipping bad files
//! - **Stacking** ([`stack`]) - Enumerate every stack and write one file per geometry

pub mod load;
pub mod stack;
