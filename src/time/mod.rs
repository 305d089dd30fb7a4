//! Logical time: the vector clock, its binary codec and its text rendering.

pub mod vector;
mod codec;
mod render;

// Re-export for convenience
pub use vector::*;
