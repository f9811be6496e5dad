//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Pointer/touch coordinate scaling into arena space
//! - Edge-triggered launch requests

pub mod input;

pub use input::{InputAdapter, SurfaceRect};
