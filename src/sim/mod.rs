//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per displayed frame, velocities in units per frame
//! - No randomness
//! - Stable iteration order (dots are row-major)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod scene;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use scene::{Circle, Rect, Scene};
pub use state::{
    Ball, BallState, Dot, GameEvent, GameState, Paddle, RoundPhase, generate_dots,
};
pub use tick::{TickInput, tick};
