//! Dot Breaker - A single-screen dot breaking arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, collisions, round state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser input normalization
//! - `tuning`: Data-driven game balance
//! - `settings`: Player display preferences

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::SimError;
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Paddle dimensions (arena units)
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Distance from the arena floor up to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
    pub const PADDLE_CORNER_RADIUS: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 6.0;
    /// Gap between paddle top and the resting ball's edge
    pub const BALL_REST_GAP: f32 = 2.0;
    /// Launch velocity, units per frame (up and to the right)
    pub const BALL_LAUNCH_DX: f32 = 3.0;
    pub const BALL_LAUNCH_DY: f32 = -3.0;

    /// Full horizontal speed span across the paddle face
    /// (left edge = -span/2, right edge = +span/2)
    pub const PADDLE_DEFLECTION: f32 = 6.0;

    /// Dot grid layout
    pub const DOT_ROWS: u32 = 4;
    pub const DOT_COLS: u32 = 6;
    pub const DOT_SIZE: f32 = 10.0;
    pub const DOT_ROW_SPACING: f32 = 40.0;
    /// First row height as a fraction of the arena size
    pub const DOT_TOP_MARGIN: f32 = 0.15;
    /// Upper bound on `rows * cols` accepted from tuning data
    pub const MAX_DOTS: u32 = 1024;
}
