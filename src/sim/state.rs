//! Game state and core simulation types
//!
//! Everything a round needs lives in [`GameState`]; the tick function is the
//! only thing that mutates it between rounds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::error::SimError;
use crate::tuning::Tuning;

/// Round progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Dots remain
    Active,
    /// Every dot destroyed; terminal until the next round
    Cleared,
}

/// Ball state - riding the paddle or free-moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Resting on the paddle, waiting for launch
    Attached,
    /// Launched and integrating velocity every frame
    Free,
}

/// Something that happened during a tick (for logging/HUD, never fed back)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    /// Left or right wall reflected the ball
    WallBounce,
    CeilingBounce,
    /// `hit_pos` is 0 at the paddle's left edge, 1 at the right edge
    PaddleHit { hit_pos: f32 },
    /// Ball fell past the floor and was re-attached
    BallLost,
    DotCleared { index: usize },
    RoundCleared,
}

/// The player's paddle (axis-aligned rectangle, `x`/`y` is the top-left)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Centered horizontally, `paddle_bottom_offset` above the floor
    pub fn new(arena: &Arena, tuning: &Tuning) -> Self {
        Self {
            x: arena.size() / 2.0 - tuning.paddle_width / 2.0,
            y: arena.size() - tuning.paddle_bottom_offset,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center the paddle on `target_x`, clamped inside the arena.
    /// NaN targets are ignored.
    pub fn track(&mut self, target_x: f32, arena: &Arena) {
        if target_x.is_nan() {
            return;
        }
        let max_x = (arena.size() - self.width).max(0.0);
        self.x = (target_x - self.width / 2.0).clamp(0.0, max_x);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
}

impl Ball {
    /// A fresh ball resting on the paddle
    pub fn new(paddle: &Paddle, tuning: &Tuning) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: tuning.launch_velocity,
            radius: tuning.ball_radius,
            state: BallState::Attached,
        };
        ball.follow(paddle, tuning);
        ball
    }

    #[inline]
    pub fn is_launched(&self) -> bool {
        self.state == BallState::Free
    }

    /// Where the ball rests on top of the paddle
    pub fn rest_point(&self, paddle: &Paddle, tuning: &Tuning) -> Vec2 {
        Vec2::new(
            paddle.center_x(),
            paddle.y - self.radius - tuning.ball_rest_gap,
        )
    }

    /// Snap to the paddle's rest point (attached balls only move this way)
    pub fn follow(&mut self, paddle: &Paddle, tuning: &Tuning) {
        self.pos = self.rest_point(paddle, tuning);
    }

    /// Release the ball. Returns false if it was already free.
    pub fn launch(&mut self) -> bool {
        if self.is_launched() {
            return false;
        }
        self.state = BallState::Free;
        true
    }

    /// Back onto the paddle with the launch velocity restored
    pub fn reset(&mut self, paddle: &Paddle, tuning: &Tuning) {
        self.state = BallState::Attached;
        self.vel = tuning.launch_velocity;
        self.follow(paddle, tuning);
    }
}

/// A destructible target dot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub pos: Vec2,
    /// Collision radius
    pub size: f32,
    pub active: bool,
}

impl Dot {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            size,
            active: true,
        }
    }
}

/// Lay out the dot grid: columns evenly spaced with one spacing of margin on
/// each side, rows `dot_row_spacing` apart starting at `dot_top_margin`.
pub fn generate_dots(arena: &Arena, tuning: &Tuning) -> Vec<Dot> {
    let spacing = arena.size() / (tuning.dot_cols + 1) as f32;
    let top = arena.size() * tuning.dot_top_margin;

    let mut dots = Vec::with_capacity(tuning.dot_count());
    for row in 0..tuning.dot_rows {
        for col in 0..tuning.dot_cols {
            let pos = Vec2::new(
                spacing * (col + 1) as f32,
                top + row as f32 * tuning.dot_row_spacing,
            );
            dots.push(Dot::new(pos, tuning.dot_size));
        }
    }
    dots
}

/// Complete round state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub arena: Arena,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major, generated once per round
    pub dots: Vec<Dot>,
    pub score: u64,
    pub phase: RoundPhase,
    /// Frames stepped since the round started
    pub time_ticks: u64,
}

impl GameState {
    /// New round with default tuning
    pub fn new(size: f32) -> Result<Self, SimError> {
        Self::with_tuning(size, Tuning::default())
    }

    /// New round with custom tuning
    pub fn with_tuning(size: f32, tuning: Tuning) -> Result<Self, SimError> {
        tuning.validate()?;
        let arena = Arena::new(size)?;
        Ok(Self::fresh_round(arena, tuning))
    }

    fn fresh_round(arena: Arena, tuning: Tuning) -> Self {
        let paddle = Paddle::new(&arena, &tuning);
        let ball = Ball::new(&paddle, &tuning);
        let dots = generate_dots(&arena, &tuning);
        log::info!(
            "Round initialized: arena={}, dots={}",
            arena.size(),
            dots.len()
        );
        Self {
            tuning,
            arena,
            paddle,
            ball,
            dots,
            score: 0,
            phase: RoundPhase::Active,
            time_ticks: 0,
        }
    }

    /// Start over on an arena of `size`, discarding all progress.
    /// On error the current round is left untouched.
    pub fn init_round(&mut self, size: f32) -> Result<(), SimError> {
        let arena = Arena::new(size)?;
        *self = Self::fresh_round(arena, self.tuning);
        Ok(())
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.phase == RoundPhase::Cleared
    }

    pub fn active_dots(&self) -> impl Iterator<Item = &Dot> {
        self.dots.iter().filter(|d| d.active)
    }

    pub fn remaining_dots(&self) -> usize {
        self.active_dots().count()
    }
}
