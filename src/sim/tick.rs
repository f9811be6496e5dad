//! Per-frame simulation step
//!
//! One call advances the round by exactly one frame. Physics is frame-step
//! based: velocities are in units per frame, so the host must call `tick`
//! once per displayed frame rather than per elapsed time slice.

use super::collision::{
    ball_below_floor, ball_ceiling_collision, ball_dot_collision, ball_paddle_collision,
    ball_side_wall_collision, paddle_deflection, paddle_hit_position,
};
use super::state::{GameEvent, GameState, RoundPhase};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired paddle center in arena units (clamped by the simulation)
    pub target_x: f32,
    /// Launch the ball (click/tap/key), consumed by this frame
    pub launch: bool,
}

/// Advance the round by one frame and report what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    state.paddle.track(input.target_x, &state.arena);

    if input.launch && state.ball.launch() {
        log::debug!("Ball launched at tick {}", state.time_ticks);
        events.push(GameEvent::Launched);
    }

    if !state.ball.is_launched() {
        state.ball.follow(&state.paddle, &state.tuning);
        return events;
    }

    // Cleared rounds freeze the ball where it is
    if state.is_ended() {
        return events;
    }

    let GameState {
        tuning,
        arena,
        paddle,
        ball,
        dots,
        score,
        phase,
        time_ticks,
    } = state;
    let size = arena.size();

    ball.pos += ball.vel;

    if ball_side_wall_collision(ball.pos, ball.radius, size) {
        ball.vel.x = -ball.vel.x;
        log::debug!("Wall bounce at x={:.1}", ball.pos.x);
        events.push(GameEvent::WallBounce);
    }
    if ball_ceiling_collision(ball.pos, ball.radius) {
        ball.vel.y = -ball.vel.y;
        log::debug!("Ceiling bounce at x={:.1}", ball.pos.x);
        events.push(GameEvent::CeilingBounce);
    }

    // No cooldown: a ball still inside the paddle next frame is hit again
    if ball_paddle_collision(ball.pos, ball.radius, paddle) {
        let hit_pos = paddle_hit_position(ball.pos.x, paddle);
        ball.vel.y = -ball.vel.y.abs();
        ball.vel.x = paddle_deflection(hit_pos, tuning.paddle_deflection);
        log::debug!("Paddle hit at {:.2}", hit_pos);
        events.push(GameEvent::PaddleHit { hit_pos });
    }

    if ball_below_floor(ball.pos, ball.radius, size) {
        ball.reset(paddle, tuning);
        log::debug!("Ball lost at tick {}", time_ticks);
        events.push(GameEvent::BallLost);
    }

    // Every overlapping dot flips vy on its own, so two hits in one frame
    // cancel out
    for (index, dot) in dots.iter_mut().enumerate() {
        if dot.active && ball_dot_collision(ball.pos, ball.radius, dot) {
            dot.active = false;
            *score += 1;
            ball.vel.y = -ball.vel.y;
            log::debug!("Dot {} cleared, score {}", index, score);
            events.push(GameEvent::DotCleared { index });
        }
    }

    if *phase == RoundPhase::Active && dots.iter().all(|d| !d.active) {
        *phase = RoundPhase::Cleared;
        log::info!("Round cleared at tick {} with score {}", time_ticks, score);
        events.push(GameEvent::RoundCleared);
    }

    events
}
