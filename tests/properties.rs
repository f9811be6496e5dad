//! Property tests over arbitrary input sequences

use dot_breaker::Tuning;
use dot_breaker::sim::{BallState, Dot, GameState, TickInput, tick};
use glam::Vec2;
use proptest::prelude::*;

fn inputs() -> impl Strategy<Value = Vec<TickInput>> {
    prop::collection::vec(
        (-200.0f32..900.0, any::<bool>()).prop_map(|(target_x, launch)| TickInput {
            target_x,
            launch,
        }),
        0..600,
    )
}

proptest! {
    #[test]
    fn paddle_stays_inside_arena(size in 200.0f32..1200.0, inputs in inputs()) {
        let mut state = GameState::new(size).unwrap();
        let max_x = size - state.paddle.width;
        for input in &inputs {
            tick(&mut state, input);
            prop_assert!(state.paddle.x >= 0.0);
            prop_assert!(state.paddle.x <= max_x);
        }
    }

    #[test]
    fn unlaunched_ball_rides_paddle(targets in prop::collection::vec(-200.0f32..900.0, 1..200)) {
        let mut state = GameState::new(600.0).unwrap();
        let tuning = Tuning::default();
        for target_x in targets {
            tick(&mut state, &TickInput { target_x, launch: false });
            prop_assert!(!state.ball.is_launched());
            prop_assert_eq!(state.ball.pos, state.ball.rest_point(&state.paddle, &tuning));
            prop_assert_eq!(state.score, 0);
        }
    }

    #[test]
    fn score_never_decreases(inputs in inputs()) {
        let mut state = GameState::new(600.0).unwrap();
        let mut last = 0;
        for input in &inputs {
            tick(&mut state, input);
            prop_assert!(state.score >= last);
            prop_assert!(state.score <= state.dots.len() as u64);
            last = state.score;
        }
    }

    #[test]
    fn ended_iff_no_active_dots(inputs in inputs()) {
        let mut state = GameState::new(600.0).unwrap();
        for input in &inputs {
            tick(&mut state, input);
            prop_assert_eq!(state.is_ended(), state.remaining_dots() == 0);
            prop_assert_eq!(
                state.score as usize,
                state.dots.len() - state.remaining_dots()
            );
        }
    }

    #[test]
    fn init_round_resets_progress(size in 200.0f32..1200.0, inputs in inputs()) {
        let mut state = GameState::new(600.0).unwrap();
        for input in &inputs {
            tick(&mut state, input);
        }

        state.init_round(size).unwrap();
        prop_assert_eq!(state.score, 0);
        prop_assert_eq!(state.remaining_dots(), state.dots.len());
        prop_assert!(!state.ball.is_launched());
        prop_assert_eq!(state.arena.size(), size);
    }

    #[test]
    fn side_wall_flips_dx_exactly_once(
        x in 0.0f32..600.0,
        y in 50.0f32..400.0,
        dx in -10.0f32..10.0,
        dy in -10.0f32..10.0,
    ) {
        let mut state = GameState::new(600.0).unwrap();
        state.dots = vec![Dot::new(Vec2::new(10_000.0, 10_000.0), 10.0)];
        state.ball.state = BallState::Free;
        state.ball.pos = Vec2::new(x, y);
        state.ball.vel = Vec2::new(dx, dy);
        let radius = state.ball.radius;

        tick(&mut state, &TickInput { target_x: 300.0, launch: false });

        let moved_x = x + dx;
        let crossed = moved_x - radius < 0.0 || moved_x + radius > 600.0;
        prop_assert_eq!(state.ball.pos.x, moved_x);
        if crossed {
            prop_assert_eq!(state.ball.vel.x, -dx);
        } else {
            prop_assert_eq!(state.ball.vel.x, dx);
        }
    }
}
