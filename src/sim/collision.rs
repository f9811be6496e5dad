//! Collision detection for the ball against walls, paddle and dots
//!
//! Everything here is a discrete overlap test evaluated once per frame after
//! the ball moves. There is no sweeping: a ball fast enough to cross a dot or
//! wall in a single frame passes through it.

use glam::Vec2;

use super::state::{Dot, Paddle};

/// Ball overlaps the left or right wall
#[inline]
pub fn ball_side_wall_collision(ball_pos: Vec2, ball_radius: f32, arena_size: f32) -> bool {
    ball_pos.x - ball_radius < 0.0 || ball_pos.x + ball_radius > arena_size
}

/// Ball overlaps the top wall
#[inline]
pub fn ball_ceiling_collision(ball_pos: Vec2, ball_radius: f32) -> bool {
    ball_pos.y - ball_radius < 0.0
}

/// Ball is entirely below the arena floor
#[inline]
pub fn ball_below_floor(ball_pos: Vec2, ball_radius: f32, arena_size: f32) -> bool {
    ball_pos.y - ball_radius > arena_size
}

/// Ball overlaps the paddle.
///
/// Vertically the ball's extent is tested against the paddle's; horizontally
/// only the ball center counts, so a ball clipping a paddle corner misses.
pub fn ball_paddle_collision(ball_pos: Vec2, ball_radius: f32, paddle: &Paddle) -> bool {
    ball_pos.y + ball_radius > paddle.y
        && ball_pos.y - ball_radius < paddle.y + paddle.height
        && ball_pos.x > paddle.x
        && ball_pos.x < paddle.x + paddle.width
}

/// Where along the paddle face the ball struck: 0 = left edge, 1 = right edge
#[inline]
pub fn paddle_hit_position(ball_x: f32, paddle: &Paddle) -> f32 {
    (ball_x - paddle.x) / paddle.width
}

/// Horizontal speed after a paddle hit.
///
/// Linear in `hit_pos`: the left edge sends the ball `-span/2`, the center
/// straight up, the right edge `+span/2`.
#[inline]
pub fn paddle_deflection(hit_pos: f32, span: f32) -> f32 {
    (hit_pos - 0.5) * span
}

/// Ball touches a dot (circle-circle)
#[inline]
pub fn ball_dot_collision(ball_pos: Vec2, ball_radius: f32, dot: &Dot) -> bool {
    ball_pos.distance(dot.pos) < ball_radius + dot.size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle() -> Paddle {
        Paddle {
            x: 260.0,
            y: 560.0,
            width: 80.0,
            height: 12.0,
        }
    }

    #[test]
    fn test_side_walls() {
        assert!(!ball_side_wall_collision(Vec2::new(300.0, 300.0), 6.0, 600.0));
        assert!(ball_side_wall_collision(Vec2::new(5.0, 300.0), 6.0, 600.0));
        assert!(ball_side_wall_collision(Vec2::new(595.0, 300.0), 6.0, 600.0));
        // Touching exactly is not a collision
        assert!(!ball_side_wall_collision(Vec2::new(6.0, 300.0), 6.0, 600.0));
        assert!(!ball_side_wall_collision(Vec2::new(594.0, 300.0), 6.0, 600.0));
    }

    #[test]
    fn test_ceiling_and_floor() {
        assert!(ball_ceiling_collision(Vec2::new(300.0, 5.0), 6.0));
        assert!(!ball_ceiling_collision(Vec2::new(300.0, 6.0), 6.0));

        assert!(!ball_below_floor(Vec2::new(300.0, 606.0), 6.0, 600.0));
        assert!(ball_below_floor(Vec2::new(300.0, 607.0), 6.0, 600.0));
    }

    #[test]
    fn test_paddle_overlap() {
        let p = paddle();
        assert!(ball_paddle_collision(Vec2::new(300.0, 556.0), 6.0, &p));
        assert!(ball_paddle_collision(Vec2::new(261.0, 570.0), 6.0, &p));
        // Resting ball sits 2 units above the paddle
        assert!(!ball_paddle_collision(Vec2::new(300.0, 552.0), 6.0, &p));
        // Center outside the paddle's horizontal span
        assert!(!ball_paddle_collision(Vec2::new(258.0, 562.0), 6.0, &p));
        assert!(!ball_paddle_collision(Vec2::new(260.0, 562.0), 6.0, &p));
        // Below the paddle
        assert!(!ball_paddle_collision(Vec2::new(300.0, 579.0), 6.0, &p));
    }

    #[test]
    fn test_paddle_deflection_angles() {
        let p = paddle();
        assert_eq!(paddle_hit_position(260.0, &p), 0.0);
        assert_eq!(paddle_hit_position(300.0, &p), 0.5);
        assert_eq!(paddle_hit_position(340.0, &p), 1.0);

        assert_eq!(paddle_deflection(0.0, 6.0), -3.0);
        assert_eq!(paddle_deflection(0.5, 6.0), 0.0);
        assert_eq!(paddle_deflection(1.0, 6.0), 3.0);
        assert!((paddle_deflection(0.999, 6.0) - 3.0).abs() < 0.01);
    }

    #[test]
    fn test_dot_overlap() {
        let dot = Dot::new(Vec2::new(100.0, 100.0), 10.0);
        assert!(ball_dot_collision(Vec2::new(110.0, 100.0), 6.0, &dot));
        assert!(!ball_dot_collision(Vec2::new(116.0, 100.0), 6.0, &dot));
        assert!(ball_dot_collision(Vec2::new(111.0, 111.0), 6.0, &dot));
    }
}
