//! Read-only frame snapshot for renderers and HUDs

use glam::Vec2;

use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub origin: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub arena_size: f32,
    pub paddle: Rect,
    pub ball: Circle,
    /// Active dots only
    pub dots: Vec<Circle>,
    pub score: u64,
    pub ended: bool,
}

impl Scene {
    pub fn capture(state: &GameState) -> Self {
        let paddle = &state.paddle;
        Self {
            arena_size: state.arena.size(),
            paddle: Rect {
                origin: Vec2::new(paddle.x, paddle.y),
                size: Vec2::new(paddle.width, paddle.height),
            },
            ball: Circle {
                center: state.ball.pos,
                radius: state.ball.radius,
            },
            dots: state
                .active_dots()
                .map(|d| Circle {
                    center: d.pos,
                    radius: d.size,
                })
                .collect(),
            score: state.score,
            ended: state.is_ended(),
        }
    }
}

impl GameState {
    /// Snapshot the current frame for drawing
    pub fn scene(&self) -> Scene {
        Scene::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_skips_inactive_dots() {
        let mut state = GameState::new(600.0).unwrap();
        state.dots[0].active = false;
        state.dots[7].active = false;
        state.score = 2;

        let scene = state.scene();
        assert_eq!(scene.dots.len(), 22);
        assert_eq!(scene.score, 2);
        assert!(!scene.ended);
        assert_eq!(scene.arena_size, 600.0);
        assert_eq!(scene.paddle.origin, Vec2::new(260.0, 560.0));
        assert_eq!(scene.paddle.size, Vec2::new(80.0, 12.0));
        assert_eq!(scene.ball.center, state.ball.pos);
        assert_eq!(scene.ball.radius, 6.0);
    }
}
