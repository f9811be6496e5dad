//! Pointer/touch input to per-frame simulation input
//!
//! The host forwards raw client coordinates; this maps them into arena
//! units and turns clicks/taps into one-shot launch requests.

use crate::sim::TickInput;

/// On-screen box of the drawing surface, in client (CSS) pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub width: f32,
}

/// Accumulates input events between frames
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    /// Last pointer position in arena units
    pointer_x: f32,
    launch_pending: bool,
}

impl InputAdapter {
    /// Pointer starts at x = 0 until the first move event
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer/touch moved to `client_x` over the surface
    pub fn pointer_moved(&mut self, client_x: f32, rect: SurfaceRect, arena_size: f32) {
        if rect.width <= 0.0 {
            return;
        }
        self.pointer_x = (client_x - rect.left) * (arena_size / rect.width);
    }

    /// A touch both positions the paddle and launches
    pub fn touch_started(&mut self, client_x: f32, rect: SurfaceRect, arena_size: f32) {
        self.pointer_moved(client_x, rect, arena_size);
        self.request_launch();
    }

    /// Click, tap or key press
    pub fn request_launch(&mut self) {
        self.launch_pending = true;
    }

    pub fn pointer_x(&self) -> f32 {
        self.pointer_x
    }

    /// Input for the next frame; a pending launch is consumed
    pub fn next_input(&mut self) -> TickInput {
        TickInput {
            target_x: self.pointer_x,
            launch: std::mem::take(&mut self.launch_pending),
        }
    }
}
