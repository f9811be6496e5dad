//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::{Palette, Vertex};
use crate::sim::{Rect, Scene};

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled rectangle with rounded corners.
///
/// The outline is walked corner by corner and fanned from the center, which
/// works because the shape is convex.
pub fn rounded_rect(rect: &Rect, corner_radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let r = corner_radius
        .min(rect.size.x / 2.0)
        .min(rect.size.y / 2.0)
        .max(0.0);
    let per_corner = (segments / 4).max(1);
    let min = rect.origin;
    let max = rect.origin + rect.size;

    // Corner arc centers with their starting angle (y down, clockwise on screen)
    let corners = [
        (Vec2::new(max.x - r, min.y + r), -FRAC_PI_2), // top-right
        (Vec2::new(max.x - r, max.y - r), 0.0),        // bottom-right
        (Vec2::new(min.x + r, max.y - r), FRAC_PI_2),  // bottom-left
        (Vec2::new(min.x + r, min.y + r), PI),         // top-left
    ];

    let mut outline = Vec::with_capacity(corners.len() * (per_corner as usize + 1));
    for (center, start) in corners {
        for i in 0..=per_corner {
            let theta = start + (i as f32 / per_corner as f32) * FRAC_PI_2;
            outline.push(center + Vec2::new(theta.cos(), theta.sin()) * r);
        }
    }

    let mid = rect.origin + rect.size / 2.0;
    let mut vertices = Vec::with_capacity(outline.len() * 3);
    for (i, p1) in outline.iter().enumerate() {
        let p2 = outline[(i + 1) % outline.len()];
        vertices.push(Vertex::new(mid.x, mid.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Tessellate a whole frame: dots, then ball, then paddle
pub fn scene_vertices(
    scene: &Scene,
    palette: &Palette,
    corner_radius: f32,
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for dot in &scene.dots {
        vertices.extend(circle(dot.center, dot.radius, palette.dot, segments));
    }
    vertices.extend(circle(
        scene.ball.center,
        scene.ball.radius,
        palette.ball,
        segments,
    ));
    vertices.extend(rounded_rect(
        &scene.paddle,
        corner_radius,
        palette.paddle,
        segments,
    ));

    vertices
}
