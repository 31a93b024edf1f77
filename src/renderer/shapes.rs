//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Append two triangles covering `rect`
pub fn push_rect(vertices: &mut Vec<Vertex>, rect: &Rect, color: [f32; 4]) {
    let min = rect.min;
    let max = rect.max();
    let corners = [
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(max.x, max.y),
        Vec2::new(min.x, max.y),
    ];
    for i in [0, 1, 2, 0, 2, 3] {
        vertices.push(Vertex::new(corners[i].x, corners[i].y, color));
    }
}
