//! Collision detection for the playfield
//!
//! Each check looks one tick ahead: the ball's current position plus its
//! velocity is tested against the boundaries before the move is committed.
//! The checks only report what happened; `tick` applies the responses in a
//! fixed order (side walls, top wall, floor/paddle, bricks).

use glam::Vec2;

use super::state::{Ball, BrickGrid, Paddle};

/// What the ball meets at the bottom edge this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorContact {
    /// Ball stays clear of the bottom edge
    None,
    /// Paddle intercepts the ball
    Paddle,
    /// Ball crosses the bottom edge: a floor event
    Miss,
}

/// Would the next move carry the ball past a side wall?
pub fn side_wall_hit(ball: &Ball, field_width: f32) -> bool {
    let next_x = ball.prospective().x;
    next_x > field_width - ball.radius || next_x < ball.radius
}

/// Would the next move carry the ball above the top edge?
pub fn top_wall_hit(ball: &Ball) -> bool {
    ball.prospective().y < ball.radius
}

/// Classify the ball against the bottom edge.
///
/// Interception uses the ball's current x against the paddle's span, not
/// its prospective x.
pub fn floor_contact(ball: &Ball, paddle: &Paddle, field_height: f32) -> FloorContact {
    if ball.prospective().y <= field_height - ball.radius {
        return FloorContact::None;
    }
    if paddle.spans(ball.pos.x) {
        FloorContact::Paddle
    } else {
        FloorContact::Miss
    }
}

/// Index of the first alive brick containing `point`, in column-major order.
///
/// At most one brick is reported even if the point lies in several.
pub fn first_brick_hit(bricks: &BrickGrid, point: Vec2) -> Option<usize> {
    bricks
        .bricks
        .iter()
        .position(|brick| brick.alive && brick.contains(point))
}

/// Flip the horizontal component
#[inline]
pub fn bounce_x(vel: Vec2) -> Vec2 {
    Vec2::new(-vel.x, vel.y)
}

/// Flip the vertical component
#[inline]
pub fn bounce_y(vel: Vec2) -> Vec2 {
    Vec2::new(vel.x, -vel.y)
}
