//! Render-ready view of a tick
//!
//! Plain value objects handed to the renderer; they carry no behavior.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameOutcome;

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickView {
    pub rect: Rect,
    pub alive: bool,
}

/// Everything the renderer needs to paint one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub ball: BallView,
    pub paddle: Rect,
    /// One entry per grid cell, column-major
    pub bricks: Vec<BrickView>,
    pub score: u32,
    pub lives: u32,
    pub outcome: GameOutcome,
}
