//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Stable iteration order (bricks column-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{FloorContact, first_brick_hit, floor_contact, side_wall_hit, top_wall_hit};
pub use snapshot::{BallView, BrickView, Rect, RenderSnapshot};
pub use state::{Ball, Brick, BrickGrid, Direction, GameOutcome, GameState, Paddle};
pub use tick::{StepResult, TickInput, tick};
