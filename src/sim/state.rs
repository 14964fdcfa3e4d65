//! Game state and core simulation types
//!
//! Everything one session owns lives in `GameState`; nothing is global, so
//! several sessions can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::snapshot::{BallView, BrickView, Rect, RenderSnapshot};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Session outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    InProgress,
    /// Every brick destroyed
    Won,
    /// Last life lost
    Lost,
}

impl GameOutcome {
    /// Won and Lost are terminal until the next reset
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// Paddle movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the spawn point, moving up and to the right
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.field_width / 2.0,
                config.field_height - config.ball_spawn_offset,
            ),
            vel: Vec2::new(config.ball_speed, -config.ball_speed),
            radius: config.ball_radius,
        }
    }

    /// Position after this tick's move, used for boundary checks
    #[inline]
    pub fn prospective(&self) -> Vec2 {
        self.pos + self.vel
    }

    /// Commit one tick of motion
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle, resting on the bottom edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centered horizontally on the bottom edge
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            x: (config.field_width - config.paddle_width) / 2.0,
            y: config.field_height - config.paddle_height,
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Rightmost legal left edge
    #[inline]
    pub fn max_x(&self, field_width: f32) -> f32 {
        (field_width - self.width).max(0.0)
    }

    /// Move by `step` pixels, clamped to the field
    pub fn step(&mut self, direction: Direction, step: f32, field_width: f32) {
        let x = match direction {
            Direction::Left => self.x - step,
            Direction::Right => self.x + step,
        };
        self.x = x.clamp(0.0, self.max_x(field_width));
    }

    /// Center the paddle on a pointer x (canvas-relative).
    ///
    /// Pointers outside the open interval `(0, field_width)` are ignored;
    /// returns whether the paddle was moved.
    pub fn snap_to_pointer(&mut self, pointer_x: f32, field_width: f32) -> bool {
        if !(pointer_x > 0.0 && pointer_x < field_width) {
            return false;
        }
        self.x = (pointer_x - self.width / 2.0).clamp(0.0, self.max_x(field_width));
        true
    }

    /// Whether `x` lies strictly inside the paddle's horizontal span
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub column: u32,
    pub row: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
}

impl Brick {
    /// Strict containment of a point (the ball center)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + self.width
            && point.y > self.pos.y
            && point.y < self.pos.y + self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Fixed grid of bricks, stored column-major.
///
/// Destroyed bricks stay in place with `alive == false` so indices are stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub columns: u32,
    pub rows: u32,
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(config: &GameConfig) -> Self {
        let mut bricks = Vec::with_capacity(config.brick_count() as usize);
        for column in 0..config.brick_columns {
            for row in 0..config.brick_rows {
                bricks.push(Brick {
                    column,
                    row,
                    pos: Self::brick_origin(config, column, row),
                    width: config.brick_width,
                    height: config.brick_height,
                    alive: true,
                });
            }
        }
        Self {
            columns: config.brick_columns,
            rows: config.brick_rows,
            bricks,
        }
    }

    /// Top-left corner of the brick at a grid index
    pub fn brick_origin(config: &GameConfig, column: u32, row: u32) -> Vec2 {
        Vec2::new(
            column as f32 * (config.brick_width + config.brick_padding) + config.brick_offset_left,
            row as f32 * (config.brick_height + config.brick_padding) + config.brick_offset_top,
        )
    }

    /// Recompute positions of alive bricks; dead bricks keep their last position
    pub fn relayout(&mut self, config: &GameConfig) {
        for brick in self.bricks.iter_mut().filter(|b| b.alive) {
            brick.pos = Self::brick_origin(config, brick.column, brick.row);
        }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    pub fn get(&self, column: u32, row: u32) -> Option<&Brick> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.bricks.get((column * self.rows + row) as usize)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Configuration the session was created with
    pub config: GameConfig,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Bricks destroyed this session
    pub score: u32,
    pub lives: u32,
    pub outcome: GameOutcome,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Snapshot taken on the terminal tick, returned by every later tick
    pub(crate) frozen: Option<RenderSnapshot>,
}

impl GameState {
    /// Create a fresh session
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ball: Ball::spawn(&config),
            paddle: Paddle::centered(&config),
            bricks: BrickGrid::new(&config),
            score: 0,
            lives: config.lives,
            outcome: GameOutcome::InProgress,
            time_ticks: 0,
            frozen: None,
            config,
        })
    }

    /// Score that wins the session
    pub fn target_score(&self) -> u32 {
        self.config.brick_count()
    }

    /// Re-center ball and paddle after a non-fatal floor event.
    /// Bricks, score and lives are untouched.
    pub fn round_reset(&mut self) {
        self.ball = Ball::spawn(&self.config);
        self.paddle = Paddle::centered(&self.config);
    }

    /// Render-ready view of the current state
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            ball: BallView {
                center: self.ball.pos,
                radius: self.ball.radius,
            },
            paddle: self.paddle.rect(),
            bricks: self
                .bricks
                .bricks
                .iter()
                .map(|b| BrickView {
                    rect: b.rect(),
                    alive: b.alive,
                })
                .collect(),
            score: self.score,
            lives: self.lives,
            outcome: self.outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(state.ball.pos, Vec2::new(240.0, 290.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.paddle.x, 202.5);
        assert_eq!(state.paddle.y, 310.0);
        assert_eq!(state.bricks.len(), 15);
        assert_eq!(state.bricks.alive_count(), 15);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.outcome, GameOutcome::InProgress);
    }

    #[test]
    fn test_new_session_rejects_invalid_config() {
        let config = GameConfig {
            brick_columns: 0,
            ..Default::default()
        };
        assert!(GameState::new(config).is_err());

        // Rejected before the grid is allocated
        let config = GameConfig {
            brick_columns: 100_000,
            brick_rows: 100_000,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(config),
            Err(ConfigError::TooManyBricks { .. })
        ));
    }

    #[test]
    fn test_brick_layout_is_column_major() {
        let grid = BrickGrid::new(&GameConfig::default());
        // index 1 is column 0, row 1
        assert_eq!(grid.bricks[1].column, 0);
        assert_eq!(grid.bricks[1].row, 1);
        assert_eq!(grid.bricks[1].pos, Vec2::new(30.0, 60.0));
        // index 3 is column 1, row 0
        assert_eq!(grid.bricks[3].pos, Vec2::new(115.0, 30.0));

        let last = grid.get(4, 2).unwrap();
        assert_eq!(last.pos, Vec2::new(370.0, 90.0));
        assert!(grid.get(5, 0).is_none());
    }

    #[test]
    fn test_relayout_skips_dead_bricks() {
        let config = GameConfig::default();
        let mut grid = BrickGrid::new(&config);
        grid.bricks[0].alive = false;
        grid.bricks[0].pos = Vec2::new(-1.0, -1.0);
        grid.bricks[1].pos = Vec2::ZERO;

        grid.relayout(&config);
        assert_eq!(grid.bricks[0].pos, Vec2::new(-1.0, -1.0));
        assert_eq!(grid.bricks[1].pos, Vec2::new(30.0, 60.0));
    }

    #[test]
    fn test_brick_containment_is_strict() {
        let grid = BrickGrid::new(&GameConfig::default());
        let brick = grid.get(0, 0).unwrap();
        assert!(brick.contains(Vec2::new(60.0, 40.0)));
        // Edges don't count
        assert!(!brick.contains(Vec2::new(30.0, 40.0)));
        assert!(!brick.contains(Vec2::new(105.0, 40.0)));
        assert!(!brick.contains(Vec2::new(60.0, 30.0)));
        assert!(!brick.contains(Vec2::new(60.0, 50.0)));
    }

    #[test]
    fn test_paddle_step_clamps() {
        let mut paddle = Paddle::centered(&GameConfig::default());
        paddle.x = 3.0;
        paddle.step(Direction::Left, 7.0, 480.0);
        assert_eq!(paddle.x, 0.0);

        paddle.x = 400.0;
        paddle.step(Direction::Right, 7.0, 480.0);
        assert_eq!(paddle.x, 405.0);

        paddle.x = 100.0;
        paddle.step(Direction::Right, 7.0, 480.0);
        assert_eq!(paddle.x, 107.0);
    }

    #[test]
    fn test_paddle_snap_to_pointer() {
        let mut paddle = Paddle::centered(&GameConfig::default());
        assert!(paddle.snap_to_pointer(100.0, 480.0));
        assert_eq!(paddle.x, 62.5);

        // Near the edges the paddle clamps
        assert!(paddle.snap_to_pointer(10.0, 480.0));
        assert_eq!(paddle.x, 0.0);
        assert!(paddle.snap_to_pointer(479.0, 480.0));
        assert_eq!(paddle.x, 405.0);

        // Outside the canvas: ignored
        assert!(!paddle.snap_to_pointer(0.0, 480.0));
        assert!(!paddle.snap_to_pointer(-20.0, 480.0));
        assert!(!paddle.snap_to_pointer(480.0, 480.0));
        assert_eq!(paddle.x, 405.0);
    }

    #[test]
    fn test_round_reset_preserves_progress() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.score = 4;
        state.lives = 2;
        state.bricks.bricks[0].alive = false;
        state.ball.pos = Vec2::new(12.0, 300.0);
        state.ball.vel = Vec2::new(-2.0, 2.0);
        state.paddle.x = 0.0;

        state.round_reset();
        assert_eq!(state.ball.pos, Vec2::new(240.0, 290.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.paddle.x, 202.5);
        assert_eq!(state.score, 4);
        assert_eq!(state.lives, 2);
        assert!(!state.bricks.bricks[0].alive);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.bricks.bricks[2].alive = false;
        let snapshot = state.snapshot();
        assert_eq!(snapshot.ball.center, state.ball.pos);
        assert_eq!(snapshot.ball.radius, 10.0);
        assert_eq!(snapshot.paddle, Rect::new(202.5, 310.0, 75.0, 10.0));
        assert_eq!(snapshot.bricks.len(), 15);
        assert!(!snapshot.bricks[2].alive);
        assert_eq!(snapshot.lives, 3);
    }
}
