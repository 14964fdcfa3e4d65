//! Brick Breaker - simulation core for a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, per-tick state machine)
//! - `game`: Reset/step façade that owns one session
//! - `input`: Latches raw key/pointer events into per-tick signals
//! - `driver`: Frame driver that schedules ticks and fires terminal notifications
//! - `config`: Session configuration with defaults and validation
//! - `platform`: Browser binding (wasm32 only)

pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod input;
pub mod platform;
pub mod sim;

pub use config::GameConfig;
pub use driver::{FrameDriver, FrameHandle, FrameScheduler, GameHost, ManualScheduler};
pub use error::{ConfigError, GameError};
pub use game::Game;
pub use input::{InputAdapter, Key};
pub use sim::{GameOutcome, GameState, RenderSnapshot, StepResult, TickInput, tick};

/// Default session configuration
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis speed (pixels per tick)
    pub const BALL_SPEED: f32 = 2.0;
    /// Spawn height above the bottom edge
    pub const BALL_SPAWN_OFFSET: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Movement per tick while a direction key is held
    pub const PADDLE_STEP: f32 = 7.0;

    /// Brick grid defaults
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BRICK_ROWS: u32 = 3;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
    /// Largest grid a config may request
    pub const MAX_BRICKS: u32 = 4096;

    /// Lives at session start
    pub const START_LIVES: u32 = 3;
}
