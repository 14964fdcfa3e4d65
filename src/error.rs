//! Error types
//!
//! Every failure here is a usage or configuration error. Gameplay itself
//! never errors; the caller must `reset` before retrying.

/// Invalid session configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("paddle width {paddle} exceeds field width {field}")]
    PaddleTooWide { paddle: f32, field: f32 },

    #[error("ball diameter {diameter} does not fit a {width}x{height} field")]
    BallTooLarge {
        diameter: f32,
        width: f32,
        height: f32,
    },

    #[error("ball speed {speed} exceeds {limit}, the most a {width}x{height} field can reflect")]
    SpeedTooHigh {
        speed: f32,
        limit: f32,
        width: f32,
        height: f32,
    },

    #[error("brick grid {columns}x{rows} has no bricks")]
    NoBricks { columns: u32, rows: u32 },

    #[error("brick grid {columns}x{rows} exceeds the limit of {max} bricks")]
    TooManyBricks { columns: u32, rows: u32, max: u32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("brick grid spans {width}x{height} from ({left}, {top}) and leaves the field")]
    BricksOutsideField {
        left: f32,
        top: f32,
        width: f32,
        height: f32,
    },

    #[error("a session needs at least one life")]
    NoLives,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors reported by the reset/step façade
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("game not initialized: call reset before step")]
    NotInitialized,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
