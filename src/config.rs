//! Session configuration
//!
//! Passed to `reset`. Every field has a default, so a JSON document may
//! specify only the values it wants to change.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Playfield, ball, paddle and brick grid parameters for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed in pixels per tick
    pub ball_speed: f32,
    /// Distance of the spawn point above the bottom edge
    pub ball_spawn_offset: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels moved per tick while a direction is held
    pub paddle_step: f32,

    // === Bricks ===
    pub brick_columns: u32,
    pub brick_rows: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // === Rules ===
    pub lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_spawn_offset: BALL_SPAWN_OFFSET,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,

            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            lives: START_LIVES,
        }
    }
}

impl GameConfig {
    /// Total number of bricks in the grid
    pub fn brick_count(&self) -> u32 {
        self.brick_columns.saturating_mul(self.brick_rows)
    }

    /// Parse a (possibly partial) JSON configuration and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check the configuration can host a session
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_step", self.paddle_step),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        // Offsets may be zero but must be real numbers
        let offsets = [
            ("ball_spawn_offset", self.ball_spawn_offset),
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
            ("brick_offset_left", self.brick_offset_left),
        ];
        for (field, value) in offsets {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if self.paddle_width > self.field_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                field: self.field_width,
            });
        }

        let diameter = self.ball_radius * 2.0;
        if diameter >= self.field_width || diameter >= self.field_height {
            return Err(ConfigError::BallTooLarge {
                diameter,
                width: self.field_width,
                height: self.field_height,
            });
        }

        // A wall bounce reverses the look-ahead step, so the reflected move
        // must still land inside the walls
        let limit = (self.field_width.min(self.field_height) - diameter) / 2.0;
        if self.ball_speed > limit {
            return Err(ConfigError::SpeedTooHigh {
                speed: self.ball_speed,
                limit,
                width: self.field_width,
                height: self.field_height,
            });
        }

        match self.brick_columns.checked_mul(self.brick_rows) {
            Some(0) => {
                return Err(ConfigError::NoBricks {
                    columns: self.brick_columns,
                    rows: self.brick_rows,
                });
            }
            Some(count) if count <= MAX_BRICKS => {}
            _ => {
                return Err(ConfigError::TooManyBricks {
                    columns: self.brick_columns,
                    rows: self.brick_rows,
                    max: MAX_BRICKS,
                });
            }
        }
        self.validate_grid_fits()?;

        if self.lives == 0 {
            return Err(ConfigError::NoLives);
        }

        Ok(())
    }

    /// Every brick cell must lie inside the field
    fn validate_grid_fits(&self) -> Result<(), ConfigError> {
        let offsets = [
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
            ("brick_offset_left", self.brick_offset_left),
        ];
        for (field, value) in offsets {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let width = self.brick_columns as f32 * (self.brick_width + self.brick_padding)
            - self.brick_padding;
        let height =
            self.brick_rows as f32 * (self.brick_height + self.brick_padding) - self.brick_padding;
        if self.brick_offset_left + width > self.field_width
            || self.brick_offset_top + height > self.field_height
        {
            return Err(ConfigError::BricksOutsideField {
                left: self.brick_offset_left,
                top: self.brick_offset_top,
                width,
                height,
            });
        }
        Ok(())
    }
}
