//! Immutable game configuration
//!
//! Built once at startup, validated, then passed by reference into every
//! component. Nothing in the simulation reads ambient globals.

use std::time::Duration;

use glam::Vec2;

use crate::consts::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Arena width (W)
    pub width: f32,
    /// Arena height (H)
    pub height: f32,
    pub brick_rows: u32,
    pub brick_cols: u32,
    /// Gap between bricks and between the outer bricks and the side walls
    pub spacing: f32,
    /// Top edge of the first brick row
    pub brick_start_y: f32,
    pub brick_height: f32,
    /// Ball bounding box edge length
    pub ball_size: f32,
    /// Initial ball velocity (units per tick)
    pub ball_velocity: Vec2,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Fixed top edge of the paddle
    pub paddle_y: f32,
    /// Lives per game
    pub rounds: u32,
    pub ticks_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            brick_rows: N_ROWS,
            brick_cols: N_COLS,
            spacing: SPACING,
            brick_start_y: BRICK_START_Y,
            brick_height: BRICK_HEIGHT,
            ball_size: BALL_SIZE,
            ball_velocity: Vec2::splat(BALL_SPEED),
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: CANVAS_HEIGHT - PADDLE_OFFSET_FROM_BOTTOM,
            rounds: N_ROUNDS,
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

impl GameConfig {
    /// Brick width derived from the arena width, column count and spacing
    #[inline]
    pub fn brick_width(&self) -> f32 {
        (self.width - (self.brick_cols + 1) as f32 * self.spacing) / self.brick_cols as f32
    }

    /// Bottom edge of the last brick row
    pub fn bricks_bottom(&self) -> f32 {
        self.brick_start_y
            + self.brick_rows as f32 * (self.brick_height + self.spacing)
            - self.spacing
    }

    /// Total number of bricks in a full grid
    pub fn brick_count(&self) -> usize {
        (self.brick_rows * self.brick_cols) as usize
    }

    /// Fixed pacing delay between ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.ticks_per_second.max(1) as f64)
    }

    /// Fixed timestep in seconds (for accumulator-driven front ends)
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.ticks_per_second.max(1) as f32
    }

    /// Check every constant before any surface is opened
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::NonPositiveArena {
                width: self.width,
                height: self.height,
            });
        }
        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(ConfigError::EmptyBrickGrid {
                rows: self.brick_rows,
                cols: self.brick_cols,
            });
        }
        if self.brick_rows > MAX_ROWS {
            return Err(ConfigError::TooManyRows {
                rows: self.brick_rows,
                max: MAX_ROWS,
            });
        }
        if !(self.spacing >= 0.0) {
            return Err(ConfigError::NegativeSpacing(self.spacing));
        }
        if !(self.brick_start_y >= 0.0) {
            return Err(ConfigError::NegativeBrickStart(self.brick_start_y));
        }
        let brick_width = self.brick_width();
        if !(brick_width > 0.0) {
            return Err(ConfigError::NonPositiveBrickWidth(brick_width));
        }
        for (what, value) in [
            ("brick height", self.brick_height),
            ("ball size", self.ball_size),
            ("paddle width", self.paddle_width),
            ("paddle height", self.paddle_height),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveSize { what, value });
            }
        }
        if self.ball_size > self.width || self.ball_size > self.height {
            return Err(ConfigError::NonPositiveSize {
                what: "room left for the ball",
                value: self.width.min(self.height) - self.ball_size,
            });
        }
        let velocity = self.ball_velocity;
        if !velocity.is_finite() || velocity == Vec2::ZERO {
            return Err(ConfigError::InvalidBallVelocity {
                x: velocity.x,
                y: velocity.y,
            });
        }
        if self.paddle_width > self.width
            || self.paddle_y < 0.0
            || self.paddle_y + self.paddle_height > self.height
        {
            return Err(ConfigError::PaddleOutsideArena);
        }
        let bricks_bottom = self.bricks_bottom();
        if bricks_bottom >= self.paddle_y {
            return Err(ConfigError::BricksOverlapPaddle {
                bricks_bottom,
                paddle_y: self.paddle_y,
            });
        }
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}
