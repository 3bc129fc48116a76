//! Configuration errors
//!
//! Everything here is fatal and reported before a surface is opened.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveArena { width: f32, height: f32 },
    EmptyBrickGrid { rows: u32, cols: u32 },
    TooManyRows { rows: u32, max: u32 },
    NegativeSpacing(f32),
    NegativeBrickStart(f32),
    NonPositiveBrickWidth(f32),
    NonPositiveSize { what: &'static str, value: f32 },
    PaddleOutsideArena,
    BricksOverlapPaddle { bricks_bottom: f32, paddle_y: f32 },
    /// Initial ball velocity is zero or not finite
    InvalidBallVelocity { x: f32, y: f32 },
    NoRounds,
    ZeroTickRate,
    /// A row outside the configured grid was asked for a color
    InvalidRow { row: u32, rows: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveArena { width, height } => {
                write!(f, "arena must be positive, got {width}x{height}")
            }
            ConfigError::EmptyBrickGrid { rows, cols } => {
                write!(f, "brick grid is empty ({rows} rows x {cols} cols)")
            }
            ConfigError::TooManyRows { rows, max } => {
                write!(f, "{rows} brick rows requested, colors exist for {max}")
            }
            ConfigError::NegativeSpacing(spacing) => {
                write!(f, "brick spacing must not be negative, got {spacing}")
            }
            ConfigError::NegativeBrickStart(y) => {
                write!(f, "first brick row must start inside the arena, got y={y}")
            }
            ConfigError::NonPositiveBrickWidth(width) => {
                write!(f, "computed brick width {width} is not positive")
            }
            ConfigError::NonPositiveSize { what, value } => {
                write!(f, "{what} must be positive, got {value}")
            }
            ConfigError::PaddleOutsideArena => write!(f, "paddle does not fit inside the arena"),
            ConfigError::BricksOverlapPaddle {
                bricks_bottom,
                paddle_y,
            } => write!(
                f,
                "bricks reach y={bricks_bottom}, at or below the paddle at y={paddle_y}"
            ),
            ConfigError::InvalidBallVelocity { x, y } => {
                write!(f, "ball velocity must be finite and non-zero, got ({x}, {y})")
            }
            ConfigError::NoRounds => write!(f, "at least one round is required"),
            ConfigError::ZeroTickRate => write!(f, "tick rate must be non-zero"),
            ConfigError::InvalidRow { row, rows } => {
                write!(f, "row {row} is outside the {rows}-row brick grid")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
