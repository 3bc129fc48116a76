//! Brick Breaker - classic Breakout in a bounded rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (layout, entities, collisions, rounds)
//! - `session`: Fixed-timestep driver tying input, simulation and rendering together
//! - `renderer`: Draws the registry onto a surface
//! - `platform`: Terminal/browser surfaces (windowing, drawing, pointer)
//! - `config`: Immutable game constants with validation

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use session::{Pacer, Session, Step, ThreadPacer};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const TITLE: &str = "Brick Breaker";

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 500.0;
    pub const CANVAS_HEIGHT: f32 = 680.0;

    /// Brick grid
    pub const N_ROWS: u32 = 5;
    pub const N_COLS: u32 = 10;
    pub const SPACING: f32 = 5.0;
    pub const BRICK_START_Y: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 20.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 40.0;
    /// Ball displacement per tick on each axis
    pub const BALL_SPEED: f32 = 10.0;

    /// Paddle sits 40 px above the bottom edge
    pub const PADDLE_OFFSET_FROM_BOTTOM: f32 = 40.0;
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = BRICK_HEIGHT;

    /// Number of lives per game
    pub const N_ROUNDS: u32 = 2;

    /// Simulation rate (one tick every 1/30 s)
    pub const TICKS_PER_SECOND: u32 = 30;
    /// Maximum ticks per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Rows the color mapping covers
    pub const MAX_ROWS: u32 = 10;
}
