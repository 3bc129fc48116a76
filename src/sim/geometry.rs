//! Layout math for bricks, paddle and ball
//!
//! Pure functions only. Everything is an axis-aligned box in arena space
//! with the origin at the top-left corner and y growing downward.

use glam::Vec2;

use crate::config::GameConfig;
use crate::consts::MAX_ROWS;
use crate::error::ConfigError;

/// Axis-aligned bounding box (x0, y0) - (x1, y1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BBox {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box of the given size with its top-left corner at `origin`
    pub fn from_origin(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, origin.x + size.x, origin.y + size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y0
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x0, self.y0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Same box shifted by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::from_origin(self.origin() + delta, self.size())
    }

    /// Same box with its top-left corner moved to `origin`
    pub fn moved_to(&self, origin: Vec2) -> Self {
        Self::from_origin(origin, self.size())
    }

    /// Inclusive overlap test: boxes that share only an edge still overlap
    pub fn overlaps(&self, other: &BBox) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }

    /// Strict overlap (positive area in common)
    pub fn intersects_interior(&self, other: &BBox) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    pub fn contained_in(&self, outer: &BBox) -> bool {
        self.x0 >= outer.x0 && self.y0 >= outer.y0 && self.x1 <= outer.x1 && self.y1 <= outer.y1
    }
}

/// Brick colors by row pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    LightGreen,
    Cyan,
    /// Paddle, ball and text
    Black,
}

/// Bounding box of the brick at (`row`, `col`)
pub fn brick_rect(config: &GameConfig, row: u32, col: u32) -> BBox {
    let width = config.brick_width();
    let x0 = col as f32 * width + (col + 1) as f32 * config.spacing;
    let y0 = row as f32 * (config.brick_height + config.spacing) + config.brick_start_y;
    BBox::new(x0, y0, x0 + width, y0 + config.brick_height)
}

/// Color of a brick row, two rows per color from the top down
pub fn color_for_row(config: &GameConfig, row: u32) -> Result<Color, ConfigError> {
    if row >= config.brick_rows || row >= MAX_ROWS {
        return Err(ConfigError::InvalidRow {
            row,
            rows: config.brick_rows,
        });
    }
    Ok(match row {
        0 | 1 => Color::Red,
        2 | 3 => Color::Orange,
        4 | 5 => Color::Yellow,
        6 | 7 => Color::LightGreen,
        _ => Color::Cyan,
    })
}

/// Clamp a desired paddle left edge into [0, W - paddle_width]
///
/// Non-finite input pins the paddle to the nearest valid edge.
pub fn clamp_paddle_x(config: &GameConfig, x: f32) -> f32 {
    let max_x = config.width - config.paddle_width;
    // max/min rather than clamp: NaN collapses to 0 instead of propagating
    x.max(0.0).min(max_x)
}

/// Paddle box with its left edge at `x` (clamped)
pub fn paddle_rect(config: &GameConfig, x: f32) -> BBox {
    let x0 = clamp_paddle_x(config, x);
    BBox::new(
        x0,
        config.paddle_y,
        x0 + config.paddle_width,
        config.paddle_y + config.paddle_height,
    )
}

/// Ball box centered in the arena
pub fn ball_rect_centered(config: &GameConfig) -> BBox {
    let half = config.ball_size / 2.0;
    let cx = config.width / 2.0;
    let cy = config.height / 2.0;
    BBox::new(cx - half, cy - half, cx + half, cy + half)
}

/// The arena itself as a box
pub fn arena_rect(config: &GameConfig) -> BBox {
    BBox::new(0.0, 0.0, config.width, config.height)
}
