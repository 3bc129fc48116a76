//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one velocity step)
//! - Stable iteration order (bricks by creation id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod round;
pub mod state;
pub mod tick;

pub use collision::{CollisionEvent, CollisionTarget, WallSide, apply, detect_collisions};
pub use geometry::{BBox, Color, ball_rect_centered, brick_rect, clamp_paddle_x, color_for_row, paddle_rect};
pub use round::{Outcome, RoundController, RoundDecision, RoundState};
pub use state::{Ball, Brick, BrickId, LifeState, Paddle, Registry};
pub use tick::{TickInput, tick};
