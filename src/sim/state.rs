//! Entity registry and core simulation types
//!
//! The registry is the single source of truth for what exists right now:
//! the live bricks, the paddle, and the ball of the current life.

use glam::Vec2;

use super::geometry::{BBox, Color, ball_rect_centered, brick_rect, color_for_row, paddle_rect};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Unique brick identity (creation order, starting at 1)
pub type BrickId = u32;

/// State of the current life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    /// Ball in play
    Flying,
    /// Ball left through the bottom wall
    Lost,
    /// Every brick destroyed
    Cleared,
}

impl LifeState {
    pub fn is_over(&self) -> bool {
        !matches!(self, LifeState::Flying)
    }
}

/// A brick entity
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub id: BrickId,
    pub row: u32,
    pub col: u32,
    pub rect: BBox,
    pub color: Color,
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub rect: BBox,
}

impl Paddle {
    /// Move the paddle so its left edge sits at `x` (clamped to the arena)
    pub fn move_to(&mut self, config: &GameConfig, x: f32) {
        self.rect = paddle_rect(config, x);
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.rect.x0
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub rect: BBox,
    /// Displacement per tick (change_x, change_y)
    pub vel: Vec2,
}

impl Ball {
    /// Advance one tick along the current velocity
    pub fn advance(&mut self) {
        self.rect = self.rect.translated(self.vel);
    }

    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn reflect_y(&mut self) {
        self.vel.y = -self.vel.y;
    }
}

/// Live bricks, paddle and ball
#[derive(Debug, Clone)]
pub struct Registry {
    /// Live bricks (sorted by id for deterministic iteration)
    bricks: Vec<Brick>,
    pub paddle: Paddle,
    ball: Option<Ball>,
    /// Next brick ID
    next_id: BrickId,
}

impl Registry {
    /// Create a registry with a full brick grid and a paddle at the left edge.
    /// No ball is in play until [`Registry::spawn_ball`] is called.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let mut registry = Self {
            bricks: Vec::with_capacity(config.brick_count()),
            paddle: Self::spawn_paddle(config),
            ball: None,
            next_id: 1,
        };
        let ids = registry.spawn_bricks(config)?;
        log::debug!("Spawned {} bricks", ids.len());
        Ok(registry)
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> BrickId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fill the grid row by row, returning the ids created. The grid is laid
    /// out once per game; spawning over live bricks is a logic error.
    pub fn spawn_bricks(&mut self, config: &GameConfig) -> Result<Vec<BrickId>, ConfigError> {
        debug_assert!(
            self.bricks.is_empty(),
            "spawn_bricks: {} bricks already live",
            self.bricks.len()
        );
        let mut ids = Vec::with_capacity(config.brick_count());
        for row in 0..config.brick_rows {
            let color = color_for_row(config, row)?;
            for col in 0..config.brick_cols {
                let id = self.next_entity_id();
                self.bricks.push(Brick {
                    id,
                    row,
                    col,
                    rect: brick_rect(config, row, col),
                    color,
                });
                ids.push(id);
            }
        }
        Ok(ids)
    }

    /// Paddle at its starting position (left edge at 0)
    pub fn spawn_paddle(config: &GameConfig) -> Paddle {
        Paddle {
            rect: paddle_rect(config, 0.0),
        }
    }

    /// Put a fresh ball at the center of the arena with the initial velocity,
    /// replacing any ball still in play
    pub fn spawn_ball(&mut self, config: &GameConfig) -> &Ball {
        self.ball.insert(Ball {
            rect: ball_rect_centered(config),
            vel: config.ball_velocity,
        })
    }

    pub fn remove_ball(&mut self) -> Option<Ball> {
        self.ball.take()
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    pub fn ball_mut(&mut self) -> Option<&mut Ball> {
        self.ball.as_mut()
    }

    /// Remove a live brick. Destroying a brick that is not live is a logic error.
    pub fn destroy_brick(&mut self, id: BrickId) -> Option<Brick> {
        match self.bricks.iter().position(|b| b.id == id) {
            Some(index) => Some(self.bricks.remove(index)),
            None => {
                debug_assert!(false, "destroy_brick: brick {id} is not live");
                log::warn!("Ignoring destroy of missing brick {}", id);
                None
            }
        }
    }

    /// Live bricks in creation order
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn brick_ids(&self) -> impl Iterator<Item = BrickId> + '_ {
        self.bricks.iter().map(|b| b.id)
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.len()
    }

    pub fn all_bricks_destroyed(&self) -> bool {
        self.bricks.is_empty()
    }
}
