//! Fixed timestep simulation tick
//!
//! One call advances the current life by exactly one tick.

use super::collision::{apply, detect_collisions};
use super::geometry::clamp_paddle_x;
use super::state::{LifeState, Registry};
use crate::config::GameConfig;

/// Input sampled for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer x relative to the arena's left edge, if the pointer is known
    pub pointer_x: Option<f32>,
}

impl TickInput {
    pub fn pointer(x: f32) -> Self {
        Self { pointer_x: Some(x) }
    }
}

/// Advance the current life by one tick
///
/// Order: move paddle, move ball, resolve collisions, then check for a
/// cleared grid before checking for a lost ball. A life that ends is never
/// advanced again by the caller.
pub fn tick(registry: &mut Registry, config: &GameConfig, input: &TickInput) -> LifeState {
    // Pointer drives the paddle center
    if let Some(pointer_x) = input.pointer_x {
        let x = clamp_paddle_x(config, pointer_x - config.paddle_width / 2.0);
        registry.paddle.move_to(config, x);
    }

    let Some(ball) = registry.ball_mut() else {
        debug_assert!(false, "tick: no ball in play");
        log::warn!("Tick without a ball in play, treating the life as lost");
        return LifeState::Lost;
    };
    ball.advance();

    let event = detect_collisions(registry, config);
    apply(&event, registry);

    if registry.all_bricks_destroyed() {
        return LifeState::Cleared;
    }

    if event.ball_lost() {
        registry.remove_ball();
        return LifeState::Lost;
    }

    LifeState::Flying
}
