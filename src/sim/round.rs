//! Round controller
//!
//! Hands out up to `rounds` lives. Bricks persist across lives; only the
//! ball and its velocity are reset.

use super::state::{LifeState, Registry};
use crate::config::GameConfig;

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Undetermined,
    Win,
    Loss,
}

impl Outcome {
    /// End-of-game banner text
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Undetermined => None,
            Outcome::Win => Some("YOU WIN!"),
            Outcome::Loss => Some("YOU LOST!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    /// Current life (0-based)
    pub round: u32,
    pub total_rounds: u32,
    /// A life is in progress
    pub running: bool,
    pub outcome: Outcome,
}

impl RoundState {
    pub fn is_finished(&self) -> bool {
        self.outcome != Outcome::Undetermined
    }

    /// Lives not yet started
    pub fn lives_remaining(&self) -> u32 {
        let used = self.round + u32::from(self.running || self.is_finished());
        self.total_rounds.saturating_sub(used)
    }
}

/// What happens after a life ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundDecision {
    NextLife,
    Finished(Outcome),
}

#[derive(Debug, Clone)]
pub struct RoundController {
    state: RoundState,
}

impl RoundController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: RoundState {
                round: 0,
                total_rounds: config.rounds,
                running: false,
                outcome: Outcome::Undetermined,
            },
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Spawn a fresh ball for the current life
    pub fn start_life(&mut self, registry: &mut Registry, config: &GameConfig) {
        debug_assert!(!self.state.is_finished(), "start_life after game over");
        debug_assert!(!self.state.running, "start_life while a life is running");

        registry.spawn_ball(config);
        self.state.running = true;
        log::info!(
            "Life {}/{} started ({} bricks left)",
            self.state.round + 1,
            self.state.total_rounds,
            registry.bricks_remaining()
        );
    }

    /// Record the end of the running life and decide what comes next
    pub fn finish_life(&mut self, ended: LifeState, registry: &mut Registry) -> RoundDecision {
        debug_assert!(ended.is_over(), "finish_life with a ball still flying");
        self.state.running = false;
        registry.remove_ball();

        log::info!(
            "Life {}/{} ended: {:?} ({} bricks left)",
            self.state.round + 1,
            self.state.total_rounds,
            ended,
            registry.bricks_remaining()
        );

        let outcome = if registry.all_bricks_destroyed() {
            Outcome::Win
        } else if self.state.round + 1 >= self.state.total_rounds {
            Outcome::Loss
        } else {
            self.state.round += 1;
            return RoundDecision::NextLife;
        };

        self.state.outcome = outcome;
        log::info!("Game over: {:?}", outcome);
        RoundDecision::Finished(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickInput, tick};
    use glam::Vec2;

    fn setup(rounds: u32) -> (GameConfig, Registry, RoundController) {
        let config = GameConfig {
            rounds,
            ..Default::default()
        };
        let registry = Registry::new(&config).unwrap();
        let rounds = RoundController::new(&config);
        (config, registry, rounds)
    }

    /// Run the current life with the paddle parked at the left edge
    fn play_out(registry: &mut Registry, config: &GameConfig) -> LifeState {
        loop {
            let state = tick(registry, config, &TickInput::default());
            if state.is_over() {
                return state;
            }
        }
    }

    #[test]
    fn test_destroying_every_brick_wins() {
        let (config, mut registry, mut rounds) = setup(2);
        assert_eq!(registry.bricks_remaining(), 50);
        rounds.start_life(&mut registry, &config);

        let mut ended = LifeState::Flying;
        while !ended.is_over() {
            // Aim the ball so the next tick lands on the first live brick
            let target = registry.bricks()[0].rect;
            let ball = registry.ball_mut().unwrap();
            ball.vel = Vec2::new(10.0, -10.0);
            ball.rect = ball.rect.moved_to(target.origin() - ball.vel);
            ended = tick(&mut registry, &config, &TickInput::default());
        }

        assert_eq!(ended, LifeState::Cleared);
        assert!(registry.all_bricks_destroyed());
        assert_eq!(
            rounds.finish_life(ended, &mut registry),
            RoundDecision::Finished(Outcome::Win)
        );
        assert_eq!(rounds.state().outcome, Outcome::Win);
        assert_eq!(rounds.state().round, 0);
        assert!(!rounds.state().running);
    }

    #[test]
    fn test_second_life_gets_fresh_ball_and_same_bricks() {
        let (config, mut registry, mut rounds) = setup(2);
        registry.destroy_brick(3);

        rounds.start_life(&mut registry, &config);
        let ended = play_out(&mut registry, &config);
        assert_eq!(ended, LifeState::Lost);
        assert_eq!(
            rounds.finish_life(ended, &mut registry),
            RoundDecision::NextLife
        );
        assert_eq!(rounds.state().round, 1);
        assert_eq!(rounds.state().outcome, Outcome::Undetermined);

        rounds.start_life(&mut registry, &config);
        let ball = registry.ball().unwrap();
        assert_eq!(ball.rect.origin(), Vec2::new(230.0, 320.0));
        assert_eq!(ball.vel, Vec2::new(10.0, 10.0));
        assert_eq!(registry.bricks_remaining(), 49);
        assert!(registry.brick_ids().all(|id| id != 3));
    }

    #[test]
    fn test_losing_last_life_is_loss() {
        let (config, mut registry, mut rounds) = setup(2);
        let mut lives_started = 0;

        let outcome = loop {
            rounds.start_life(&mut registry, &config);
            lives_started += 1;
            let ended = play_out(&mut registry, &config);
            match rounds.finish_life(ended, &mut registry) {
                RoundDecision::NextLife => continue,
                RoundDecision::Finished(outcome) => break outcome,
            }
        };

        assert_eq!(outcome, Outcome::Loss);
        assert_eq!(lives_started, 2);
        assert!(rounds.state().is_finished());
        assert_eq!(rounds.state().lives_remaining(), 0);
        assert_eq!(registry.bricks_remaining(), 50);
    }

    #[test]
    fn test_lives_remaining_counts_down() {
        let (config, mut registry, mut rounds) = setup(3);
        assert_eq!(rounds.state().lives_remaining(), 3);
        rounds.start_life(&mut registry, &config);
        assert_eq!(rounds.state().lives_remaining(), 2);
        rounds.finish_life(LifeState::Lost, &mut registry);
        assert_eq!(rounds.state().lives_remaining(), 2);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Win.message(), Some("YOU WIN!"));
        assert_eq!(Outcome::Loss.message(), Some("YOU LOST!"));
        assert_eq!(Outcome::Undetermined.message(), None);
    }
}
