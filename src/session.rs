//! Game loop driver
//!
//! A [`Session`] owns the simulation and runs it one tick at a time against a
//! [`Surface`]. [`run`] is the blocking, single-threaded loop used by the
//! native front end; the web front end calls [`Session::step`] from its
//! animation-frame accumulator instead.

use std::time::Duration;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::platform::Surface;
use crate::renderer::{render_frame, render_game_over};
use crate::settings::Settings;
use crate::sim::{LifeState, Outcome, Registry, RoundController, RoundDecision, TickInput, tick};

/// Frame pacing between ticks
pub trait Pacer {
    /// Block for `interval` (not cancellable)
    fn wait(&mut self, interval: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Result of one [`Session::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A tick ran; keep scheduling
    Running,
    /// The game has an outcome; no further ticks will run
    Finished(Outcome),
    /// The window was closed before the game ended
    Closed,
}

pub struct Session {
    config: GameConfig,
    settings: Settings,
    registry: Registry,
    rounds: RoundController,
    /// Simulation tick counter
    ticks: u64,
}

impl Session {
    /// Validate `config`, build the brick grid and paddle, and put the first
    /// ball in play
    pub fn new(config: GameConfig, settings: Settings) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut registry = Registry::new(&config)?;
        let mut rounds = RoundController::new(&config);
        rounds.start_life(&mut registry, &config);
        log::info!(
            "New game: {}x{} arena, {} bricks, {} lives",
            config.width,
            config.height,
            registry.bricks_remaining(),
            config.rounds
        );

        Ok(Self {
            config,
            settings,
            registry,
            rounds,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn rounds(&self) -> &RoundController {
        &self.rounds
    }

    pub fn outcome(&self) -> Outcome {
        self.rounds.state().outcome
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one tick: sample the pointer, advance the simulation, settle a
    /// finished life, and render. Does nothing once the game has an outcome.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Step {
        if self.rounds.state().is_finished() {
            return Step::Finished(self.outcome());
        }
        if !surface.is_open() {
            log::info!("Window closed after {} ticks", self.ticks);
            return Step::Closed;
        }

        let input = TickInput {
            pointer_x: surface.poll_pointer(),
        };
        self.ticks += 1;

        match tick(&mut self.registry, &self.config, &input) {
            LifeState::Flying => {
                render_frame(
                    surface,
                    &self.config,
                    &self.registry,
                    self.rounds.state(),
                    &self.settings,
                );
                Step::Running
            }
            ended @ (LifeState::Lost | LifeState::Cleared) => {
                match self.rounds.finish_life(ended, &mut self.registry) {
                    RoundDecision::NextLife => {
                        self.rounds.start_life(&mut self.registry, &self.config);
                        Step::Running
                    }
                    RoundDecision::Finished(outcome) => {
                        render_game_over(
                            surface,
                            &self.config,
                            &self.registry,
                            self.rounds.state(),
                            &self.settings,
                            outcome,
                        );
                        Step::Finished(outcome)
                    }
                }
            }
        }
    }
}

/// Drive `session` until the game ends, pacing each tick, then keep the
/// window responsive until it is closed.
///
/// Returns the outcome, or `None` if the window closed mid-game.
pub fn run<S, P>(session: &mut Session, surface: &mut S, pacer: &mut P) -> Option<Outcome>
where
    S: Surface + ?Sized,
    P: Pacer + ?Sized,
{
    let interval = session.config().frame_interval();

    let outcome = loop {
        match session.step(surface) {
            Step::Running => pacer.wait(interval),
            Step::Finished(outcome) => break outcome,
            Step::Closed => return None,
        }
    };

    // Game over: no more ticks, just keep pumping window events
    while surface.is_open() {
        surface.poll_pointer();
        pacer.wait(interval);
    }
    Some(outcome)
}
