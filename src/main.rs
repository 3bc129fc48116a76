//! Brick Breaker - entry points
//!
//! Native builds play in the terminal; wasm builds draw on the page's canvas.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use brick_breaker::consts::MAX_SUBSTEPS;
    use brick_breaker::platform::web::CanvasSurface;
    use brick_breaker::{GameConfig, Session, Settings, Step};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    struct Game {
        session: Session,
        surface: CanvasSurface,
        /// Fixed timestep accumulator (seconds)
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        /// Run as many fixed ticks as the elapsed time allows. Returns false
        /// once the game is over.
        fn update(&mut self, dt: f32) -> bool {
            let tick_dt = self.session.config().tick_dt();
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= tick_dt && substeps < MAX_SUBSTEPS {
                match self.session.step(&mut self.surface) {
                    Step::Running => {}
                    Step::Finished(outcome) => {
                        log::info!("Game over: {:?} after {} ticks", outcome, self.session.ticks());
                        return false;
                    }
                    Step::Closed => return false,
                }
                self.accumulator -= tick_dt;
                substeps += 1;
            }

            // Drop the backlog after a long stall (tab in background)
            if substeps == MAX_SUBSTEPS {
                self.accumulator = 0.0;
            }
            true
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Brick Breaker starting...");

        let config = GameConfig::default();
        let surface = CanvasSurface::attach("canvas", config.width, config.height)?;
        let session = Session::new(config, Settings::load())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            session,
            surface,
            accumulator: 0.0,
            last_time: 0.0,
        }));
        request_animation_frame(game);

        log::info!("Brick Breaker running!");
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window; stopping");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                g.session.config().tick_dt()
            };
            g.last_time = time;

            g.update(dt)
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use brick_breaker::platform::terminal::TerminalSurface;
    use brick_breaker::session::{self, ThreadPacer};
    use brick_breaker::{GameConfig, Session, Settings};
    use std::process::ExitCode;

    env_logger::init();
    log::info!("Brick Breaker (terminal) starting...");

    let config = GameConfig::default();
    let mut game = match Session::new(config.clone(), Settings::load()) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            eprintln!("brick-breaker: invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut surface = match TerminalSurface::new(config.width, config.height) {
        Ok(surface) => surface,
        Err(e) => {
            log::error!("Could not open terminal: {}", e);
            eprintln!("brick-breaker: could not open terminal: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = session::run(&mut game, &mut surface, &mut ThreadPacer);
    // Restore the terminal before printing
    drop(surface);

    match outcome.and_then(|o| o.message()) {
        Some(message) => {
            log::info!("Game over after {} ticks: {}", game.ticks(), message);
            println!("{message}");
        }
        None => log::info!("Window closed before the game ended"),
    }
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}
