//! Frame rendering
//!
//! Draws the registry onto a [`Surface`]. Rendering never mutates game state.

use crate::config::GameConfig;
use crate::platform::Surface;
use crate::settings::Settings;
use crate::sim::{Color, Outcome, Registry, RoundState};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// CSS color string
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Background and entity colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    high_contrast: bool,
}

impl Palette {
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.high_contrast {
            Self {
                background: Rgb::BLACK,
                foreground: Rgb::WHITE,
                high_contrast: true,
            }
        } else {
            Self {
                background: Rgb::WHITE,
                foreground: Rgb::BLACK,
                high_contrast: false,
            }
        }
    }

    pub fn color(&self, color: Color) -> Rgb {
        if self.high_contrast {
            return match color {
                Color::Red => Rgb(255, 64, 64),
                Color::Orange => Rgb(255, 170, 0),
                Color::Yellow => Rgb(255, 255, 0),
                Color::LightGreen => Rgb(0, 255, 128),
                Color::Cyan => Rgb(0, 255, 255),
                Color::Black => self.foreground,
            };
        }
        match color {
            Color::Red => Rgb(255, 0, 0),
            Color::Orange => Rgb(255, 165, 0),
            Color::Yellow => Rgb(255, 255, 0),
            Color::LightGreen => Rgb(144, 238, 144),
            Color::Cyan => Rgb(0, 255, 255),
            Color::Black => self.foreground,
        }
    }
}

/// Draw bricks, paddle, ball and the optional HUD, then present
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    config: &GameConfig,
    registry: &Registry,
    round: &RoundState,
    settings: &Settings,
) {
    draw_scene(surface, config, registry, round, settings);
    surface.present();
}

/// Draw the final scene with the end-of-game banner, then present
pub fn render_game_over<S: Surface + ?Sized>(
    surface: &mut S,
    config: &GameConfig,
    registry: &Registry,
    round: &RoundState,
    settings: &Settings,
    outcome: Outcome,
) {
    draw_scene(surface, config, registry, round, settings);
    if let Some(message) = outcome.message() {
        let palette = Palette::from_settings(settings);
        surface.draw_text(
            config.width / 2.0,
            config.height / 2.0,
            message,
            palette.foreground,
        );
    }
    surface.present();
}

fn draw_scene<S: Surface + ?Sized>(
    surface: &mut S,
    config: &GameConfig,
    registry: &Registry,
    round: &RoundState,
    settings: &Settings,
) {
    let palette = Palette::from_settings(settings);
    surface.clear(palette.background);

    for brick in registry.bricks() {
        surface.fill_rect(brick.rect, palette.color(brick.color));
    }
    surface.fill_rect(registry.paddle.rect, palette.color(Color::Black));
    if let Some(ball) = registry.ball() {
        surface.fill_oval(ball.rect, palette.color(Color::Black));
    }

    if settings.show_hud {
        surface.draw_text(
            config.width / 2.0,
            config.height - config.paddle_height / 2.0,
            &hud_line(round, registry),
            palette.foreground,
        );
    }
}

/// Status line: lives left (including the one in play) and bricks left
pub fn hud_line(round: &RoundState, registry: &Registry) -> String {
    let lives = round.lives_remaining() + u32::from(round.running);
    format!(
        "Lives: {}  Bricks: {}",
        lives,
        registry.bricks_remaining()
    )
}
