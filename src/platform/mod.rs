//! Platform abstraction layer
//!
//! A [`Surface`] is the window the game draws into: flat primitives, a
//! pointer position, and an event pump. Front ends:
//! - `terminal`: crossterm-backed terminal window (native)
//! - `web`: HTML canvas 2D context (wasm32)
//! - `headless`: scripted surface for tests

use crate::renderer::Rgb;
use crate::sim::BBox;

#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub mod headless;

/// Drawing and input capabilities the game needs from its window
///
/// All coordinates are arena units; the surface scales them to whatever
/// it actually draws on.
pub trait Surface {
    /// False once the window has been closed
    fn is_open(&self) -> bool;

    /// Process pending window events and return the pointer x position
    /// relative to the arena's left edge, if known
    fn poll_pointer(&mut self) -> Option<f32>;

    /// Start a new frame filled with `background`
    fn clear(&mut self, background: Rgb);

    fn fill_rect(&mut self, rect: BBox, color: Rgb);

    fn fill_oval(&mut self, rect: BBox, color: Rgb);

    /// Draw text centered on (`x`, `y`)
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb);

    /// Make everything drawn since `clear` visible
    fn present(&mut self);
}
