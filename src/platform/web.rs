//! HTML canvas window (wasm32)
//!
//! Draws with the canvas 2D context on a canvas sized one pixel per arena
//! unit. A `mousemove` listener records the pointer's offset from the
//! canvas' left edge.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::Surface;
use crate::consts::TITLE;
use crate::renderer::Rgb;
use crate::sim::BBox;

const FONT: &str = "20px Helvetica";

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pointer_x: Rc<Cell<Option<f32>>>,
}

impl CanvasSurface {
    /// Attach to the canvas with id `canvas_id`, sized to the arena
    pub fn attach(canvas_id: &str, arena_w: f32, arena_h: f32) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        document.set_title(TITLE);
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        canvas.set_width(arena_w as u32);
        canvas.set_height(arena_h as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;
        ctx.set_font(FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");

        let surface = Self {
            canvas,
            ctx,
            pointer_x: Rc::new(Cell::new(None)),
        };
        surface.listen_for_pointer()?;
        log::info!("Canvas surface {}x{}", arena_w, arena_h);
        Ok(surface)
    }

    fn listen_for_pointer(&self) -> Result<(), JsValue> {
        let pointer_x = self.pointer_x.clone();
        let canvas = self.canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            // CSS may stretch the canvas; map back to canvas pixels
            let client_w = canvas.client_width().max(1) as f32;
            let ratio = canvas.width() as f32 / client_w;
            pointer_x.set(Some(event.offset_x() as f32 * ratio));
        });
        self.canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn set_color(&self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
    }
}

impl Surface for CanvasSurface {
    /// A page cannot be closed out from under a running script
    fn is_open(&self) -> bool {
        true
    }

    fn poll_pointer(&mut self) -> Option<f32> {
        self.pointer_x.get()
    }

    fn clear(&mut self, background: Rgb) {
        self.set_color(background);
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_rect(&mut self, rect: BBox, color: Rgb) {
        self.set_color(color);
        self.ctx.fill_rect(
            rect.x0 as f64,
            rect.y0 as f64,
            rect.width() as f64,
            rect.height() as f64,
        );
    }

    fn fill_oval(&mut self, rect: BBox, color: Rgb) {
        let center = rect.center();
        self.set_color(color);
        self.ctx.begin_path();
        let drawn = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            rect.width() as f64 / 2.0,
            rect.height() as f64 / 2.0,
            0.0,
            0.0,
            std::f64::consts::TAU,
        );
        if let Err(e) = drawn {
            log::warn!("ellipse failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb) {
        self.set_color(color);
        if let Err(e) = self
            .ctx
            .fill_text(text, x as f64, y as f64)
        {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    /// The canvas shows draws immediately
    fn present(&mut self) {}
}
