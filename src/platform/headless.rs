//! Scripted surface for tests
//!
//! Replays pointer positions, records draw calls per frame, and closes
//! itself after a fixed number of polls.

use std::collections::VecDeque;

use super::Surface;
use crate::renderer::Rgb;
use crate::sim::BBox;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect(BBox, Rgb),
    Oval(BBox, Rgb),
    Text(String, Rgb),
}

pub struct ScriptedSurface {
    pointer: VecDeque<Option<f32>>,
    /// Last pointer value, repeated once the script runs out
    last_pointer: Option<f32>,
    polls_left: usize,
    polls: usize,
    current: Vec<DrawCall>,
    frames: Vec<Vec<DrawCall>>,
}

impl ScriptedSurface {
    pub fn new(pointer: Vec<Option<f32>>, max_polls: usize) -> Self {
        Self {
            pointer: pointer.into(),
            last_pointer: None,
            polls_left: max_polls,
            polls: 0,
            current: Vec::new(),
            frames: Vec::new(),
        }
    }

    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn presented(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&[DrawCall]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Every text drawn in presented frames
    pub fn texts(&self) -> Vec<String> {
        self.frames
            .iter()
            .flatten()
            .filter_map(|call| match call {
                DrawCall::Text(text, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for ScriptedSurface {
    fn is_open(&self) -> bool {
        self.polls_left > 0
    }

    fn poll_pointer(&mut self) -> Option<f32> {
        self.polls += 1;
        self.polls_left = self.polls_left.saturating_sub(1);
        if let Some(next) = self.pointer.pop_front() {
            self.last_pointer = next;
        }
        self.last_pointer
    }

    fn clear(&mut self, _background: Rgb) {
        self.current.clear();
    }

    fn fill_rect(&mut self, rect: BBox, color: Rgb) {
        self.current.push(DrawCall::Rect(rect, color));
    }

    fn fill_oval(&mut self, rect: BBox, color: Rgb) {
        self.current.push(DrawCall::Oval(rect, color));
    }

    fn draw_text(&mut self, _x: f32, _y: f32, text: &str, color: Rgb) {
        self.current.push(DrawCall::Text(text.to_string(), color));
    }

    fn present(&mut self) {
        self.frames.push(std::mem::take(&mut self.current));
    }
}
