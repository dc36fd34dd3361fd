#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use reverse_ui::{Color, ControlContainer, ControlId, Rect, UiRenderer};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect(Rect, Color),
    Border(Rect, Color),
    Text(String, Rect),
}

/// Renderer that only records what it was asked to draw.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

impl UiRenderer for Recorder {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Rect(rect, color));
    }

    fn draw_border(&mut self, rect: Rect, color: Color, _width: f32) {
        self.ops.push(DrawOp::Border(rect, color));
    }

    fn draw_text(&mut self, text: &str, rect: Rect, _color: Color, _size: f32) {
        self.ops.push(DrawOp::Text(text.to_string(), rect));
    }
}

/// Registers a callback on `id` that counts how often it fires.
pub fn count_clicks(ui: &mut ControlContainer, id: ControlId) -> Rc<Cell<u32>> {
    let counter = Rc::new(Cell::new(0));
    let c = counter.clone();
    ui[id].when_click(move |_| c.set(c.get() + 1));
    counter
}

pub fn count_changes(ui: &mut ControlContainer, id: ControlId) -> Rc<Cell<u32>> {
    let counter = Rc::new(Cell::new(0));
    let c = counter.clone();
    ui[id].when_change(move |_| c.set(c.get() + 1));
    counter
}
