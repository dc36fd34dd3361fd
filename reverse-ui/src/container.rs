use std::ops::{Index, IndexMut};

use crate::control::{Control, ControlId, Signal};
use crate::input::{InputEvent, Key};
use crate::{FocusPolicy, Point, Theme, UiRenderer};

/// Owns every control of the application and routes raw input to them.
///
/// Insertion order is both paint order and scan order. Every handler walks
/// the whole sequence; an empty container turns them all into no-ops.
#[derive(Debug, Default)]
pub struct ControlContainer {
    controls: Vec<Control>,
    focus_policy: FocusPolicy,
}

impl ControlContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_focus_policy(focus_policy: FocusPolicy) -> Self {
        Self {
            controls: Vec::new(),
            focus_policy,
        }
    }

    pub fn focus_policy(&self) -> FocusPolicy {
        self.focus_policy
    }

    /// Registers a fully built control and takes ownership of it.
    pub fn add(&mut self, control: Control) -> ControlId {
        let id = ControlId(self.controls.len());
        log::debug!("Registered control {} at {:?}", id.index(), control.bounds());
        self.controls.push(control);
        id
    }

    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(id.0)
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ControlId, &Control)> {
        self.controls.iter().enumerate().map(|(i, c)| (ControlId(i), c))
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// The control keyboard input goes to: the first focused one in order.
    pub fn focused(&self) -> Option<ControlId> {
        self.controls.iter().position(Control::is_focused).map(ControlId)
    }

    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::Char(ch) => self.char_input(ch),
            InputEvent::KeyDown(key) => self.key_down(key),
        }
    }

    /// Recomputes hover for every control. Overlapping controls may all be hovered.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let point = Point::new(x, y);
        for control in &mut self.controls {
            if control.bounds().contains_point(point) {
                if !control.is_hovered() {
                    control.on_pointer_enter(point);
                }
            } else if control.is_hovered() {
                control.on_pointer_leave();
            }
        }
    }

    /// Presses and focuses every control under the point; focused controls elsewhere lose focus.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let point = Point::new(x, y);
        let topmost = match self.focus_policy {
            FocusPolicy::Overlapping => None,
            FocusPolicy::Exclusive => self
                .controls
                .iter()
                .rposition(|c| c.bounds().contains_point(point)),
        };

        for (i, control) in self.controls.iter_mut().enumerate() {
            let hit = control.bounds().contains_point(point);
            if hit {
                control.on_pointer_down(point);
            }

            let gains_focus = hit && topmost.is_none_or(|top| top == i);
            if gains_focus {
                if !control.is_focused() {
                    log::debug!("Control {} gained focus", i);
                }
                control.on_focus_gained();
            } else if control.is_focused() {
                log::debug!("Control {} lost focus", i);
                control.on_focus_lost();
            }
        }
    }

    /// Completes the click of every pressed control, wherever the pointer is now.
    pub fn pointer_up(&mut self) {
        for i in 0..self.controls.len() {
            if !self.controls[i].is_pressed() {
                continue;
            }
            if let Some(signal) = self.controls[i].on_pointer_up() {
                log::debug!("Control {} clicked", i);
                self.notify(i, signal);
            }
        }
    }

    pub fn char_input(&mut self, ch: char) {
        if let Some(i) = self.focused().map(ControlId::index) {
            if let Some(signal) = self.controls[i].on_char(ch) {
                self.notify(i, signal);
            }
        }
    }

    pub fn key_down(&mut self, key: Key) {
        if let Some(i) = self.focused().map(ControlId::index) {
            if let Some(signal) = self.controls[i].on_key_down(key) {
                self.notify(i, signal);
            }
        }
    }

    /// Full repaint in insertion order.
    pub fn paint(&self, ui: &mut dyn UiRenderer, theme: &Theme) {
        for control in &self.controls {
            control.paint(ui, theme);
        }
    }

    fn notify(&mut self, index: usize, signal: Signal) {
        let Some(mut callback) = self.controls[index].take_callback(signal) else {
            return;
        };
        log::trace!("Running {:?} callback of control {}", signal, index);
        callback(self);
        self.controls[index].restore_callback(signal, callback);
    }
}

impl Index<ControlId> for ControlContainer {
    type Output = Control;

    fn index(&self, id: ControlId) -> &Control {
        &self.controls[id.0]
    }
}

impl IndexMut<ControlId> for ControlContainer {
    fn index_mut(&mut self, id: ControlId) -> &mut Control {
        &mut self.controls[id.0]
    }
}
