use std::fmt;

use crate::container::ControlContainer;
use crate::input::Key;
use crate::widgets::{Button, Label, TextBox, Widget};
use crate::{PaintContext, Point, Rect, Theme, UiRenderer, WidgetRender};

/// User callback. It receives the container so it can read and update other controls.
pub type Callback = Box<dyn FnMut(&mut ControlContainer)>;

/// Handle to a registered control, valid for the lifetime of its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(pub(crate) usize);

impl ControlId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
}

/// What a hook asks the container to notify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Click,
    Change,
}

pub struct Control {
    bounds: Rect,
    state: InteractionState,
    on_click: Option<Callback>,
    on_change: Option<Callback>,
    widget: Widget,
}

impl Control {
    pub fn new(bounds: Rect, widget: impl Into<Widget>) -> Self {
        Self {
            bounds,
            state: InteractionState::default(),
            on_click: None,
            on_change: None,
            widget: widget.into(),
        }
    }

    pub fn label(bounds: Rect, text: impl Into<String>) -> Self {
        Self::new(bounds, Label::new(text))
    }

    pub fn text_box(bounds: Rect) -> Self {
        Self::new(bounds, TextBox::new())
    }

    pub fn button(bounds: Rect) -> Self {
        Self::new(bounds, Button::new())
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_hovered(&self) -> bool {
        self.state.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.state.pressed
    }

    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut Widget {
        &mut self.widget
    }

    pub fn as_label(&self) -> Option<&Label> {
        match &self.widget {
            Widget::Label(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match &mut self.widget {
            Widget::Label(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_text_box(&self) -> Option<&TextBox> {
        match &self.widget {
            Widget::TextBox(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match &self.widget {
            Widget::Button(b) => Some(b),
            _ => None,
        }
    }

    /// Replaces any click callback registered before.
    pub fn when_click(&mut self, f: impl FnMut(&mut ControlContainer) + 'static) {
        self.on_click = Some(Box::new(f));
    }

    /// Replaces any change callback registered before.
    pub fn when_change(&mut self, f: impl FnMut(&mut ControlContainer) + 'static) {
        self.on_change = Some(Box::new(f));
    }

    pub fn on_pointer_enter(&mut self, _point: Point) {
        self.state.hovered = true;
    }

    pub fn on_pointer_down(&mut self, _point: Point) {
        self.state.pressed = true;
    }

    pub fn on_focus_gained(&mut self) {
        self.state.focused = true;
    }

    pub fn on_key_down(&mut self, key: Key) -> Option<Signal> {
        match &mut self.widget {
            Widget::TextBox(t) => t.on_key_down(key).then_some(Signal::Change),
            _ => None,
        }
    }

    pub fn on_char(&mut self, ch: char) -> Option<Signal> {
        match &mut self.widget {
            Widget::TextBox(t) => t.on_char(ch).then_some(Signal::Change),
            _ => None,
        }
    }

    /// Completes a click: clears `pressed` and asks for the click callback.
    pub fn on_pointer_up(&mut self) -> Option<Signal> {
        self.state.pressed = false;
        Some(Signal::Click)
    }

    pub fn on_pointer_leave(&mut self) {
        self.state.hovered = false;
    }

    pub fn on_focus_lost(&mut self) {
        self.state.focused = false;
    }

    pub fn paint(&self, ui: &mut dyn UiRenderer, theme: &Theme) {
        let mut ctx = PaintContext {
            ui,
            theme,
            bounds: self.bounds,
            state: self.state,
        };
        self.widget.render(&mut ctx);
    }

    pub(crate) fn take_callback(&mut self, signal: Signal) -> Option<Callback> {
        match signal {
            Signal::Click => self.on_click.take(),
            Signal::Change => self.on_change.take(),
        }
    }

    /// Puts a callback back after it ran, unless it registered a replacement meanwhile.
    pub(crate) fn restore_callback(&mut self, signal: Signal, callback: Callback) {
        let slot = match signal {
            Signal::Click => &mut self.on_click,
            Signal::Change => &mut self.on_change,
        };
        if slot.is_none() {
            *slot = Some(callback);
        }
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .field("on_click", &self.on_click.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("widget", &self.widget)
            .finish()
    }
}
