pub mod config;
pub mod container;
pub mod control;
pub mod input;
pub mod types;
pub mod widgets;

pub use config::{FocusPolicy, Theme, UiConfig};
pub use container::ControlContainer;
pub use control::{Callback, Control, ControlId, InteractionState, Signal};
pub use input::{InputEvent, Key};
pub use types::{Color, Point, Rect};
pub use widgets::{Button, Label, TextBox, Widget};

/// Drawing capability the controls paint through. The host owns its lifecycle
/// and must have it ready before the first paint.
pub trait UiRenderer {
    /// Filled rectangle.
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Rectangle outline.
    fn draw_border(&mut self, rect: Rect, color: Color, width: f32);

    /// Text centered horizontally and vertically inside `rect`, not clipped.
    fn draw_text(&mut self, text: &str, rect: Rect, color: Color, size: f32);
}

/// Everything a widget needs while painting itself.
pub struct PaintContext<'a> {
    pub ui: &'a mut dyn UiRenderer,
    pub theme: &'a Theme,
    pub bounds: Rect,
    pub state: InteractionState,
}

pub trait WidgetRender {
    fn render(&self, ctx: &mut PaintContext);
}
