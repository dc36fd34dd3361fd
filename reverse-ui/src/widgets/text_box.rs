use crate::input::Key;
use crate::{PaintContext, WidgetRender};

/// Single-line editable text. There is no caret: edits always apply at the end.
#[derive(Debug, Clone, Default)]
pub struct TextBox {
    text: String,
}

impl TextBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends `ch`. Backspace on the character path is ignored; it is handled by
    /// [`TextBox::on_key_down`]. Returns whether the text changed.
    pub fn on_char(&mut self, ch: char) -> bool {
        if ch == Key::BACKSPACE_CHAR {
            return false;
        }
        self.text.push(ch);
        true
    }

    /// Removes the last character on backspace. Returns whether the text changed.
    pub fn on_key_down(&mut self, key: Key) -> bool {
        key == Key::Backspace && self.text.pop().is_some()
    }
}

impl WidgetRender for TextBox {
    fn render(&self, ctx: &mut PaintContext) {
        let theme = ctx.theme;
        ctx.ui.draw_border(ctx.bounds, theme.text_box_border, theme.border_width);
        // not clipped: long text spills past the border
        ctx.ui.draw_text(&self.text, ctx.bounds, theme.text, theme.font_size);
    }
}
