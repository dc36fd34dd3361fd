use crate::{PaintContext, WidgetRender};

/// Static text. Only the application changes it, through [`Label::set_text`].
#[derive(Debug, Clone, Default)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl WidgetRender for Label {
    fn render(&self, ctx: &mut PaintContext) {
        ctx.ui.draw_text(&self.text, ctx.bounds, ctx.theme.text, ctx.theme.font_size);
    }
}
