use crate::{Color, PaintContext, WidgetRender};

/// Clickable area. Only hover changes how it looks; clicks go through the
/// control's click callback.
#[derive(Debug, Clone, Default)]
pub struct Button {
    caption: Option<String>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caption(caption: impl Into<String>) -> Self {
        Self { caption: Some(caption.into()) }
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    fn fill(&self, ctx: &PaintContext) -> Color {
        if ctx.state.hovered {
            ctx.theme.button_hover
        } else {
            ctx.theme.button_normal
        }
    }
}

impl WidgetRender for Button {
    fn render(&self, ctx: &mut PaintContext) {
        let fill = self.fill(ctx);
        ctx.ui.draw_rect(ctx.bounds, fill);

        if let Some(caption) = &self.caption {
            ctx.ui.draw_text(caption, ctx.bounds, ctx.theme.text, ctx.theme.font_size);
        }
    }
}
