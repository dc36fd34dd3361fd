pub mod button;
pub mod label;
pub mod text_box;

pub use button::Button;
pub use label::Label;
pub use text_box::TextBox;

use crate::{PaintContext, WidgetRender};

#[derive(Debug, Clone)]
pub enum Widget {
    Label(Label),
    TextBox(TextBox),
    Button(Button),
}

impl WidgetRender for Widget {
    fn render(&self, ctx: &mut PaintContext) {
        match self {
            Widget::Label(l) => l.render(ctx),
            Widget::TextBox(t) => t.render(ctx),
            Widget::Button(b) => b.render(ctx),
        }
    }
}

impl From<Label> for Widget {
    fn from(l: Label) -> Self {
        Widget::Label(l)
    }
}

impl From<TextBox> for Widget {
    fn from(t: TextBox) -> Self {
        Widget::TextBox(t)
    }
}

impl From<Button> for Widget {
    fn from(b: Button) -> Self {
        Widget::Button(b)
    }
}
