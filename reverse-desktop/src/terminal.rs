use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;
use ratatui::style::{Color as TermColor, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Widget};
use reverse_ui::{Color, Rect, UiRenderer};

/// Draws controls into a ratatui buffer. One terminal cell is one unit of control space.
pub struct TerminalDrawer<'a> {
    buf: &'a mut Buffer,
}

impl<'a> TerminalDrawer<'a> {
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }

    /// Paints the whole buffer with `color`.
    pub fn clear(&mut self, color: Color) {
        let area = self.buf.area;
        self.buf.set_style(area, Style::default().bg(to_term_color(color)));
    }

    /// Snaps to whole cells and clips to the buffer.
    fn to_cells(&self, r: Rect) -> CellRect {
        let left = r.left().max(0.0).round() as u16;
        let top = r.top().max(0.0).round() as u16;
        let right = r.right().max(0.0).round() as u16;
        let bottom = r.bottom().max(0.0).round() as u16;

        CellRect::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
            .intersection(self.buf.area)
    }
}

fn to_term_color(c: Color) -> TermColor {
    TermColor::Rgb(c.r, c.g, c.b)
}

impl UiRenderer for TerminalDrawer<'_> {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        if color.a == 0 {
            return;
        }
        let area = self.to_cells(rect);
        self.buf.set_style(area, Style::default().bg(to_term_color(color)));
    }

    fn draw_border(&mut self, rect: Rect, color: Color, width: f32) {
        let area = self.to_cells(rect);
        if width <= 0.0 || color.a == 0 || area.is_empty() {
            return;
        }
        Block::bordered()
            .border_style(Style::default().fg(to_term_color(color)))
            .render(area, self.buf);
    }

    fn draw_text(&mut self, text: &str, rect: Rect, color: Color, _size: f32) {
        let line = Line::styled(text, Style::default().fg(to_term_color(color))).centered();

        // wider than the rect: spill over both sides instead of clipping to it
        let width = (line.width() as f32).max(rect.w);
        let area = self.to_cells(rect.center(width, 1.0));
        if area.is_empty() {
            return;
        }
        line.render(area, self.buf);
    }
}
