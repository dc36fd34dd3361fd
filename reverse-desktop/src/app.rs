use std::cell::Cell;
use std::rc::Rc;

use ratatui::buffer::Buffer;
use reverse_ui::{Button, Control, ControlContainer, ControlId, Rect, Theme, UiConfig};

use crate::terminal::TerminalDrawer;

/// The demo interface: whatever is typed into the text box shows up reversed in the label.
pub struct App {
    pub ui: ControlContainer,
    pub theme: Theme,
    pub input: ControlId,
    pub output: ControlId,
    pub quit: ControlId,
    quit_requested: Rc<Cell<bool>>,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        let mut ui = ControlContainer::with_focus_policy(config.focus_policy);

        let input = ui.add(Control::text_box(Rect::new(2.0, 1.0, 30.0, 3.0)));
        let output = ui.add(Control::label(Rect::new(2.0, 5.0, 30.0, 3.0), ""));
        let quit = ui.add(Control::new(Rect::new(2.0, 9.0, 10.0, 3.0), Button::with_caption("Quit")));

        ui[input].when_change(move |ui| {
            let reversed: String = ui[input]
                .as_text_box()
                .map(|t| t.text().chars().rev().collect())
                .unwrap_or_default();
            log::debug!("Input changed, label now {:?}", reversed);
            if let Some(label) = ui[output].as_label_mut() {
                label.set_text(reversed);
            }
        });

        let quit_requested = Rc::new(Cell::new(false));
        let flag = quit_requested.clone();
        ui[quit].when_click(move |_| {
            log::info!("Quit button clicked");
            flag.set(true);
        });

        Self {
            ui,
            theme: config.theme,
            input,
            output,
            quit,
            quit_requested,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested.get()
    }

    pub fn paint(&self, buf: &mut Buffer) {
        let mut drawer = TerminalDrawer::new(buf);
        drawer.clear(self.theme.background);
        self.ui.paint(&mut drawer, &self.theme);
    }
}
