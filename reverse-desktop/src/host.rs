use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use reverse_ui::{InputEvent, Key};

use crate::app::App;

/// What the loop does with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Input(InputEvent),
    Repaint,
    Quit,
}

/// Sets up the terminal, runs the loop and always restores the terminal afterwards.
pub fn run(app: &mut App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, app);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Blocks on terminal input and repaints only after something changed.
fn run_event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut dirty = true;

    loop {
        if dirty {
            terminal
                .draw(|f| app.paint(f.buffer_mut()))
                .context("Failed to draw frame")?;
            dirty = false;
        }

        let event = event::read().context("Failed to read terminal event")?;
        for host_event in translate(&event) {
            match host_event {
                HostEvent::Quit => {
                    log::info!("Quit requested from keyboard");
                    return Ok(());
                }
                HostEvent::Repaint => dirty = true,
                HostEvent::Input(input) => {
                    log::trace!("Dispatching {:?}", input);
                    app.ui.dispatch(input);
                    dirty = true;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Maps one crossterm event onto core input, in the order a native message loop delivers it.
pub fn translate(event: &Event) -> Vec<HostEvent> {
    match event {
        Event::Mouse(mouse) => translate_mouse(mouse).into_iter().collect(),
        Event::Key(key) => translate_key(key),
        Event::Resize(..) | Event::FocusGained => vec![HostEvent::Repaint],
        _ => Vec::new(),
    }
}

fn translate_mouse(mouse: &MouseEvent) -> Option<HostEvent> {
    // cell centers, so a cell on a control's edge row/column still hits
    let x = mouse.column as f32 + 0.5;
    let y = mouse.row as f32 + 0.5;

    let input = match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => InputEvent::PointerMove { x, y },
        MouseEventKind::Down(MouseButton::Left) => InputEvent::PointerDown { x, y },
        MouseEventKind::Up(MouseButton::Left) => InputEvent::PointerUp,
        _ => return None,
    };
    Some(HostEvent::Input(input))
}

fn translate_key(key: &KeyEvent) -> Vec<HostEvent> {
    if key.kind == KeyEventKind::Release {
        return Vec::new();
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return vec![HostEvent::Quit],
        KeyCode::Char('c') if ctrl => return vec![HostEvent::Quit],
        _ => {}
    }

    let (virtual_key, ch) = match key.code {
        KeyCode::Backspace => (Key::Backspace, Some(Key::BACKSPACE_CHAR)),
        KeyCode::Char(c) if !ctrl => (Key::Char(c), Some(c)),
        KeyCode::Enter => (Key::Enter, None),
        KeyCode::Tab => (Key::Tab, None),
        KeyCode::Delete => (Key::Delete, None),
        KeyCode::Left => (Key::Left, None),
        KeyCode::Right => (Key::Right, None),
        KeyCode::Up => (Key::Up, None),
        KeyCode::Down => (Key::Down, None),
        KeyCode::Home => (Key::Home, None),
        KeyCode::End => (Key::End, None),
        _ => (Key::Other, None),
    };

    let mut out = vec![HostEvent::Input(InputEvent::KeyDown(virtual_key))];
    if let Some(ch) = ch {
        out.push(HostEvent::Input(InputEvent::Char(ch)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use reverse_ui::UiConfig;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn feed(app: &mut App, event: Event) {
        for host_event in translate(&event) {
            if let HostEvent::Input(input) = host_event {
                app.ui.dispatch(input);
            }
        }
    }

    #[test]
    fn mouse_maps_to_cell_centers() {
        assert_eq!(
            translate(&mouse(MouseEventKind::Moved, 3, 4)),
            vec![HostEvent::Input(InputEvent::PointerMove { x: 3.5, y: 4.5 })]
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0)),
            vec![HostEvent::Input(InputEvent::PointerDown { x: 0.5, y: 0.5 })]
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Up(MouseButton::Left), 9, 9)),
            vec![HostEvent::Input(InputEvent::PointerUp)]
        );
        assert!(translate(&mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)).is_empty());
    }

    #[test]
    fn keys_feed_key_down_then_char() {
        assert_eq!(
            translate(&key(KeyCode::Char('x'))),
            vec![
                HostEvent::Input(InputEvent::KeyDown(Key::Char('x'))),
                HostEvent::Input(InputEvent::Char('x')),
            ]
        );
        assert_eq!(
            translate(&key(KeyCode::Backspace)),
            vec![
                HostEvent::Input(InputEvent::KeyDown(Key::Backspace)),
                HostEvent::Input(InputEvent::Char(Key::BACKSPACE_CHAR)),
            ]
        );
        assert_eq!(
            translate(&key(KeyCode::Enter)),
            vec![HostEvent::Input(InputEvent::KeyDown(Key::Enter))]
        );
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        assert_eq!(translate(&key(KeyCode::Esc)), vec![HostEvent::Quit]);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(&ctrl_c), vec![HostEvent::Quit]);
    }

    #[test]
    fn resize_requests_repaint() {
        assert_eq!(translate(&Event::Resize(80, 24)), vec![HostEvent::Repaint]);
    }

    #[test]
    fn typing_reverses_into_label() {
        let mut app = App::new(UiConfig::default());
        feed(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 5, 2));
        feed(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 5, 2));
        for c in "cat".chars() {
            feed(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.ui[app.output].as_label().unwrap().text(), "tac");

        feed(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.ui[app.input].as_text_box().unwrap().text(), "ca");
        assert_eq!(app.ui[app.output].as_label().unwrap().text(), "ac");
        assert!(!app.should_quit());
    }

    #[test]
    fn quit_button_ends_app() {
        let mut app = App::new(UiConfig::default());
        feed(&mut app, mouse(MouseEventKind::Moved, 4, 10));
        assert!(app.ui[app.quit].is_hovered());
        feed(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 4, 10));
        assert!(!app.should_quit());
        feed(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 40, 20));
        assert!(app.should_quit());
    }

    #[test]
    fn paint_shows_reversed_text() {
        let mut app = App::new(UiConfig::default());
        feed(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 5, 2));
        for c in "ab".chars() {
            feed(&mut app, key(KeyCode::Char(c)));
        }

        let mut buf = Buffer::empty(ratatui::layout::Rect::new(0, 0, 40, 14));
        app.paint(&mut buf);
        let label_row: String = (0..40).map(|x| buf[(x, 6)].symbol().to_string()).collect();
        assert!(label_row.contains("ba"));
        let input_row: String = (0..40).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert!(input_row.contains("ab"));
    }
}
