mod common;

use common::{DrawOp, Recorder};
use reverse_ui::{Button, Color, Control, ControlContainer, Rect, Theme};

#[test]
fn paints_in_insertion_order() {
    let theme = Theme::default();
    let mut ui = ControlContainer::new();
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    let c = Rect::new(40.0, 0.0, 10.0, 10.0);
    ui.add(Control::label(a, "A"));
    ui.add(Control::button(b));
    ui.add(Control::text_box(c));

    ui.pointer_move(12.0, 12.0);
    ui.pointer_down(45.0, 5.0);

    let mut rec = Recorder::default();
    ui.paint(&mut rec, &theme);
    assert_eq!(
        rec.ops,
        vec![
            DrawOp::Text("A".into(), a),
            DrawOp::Rect(b, theme.button_hover),
            DrawOp::Border(c, theme.text_box_border),
            DrawOp::Text("".into(), c),
        ]
    );
}

#[test]
fn button_fill_follows_hover_only() {
    let theme = Theme::default();
    let mut ui = ControlContainer::new();
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    ui.add(Control::button(r));

    let mut rec = Recorder::default();
    ui.paint(&mut rec, &theme);
    assert_eq!(rec.ops, vec![DrawOp::Rect(r, theme.button_normal)]);

    // pressed without hover looks normal
    ui.pointer_down(5.0, 5.0);
    let mut rec = Recorder::default();
    ui.paint(&mut rec, &theme);
    assert_eq!(rec.ops, vec![DrawOp::Rect(r, theme.button_normal)]);

    ui.pointer_move(5.0, 5.0);
    let mut rec = Recorder::default();
    ui.paint(&mut rec, &theme);
    assert_eq!(rec.ops, vec![DrawOp::Rect(r, theme.button_hover)]);
}

#[test]
fn caption_is_drawn_over_fill() {
    let theme = Theme::default();
    let mut ui = ControlContainer::new();
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    ui.add(Control::new(r, Button::with_caption("Quit")));

    let mut rec = Recorder::default();
    ui.paint(&mut rec, &theme);
    assert_eq!(
        rec.ops,
        vec![DrawOp::Rect(r, theme.button_normal), DrawOp::Text("Quit".into(), r)]
    );
}

#[test]
fn empty_container_paints_nothing() {
    let mut rec = Recorder::default();
    ControlContainer::new().paint(&mut rec, &Theme::default());
    assert!(rec.ops.is_empty());
}

#[test]
fn default_theme_colors() {
    let theme = Theme::default();
    assert_eq!(theme.button_normal, Color::rgb(0xF7, 0xF7, 0xF7));
    assert_eq!(theme.button_hover, Color::rgb(0xEA, 0xEA, 0xEA));
    assert_eq!(theme.background, Color::WHITE);
}
