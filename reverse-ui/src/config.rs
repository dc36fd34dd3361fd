use serde::{Deserialize, Serialize};
use crate::Color;

/// How pointer-down hands out focus when several controls are hit at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusPolicy {
    /// Every hit control gains focus, so overlapping controls can be focused together.
    #[default]
    Overlapping,
    /// Only the last hit control in insertion order (the one painted on top) gains focus.
    Exclusive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub border_width: f32,
    pub font_size: f32,
    pub background: Color,
    pub button_normal: Color,
    pub button_hover: Color,
    pub text: Color,
    pub text_box_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border_width: 1.0,
            font_size: 14.0,
            background: Color::WHITE,
            button_normal: Color::from_hex(0xF7F7F7),
            button_hover: Color::from_hex(0xEAEAEA),
            text: Color::BLACK,
            text_box_border: Color::GRAY,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub focus_policy: FocusPolicy,
    pub theme: Theme,
}
