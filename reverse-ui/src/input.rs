/// Virtual keys delivered on the key-down path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Enter,
    Escape,
    Tab,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Char(char),
    Other,
}

impl Key {
    /// Character code a native loop emits on the character path when backspace is pressed.
    pub const BACKSPACE_CHAR: char = '\u{8}';
}

/// Raw events the host feeds into the container. Coordinates share the space of control bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    PointerDown { x: f32, y: f32 },
    /// Global release, wherever the pointer is.
    PointerUp,
    Char(char),
    KeyDown(Key),
}
