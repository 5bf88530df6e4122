//! Key tokens dispatched through [`super::Driver::send_keys`]

use std::fmt;

/// A single non-modifier key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    Escape,
    Backspace,
    Enter,
    Space,
    Char(char),
}

/// Modifier held down for a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Control,
    Meta,
    Shift,
    Alt,
}

/// One unit of key input
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyInput {
    /// Press and release a single key
    Press(Key),
    /// Hold a modifier while pressing a key
    Chord(Modifier, Key),
    /// Type raw text, one character at a time
    Text(String),
}

impl KeyInput {
    pub fn press(key: Key) -> Self {
        Self::Press(key)
    }

    pub fn chord(modifier: Modifier, key: Key) -> Self {
        Self::Chord(modifier, key)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// `count` presses of the same key
    pub fn repeat(key: Key, count: usize) -> Vec<Self> {
        vec![Self::Press(key); count]
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyInput::Press(key) => write!(f, "{key:?}"),
            KeyInput::Chord(modifier, key) => write!(f, "{modifier:?}+{key:?}"),
            KeyInput::Text(text) => write!(f, "{text:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_should_produce_count_presses() {
        let presses = KeyInput::repeat(Key::Up, 3);
        assert_eq!(presses.len(), 3);
        assert!(presses.iter().all(|p| *p == KeyInput::Press(Key::Up)));
        assert!(KeyInput::repeat(Key::Down, 0).is_empty());
    }

    #[test]
    fn chord_should_display_with_plus() {
        let chord = KeyInput::chord(Modifier::Control, Key::Char('s'));
        assert_eq!(chord.to_string(), "Control+Char('s')");
    }
}
