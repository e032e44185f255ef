use crate::units::Seconds;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Throw the maze away and generate another one.
    Regenerate,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum KeyEventType {
    Pressed,
    Released,
}

/// A key press or release as delivered by the host window.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct KeyEvent {
    pub key: Key,
    pub kind: KeyEventType,
    /// How long the key has been held down, zero on the first press.
    pub held_time: Seconds,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> KeyEvent {
        KeyEvent {
            key,
            kind: KeyEventType::Pressed,
            held_time: Seconds(0.0),
        }
    }

    pub fn released(key: Key, held_time: Seconds) -> KeyEvent {
        KeyEvent {
            key,
            kind: KeyEventType::Released,
            held_time,
        }
    }
}
