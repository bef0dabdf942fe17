//! Keyboard input events.

/// A key, reduced to what the documentation shell reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// The Escape key.
    Escape,
    /// The Enter key.
    Enter,
}

/// Modifier keys held during a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Control.
    pub ctrl: bool,
    /// Command (macOS) / Windows key.
    pub meta: bool,
    /// Shift.
    pub shift: bool,
    /// Alt / Option.
    pub alt: bool,
}

/// A key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The pressed key.
    pub key: Key,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// A key press with Control held.
    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        }
    }

    /// A key press with Command held.
    pub fn meta(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                meta: true,
                ..Modifiers::default()
            },
        }
    }

    /// Whether this is the search shortcut (Ctrl+K or Cmd+K).
    pub fn is_search_shortcut(&self) -> bool {
        (self.modifiers.ctrl || self.modifiers.meta)
            && matches!(self.key, Key::Char(c) if c.eq_ignore_ascii_case(&'k'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_shortcut() {
        assert!(KeyEvent::ctrl(Key::Char('k')).is_search_shortcut());
        assert!(KeyEvent::meta(Key::Char('K')).is_search_shortcut());
        assert!(!KeyEvent::plain(Key::Char('k')).is_search_shortcut());
        assert!(!KeyEvent::ctrl(Key::Char('j')).is_search_shortcut());
        assert!(!KeyEvent::ctrl(Key::Escape).is_search_shortcut());
    }
}
