//! Backend-agnostic input state tracking for mouse and keyboard events
//!
//! The host converts its windowing events into calls on [`InputState`]
//! between frames. Components read it while the UI is built.

use std::collections::HashSet;

/// Backend-agnostic mouse button representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Backend-agnostic named key representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Shift,
    Control,
    Alt,
    /// Super/Meta/Windows/Command key
    Super,
}

/// Backend-agnostic key representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A named key (Enter, Escape, arrows, etc.)
    Named(NamedKey),
    /// A character key (letters, numbers, symbols)
    Character(String),
    /// Unknown/unhandled key
    Unknown,
}

/// Tracks the current state of mouse and keyboard input
///
/// Holds both held state (buttons, modifiers) and per-frame events
/// (just pressed, typed characters). Per-frame state is cleared by
/// [`InputState::begin_frame`].
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Set of mouse buttons currently held down
    pub buttons_pressed: HashSet<MouseButton>,

    /// Set of mouse buttons that were pressed this frame
    pub buttons_just_pressed: HashSet<MouseButton>,

    /// Characters typed this frame (for text input)
    pub characters_typed: Vec<char>,

    /// Keys pressed this frame
    pub keys_just_pressed: Vec<Key>,

    /// Whether Shift is currently held down
    pub shift_held: bool,

    /// Whether Ctrl (or Cmd on macOS) is currently held down
    pub ctrl_held: bool,

    /// Whether Alt is currently held down
    pub alt_held: bool,
}

impl InputState {
    /// Create a new input state with no active input
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear frame-specific state
    pub fn begin_frame(&mut self) {
        self.buttons_just_pressed.clear();
        self.characters_typed.clear();
        self.keys_just_pressed.clear();
    }

    /// Record a mouse button press
    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons_pressed.insert(button);
        self.buttons_just_pressed.insert(button);
    }

    /// Record a mouse button release
    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons_pressed.remove(&button);
    }

    /// Record a key press, tracking modifier state
    pub fn press_key(&mut self, key: Key) {
        if let Key::Named(named) = &key {
            match named {
                NamedKey::Shift => self.shift_held = true,
                NamedKey::Control | NamedKey::Super => self.ctrl_held = true,
                NamedKey::Alt => self.alt_held = true,
                _ => {}
            }
        }
        self.keys_just_pressed.push(key);
    }

    /// Record a key release
    pub fn release_key(&mut self, key: Key) {
        if let Key::Named(named) = &key {
            match named {
                NamedKey::Shift => self.shift_held = false,
                NamedKey::Control | NamedKey::Super => self.ctrl_held = false,
                NamedKey::Alt => self.alt_held = false,
                _ => {}
            }
        }
    }

    /// Record a character typed (for text input)
    pub fn type_character(&mut self, ch: char) {
        self.characters_typed.push(ch);
    }

    /// Record every character of a string as typed
    pub fn type_str(&mut self, text: &str) {
        self.characters_typed.extend(text.chars());
    }

    /// Check if a mouse button is currently held down
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Check if a mouse button was pressed this frame
    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.buttons_just_pressed.contains(&button)
    }

    /// Check if a specific named key was just pressed this frame
    pub fn is_named_key_just_pressed(&self, named: NamedKey) -> bool {
        self.keys_just_pressed
            .iter()
            .any(|k| matches!(k, Key::Named(n) if *n == named))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_press_release() {
        let mut input = InputState::new();

        input.press_button(MouseButton::Left);
        assert!(input.is_button_down(MouseButton::Left));
        assert!(input.is_button_just_pressed(MouseButton::Left));

        // New frame
        input.begin_frame();
        assert!(input.is_button_down(MouseButton::Left));
        assert!(!input.is_button_just_pressed(MouseButton::Left));

        input.release_button(MouseButton::Left);
        assert!(!input.is_button_down(MouseButton::Left));
    }

    #[test]
    fn test_modifier_keys() {
        let mut input = InputState::new();

        input.press_key(Key::Named(NamedKey::Shift));
        assert!(input.shift_held);

        input.press_key(Key::Named(NamedKey::Super));
        assert!(input.ctrl_held);

        input.release_key(Key::Named(NamedKey::Shift));
        assert!(!input.shift_held);
        assert!(input.ctrl_held);
    }

    #[test]
    fn test_character_input() {
        let mut input = InputState::new();

        input.type_character('a');
        input.type_str("bc");
        assert_eq!(input.characters_typed, vec!['a', 'b', 'c']);
        assert!(!input.is_named_key_just_pressed(NamedKey::Enter));

        input.begin_frame();
        assert!(input.characters_typed.is_empty());
    }
}
