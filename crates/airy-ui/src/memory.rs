//! Widget memory for storing internal widget state
//!
//! Immediate-mode components are rebuilt every frame, so anything they must
//! remember between frames (caret position, whether they had focus) lives here,
//! keyed by the widget's generated id.

use std::any::Any;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Unique identifier for widget state storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetStateId(String);

impl WidgetStateId {
    /// Create a new widget state ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl<S: Into<String>> From<S> for WidgetStateId {
    fn from(s: S) -> Self {
        Self::new(s)
    }
}

/// Caret, selection and focus of a single-line text widget
///
/// Offsets are byte offsets into the text and always sit on char boundaries.
/// The text itself is owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEditState {
    /// Cursor position (byte offset)
    pub cursor_pos: usize,
    /// Selection range (start, end) in byte offsets, if any
    pub selection: Option<(usize, usize)>,
    /// Whether the widget had focus when it was last built
    pub focused: bool,
}

impl TextEditState {
    /// Get the selected part of `text`, if any
    pub fn selected_text<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.selection
            .filter(|(start, end)| start < end)
            .and_then(|(start, end)| text.get(start..end))
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Pull cursor and selection back inside `text`
    ///
    /// The caller may have replaced the value since the last frame.
    pub fn clamp_to(&mut self, text: &str) {
        self.cursor_pos = floor_char_boundary(text, self.cursor_pos);
        self.selection = self.selection.and_then(|(start, end)| {
            let start = floor_char_boundary(text, start);
            let end = floor_char_boundary(text, end);
            (start < end).then_some((start, end))
        });
    }
}

fn floor_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Widget memory - stores internal state for all widgets
///
/// Type-erased storage; each widget type should use a consistent state type
/// (e.g. `TextEditState` for text fields).
pub struct WidgetMemory {
    states: HashMap<WidgetStateId, Box<dyn Any>>,
}

impl WidgetMemory {
    /// Create a new empty widget memory
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Get or create state for a widget
    ///
    /// A slot holding a different type is replaced by a fresh default.
    pub fn get_or_insert_with<T: 'static>(
        &mut self,
        id: impl Into<WidgetStateId>,
        default: impl FnOnce() -> T,
    ) -> &mut T {
        let slot = match self.states.entry(id.into()) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                if !slot.is::<T>() {
                    log::warn!(
                        "widget state type changed, resetting to {}",
                        std::any::type_name::<T>()
                    );
                    *slot = Box::new(default());
                }
                slot
            }
            Entry::Vacant(entry) => entry.insert(Box::new(default())),
        };
        slot.downcast_mut::<T>()
            .expect("slot was just checked or filled with T")
    }

    /// Get or create state for a widget using Default
    pub fn get_or_default<T: Default + 'static>(&mut self, id: impl Into<WidgetStateId>) -> &mut T {
        self.get_or_insert_with(id, T::default)
    }

    /// Get state for a widget, if it exists
    pub fn get<T: 'static>(&self, id: impl Into<WidgetStateId>) -> Option<&T> {
        self.states
            .get(&id.into())
            .and_then(|s| s.downcast_ref::<T>())
    }

    /// Check if state exists for a widget
    pub fn contains(&self, id: impl Into<WidgetStateId>) -> bool {
        self.states.contains_key(&id.into())
    }

    /// Remove state for a widget
    pub fn remove(&mut self, id: impl Into<WidgetStateId>) -> bool {
        self.states.remove(&id.into()).is_some()
    }

    /// Clear all widget state
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Get the number of stored states
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the memory is empty
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Get or create text edit state
    pub fn text_edit(&mut self, id: impl Into<WidgetStateId>) -> &mut TextEditState {
        self.get_or_default(id)
    }
}

impl Default for WidgetMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetMemory")
            .field("num_states", &self.states.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_text() {
        let mut state = TextEditState {
            cursor_pos: 3,
            selection: Some((0, 3)),
            focused: true,
        };
        assert_eq!(state.selected_text("hello"), Some("hel"));

        state.clear_selection();
        assert_eq!(state.selected_text("hello"), None);
    }

    #[test]
    fn test_clamp_to_shorter_text() {
        let mut state = TextEditState {
            cursor_pos: 10,
            selection: Some((4, 10)),
            focused: false,
        };
        state.clamp_to("héllo");
        assert_eq!(state.cursor_pos, 6);
        assert_eq!(state.selection, Some((4, 6)));

        state.clamp_to("");
        assert_eq!(state.cursor_pos, 0);
        assert_eq!(state.selection, None);
    }

    #[test]
    fn test_widget_memory_basic() {
        let mut memory = WidgetMemory::new();
        assert!(memory.is_empty());

        memory.text_edit("field").cursor_pos = 2;

        assert_eq!(memory.len(), 1);
        assert!(memory.contains("field"));
        assert_eq!(memory.get::<TextEditState>("field").map(|s| s.cursor_pos), Some(2));

        assert!(memory.remove("field"));
        assert!(memory.is_empty());
    }

    #[test]
    fn test_type_change_resets_slot() {
        let mut memory = WidgetMemory::new();
        *memory.get_or_default::<u32>("slot") = 7;

        let edit = memory.text_edit("slot");
        assert_eq!(*edit, TextEditState::default());
        assert!(memory.get::<u32>("slot").is_none());
    }
}
