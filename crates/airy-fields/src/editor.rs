//! Keystroke editing for single-line fields
//!
//! Applies one frame of [`InputState`] to a value and its caret/selection.
//! All positions are byte offsets on char boundaries.

use airy_ui::{InputState, Key, NamedKey, TextEditState};

/// What a frame of input did to a field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct EditOutcome {
    /// The value was modified
    pub changed: bool,
    /// The caret or selection moved without modifying the value
    pub moved: bool,
    /// Enter was pressed
    pub submitted: bool,
}

/// Apply typed characters, then special keys, to `text`
pub(crate) fn apply_input(
    text: &mut String,
    state: &mut TextEditState,
    input: &InputState,
) -> EditOutcome {
    let mut outcome = EditOutcome::default();

    // Ctrl shortcuts must not insert their letter; AltGr arrives as Ctrl+Alt
    let shortcut_held = input.ctrl_held && !input.alt_held;
    if !shortcut_held {
        for &ch in &input.characters_typed {
            if ch.is_control() {
                continue;
            }
            delete_selection(text, state);
            text.insert(state.cursor_pos, ch);
            state.cursor_pos += ch.len_utf8();
            outcome.changed = true;
        }
    }

    let extend = input.shift_held;
    let by_word = input.ctrl_held;

    for key in &input.keys_just_pressed {
        match key {
            Key::Character(ch) if shortcut_held && ch.eq_ignore_ascii_case("a") => {
                if !text.is_empty() {
                    state.selection = Some((0, text.len()));
                    state.cursor_pos = text.len();
                    outcome.moved = true;
                }
            }
            Key::Named(NamedKey::Enter) => outcome.submitted = true,
            Key::Named(NamedKey::Backspace) => {
                if delete_selection(text, state) {
                    outcome.changed = true;
                } else if state.cursor_pos > 0 {
                    let start = if by_word {
                        prev_word_boundary(text, state.cursor_pos)
                    } else {
                        prev_char_boundary(text, state.cursor_pos)
                    };
                    text.replace_range(start..state.cursor_pos, "");
                    state.cursor_pos = start;
                    outcome.changed = true;
                }
            }
            Key::Named(NamedKey::Delete) => {
                if delete_selection(text, state) {
                    outcome.changed = true;
                } else if state.cursor_pos < text.len() {
                    let end = if by_word {
                        next_word_boundary(text, state.cursor_pos)
                    } else {
                        next_char_boundary(text, state.cursor_pos)
                    };
                    text.replace_range(state.cursor_pos..end, "");
                    outcome.changed = true;
                }
            }
            Key::Named(NamedKey::ArrowLeft) => {
                let target = match state.selection {
                    Some((start, _)) if !extend => start,
                    _ if by_word => prev_word_boundary(text, state.cursor_pos),
                    _ => prev_char_boundary(text, state.cursor_pos),
                };
                move_caret(state, target, extend);
                outcome.moved = true;
            }
            Key::Named(NamedKey::ArrowRight) => {
                let target = match state.selection {
                    Some((_, end)) if !extend => end,
                    _ if by_word => next_word_boundary(text, state.cursor_pos),
                    _ => next_char_boundary(text, state.cursor_pos),
                };
                move_caret(state, target, extend);
                outcome.moved = true;
            }
            Key::Named(NamedKey::Home) => {
                move_caret(state, 0, extend);
                outcome.moved = true;
            }
            Key::Named(NamedKey::End) => {
                move_caret(state, text.len(), extend);
                outcome.moved = true;
            }
            _ => {}
        }
    }

    outcome
}

/// Remove the selected text, leaving the caret where it started
fn delete_selection(text: &mut String, state: &mut TextEditState) -> bool {
    match state.selection.take() {
        Some((start, end)) if start < end => {
            text.replace_range(start..end, "");
            state.cursor_pos = start;
            true
        }
        _ => false,
    }
}

/// Move the caret, growing or shrinking the selection from its anchor when
/// `extend` is set
fn move_caret(state: &mut TextEditState, target: usize, extend: bool) {
    if extend {
        let anchor = match state.selection {
            Some((start, end)) if state.cursor_pos == start => end,
            Some((start, _)) => start,
            None => state.cursor_pos,
        };
        state.selection = (anchor != target).then(|| (anchor.min(target), anchor.max(target)));
    } else {
        state.selection = None;
    }
    state.cursor_pos = target;
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .chars()
        .next_back()
        .map_or(0, |c| pos - c.len_utf8())
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(pos, |c| pos + c.len_utf8())
}

/// Start of the word before `pos`, skipping whitespace first
pub(crate) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let trimmed = text[..pos].trim_end();
    trimmed
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// Start of the word after `pos`, skipping the rest of the current word
pub(crate) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let after = &text[pos..];
    let word_end = after.find(char::is_whitespace).unwrap_or(after.len());
    let rest = &after[word_end..];
    pos + word_end + (rest.len() - rest.trim_start().len())
}
