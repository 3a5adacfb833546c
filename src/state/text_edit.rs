//! Single-line text editing (pure state transitions).
//!
//! Cursor positions are char indices, never byte offsets. Every function is
//! pure: it takes the current text and cursor and returns the new ones, so a
//! search field can forward the new raw text to its controller unmodified.

/// One editing keystroke inside a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// Insert a character at the cursor and advance the cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Move the cursor one char left.
    CursorLeft,
    /// Move the cursor one char right.
    CursorRight,
    /// Move the cursor to the start.
    Home,
    /// Move the cursor to the end.
    End,
}

/// Result of applying a [`TextEdit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// New text, or `None` if the edit only moved the cursor (or was a no-op).
    pub text: Option<String>,
    /// Cursor after the edit, in chars.
    pub cursor: usize,
}

impl EditResult {
    fn moved(cursor: usize) -> Self {
        Self { text: None, cursor }
    }

    fn changed(text: String, cursor: usize) -> Self {
        Self {
            text: Some(text),
            cursor,
        }
    }
}

/// Apply `edit` to `text` with the cursor at char index `cursor`.
///
/// A cursor past the end of `text` is treated as being at the end.
pub fn apply_edit(text: &str, cursor: usize, edit: TextEdit) -> EditResult {
    let len = text.chars().count();
    let cursor = cursor.min(len);

    match edit {
        TextEdit::Insert(ch) => {
            let mut next = text.to_string();
            next.insert(byte_offset(text, cursor), ch);
            EditResult::changed(next, cursor + 1)
        }
        TextEdit::Backspace => {
            if cursor == 0 {
                // cursor == 0, can't delete
                return EditResult::moved(0);
            }
            let mut next = text.to_string();
            next.remove(byte_offset(text, cursor - 1));
            EditResult::changed(next, cursor - 1)
        }
        TextEdit::Delete => {
            if cursor == len {
                return EditResult::moved(cursor);
            }
            let mut next = text.to_string();
            next.remove(byte_offset(text, cursor));
            EditResult::changed(next, cursor)
        }
        TextEdit::CursorLeft => EditResult::moved(cursor.saturating_sub(1)),
        TextEdit::CursorRight => EditResult::moved((cursor + 1).min(len)),
        TextEdit::Home => EditResult::moved(0),
        TextEdit::End => EditResult::moved(len),
    }
}

/// Byte offset of char index `char_idx` in `text` (or `text.len()` past the end).
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
