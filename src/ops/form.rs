use crate::model::task::{DESCRIPTION_MAX_LEN, NAME_MAX_LEN, Task, char_len};
use crate::ops::store::{StoreError, TaskStore};
use crate::util::unicode;

/// Error type for confirming the creation form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("the creation form is not open")]
    Closed,
    #[error("name is required")]
    EmptyName,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Which input of the form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
}

/// Form lifecycle: `Closed -> open -> Open -> confirm | cancel -> Closed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Open { focus: FormField },
}

/// A length-capped single-line text buffer with a byte-offset cursor.
///
/// Every edit is built as a candidate string first; a candidate longer than
/// `max_len` characters is dropped and the buffer keeps its prior value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
    max_len: usize,
}

impl TextInput {
    pub fn new(max_len: usize) -> Self {
        TextInput {
            text: String::new(),
            cursor: 0,
            max_len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a byte offset into `text()`
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole buffer. Rejected if over the cap.
    pub fn set(&mut self, text: &str) -> bool {
        if char_len(text) > self.max_len {
            return false;
        }
        self.text = text.to_string();
        self.cursor = self.text.len();
        true
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert at the cursor. Rejected if the result would exceed the cap.
    pub fn insert_str(&mut self, s: &str) -> bool {
        if char_len(&self.text) + char_len(s) > self.max_len {
            return false;
        }
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        true
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf))
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) -> bool {
        match unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            Some(start) => {
                self.text.replace_range(start..self.cursor, "");
                self.cursor = start;
                true
            }
            None => false,
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) -> bool {
        match unicode::next_grapheme_boundary(&self.text, self.cursor) {
            Some(end) => {
                self.text.replace_range(self.cursor..end, "");
                true
            }
            None => false,
        }
    }

    pub fn move_left(&mut self) {
        if let Some(pos) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = pos;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(pos) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = pos;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Live counter text, e.g. `12 / 40`
    pub fn counter(&self) -> String {
        format!("{} / {}", self.len(), self.max_len)
    }
}

/// Transient input for a new task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationForm {
    state: FormState,
    name: TextInput,
    description: TextInput,
}

impl Default for CreationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreationForm {
    pub fn new() -> Self {
        CreationForm {
            state: FormState::Closed,
            name: TextInput::new(NAME_MAX_LEN),
            description: TextInput::new(DESCRIPTION_MAX_LEN),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    /// Focused field, or None when closed
    pub fn focus(&self) -> Option<FormField> {
        match self.state {
            FormState::Open { focus } => Some(focus),
            FormState::Closed => None,
        }
    }

    /// Open with empty buffers and focus on the name field.
    pub fn open(&mut self) {
        self.name.clear();
        self.description.clear();
        self.state = FormState::Open {
            focus: FormField::Name,
        };
    }

    pub fn set_focus(&mut self, field: FormField) {
        if self.is_open() {
            self.state = FormState::Open { focus: field };
        }
    }

    /// Move focus to the other field
    pub fn toggle_focus(&mut self) {
        match self.focus() {
            Some(FormField::Name) => self.set_focus(FormField::Description),
            Some(FormField::Description) => self.set_focus(FormField::Name),
            None => {}
        }
    }

    pub fn name(&self) -> &TextInput {
        &self.name
    }

    pub fn description(&self) -> &TextInput {
        &self.description
    }

    /// Replace the name buffer. Over-long text is ignored.
    pub fn update_name(&mut self, text: &str) -> bool {
        self.name.set(text)
    }

    /// Replace the description buffer. Over-long text is ignored.
    pub fn update_description(&mut self, text: &str) -> bool {
        self.description.set(text)
    }

    /// The buffer that currently has focus
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus()? {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
        }
    }

    pub fn name_counter(&self) -> String {
        self.name.counter()
    }

    pub fn description_counter(&self) -> String {
        self.description.counter()
    }

    /// Commit the buffers as a new task, then close and clear.
    ///
    /// An empty name is rejected and leaves the form open with both buffers
    /// as they were.
    pub fn confirm(&mut self, store: &mut TaskStore) -> Result<Task, FormError> {
        if !self.is_open() {
            return Err(FormError::Closed);
        }
        if self.name.is_empty() {
            return Err(FormError::EmptyName);
        }
        let description = Some(self.description.text()).filter(|d| !d.is_empty());
        let task = store.add(self.name.text(), description)?;
        self.close();
        Ok(task)
    }

    /// Close without committing anything.
    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.name.clear();
        self.description.clear();
        self.state = FormState::Closed;
    }
}
