//! Who owns the text of an input.

use std::fmt;

pub type ChangeCallback = Box<dyn FnMut(&str)>;

pub enum ValueSource {
    /// The embedder owns the value: every local edit is reported, and
    /// external updates replace the buffer.
    Controlled(ChangeCallback),
    /// The input owns the value; external updates after mount are ignored.
    Uncontrolled,
}

impl ValueSource {
    pub fn controlled(on_change: impl FnMut(&str) + 'static) -> Self {
        Self::Controlled(Box::new(on_change))
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled(_))
    }

    /// Reports an edit to the owner, if there is one.
    pub fn notify(&mut self, text: &str) {
        if let Self::Controlled(on_change) = self {
            on_change(text);
        }
    }
}

impl Default for ValueSource {
    fn default() -> Self {
        Self::Uncontrolled
    }
}

impl fmt::Debug for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controlled(_) => f.write_str("Controlled(..)"),
            Self::Uncontrolled => f.write_str("Uncontrolled"),
        }
    }
}
