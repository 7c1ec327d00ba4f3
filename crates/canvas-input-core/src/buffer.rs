//! Text buffer wrapping `ropey::Rope`.
//!
//! Only `'\n'` counts as a line break; text is normalized before it enters
//! the buffer (see [`crate::edit::normalize_line_breaks`]).

use std::fmt;

use anyhow::Result;
use ropey::Rope;

#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.rope == *other
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Number of lines; a trailing `'\n'` opens an empty last line.
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the char index of the start of a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line index is out of bounds.
    pub fn line_to_char(&self, line_idx: usize) -> Result<usize> {
        self.check_line(line_idx)?;
        Ok(self.rope.line_to_char(line_idx))
    }

    /// Returns the line owning `char_idx`. An index sitting on a `'\n'`
    /// belongs to the line that break terminates.
    ///
    /// # Errors
    ///
    /// Returns an error if the char index is past the end.
    pub fn char_to_line(&self, char_idx: usize) -> Result<usize> {
        if char_idx > self.rope.len_chars() {
            anyhow::bail!(
                "char index {} out of bounds (buffer has {} chars)",
                char_idx,
                self.rope.len_chars()
            );
        }
        Ok(self.rope.char_to_line(char_idx))
    }

    /// Length of a line in chars, excluding its trailing `'\n'`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line index is out of bounds.
    pub fn line_len_chars(&self, line_idx: usize) -> Result<usize> {
        self.check_line(line_idx)?;
        let line = self.rope.line(line_idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            Ok(len - 1)
        } else {
            Ok(len)
        }
    }

    /// Text of a line without its trailing `'\n'`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line index is out of bounds.
    pub fn line_text(&self, line_idx: usize) -> Result<String> {
        let len = self.line_len_chars(line_idx)?;
        Ok(self.rope.line(line_idx).slice(..len).to_string())
    }

    /// # Errors
    ///
    /// Returns an error if the char index is out of bounds.
    pub fn char_at(&self, char_idx: usize) -> Result<char> {
        if char_idx >= self.rope.len_chars() {
            anyhow::bail!(
                "char index {} out of bounds (buffer has {} chars)",
                char_idx,
                self.rope.len_chars()
            );
        }
        Ok(self.rope.char(char_idx))
    }

    /// Inserts text at the given char index.
    ///
    /// # Errors
    ///
    /// Returns an error if the char index is out of bounds.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> Result<()> {
        if char_idx > self.rope.len_chars() {
            anyhow::bail!(
                "insert position {} out of bounds (buffer has {} chars)",
                char_idx,
                self.rope.len_chars()
            );
        }
        self.rope.insert(char_idx, text);
        Ok(())
    }

    /// Removes the character range `[start..end)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is inverted or out of bounds.
    pub fn remove(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        self.rope.remove(start..end);
        Ok(())
    }

    /// Replaces `[start..end)` with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is inverted or out of bounds; the
    /// buffer is left untouched in that case.
    pub fn replace(&mut self, start: usize, end: usize, text: &str) -> Result<()> {
        self.check_range(start, end)?;
        self.rope.remove(start..end);
        self.rope.insert(start, text);
        Ok(())
    }

    /// Returns the text in `[start..end)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is inverted or out of bounds.
    pub fn slice(&self, start: usize, end: usize) -> Result<String> {
        self.check_range(start, end)?;
        Ok(self.rope.slice(start..end).to_string())
    }

    /// Index of the first char of the line containing `char_idx`.
    pub fn line_start_of(&self, char_idx: usize) -> usize {
        let idx = char_idx.min(self.rope.len_chars());
        self.rope.line_to_char(self.rope.char_to_line(idx))
    }

    /// Index just before the `'\n'` ending the line containing `char_idx`,
    /// or the buffer end on the last line.
    pub fn line_end_of(&self, char_idx: usize) -> usize {
        let idx = char_idx.min(self.rope.len_chars());
        let line = self.rope.char_to_line(idx);
        let start = self.rope.line_to_char(line);
        // check_line cannot fail for a line derived from a valid index
        start + self.line_len_chars(line).unwrap_or(0)
    }

    fn check_line(&self, line_idx: usize) -> Result<()> {
        if line_idx >= self.rope.len_lines() {
            anyhow::bail!(
                "line index {} out of bounds (buffer has {} lines)",
                line_idx,
                self.rope.len_lines()
            );
        }
        Ok(())
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        if start > end {
            anyhow::bail!("invalid range: start ({}) > end ({})", start, end);
        }
        if end > self.rope.len_chars() {
            anyhow::bail!(
                "range end {} out of bounds (buffer has {} chars)",
                end,
                self.rope.len_chars()
            );
        }
        Ok(())
    }
}
