//! Clipboard requests raised by shortcuts and their eventual outcomes.
//!
//! The controller never touches the clipboard itself. It hands out a
//! [`ClipboardRequest`]; the host runs it against a [`ClipboardService`]
//! (possibly on another thread) and feeds the [`ClipboardCompletion`] back.

use anyhow::Result;

pub trait ClipboardService {
    fn read_text(&mut self) -> Result<String>;
    fn write_text(&mut self, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardRequest {
    Copy { text: String },
    /// `range` is the selection at request time; it is removed on success.
    Cut { range: (usize, usize), text: String },
    /// `range` is replaced by whatever the clipboard yields.
    Paste { range: (usize, usize) },
}

#[derive(Debug)]
pub enum ClipboardCompletion {
    Copied(Result<()>),
    Cut {
        range: (usize, usize),
        result: Result<()>,
    },
    Pasted {
        range: (usize, usize),
        result: Result<String>,
    },
}

impl ClipboardRequest {
    /// Runs the request synchronously against `service`.
    pub fn fulfill(self, service: &mut dyn ClipboardService) -> ClipboardCompletion {
        match self {
            Self::Copy { text } => ClipboardCompletion::Copied(service.write_text(&text)),
            Self::Cut { range, text } => ClipboardCompletion::Cut {
                range,
                result: service.write_text(&text),
            },
            Self::Paste { range } => ClipboardCompletion::Pasted {
                range,
                result: service.read_text(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryClipboard;

    #[test]
    fn test_copy_writes_text() {
        let mut clip = MemoryClipboard::default();
        let done = ClipboardRequest::Copy {
            text: "abc".to_string(),
        }
        .fulfill(&mut clip);
        assert!(matches!(done, ClipboardCompletion::Copied(Ok(()))));
        assert_eq!(clip.contents, "abc");
    }

    #[test]
    fn test_paste_reads_text() {
        let mut clip = MemoryClipboard::with("xyz");
        let done = ClipboardRequest::Paste { range: (1, 2) }.fulfill(&mut clip);
        match done {
            ClipboardCompletion::Pasted { range, result } => {
                assert_eq!(range, (1, 2));
                assert_eq!(result.unwrap(), "xyz");
            }
            other => panic!("unexpected completion {other:?}"),
        }
    }

    #[test]
    fn test_failures_are_reported() {
        let mut clip = MemoryClipboard::failing();
        let done = ClipboardRequest::Cut {
            range: (0, 1),
            text: "a".to_string(),
        }
        .fulfill(&mut clip);
        assert!(matches!(done, ClipboardCompletion::Cut { result: Err(_), .. }));
    }
}
