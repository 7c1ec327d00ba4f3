//! Anchor/caret selection over char offsets.
//!
//! `start` is where the selection was anchored and `end` is where the caret
//! sits; either may be the larger one. Equal values mean a bare caret.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret_at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn caret(&self) -> usize {
        self.end
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Normalized `(min, max)` half-open range.
    pub fn range(&self) -> (usize, usize) {
        (self.start.min(self.end), self.start.max(self.end))
    }

    pub fn collapse_to(&mut self, offset: usize) {
        self.start = offset;
        self.end = offset;
    }

    /// Moves the caret, keeping the anchor when `extend` is set.
    pub fn move_to(&mut self, offset: usize, extend: bool) {
        if extend {
            self.end = offset;
        } else {
            self.collapse_to(offset);
        }
    }

    pub fn clamp(&mut self, len: usize) {
        self.start = self.start.min(len);
        self.end = self.end.min(len);
    }

    /// Overlap of the normalized selection with `[from, to)`.
    pub fn overlap(&self, from: usize, to: usize) -> Option<(usize, usize)> {
        let (s, e) = self.range();
        let lo = s.max(from);
        let hi = e.min(to);
        (lo < hi).then_some((lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_normalizes_backwards_selection() {
        let sel = Selection::new(7, 2);
        assert_eq!(sel.range(), (2, 7));
        assert_eq!(sel.caret(), 2);
        assert!(!sel.is_collapsed());
    }

    #[test]
    fn test_move_to_extend_keeps_anchor() {
        let mut sel = Selection::caret_at(3);
        sel.move_to(5, true);
        assert_eq!(sel, Selection::new(3, 5));
        sel.move_to(1, false);
        assert_eq!(sel, Selection::caret_at(1));
    }

    #[test]
    fn test_clamp() {
        let mut sel = Selection::new(10, 2);
        sel.clamp(4);
        assert_eq!(sel, Selection::new(4, 2));
    }

    #[test]
    fn test_overlap() {
        let sel = Selection::new(5, 2);
        assert_eq!(sel.overlap(0, 3), Some((2, 3)));
        assert_eq!(sel.overlap(3, 10), Some((3, 5)));
        assert_eq!(sel.overlap(5, 9), None);
        assert_eq!(Selection::caret_at(2).overlap(0, 5), None);
    }
}
