//! Keeps the caret inside the visible interior by adjusting scroll offsets.

use crate::layout::CaretPoint;
use crate::state::ScrollOffset;

/// Scrolls just enough to bring the caret into view.
///
/// Vertically the whole caret line must fit; horizontally the caret x must
/// lie within `[scroll.x, scroll.x + visible_width]`. Offsets never go
/// negative.
pub fn scroll_to_caret(
    scroll: &mut ScrollOffset,
    caret: &CaretPoint,
    line_height: f32,
    visible_width: f32,
    visible_height: f32,
) {
    let caret_top = caret.line as f32 * line_height;
    // an interior shorter than one line pins the caret line to the top
    let bottom_slack = (visible_height - line_height).max(0.0);
    if caret_top < scroll.y {
        scroll.y = caret_top;
    } else if caret_top > scroll.y + bottom_slack {
        scroll.y = caret_top - bottom_slack;
    }

    if caret.x < scroll.x {
        scroll.x = caret.x;
    } else if caret.x > scroll.x + visible_width {
        scroll.x = caret.x - visible_width;
    }

    scroll.x = scroll.x.max(0.0);
    scroll.y = scroll.y.max(0.0);
}
