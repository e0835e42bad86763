//! Keeps the cursor inside the scrolled window.
//!
//! Rows rendered per item vary (category headers, wrapped descriptions), so the
//! controller works from an estimate of how many items fit rather than an exact
//! measurement. The renderer widens its range when the estimate falls short.

use crate::defaults::Defaults;

/// Item rows that fit in a terminal `height` rows tall, never below `floor`.
pub fn estimated_rows(height: u16, floor: usize) -> usize {
    let available = usize::from(height.saturating_sub(Defaults::RESERVED_ROWS)).max(1);
    (available * Defaults::ROWS_PER_SCREEN_NUM / Defaults::ROWS_PER_SCREEN_DEN).max(floor)
}

/// New scroll offset for a list of `len` items after the cursor moved or the
/// terminal was resized. `height == 0` means the size is not known yet and
/// leaves the offset alone.
pub fn scroll_offset(len: usize, cursor: usize, offset: usize, height: u16) -> usize {
    if len == 0 || height == 0 {
        return offset;
    }
    let rows = estimated_rows(height, Defaults::VIEWPORT_MIN_ROWS);
    let cursor = cursor.min(len - 1);

    // The head of the list stays pinned until the cursor is well past one screen.
    if cursor < rows + Defaults::TOP_MARGIN {
        return 0;
    }

    let mut offset = offset;
    if cursor < offset {
        offset = cursor;
    }
    if cursor >= offset + rows {
        let target_row = rows.saturating_sub(Defaults::BOTTOM_CUSHION).max(1);
        offset = cursor.saturating_sub(target_row);
    }

    let mut max_offset = len.saturating_sub(rows);
    if cursor >= max_offset {
        max_offset = cursor.min(len - 1);
    }
    offset.min(max_offset)
}
