//! Scroll cursor and viewport for line-based list views.
//!
//! Two end behaviors exist side by side, both kept from the source UX: the
//! hierarchical menu clamps at the first and last item, the flat file
//! listing wraps around. The viewport window always contains the cursor.

/// What happens when the cursor is moved past either end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndBehavior {
    /// The cursor stays on the end item.
    Clamp,
    /// The cursor jumps to the opposite end.
    Wrap,
}

/// Cursor position plus the window of items currently visible.
///
/// Invariants (for a non-empty list of `len` items):
/// - `cursor < len`
/// - `offset <= cursor < offset + visible`
///
/// Movement on an empty list is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    cursor: usize,
    offset: usize,
    visible: usize,
    ends: EndBehavior,
}

impl ListCursor {
    /// Create a cursor at the top with a `visible`-line window.
    pub fn new(visible: usize, ends: EndBehavior) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            visible: visible.max(1),
            ends,
        }
    }

    /// Back to the top; called on every transition into a new view.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    /// Highlighted item index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible item index.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Window size in items.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Move the cursor one item up.
    pub fn up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.clip(len);
        self.cursor = match self.ends {
            EndBehavior::Clamp => self.cursor.saturating_sub(1),
            EndBehavior::Wrap => self.cursor.checked_sub(1).unwrap_or(len - 1),
        };
        self.view_to_cursor();
    }

    /// Move the cursor one item down.
    pub fn down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.clip(len);
        self.cursor = match self.ends {
            EndBehavior::Clamp => (self.cursor + 1).min(len - 1),
            EndBehavior::Wrap => (self.cursor + 1) % len,
        };
        self.view_to_cursor();
    }

    /// Re-establish the cursor bound after the list shrank under us.
    fn clip(&mut self, len: usize) {
        if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Slide the window so the cursor stays inside it.
    fn view_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        if self.cursor >= self.offset + self.visible {
            self.offset = self.cursor - self.visible + 1;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_stops_at_top() {
        let mut c = ListCursor::new(4, EndBehavior::Clamp);
        c.up(10);
        assert_eq!(c.cursor(), 0);
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn test_clamp_stops_at_bottom() {
        let mut c = ListCursor::new(4, EndBehavior::Clamp);
        for _ in 0..20 {
            c.down(10);
        }
        assert_eq!(c.cursor(), 9);
        assert_eq!(c.offset(), 6);
    }

    #[test]
    fn test_wrap_top_goes_to_bottom() {
        let mut c = ListCursor::new(4, EndBehavior::Wrap);
        c.up(10);
        assert_eq!(c.cursor(), 9);
        assert_eq!(c.offset(), 6);
    }

    #[test]
    fn test_wrap_bottom_goes_to_top() {
        let mut c = ListCursor::new(4, EndBehavior::Wrap);
        for _ in 0..10 {
            c.down(10);
        }
        assert_eq!(c.cursor(), 0);
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn test_viewport_follows_cursor_down() {
        let mut c = ListCursor::new(4, EndBehavior::Clamp);
        for _ in 0..5 {
            c.down(10);
        }
        // cursor 5, window must contain it
        assert_eq!(c.cursor(), 5);
        assert!(c.offset() <= c.cursor());
        assert!(c.cursor() < c.offset() + c.visible());
        assert_eq!(c.offset(), 2);
    }

    #[test]
    fn test_viewport_follows_cursor_up() {
        let mut c = ListCursor::new(4, EndBehavior::Clamp);
        for _ in 0..8 {
            c.down(10);
        }
        for _ in 0..8 {
            c.up(10);
        }
        assert_eq!(c.cursor(), 0);
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut c = ListCursor::new(4, EndBehavior::Wrap);
        c.up(0);
        c.down(0);
        assert_eq!(c.cursor(), 0);
    }

    #[test]
    fn test_short_list_never_scrolls() {
        let mut c = ListCursor::new(4, EndBehavior::Clamp);
        for _ in 0..10 {
            c.down(3);
        }
        assert_eq!(c.cursor(), 2);
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn test_cursor_clipped_after_list_shrinks() {
        let mut c = ListCursor::new(4, EndBehavior::Clamp);
        for _ in 0..9 {
            c.down(10);
        }
        assert_eq!(c.cursor(), 9);
        // List shrank from 10 to 3; next move must land in bounds.
        c.down(3);
        assert_eq!(c.cursor(), 2);
    }
}
