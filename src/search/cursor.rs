//! Selection cursor over the current ranked results.

/// Highlighted index into a result list of length `len`. Inactive when the
/// list is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    index: usize,
    len: usize,
}

impl SelectionCursor {
    /// Results changed: back to the top, whatever the previous position.
    pub fn reset(&mut self, len: usize) {
        self.index = 0;
        self.len = len;
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn selected(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn is_active(&self) -> bool {
        self.len > 0
    }
}
