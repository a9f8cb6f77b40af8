//! Paged list selection shared by the action menu and the inventory picker.

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Confirm,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOutcome {
    Pending,
    /// Absolute index into the listed entries.
    Selected(usize),
    Cancelled,
}

/// Scrolling window over `len` entries.
///
/// `selected` is relative to `base`; the window shows `base..base + window`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionMenu {
    len: usize,
    window: usize,
    base: usize,
    selected: usize,
}

impl SelectionMenu {
    pub fn new(len: usize) -> Self {
        Self::with_window(len, GameConfig::MENU_WINDOW)
    }

    pub fn with_window(len: usize, window: usize) -> Self {
        Self {
            len,
            window: window.max(1),
            base: 0,
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Absolute index of the highlighted entry.
    pub fn cursor(&self) -> usize {
        self.base + self.selected
    }

    /// Indices currently on screen.
    pub fn visible(&self) -> std::ops::Range<usize> {
        self.base..(self.base + self.window).min(self.len)
    }

    pub fn handle(&mut self, input: MenuInput) -> MenuOutcome {
        match input {
            MenuInput::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                } else if self.base > 0 {
                    self.base -= 1;
                }
                MenuOutcome::Pending
            }
            MenuInput::Down => {
                if self.selected + 1 < self.window && self.selected + 1 < self.len {
                    self.selected += 1;
                } else if self.base < self.len.saturating_sub(self.window) {
                    self.base += 1;
                }
                MenuOutcome::Pending
            }
            MenuInput::Confirm if self.is_empty() => MenuOutcome::Cancelled,
            MenuInput::Confirm => MenuOutcome::Selected(self.cursor()),
            MenuInput::Cancel => MenuOutcome::Cancelled,
        }
    }
}
