//! The engine's view of its surroundings.
//!
//! Drawing, message paging, key reading and pacing are provided by the host
//! (the terminal client, or a recording double in tests). All calls are
//! blocking; the engine never runs anything in the background.

use std::ops::Range;
use std::time::Duration;

use crate::action::InputEvent;
use crate::env::CellId;
use crate::frame::Frame;

pub trait Host {
    fn render(&mut self, frame: &Frame);

    /// Shows `text` next to the speaker's portrait, paging as needed.
    /// Returns once the player has read every page.
    fn show_message(&mut self, speaker: CellId, text: &str);

    fn show_menu(&mut self, menu: &MenuView<'_>);

    /// Blocks until one decoded key press is available.
    fn read_input(&mut self) -> InputEvent;

    fn pause(&mut self, duration: Duration);
}

/// Snapshot of a selection menu for drawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuView<'a> {
    pub title: &'a str,
    pub entries: &'a [MenuEntry<'a>],
    pub visible: Range<usize>,
    /// Absolute index of the highlighted entry.
    pub cursor: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry<'a> {
    pub label: &'a str,
    pub icon: Option<CellId>,
}
