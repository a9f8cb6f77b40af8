//! What the terminal currently shows, independent of ratatui.
use std::ops::Range;

use game_core::{CellId, Frame, GameState, MenuView, Milestone};

/// Everything a redraw needs besides the history log.
#[derive(Clone, Debug, Default)]
pub struct ScreenState {
    pub frame: Frame,
    pub dialogue: Option<Dialogue>,
    pub menu: Option<MenuSnapshot>,
    pub status: Status,
}

/// The dialogue page currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialogue {
    pub speaker: CellId,
    pub page: String,
    /// More pages follow this one.
    pub more: bool,
}

/// Owned copy of a [`MenuView`]; the engine's view only lives for one call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSnapshot {
    pub title: String,
    pub entries: Vec<(String, Option<CellId>)>,
    pub visible: Range<usize>,
    pub cursor: usize,
}

impl From<&MenuView<'_>> for MenuSnapshot {
    fn from(view: &MenuView<'_>) -> Self {
        Self {
            title: view.title.to_owned(),
            entries: view
                .entries
                .iter()
                .map(|entry| (entry.label.to_owned(), entry.icon))
                .collect(),
            visible: view.visible.clone(),
            cursor: view.cursor,
        }
    }
}

/// Story marker and bag contents for the side panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub milestone: Milestone,
    pub items: Vec<(CellId, &'static str)>,
}

impl Status {
    pub fn of(state: &GameState) -> Self {
        Self {
            milestone: state.milestone(),
            items: state.inventory.iter().map(|item| (item.id, item.name)).collect(),
        }
    }
}
