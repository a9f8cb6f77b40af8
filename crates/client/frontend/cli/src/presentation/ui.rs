//! Composes the widgets into the full terminal layout.
use anyhow::Result;
use game_core::GameConfig;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::{
    message::{MessageLog, PAGE_LINES},
    presentation::{terminal::Tui, theme::TILE_WIDTH, widgets},
    state::ScreenState,
};

/// Rendering context containing all state and configuration needed for one draw.
pub struct RenderContext<'a> {
    pub screen: &'a ScreenState,
    pub history: &'a MessageLog,
    pub history_height: u16,
}

/// Tile window width including its border.
const SCREEN_WIDTH: u16 = GameConfig::VIEWPORT_WIDTH as u16 * TILE_WIDTH + 2;
const SCREEN_HEIGHT: u16 = GameConfig::VIEWPORT_HEIGHT as u16 + 2;
/// Page lines, the "more" marker and two borders.
const DIALOGUE_HEIGHT: u16 = PAGE_LINES as u16 + 3;

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

fn draw(frame: &mut ratatui::Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Header
            Constraint::Length(SCREEN_HEIGHT),      // Tiles and items
            Constraint::Length(DIALOGUE_HEIGHT),    // Dialogue
            Constraint::Length(ctx.history_height), // History
            Constraint::Length(3),                  // Footer
            Constraint::Min(0),
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], &ctx.screen.status);

    let body = body_columns(chunks[1]);
    widgets::screen::render(frame, body[0], &ctx.screen.frame);
    widgets::inventory::render(frame, body[1], &ctx.screen.status);

    widgets::dialogue::render(frame, chunks[2], ctx.screen.dialogue.as_ref());
    widgets::history::render(frame, chunks[3], ctx.history);
    widgets::footer::render(frame, chunks[4], ctx.screen.menu.is_some());

    if let Some(menu) = &ctx.screen.menu {
        widgets::menu::render(frame, chunks[1], menu);
    }
}

fn body_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SCREEN_WIDTH), Constraint::Min(16)])
        .split(area)
}

#[cfg(test)]
mod tests {
    use game_core::CellId;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::state::{Dialogue, MenuSnapshot};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn dialogue_and_menu_are_drawn() {
        let mut history = MessageLog::new(10);
        history.push(CellId::Dr, "Good morning.");
        let screen = ScreenState {
            dialogue: Some(Dialogue {
                speaker: CellId::Police,
                page: "Stay inside tonight.".to_owned(),
                more: true,
            }),
            menu: Some(MenuSnapshot {
                title: "Action".to_owned(),
                entries: vec![
                    ("Talk".to_owned(), None),
                    ("Search".to_owned(), None),
                    ("Use".to_owned(), None),
                ],
                visible: 0..3,
                cursor: 1,
            }),
            ..ScreenState::default()
        };
        let ctx = RenderContext {
            screen: &screen,
            history: &history,
            history_height: 5,
        };

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).expect("test terminal");
        terminal.draw(|frame| draw(frame, &ctx)).expect("draw");
        let text = screen_text(&terminal);

        assert!(text.contains("Officer"));
        assert!(text.contains("Stay inside tonight."));
        assert!(text.contains("Search"));
        assert!(text.contains("Doctor: Good morning."));
        assert!(text.contains("[Esc] Back"));
    }
}
