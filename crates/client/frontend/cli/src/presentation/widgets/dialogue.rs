//! Message box: portrait, speaker and the current page.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::{TILE_WIDTH, Theme};
use crate::state::Dialogue;

pub fn render(frame: &mut Frame, area: Rect, dialogue: Option<&Dialogue>) {
    let title = dialogue
        .map(|dialogue| Theme::speaker_name(dialogue.speaker))
        .filter(|name| !name.is_empty())
        .map(|name| format!(" {name} "))
        .unwrap_or_default();
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(dialogue) = dialogue else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(TILE_WIDTH + 1), Constraint::Min(1)])
        .split(inner);

    let (portrait, style) = Theme::tile(dialogue.speaker);
    frame.render_widget(Paragraph::new(Span::styled(portrait, style)), chunks[0]);

    let mut text = Text::from(dialogue.page.as_str());
    if dialogue.more {
        text.push_line(Line::from(Span::styled(
            ">>",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        )));
    }
    frame.render_widget(Paragraph::new(text), chunks[1]);
}
