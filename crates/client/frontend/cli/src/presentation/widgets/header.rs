//! Header widget with the title and the story marker.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::Status;

pub fn render(frame: &mut Frame, area: Rect, status: &Status) {
    let text = vec![Line::from(vec![
        Span::styled(
            "Boshi",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Story: "),
        Span::styled(
            status.milestone.to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
