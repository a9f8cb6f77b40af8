//! History widget listing earlier dialogue, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::message::MessageLog;
use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, history: &MessageLog) {
    let rows = area.height.saturating_sub(2) as usize;
    let mut items: Vec<ListItem> = history
        .recent(rows)
        .map(|entry| {
            let speaker = Theme::speaker_name(entry.speaker);
            let mut spans = Vec::with_capacity(2);
            if !speaker.is_empty() {
                spans.push(Span::styled(
                    format!("{speaker}: "),
                    Style::default().fg(Color::Cyan),
                ));
            }
            spans.push(Span::raw(entry.text.as_str()));
            ListItem::new(Line::from(spans))
        })
        .collect();

    // Pad with empty lines to maintain consistent height
    while items.len() < rows {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("History"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}
