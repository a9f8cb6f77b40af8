use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::theme::Theme;
use crate::state::Status;

pub fn render(frame: &mut Frame, area: Rect, status: &Status) {
    let items: Vec<ListItem> = status
        .items
        .iter()
        .map(|&(id, name)| {
            let (glyph, style) = Theme::tile(id);
            ListItem::new(Line::from(vec![
                Span::styled(glyph, style),
                Span::raw(" "),
                Span::raw(name),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Items"));
    frame.render_widget(list, area);
}
