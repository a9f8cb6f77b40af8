//! Footer widget displaying key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, in_menu: bool) {
    let line = if in_menu {
        Line::from(vec![
            Span::raw("[Up/Down] Choose | "),
            Span::raw("[Enter] Select | "),
            Span::raw("[Esc] Back"),
        ])
    } else {
        Line::from(vec![
            Span::raw("[hjkl/WASD/Arrows] Walk | "),
            Span::raw("[Enter] Act | "),
            Span::raw("[?] Help | "),
            Span::raw("[q] Quit"),
        ])
    };

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
