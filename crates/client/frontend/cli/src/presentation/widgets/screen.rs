//! The 10x4 tile window onto the world.

use game_core::Frame as TileFrame;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, tiles: &TileFrame) {
    let lines: Vec<Line> = tiles
        .rows()
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&cell| {
                    let (glyph, style) = Theme::tile(cell);
                    Span::styled(glyph, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
