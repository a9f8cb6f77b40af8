//! Popup for the action menu and the item picker.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use crate::presentation::theme::Theme;
use crate::state::MenuSnapshot;

/// Draws the visible window of `menu` centred over `area`.
pub fn render(frame: &mut Frame, area: Rect, menu: &MenuSnapshot) {
    let items: Vec<ListItem> = menu.entries[menu.visible.clone()]
        .iter()
        .zip(menu.visible.clone())
        .map(|((label, icon), index)| {
            let mut spans = Vec::with_capacity(3);
            if let Some(icon) = icon {
                let (glyph, style) = Theme::tile(*icon);
                spans.push(Span::styled(glyph, style));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::raw(label.as_str()));
            let item = ListItem::new(Line::from(spans));
            if index == menu.cursor {
                item.style(Theme::highlight())
            } else {
                item
            }
        })
        .collect();

    let widest = menu
        .entries
        .iter()
        .map(|(label, icon)| label.chars().count() + if icon.is_some() { 3 } else { 0 })
        .max()
        .unwrap_or(0)
        .max(menu.title.chars().count() + 2);
    let popup = centered(area, widest as u16 + 4, menu.visible.len() as u16 + 2);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", menu.title)),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(list, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_stays_inside_the_area() {
        let area = Rect::new(2, 3, 20, 6);
        let popup = centered(area, 40, 10);
        assert_eq!(popup, area);

        let popup = centered(area, 10, 4);
        assert_eq!(popup, Rect::new(7, 4, 10, 4));
    }
}
