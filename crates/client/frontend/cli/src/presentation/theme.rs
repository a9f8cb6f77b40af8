//! Glyphs and colours for sprite ids.
//!
//! Each tile is drawn as two terminal cells. Entrances share the `[]` glyph
//! so walkable doorways stand out from the building around them.

use game_core::CellId;
use ratatui::style::{Color, Modifier, Style};

/// Terminal cells per tile.
pub const TILE_WIDTH: u16 = 2;

pub struct Theme;

impl Theme {
    pub fn tile(cell: CellId) -> (&'static str, Style) {
        use CellId::*;

        let (glyph, color) = match cell {
            Blank => ("  ", Color::Reset),
            Tree => ("♣♣", Color::Green),
            Brick => ("▤▤", Color::Red),
            Gray => ("██", Color::DarkGray),
            Man | Man2 => return (Self::walker(cell), Self::actor_style()),
            GlobalView7 | DrHouse4 | Office4 | Home3 | Rapid5 => ("[]", Color::LightYellow),
            GlobalView1 | GlobalView2 | GlobalView3 | GlobalView4 | GlobalView5
            | GlobalView6 | GlobalView8 => ("▒▒", Color::Cyan),
            DrHouse1 | DrHouse2 | DrHouse3 | DrHouse5 | DrHouse6 => ("▲▲", Color::LightMagenta),
            Office1 | Office2 | Office3 | Office5 | Office6 => ("▒▒", Color::Blue),
            RichHouse1 | RichHouse2 | RichHouse3 | RichHouse4 | RichHouse5 | RichHouse6
            | RichHouse7 | RichHouse8 | RichHouse9 => ("$$", Color::Yellow),
            Rapid1 | Rapid2 | Rapid3 | Rapid4 | Rapid6 => ("══", Color::LightBlue),
            Home1 | Home2 | Home4 => ("▲▲", Color::LightRed),
            DoorClose => ("||", Color::Gray),
            DoorOpen => ("/ ", Color::Gray),
            Stair1 | Stair2 => ("≡≡", Color::Gray),
            Flower => ("* ", Color::LightMagenta),
            Table => ("ππ", Color::LightYellow),
            Cabinet => ("▣ ", Color::LightYellow),
            CabinetOpen => ("□ ", Color::LightYellow),
            Bed => ("▭▭", Color::LightCyan),
            TicketMachine => ("$M", Color::LightGreen),
            StreetLamp => ("i ", Color::Yellow),
            Computer => ("▯ ", Color::Gray),
            Water => ("~~", Color::Blue),
            RapidCar1 => ("<═", Color::LightBlue),
            RapidCar2 => ("══", Color::LightBlue),
            RapidCar3 => ("═>", Color::LightBlue),
            Track => ("┆ ", Color::DarkGray),
            Closestool => ("WC", Color::White),
            Dr => ("Dr", Color::White),
            Police => ("Po", Color::LightBlue),
            Girl => ("Gi", Color::LightMagenta),
            Assistant => ("As", Color::LightGreen),
            BadManL => ("<X", Color::LightRed),
            BadManR => ("X>", Color::LightRed),
            Sleep => ("zZ", Color::LightCyan),
            Smile => (":)", Color::Yellow),
            Sad => (":(", Color::Yellow),
            Slingshot => ("Y ", Color::LightYellow),
            Money => ("$ ", Color::LightYellow),
            Ticket => ("Tk", Color::LightYellow),
            Cellphone => ("Ph", Color::LightYellow),
            Invoice => ("Rc", Color::LightYellow),
            Cc800 => ("CC", Color::LightYellow),
            Chemical => ("! ", Color::LightGreen),
            ToiletPaper => ("Tp", Color::LightYellow),
        };
        (glyph, Style::default().fg(color))
    }

    fn walker(cell: CellId) -> &'static str {
        if cell == CellId::Man { "@ " } else { " @" }
    }

    fn actor_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn speaker_name(cell: CellId) -> &'static str {
        match cell {
            CellId::Man | CellId::Man2 | CellId::Sleep => "You",
            CellId::Dr => "Doctor",
            CellId::Police => "Officer",
            CellId::Girl => "Clerk",
            CellId::Assistant => "Assistant",
            CellId::BadManL | CellId::BadManR => "Guard",
            CellId::Blank | CellId::Smile | CellId::Sad => "",
            _ => "Item",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_cells() -> impl Iterator<Item = CellId> {
        (0..=u8::MAX).filter_map(CellId::from_repr)
    }

    #[test]
    fn every_glyph_fills_one_tile() {
        for cell in all_cells() {
            let (glyph, _) = Theme::tile(cell);
            assert_eq!(glyph.chars().count(), TILE_WIDTH as usize, "{cell:?}");
        }
    }

    #[test]
    fn walkable_entrances_share_a_glyph() {
        assert_eq!(Theme::tile(CellId::Rapid5).0, "[]");
        assert_eq!(Theme::tile(CellId::Home3).0, "[]");
        assert_ne!(Theme::tile(CellId::Man).0, Theme::tile(CellId::Man2).0);
    }
}
