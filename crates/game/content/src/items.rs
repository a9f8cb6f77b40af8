use game_core::{CellId, ItemOracle};

/// Labels shown in the item picker.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItemCatalog;

impl ItemOracle for ItemCatalog {
    fn display_name(&self, item: CellId) -> &'static str {
        match item {
            CellId::Money => "Money",
            CellId::Cellphone => "Cell phone",
            CellId::Slingshot => "Slingshot",
            CellId::Ticket => "Train ticket",
            CellId::Invoice => "Repair receipt",
            CellId::Cc800 => "CC800",
            CellId::ToiletPaper => "Toilet paper",
            // The only other thing that ends up in the bag is the chemical.
            _ => "Germ-killing solution",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_items_read_as_the_chemical() {
        let catalog = ItemCatalog;
        assert_eq!(catalog.display_name(CellId::Invoice), "Repair receipt");
        assert_eq!(catalog.display_name(CellId::Chemical), "Germ-killing solution");
    }
}
