use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::{CellId, ItemOracle};

/// One carried item with its resolved display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: CellId,
    pub name: &'static str,
}

/// Ordered, bounded inventory. Ids are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryState {
    items: ArrayVec<Item, { GameConfig::INVENTORY_SLOTS }>,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` unless it is already carried or every slot is taken.
    ///
    /// Returns `true` if the item was inserted.
    pub fn add<I>(&mut self, id: CellId, names: &I) -> bool
    where
        I: ItemOracle + ?Sized,
    {
        if self.contains(id) {
            return false;
        }
        self.items
            .try_push(Item {
                id,
                name: names.display_name(id),
            })
            .is_ok()
    }

    /// Replaces the first slot holding `old` with `new`, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when `old` is not carried or
    /// `new` already is.
    pub fn exchange<I>(&mut self, old: CellId, new: CellId, names: &I) -> bool
    where
        I: ItemOracle + ?Sized,
    {
        if old != new && self.contains(new) {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == old) {
            Some(slot) => {
                *slot = Item {
                    id: new,
                    name: names.display_name(new),
                };
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }
}
