/// Explicit actions offered by the action menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Talk,
    Search,
    /// Pick an item from the inventory and use it here.
    Use,
}

impl InteractionKind {
    /// Menu order.
    pub const ALL: [InteractionKind; 3] = [
        InteractionKind::Talk,
        InteractionKind::Search,
        InteractionKind::Use,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            InteractionKind::Talk => "talk",
            InteractionKind::Search => "search",
            InteractionKind::Use => "use",
        }
    }

    pub fn from_menu_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
