use crate::env::CellId;
use crate::state::{GameState, Milestone, Position};

/// What a rule sees when it is evaluated.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub state: &'a GameState,
    /// Absolute actor position.
    pub position: Position,
    /// Item picked for a `Use`, if any.
    pub holding: Option<CellId>,
}

impl<'a> RuleContext<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            state,
            position: state.actor_position(),
            holding: None,
        }
    }

    pub fn holding(mut self, item: CellId) -> Self {
        self.holding = Some(item);
        self
    }
}

/// Condition on story, world or inventory. All guards of a rule must hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    StoryIs(Milestone),
    StoryBelow(Milestone),
    StoryAtLeast(Milestone),
    StoryIn(&'static [Milestone]),
    CellIs(Position, CellId),
    CellIsNot(Position, CellId),
    HasItem(CellId),
    LacksItem(CellId),
    /// The item chosen for `Use`.
    Holding(CellId),
}

impl Guard {
    pub fn holds(&self, context: &RuleContext<'_>) -> bool {
        let state = context.state;
        match *self {
            Guard::StoryIs(milestone) => state.milestone() == milestone,
            Guard::StoryBelow(milestone) => state.milestone() < milestone,
            Guard::StoryAtLeast(milestone) => state.milestone() >= milestone,
            Guard::StoryIn(milestones) => milestones.contains(&state.milestone()),
            Guard::CellIs(position, cell) => state.cell(position) == Some(cell),
            Guard::CellIsNot(position, cell) => state.cell(position) != Some(cell),
            Guard::HasItem(item) => state.inventory.contains(item),
            Guard::LacksItem(item) => !state.inventory.contains(item),
            Guard::Holding(item) => context.holding == Some(item),
        }
    }

    pub(crate) fn position(&self) -> Option<Position> {
        match *self {
            Guard::CellIs(position, _) | Guard::CellIsNot(position, _) => Some(position),
            _ => None,
        }
    }
}
