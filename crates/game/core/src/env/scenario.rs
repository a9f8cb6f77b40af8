use super::CellId;
use crate::action::InteractionKind;
use crate::rules::{Effect, InteractionTable, RuleTable, Script};
use crate::state::{Milestone, Position};

/// Story data: where the session starts, which rules fire, and how it ends.
pub trait ScenarioOracle: Send + Sync {
    fn bootstrap(&self) -> Bootstrap;

    /// Location triggers, evaluated after every handled input.
    fn transitions(&self) -> &RuleTable;

    fn interactions(&self, kind: InteractionKind) -> &InteractionTable;

    /// Labels of the action menu, in [`InteractionKind::ALL`] order.
    fn action_labels(&self) -> [&'static str; 3];

    /// Effects played when the player asks for help.
    fn help(&self) -> &'static [Effect];

    /// Reaching this milestone plays [`ending`](Self::ending) and closes the session.
    fn terminal_milestone(&self) -> Milestone;

    fn ending(&self) -> &'static Script;
}

/// Initial session values handed to [`GameState::bootstrap`](crate::state::GameState::bootstrap).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bootstrap {
    pub viewport: Position,
    /// Viewport-local actor position.
    pub actor: Position,
    pub inventory: &'static [CellId],
    pub milestone: Milestone,
}
