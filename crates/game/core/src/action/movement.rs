use crate::action::ActionTransition;
use crate::env::{CellId, GameEnv};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Position, StateError, Viewport};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("actor already stands on the {direction:?} edge of the viewport")]
    AtEdge { direction: CardinalDirection },

    #[error("destination {destination} is blocked by {cell:?}")]
    Blocked {
        destination: Position,
        cell: Option<CellId>,
    },

    #[error(transparent)]
    State(#[from] StateError),
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::AtEdge { .. } | MoveError::Blocked { .. } => ErrorSeverity::Recoverable,
            MoveError::State(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::AtEdge { .. } => "MOVE_AT_EDGE",
            MoveError::Blocked { .. } => "MOVE_BLOCKED",
            MoveError::State(error) => error.error_code(),
        }
    }
}

/// Screen directions. North is up, towards row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::South => (0, 1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }

    /// Whether `local` sits on the viewport border this direction points at.
    fn is_on_edge(self, local: Position) -> bool {
        match self {
            CardinalDirection::North => local.y == 0,
            CardinalDirection::South => local.y == Viewport::HEIGHT - 1,
            CardinalDirection::East => local.x == Viewport::WIDTH - 1,
            CardinalDirection::West => local.x == 0,
        }
    }
}

/// One-cell step of the actor, scrolling the viewport when it reaches the border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub direction: CardinalDirection,
}

/// Where a successful step went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub from: Position,
    pub to: Position,
    /// The viewport slid instead of the actor.
    pub scrolled: bool,
}

impl MoveAction {
    pub fn new(direction: CardinalDirection) -> Self {
        Self { direction }
    }

    fn target_local(&self, local: Position) -> Position {
        let (dx, dy) = self.direction.delta();
        local.offset(dx, dy)
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = Step;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let local = self.target_local(state.actor.local());
        if !Viewport::contains_local(local) {
            return Err(MoveError::AtEdge {
                direction: self.direction,
            });
        }

        let destination = state.viewport.to_absolute(local);
        if !state.world.is_walkable(destination) {
            return Err(MoveError::Blocked {
                destination,
                cell: state.cell(destination),
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Step, Self::Error> {
        let from = state.actor_position();
        let previous = state.actor.local();
        let local = self.target_local(previous);
        state.actor.place(local)?;

        let (dx, dy) = self.direction.delta();
        let scrolled = self.direction.is_on_edge(local) && state.viewport.scroll(dx, dy);
        if scrolled {
            // The world slides underneath; the actor keeps its spot on screen.
            state.actor.place(previous)?;
        }

        Ok(Step {
            from,
            to: state.actor_position(),
            scrolled,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let origin = state.viewport.origin();
        if !state.viewport.accepts_origin(origin) {
            return Err(StateError::ViewportOutOfRange { origin }.into());
        }
        let local = state.actor.local();
        if !Viewport::contains_local(local) {
            return Err(StateError::ActorOutsideViewport { local }.into());
        }
        Ok(())
    }
}
