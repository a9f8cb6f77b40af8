//! State-level error types.

use crate::env::{MapDimensions, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Milestone, Position};

/// Invariant violations on the grid, the viewport or the actor.
///
/// Every coordinate in the content tables is expected to be in bounds, so
/// these only surface when a rule is wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("cell {position} is outside the world")]
    CellOutOfBounds { position: Position },

    #[error("viewport origin {origin} is outside the scroll range")]
    ViewportOutOfRange { origin: Position },

    #[error("actor local position {local} is outside the viewport")]
    ActorOutsideViewport { local: Position },

    #[error("world {width}x{height} is smaller than the viewport")]
    WorldTooSmall { width: u32, height: u32 },

    #[error("no saved camera to restore")]
    NoSavedCamera,
}

impl StateError {
    pub fn world_too_small(dimensions: MapDimensions) -> Self {
        Self::WorldTooSmall {
            width: dimensions.width,
            height: dimensions.height,
        }
    }
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::CellOutOfBounds { .. }
            | StateError::ViewportOutOfRange { .. }
            | StateError::ActorOutsideViewport { .. } => ErrorSeverity::Validation,
            StateError::WorldTooSmall { .. } => ErrorSeverity::Fatal,
            StateError::NoSavedCamera => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::CellOutOfBounds { .. } => "STATE_CELL_OUT_OF_BOUNDS",
            StateError::ViewportOutOfRange { .. } => "STATE_VIEWPORT_OUT_OF_RANGE",
            StateError::ActorOutsideViewport { .. } => "STATE_ACTOR_OUTSIDE_VIEWPORT",
            StateError::WorldTooSmall { .. } => "STATE_WORLD_TOO_SMALL",
            StateError::NoSavedCamera => "STATE_NO_SAVED_CAMERA",
        }
    }
}

/// The narrative marker only moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("narrative cannot move back from {current} to {requested}")]
pub struct NarrativeError {
    pub current: Milestone,
    pub requested: Milestone,
}

impl GameError for NarrativeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "NARRATIVE_REGRESSION"
    }
}

/// Errors raised while building the initial [`GameState`](super::GameState).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error("map oracle has no cell at {position}")]
    MissingCell { position: Position },

    #[error("starting inventory does not fit: {count} items")]
    InventoryOverflow { count: usize },

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            InitializationError::State(error) => error.severity(),
            InitializationError::Oracle(error) => error.severity(),
            _ => ErrorSeverity::Validation,
        }
    }
}
