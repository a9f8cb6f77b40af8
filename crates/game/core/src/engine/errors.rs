//! Error types for input handling.

use crate::action::{ActionTransition, MoveAction};
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{NarrativeError, StateError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while the engine handles one input event.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("rule effect failed: {0}")]
    State(#[from] StateError),

    #[error(transparent)]
    Narrative(#[from] NarrativeError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("the session has ended")]
    SessionEnded,
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Move(error) => error.error.severity(),
            ExecuteError::State(error) => error.severity(),
            ExecuteError::Narrative(error) => error.severity(),
            ExecuteError::Oracle(error) => error.severity(),
            ExecuteError::SessionEnded => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Move(error) => error.error.error_code(),
            ExecuteError::State(error) => error.error_code(),
            ExecuteError::Narrative(error) => error.error_code(),
            ExecuteError::Oracle(error) => error.error_code(),
            ExecuteError::SessionEnded => "SESSION_ENDED",
        }
    }
}
