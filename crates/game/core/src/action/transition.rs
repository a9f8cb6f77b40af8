use crate::env::GameEnv;
use crate::state::GameState;

/// A state change with optional checks on either side of it.
///
/// Refusals belong in `pre_validate` so a refused step never touches the
/// state. The hooks only read.
pub trait ActionTransition {
    type Error;
    type Result;

    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Runs after a successful `pre_validate`.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Invariants that must hold once `apply` returned.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
