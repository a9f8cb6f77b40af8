//! Runs a movement (or any other [`ActionTransition`]) through its checks.

use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{TransitionPhase, TransitionPhaseError};

/// `pre_validate`, `apply`, `post_validate`, in that order. The first failure
/// is tagged with its phase; a pre-validation failure leaves `state` untouched.
pub(super) fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}
