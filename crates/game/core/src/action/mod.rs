//! Player intents and the transition contract they are executed through.
mod input;
mod interact;
mod movement;
mod transition;

pub use input::InputEvent;
pub use interact::InteractionKind;
pub use movement::{CardinalDirection, MoveAction, MoveError, Step};
pub use transition::ActionTransition;
