use super::CardinalDirection;
use crate::menu::MenuInput;

/// One key press, already decoded by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Move(CardinalDirection),
    /// Opens the action menu; confirms inside menus.
    Confirm,
    Cancel,
    Help,
    /// External quit request. The engine ignores it; hosts stop their loop.
    Quit,
}

impl InputEvent {
    /// Menu navigation meaning of this key, if any.
    pub fn menu_input(self) -> Option<MenuInput> {
        match self {
            InputEvent::Move(CardinalDirection::North) => Some(MenuInput::Up),
            InputEvent::Move(CardinalDirection::South) => Some(MenuInput::Down),
            InputEvent::Confirm => Some(MenuInput::Confirm),
            InputEvent::Cancel | InputEvent::Quit => Some(MenuInput::Cancel),
            _ => None,
        }
    }
}
