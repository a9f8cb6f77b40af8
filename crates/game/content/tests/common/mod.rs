#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use game_content::Boshi;
use game_core::{
    Camera, CardinalDirection, CellId, Frame, GameConfig, GameState, Host, InputEvent, MenuView,
    Position,
};

/// Host double: replays queued keys and records everything shown.
#[derive(Default)]
pub struct RecordingHost {
    inputs: VecDeque<InputEvent>,
    pub messages: Vec<(CellId, String)>,
    pub menus: Vec<String>,
    pub frames: Vec<Frame>,
    pub pauses: usize,
}

impl RecordingHost {
    pub fn with_inputs(inputs: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn queue(&mut self, inputs: impl IntoIterator<Item = InputEvent>) {
        self.inputs.extend(inputs);
    }

    pub fn said(&self, needle: &str) -> bool {
        self.messages.iter().any(|(_, text)| text.contains(needle))
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.menus.clear();
        self.frames.clear();
        self.pauses = 0;
    }
}

impl Host for RecordingHost {
    fn render(&mut self, frame: &Frame) {
        self.frames.push(*frame);
    }

    fn show_message(&mut self, speaker: CellId, text: &str) {
        self.messages.push((speaker, text.to_owned()));
    }

    fn show_menu(&mut self, menu: &MenuView<'_>) {
        self.menus.push(menu.title.to_owned());
    }

    fn read_input(&mut self) -> InputEvent {
        // An exhausted queue backs out of whatever menu is open.
        self.inputs.pop_front().unwrap_or(InputEvent::Cancel)
    }

    fn pause(&mut self, _duration: Duration) {
        self.pauses += 1;
    }
}

pub fn session(scenario: &Boshi) -> (GameState, GameConfig) {
    let state = GameState::bootstrap(&scenario.env()).expect("scenario bootstraps");
    (state, GameConfig::instant())
}

pub fn teleport(state: &mut GameState, viewport: (i32, i32), actor: (i32, i32)) {
    state
        .reposition(Camera {
            viewport: Position::new(viewport.0, viewport.1),
            actor: Position::new(actor.0, actor.1),
        })
        .expect("valid camera");
}

pub const fn step(direction: CardinalDirection) -> InputEvent {
    InputEvent::Move(direction)
}

/// Keys that choose Talk (0), Search (1) or Use (2) once `Confirm` opened the action menu.
pub fn pick_action(index: usize) -> Vec<InputEvent> {
    pick(index)
}

/// Keys that confirm the entry at `index` of a freshly opened menu.
pub fn pick(index: usize) -> Vec<InputEvent> {
    let mut keys = vec![InputEvent::Move(CardinalDirection::South); index];
    keys.push(InputEvent::Confirm);
    keys
}
