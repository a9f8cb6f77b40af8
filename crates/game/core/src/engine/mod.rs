//! Input handling and rule execution.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. One call to
//! [`GameEngine::handle_input`] performs at most one movement step, at most
//! one location-trigger firing, and renders after each state change.

mod dispatch;
mod effects;
mod errors;
mod transition;

pub use dispatch::choose;
pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use tracing::{debug, info};

use crate::action::{CardinalDirection, InputEvent, InteractionKind, MoveAction, MoveError, Step};
use crate::config::GameConfig;
use crate::env::{CellId, GameEnv};
use crate::error::GameError;
use crate::frame::Frame;
use crate::host::Host;
use crate::rules::RuleContext;
use crate::state::GameState;

/// Record of a resolved Talk / Search / Use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interaction {
    pub kind: InteractionKind,
    /// Name of the branch that fired, or `"fallback"`.
    pub branch: &'static str,
    pub holding: Option<CellId>,
}

/// What one handled input did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub step: Option<Step>,
    /// Why a move was refused (wall, viewport edge).
    pub refused: Option<MoveError>,
    pub interaction: Option<Interaction>,
    /// Location trigger that fired after the input.
    pub transition: Option<&'static str>,
    pub ended: bool,
}

pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Handles one decoded key press.
    ///
    /// Returns [`ExecuteError::SessionEnded`] once the ending has played.
    pub fn handle_input<H>(
        &mut self,
        env: &GameEnv<'_>,
        host: &mut H,
        input: InputEvent,
    ) -> Result<TickOutcome, ExecuteError>
    where
        H: Host + ?Sized,
    {
        if self.state.is_ended() {
            return Err(ExecuteError::SessionEnded);
        }

        let mut outcome = TickOutcome::default();
        match input {
            InputEvent::Move(direction) => match self.walk(env, direction) {
                Ok(step) => outcome.step = Some(step),
                Err(ExecuteError::Move(refused)) if refused.error.severity().is_recoverable() => {
                    debug!(error = %refused.error, "move refused");
                    outcome.refused = Some(refused.error);
                }
                Err(error) => return Err(error),
            },
            InputEvent::Confirm => outcome.interaction = self.act(env, host)?,
            InputEvent::Help => {
                let help = env.scenario()?.help();
                self.run_effects(env, host, help)?;
            }
            InputEvent::Cancel | InputEvent::Quit => {}
        }

        if !self.state.is_ended() {
            self.state.actor.advance_stride();
            host.render(&Frame::world(self.state));
            outcome.transition = self.check_transitions(env, host)?;
        }
        outcome.ended = self.state.is_ended();
        Ok(outcome)
    }

    /// Moves the actor one cell, scrolling the viewport at its border.
    pub fn walk(
        &mut self,
        env: &GameEnv<'_>,
        direction: CardinalDirection,
    ) -> Result<Step, ExecuteError> {
        let step = transition::drive_transition(&MoveAction::new(direction), self.state, env)
            .map_err(ExecuteError::Move)?;
        debug!(?direction, from = %step.from, to = %step.to, scrolled = step.scrolled, "actor moved");
        Ok(step)
    }

    /// Fires the first location trigger matching the actor's position.
    pub fn check_transitions<H>(
        &mut self,
        env: &GameEnv<'_>,
        host: &mut H,
    ) -> Result<Option<&'static str>, ExecuteError>
    where
        H: Host + ?Sized,
    {
        let Some(rule) = env
            .scenario()?
            .transitions()
            .first_match(&RuleContext::new(self.state))
        else {
            return Ok(None);
        };

        info!(rule = rule.name, position = %self.state.actor_position(), "transition fired");
        self.run_effects(env, host, rule.effects)?;
        if !self.state.is_ended() {
            self.state.actor.reset_stride();
            host.pause(self.config.settle_delay);
            host.render(&Frame::world(self.state));
        }
        Ok(Some(rule.name))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::time::Duration;

    use super::*;
    use crate::env::{Bootstrap, Env, ItemOracle, MapDimensions, MapOracle, ScenarioOracle};
    use crate::host::MenuView;
    use crate::rules::{Area, Effect, Guard, InteractionTable, Rule, RuleTable, Script, View};
    use crate::state::{Milestone, Position};

    struct Plain;

    impl MapOracle for Plain {
        fn dimensions(&self) -> MapDimensions {
            MapDimensions::new(12, 6)
        }

        fn cell(&self, position: Position) -> Option<CellId> {
            self.contains(position).then_some(if position.x == 11 {
                CellId::Tree
            } else {
                CellId::Blank
            })
        }
    }

    impl ItemOracle for Plain {
        fn display_name(&self, _item: CellId) -> &'static str {
            "thing"
        }
    }

    static TRANSITIONS: RuleTable = RuleTable {
        rules: &[Rule {
            name: "door",
            area: Area::at(3, 1),
            guards: &[Guard::CellIs(Position::new(3, 0), CellId::Blank)],
            effects: &[Effect::set(3, 0, CellId::DoorClose)],
        }],
    };

    static TALK: InteractionTable = InteractionTable {
        branches: RuleTable { rules: &[] },
        fallback: &[Effect::Say(CellId::Man, "Nobody here.")],
    };

    static USE: InteractionTable = InteractionTable {
        branches: RuleTable {
            rules: &[Rule {
                name: "wave_phone",
                area: Area::Anywhere,
                guards: &[Guard::Holding(CellId::Cellphone)],
                effects: &[Effect::Advance(Milestone(80))],
            }],
        },
        fallback: &[Effect::Say(CellId::Man, "No use.")],
    };

    static ENDING: Script = Script {
        name: "ending",
        steps: &[Effect::Render(View::Canvas(&[])), Effect::Say(CellId::Smile, "The End")],
    };

    impl ScenarioOracle for Plain {
        fn bootstrap(&self) -> Bootstrap {
            Bootstrap {
                viewport: Position::new(0, 0),
                actor: Position::new(2, 1),
                inventory: &[CellId::Money, CellId::Cellphone],
                milestone: Milestone(0),
            }
        }

        fn transitions(&self) -> &RuleTable {
            &TRANSITIONS
        }

        fn interactions(&self, kind: InteractionKind) -> &InteractionTable {
            match kind {
                InteractionKind::Use => &USE,
                _ => &TALK,
            }
        }

        fn action_labels(&self) -> [&'static str; 3] {
            ["Talk", "Search", "Use"]
        }

        fn help(&self) -> &'static [Effect] {
            &[Effect::Say(CellId::Blank, "help")]
        }

        fn terminal_milestone(&self) -> Milestone {
            Milestone(80)
        }

        fn ending(&self) -> &'static Script {
            &ENDING
        }
    }

    #[derive(Default)]
    struct ScriptedHost {
        inputs: VecDeque<InputEvent>,
        messages: Vec<(CellId, String)>,
        renders: usize,
    }

    impl Host for ScriptedHost {
        fn render(&mut self, _frame: &Frame) {
            self.renders += 1;
        }

        fn show_message(&mut self, speaker: CellId, text: &str) {
            self.messages.push((speaker, text.to_owned()));
        }

        fn show_menu(&mut self, _menu: &MenuView<'_>) {}

        fn read_input(&mut self) -> InputEvent {
            self.inputs.pop_front().unwrap_or(InputEvent::Cancel)
        }

        fn pause(&mut self, _duration: Duration) {}
    }

    fn setup() -> (GameState, GameConfig) {
        let env: GameEnv<'_> = Env::with_all(&Plain, &Plain, &Plain).into_game_env();
        (GameState::bootstrap(&env).unwrap(), GameConfig::instant())
    }

    #[test]
    fn trigger_fires_once_then_its_guard_closes() {
        let (mut state, config) = setup();
        let env = Env::with_all(&Plain, &Plain, &Plain).into_game_env();
        let mut host = ScriptedHost::default();
        let mut engine = GameEngine::new(&mut state, &config);

        let east = InputEvent::Move(CardinalDirection::East);
        let outcome = engine.handle_input(&env, &mut host, east).unwrap();
        assert_eq!(outcome.transition, Some("door"));
        assert_eq!(engine.state().cell(Position::new(3, 0)), Some(CellId::DoorClose));

        let west = InputEvent::Move(CardinalDirection::West);
        engine.handle_input(&env, &mut host, west).unwrap();
        let outcome = engine.handle_input(&env, &mut host, east).unwrap();
        assert_eq!(outcome.transition, None);
    }

    #[test]
    fn cancelled_use_has_no_side_effects() {
        let (mut state, config) = setup();
        let before = state.clone();
        let env = Env::with_all(&Plain, &Plain, &Plain).into_game_env();
        let mut host = ScriptedHost::default();
        host.inputs.extend([
            InputEvent::Move(CardinalDirection::South),
            InputEvent::Move(CardinalDirection::South),
            InputEvent::Confirm,
            InputEvent::Cancel,
        ]);
        let mut engine = GameEngine::new(&mut state, &config);

        let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();
        assert_eq!(outcome.interaction, None);
        assert!(host.messages.is_empty());
        assert_eq!(state.inventory, before.inventory);
        assert_eq!(state.milestone(), before.milestone());
    }

    #[test]
    fn talk_without_branch_uses_the_fallback_line() {
        let (mut state, config) = setup();
        let env = Env::with_all(&Plain, &Plain, &Plain).into_game_env();
        let mut host = ScriptedHost::default();
        host.inputs.push_back(InputEvent::Confirm);
        let mut engine = GameEngine::new(&mut state, &config);

        let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();
        let interaction = outcome.interaction.unwrap();
        assert_eq!(interaction.kind, InteractionKind::Talk);
        assert_eq!(interaction.branch, "fallback");
        assert_eq!(host.messages, [(CellId::Man, "Nobody here.".to_owned())]);
    }

    #[test]
    fn terminal_milestone_plays_ending_and_locks_the_session() {
        let (mut state, config) = setup();
        let env = Env::with_all(&Plain, &Plain, &Plain).into_game_env();
        let mut host = ScriptedHost::default();
        // Use -> second item (phone).
        host.inputs.extend([
            InputEvent::Move(CardinalDirection::South),
            InputEvent::Move(CardinalDirection::South),
            InputEvent::Confirm,
            InputEvent::Move(CardinalDirection::South),
            InputEvent::Confirm,
        ]);
        let mut engine = GameEngine::new(&mut state, &config);

        let outcome = engine.handle_input(&env, &mut host, InputEvent::Confirm).unwrap();
        assert!(outcome.ended);
        assert_eq!(host.messages.last().map(|(_, text)| text.as_str()), Some("The End"));

        let error = engine
            .handle_input(&env, &mut host, InputEvent::Help)
            .unwrap_err();
        assert_eq!(error, ExecuteError::SessionEnded);
    }

    #[test]
    fn walking_into_a_wall_is_refused_not_failed() {
        let (mut state, config) = setup();
        state
            .reposition(crate::state::Camera {
                viewport: Position::new(2, 0),
                actor: Position::new(8, 1),
            })
            .unwrap();
        let env = Env::with_all(&Plain, &Plain, &Plain).into_game_env();
        let mut host = ScriptedHost::default();
        let mut engine = GameEngine::new(&mut state, &config);

        let before = engine.state().actor_position();
        let outcome = engine
            .handle_input(&env, &mut host, InputEvent::Move(CardinalDirection::East))
            .unwrap();
        assert!(matches!(outcome.refused, Some(MoveError::Blocked { .. })));
        assert_eq!(engine.state().actor_position(), before);
    }
}
