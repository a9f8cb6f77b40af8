//! Declarative rule tables.
//!
//! Location triggers and the Talk/Search/Use branches are all [`Rule`]s: an
//! [`Area`], a list of [`Guard`]s and a list of [`Effect`]s. Tables are
//! ordered and evaluated first-match-wins by the engine. Rules that mutate
//! the world guard on the cell they change, so they stop matching once they
//! have fired.
mod area;
mod effect;
mod guard;
mod table;

pub use area::Area;
pub use effect::{ActorSprite, Effect, Script, Sprite, View};
pub use guard::{Guard, RuleContext};
pub use table::{InteractionTable, Resolution, Rule, RuleError, RuleTable};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CellId, MapDimensions};
    use crate::state::{
        Actor, GameState, InventoryState, Milestone, NarrativeState, Position, Viewport, WorldGrid,
    };

    static GATE: RuleTable = RuleTable {
        rules: &[
            Rule {
                name: "close_gate",
                area: Area::at(4, 1),
                guards: &[Guard::CellIs(Position::new(4, 1), CellId::DoorOpen)],
                effects: &[Effect::set(4, 1, CellId::DoorClose)],
            },
            Rule {
                name: "late_story",
                area: Area::column(4, 0, 3),
                guards: &[Guard::StoryAtLeast(Milestone(20))],
                effects: &[],
            },
        ],
    };

    static TALK: InteractionTable = InteractionTable {
        branches: RuleTable {
            rules: &[Rule {
                name: "show_ticket",
                area: Area::Anywhere,
                guards: &[Guard::Holding(CellId::Ticket)],
                effects: &[],
            }],
        },
        fallback: &[Effect::Say(CellId::Man, "Nothing here.")],
    };

    fn state(milestone: u16) -> GameState {
        let mut world = WorldGrid::filled(MapDimensions::new(12, 6), CellId::Blank);
        world.set(Position::new(4, 1), CellId::DoorOpen).unwrap();
        GameState::new(
            world,
            Viewport::new(Position::ORIGIN, MapDimensions::new(12, 6)).unwrap(),
            Actor::new(Position::new(4, 1)).unwrap(),
            InventoryState::new(),
            NarrativeState::new(Milestone(milestone)),
        )
    }

    #[test]
    fn first_matching_rule_wins_and_is_deterministic() {
        let state = state(30);
        let context = RuleContext::new(&state);
        for _ in 0..3 {
            assert_eq!(GATE.first_match(&context).map(|rule| rule.name), Some("close_gate"));
        }
    }

    #[test]
    fn cell_guard_stops_a_fired_rule() {
        let mut state = state(30);
        state.world.set(Position::new(4, 1), CellId::DoorClose).unwrap();
        let context = RuleContext::new(&state);
        assert_eq!(GATE.first_match(&context).map(|rule| rule.name), Some("late_story"));

        let early = {
            let mut early = state.clone();
            early.narrative = NarrativeState::new(Milestone(10));
            early
        };
        assert!(GATE.first_match(&RuleContext::new(&early)).is_none());
    }

    #[test]
    fn interaction_falls_back_without_a_branch() {
        let state = state(0);
        let plain = RuleContext::new(&state);
        assert_eq!(TALK.resolve(&plain).name(), "fallback");
        assert_eq!(TALK.resolve(&plain.holding(CellId::Ticket)).name(), "show_ticket");
    }

    #[test]
    fn validation_reports_out_of_bounds_coordinates() {
        static BROKEN: RuleTable = RuleTable {
            rules: &[Rule {
                name: "broken",
                area: Area::at(1, 1),
                guards: &[],
                effects: &[Effect::set(40, 1, CellId::Blank)],
            }],
        };
        let world = MapDimensions::new(12, 6);
        assert!(GATE.validate(world).is_ok());
        assert_eq!(
            BROKEN.validate(world),
            Err(RuleError::OutOfBounds {
                rule: "broken",
                position: Position::new(40, 1),
            })
        );
    }
}
