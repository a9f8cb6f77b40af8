//! Location triggers, checked after every handled input.
//!
//! Order matters: the abduction must be tried before the plain lab exit, the
//! guarded doctor's-house exit before the blocked one, and the sleep scene
//! before the plain bed.

use game_core::{
    ActorSprite, Area, CardinalDirection, CellId, Effect, Guard, Position, Rule, RuleTable, View,
};

use crate::milestone;
use crate::scripts::{self, STANDING};

const ASLEEP: View = View::World {
    actor: ActorSprite::Posed(CellId::Sleep),
    overlays: &[],
};

const TOILET_DOOR: Position = Position::new(27, 23);
const UPPER_GATE: Position = Position::new(4, 16);
const LOWER_GATE: Position = Position::new(4, 18);

pub static TRANSITIONS: RuleTable = RuleTable {
    rules: &[
        Rule {
            name: "enter_station",
            area: Area::at(9, 6),
            guards: &[Guard::StoryBelow(milestone::CHEMICAL_FOUND)],
            effects: &[
                Effect::reposition((0, 15), (8, 1)),
                Effect::Render(STANDING),
                Effect::Say(CellId::Man, "The station. Trains leave from the far platform."),
            ],
        },
        Rule {
            name: "leave_station",
            area: Area::at(9, 16),
            guards: &[],
            effects: &[Effect::reposition((5, 5), (4, 2))],
        },
        Rule {
            name: "enter_lab",
            area: Area::at(17, 6),
            guards: &[],
            effects: &[Effect::reposition((0, 25), (5, 2))],
        },
        Rule {
            name: "abduction",
            area: Area::at(5, 28),
            guards: &[Guard::StoryIs(milestone::CHEMICAL_FOUND)],
            effects: &[
                Effect::reposition((13, 5), (4, 2)),
                Effect::Render(STANDING),
                Effect::Say(CellId::Man, "Who are you? What do you want?"),
                Effect::Say(
                    CellId::BadManR,
                    "The doctor won't listen to reason. Maybe he'll listen to you. Come with us.",
                ),
                Effect::Say(CellId::Man, "So you are the ones who took the doctor!"),
                Effect::Say(CellId::BadManR, "Enough talk. Move."),
                Effect::reposition((21, 25), (5, 2)),
                Effect::Render(STANDING),
                Effect::Say(
                    CellId::BadManR,
                    "Talk some sense into the doctor. Cooperate and nobody gets hurt. Don't even think about leaving.",
                ),
                Effect::Say(CellId::Man, "So this is where they hid the doctor."),
            ],
        },
        Rule {
            name: "leave_lab",
            area: Area::at(5, 28),
            guards: &[],
            effects: &[Effect::reposition((13, 5), (4, 2))],
        },
        Rule {
            name: "enter_home",
            area: Area::at(12, 2),
            guards: &[],
            effects: &[Effect::reposition((11, 16), (1, 2))],
        },
        Rule {
            name: "leave_home",
            area: Area::at(11, 18),
            guards: &[],
            effects: &[Effect::reposition((4, 0), (7, 2))],
        },
        Rule {
            name: "enter_doctors_house",
            area: Area::at(1, 2),
            guards: &[],
            effects: &[Effect::reposition((11, 21), (2, 1))],
        },
        Rule {
            name: "enter_tower",
            area: Area::at(26, 8),
            guards: &[],
            effects: &[Effect::reposition((11, 25), (8, 2))],
        },
        Rule {
            name: "leave_tower",
            area: Area::at(20, 27),
            guards: &[],
            effects: &[Effect::reposition((20, 7), (6, 2))],
        },
        Rule {
            name: "enter_far_station",
            area: Area::at(22, 2),
            guards: &[],
            effects: &[
                Effect::reposition((0, 15), (1, 2)),
                Effect::Play(&scripts::TRAIN_ARRIVAL),
            ],
        },
        Rule {
            name: "leave_doctors_house",
            area: Area::at(20, 23),
            guards: &[Guard::CellIs(Position::new(19, 20), CellId::CabinetOpen)],
            effects: &[
                Effect::reposition((0, 0), (4, 2)),
                Effect::set(1, 2, CellId::Police),
            ],
        },
        Rule {
            name: "doctors_house_exit_blocked",
            area: Area::at(20, 23),
            guards: &[],
            effects: &[
                Effect::Nudge(CardinalDirection::West),
                Effect::Say(
                    CellId::Man,
                    "I made it into the doctor's house. I'm not leaving before I find what I came for.",
                ),
            ],
        },
        Rule {
            name: "doctors_front_room",
            area: Area::at(12, 23),
            guards: &[],
            effects: &[
                Effect::Nudge(CardinalDirection::North),
                Effect::Say(
                    CellId::Man,
                    "The police are right outside. Any closer to the front and they'll spot me.",
                ),
            ],
        },
        Rule {
            name: "ride_train",
            area: Area::column(0, 16, 18),
            guards: &[],
            effects: &[
                Effect::Play(&scripts::TRAIN_DEPARTURE),
                Effect::reposition((20, 1), (2, 2)),
                Effect::Render(STANDING),
                Effect::Say(CellId::Man, "Next stop, the far side of town."),
            ],
        },
        Rule {
            name: "pass_upper_gate",
            area: Area::Point(UPPER_GATE),
            guards: &[Guard::CellIs(UPPER_GATE, CellId::DoorOpen)],
            effects: &[Effect::SetCell(UPPER_GATE, CellId::DoorClose)],
        },
        Rule {
            name: "pass_lower_gate",
            area: Area::Point(LOWER_GATE),
            guards: &[Guard::CellIs(LOWER_GATE, CellId::DoorOpen)],
            effects: &[Effect::SetCell(LOWER_GATE, CellId::DoorClose)],
        },
        Rule {
            name: "leave_toilet",
            area: Area::Point(TOILET_DOOR),
            guards: &[
                Guard::StoryIs(milestone::TOILET_JAMMED),
                Guard::CellIs(TOILET_DOOR, CellId::DoorOpen),
            ],
            effects: &[Effect::SetCell(TOILET_DOOR, CellId::DoorClose)],
        },
        Rule {
            name: "sleep",
            area: Area::at(19, 17),
            guards: &[Guard::StoryIs(milestone::MET_DOCTOR)],
            effects: &[
                Effect::Render(ASLEEP),
                Effect::Say(CellId::Sleep, "Time for bed. ZZZ..."),
                Effect::Render(scripts::BLANK_SCREEN),
                Effect::Say(CellId::Blank, "The next morning..."),
                Effect::set(12, 18, CellId::Police),
                Effect::reposition((11, 16), (7, 1)),
                Effect::Render(STANDING),
                Effect::Say(
                    CellId::Man,
                    "Someone is at the door first thing in the morning? I'd better go and see.",
                ),
                Effect::Advance(milestone::WOKE_UP),
            ],
        },
        Rule {
            name: "bed",
            area: Area::at(19, 17),
            guards: &[],
            effects: &[
                Effect::Render(ASLEEP),
                Effect::Say(CellId::Sleep, "I'm not sleepy. Better go out for a walk."),
                Effect::Nudge(CardinalDirection::West),
            ],
        },
    ],
};
