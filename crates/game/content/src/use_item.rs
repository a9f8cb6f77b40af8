//! Use branches. Each one names the item it reacts to with a `Holding`
//! guard; the location and story guards come after it.

use game_core::{Area, CellId, Effect, Guard, InteractionTable, Position, Rule, RuleTable};

use crate::milestone;
use crate::scripts::{self, STANDING};

const RICH_HOUSE_WALL: &[Position] = &[
    Position::new(5, 3),
    Position::new(6, 3),
    Position::new(7, 3),
];
const UPPER_GATE_SIDES: &[Position] = &[Position::new(3, 16), Position::new(5, 16)];
const LOWER_GATE_SIDES: &[Position] = &[Position::new(3, 18), Position::new(5, 18)];
const TOILET_SPOTS: &[Position] = &[Position::new(26, 22), Position::new(25, 23)];
const PUDDLE: Position = Position::new(25, 23);
const CELL_DOOR: Position = Position::new(29, 27);

pub static USE: InteractionTable = InteractionTable {
    branches: RuleTable {
        rules: &[
            Rule {
                name: "slingshot_alarm",
                area: Area::at(8, 2),
                guards: &[
                    Guard::Holding(CellId::Slingshot),
                    Guard::StoryIs(milestone::QUESTIONED),
                ],
                effects: &[
                    Effect::Say(CellId::Man, "Take aim..."),
                    Effect::Say(
                        CellId::Man,
                        "Bang! A perfect hit on the rich house's window. Still got it.",
                    ),
                    Effect::Say(CellId::Man, "And there goes the alarm."),
                    Effect::Play(&scripts::POLICE_LEAVE_DOOR),
                ],
            },
            Rule {
                name: "slingshot_too_close",
                area: Area::Points(RICH_HOUSE_WALL),
                guards: &[
                    Guard::Holding(CellId::Slingshot),
                    Guard::StoryIs(milestone::QUESTIONED),
                ],
                effects: &[Effect::Say(
                    CellId::Man,
                    "Too obvious from here. The officer would see me.",
                )],
            },
            Rule {
                name: "slingshot_idle",
                area: Area::Anywhere,
                guards: &[Guard::Holding(CellId::Slingshot)],
                effects: &[Effect::Say(CellId::Man, "I don't want to cause any trouble.")],
            },
            Rule {
                name: "buy_ticket",
                area: Area::at(7, 16),
                guards: &[Guard::Holding(CellId::Money)],
                effects: &[
                    Effect::Exchange(CellId::Money, CellId::Ticket),
                    Effect::Say(CellId::Ticket, "Got a train ticket."),
                ],
            },
            Rule {
                name: "open_upper_gate",
                area: Area::Points(UPPER_GATE_SIDES),
                guards: &[Guard::Holding(CellId::Ticket)],
                effects: &[Effect::set(4, 16, CellId::DoorOpen)],
            },
            Rule {
                name: "open_lower_gate",
                area: Area::Points(LOWER_GATE_SIDES),
                guards: &[Guard::Holding(CellId::Ticket)],
                effects: &[Effect::set(4, 18, CellId::DoorOpen)],
            },
            Rule {
                name: "collect_cc800",
                area: Area::at(15, 28),
                guards: &[Guard::Holding(CellId::Invoice)],
                effects: &[
                    Effect::Exchange(CellId::Invoice, CellId::Cc800),
                    Effect::Say(CellId::Man, "Here is the receipt for the CC800."),
                    Effect::Say(CellId::Girl, "One moment, please."),
                    Effect::Say(CellId::Girl, "Here you go. Please take good care of it."),
                    Effect::Say(CellId::Man, "Thanks, I will."),
                    Effect::Say(
                        CellId::Man,
                        "The CC800 holds the code for the doctor's lab cabinet. Now I can open it.",
                    ),
                    Effect::Say(CellId::Cc800, "Got the CC800."),
                ],
            },
            Rule {
                name: "open_lab_cabinet",
                area: Area::at(1, 21),
                guards: &[
                    Guard::Holding(CellId::Cc800),
                    Guard::LacksItem(CellId::Chemical),
                ],
                effects: &[
                    Effect::AddItem(CellId::Chemical),
                    Effect::set(1, 20, CellId::CabinetOpen),
                    Effect::Render(STANDING),
                    Effect::Say(
                        CellId::Man,
                        "A strange liquid in the doctor's cabinet. What is it for?",
                    ),
                    Effect::Say(
                        CellId::Man,
                        "It might be tied to his research. Maybe it will lead me to him.",
                    ),
                    Effect::Say(CellId::Chemical, "Got the solution."),
                    Effect::Advance(milestone::CHEMICAL_FOUND),
                    Effect::set(16, 7, CellId::BadManR),
                    Effect::set(18, 7, CellId::BadManL),
                ],
            },
            Rule {
                name: "jam_toilet",
                area: Area::Points(TOILET_SPOTS),
                guards: &[
                    Guard::Holding(CellId::ToiletPaper),
                    Guard::CellIsNot(PUDDLE, CellId::Water),
                ],
                effects: &[
                    Effect::Say(
                        CellId::Man,
                        "I stuffed the paper down the toilet. It should start overflowing soon.",
                    ),
                    Effect::SetCell(PUDDLE, CellId::Water),
                    Effect::Advance(milestone::TOILET_JAMMED),
                ],
            },
            Rule {
                name: "corrode_door",
                area: Area::Point(CELL_DOOR),
                guards: &[
                    Guard::Holding(CellId::Chemical),
                    Guard::StoryIs(milestone::GUARD_LURED),
                ],
                effects: &[
                    Effect::Say(
                        CellId::Man,
                        "I painted the solution on the lock. The current will let the germs eat through it.",
                    ),
                    Effect::Advance(milestone::DOOR_CORRODED),
                ],
            },
            Rule {
                name: "short_the_lock",
                area: Area::Point(CELL_DOOR),
                guards: &[
                    Guard::Holding(CellId::Cellphone),
                    Guard::StoryIs(milestone::DOOR_CORRODED),
                ],
                effects: &[
                    Effect::Say(
                        CellId::Man,
                        "The phone battery still has charge. A quick short circuit should spring the lock.",
                    ),
                    Effect::set(30, 27, CellId::Blank),
                    Effect::Render(STANDING),
                    Effect::Say(CellId::Man, "Wow, the whole lock fell apart. Brilliant!"),
                    Effect::Say(CellId::Dr, "Let's get out of here."),
                    Effect::Advance(milestone::ESCAPED),
                ],
            },
            Rule {
                name: "door_watched",
                area: Area::Point(CELL_DOOR),
                guards: &[Guard::StoryBelow(milestone::GUARD_LURED)],
                effects: &[Effect::Say(
                    CellId::Man,
                    "The guard is watching the door. Too dangerous, I need to get rid of him first.",
                )],
            },
            Rule {
                name: "phone_no_signal",
                area: Area::Anywhere,
                guards: &[Guard::Holding(CellId::Cellphone)],
                effects: &[Effect::Say(
                    CellId::Man,
                    "No signal. The phone can't get a call out.",
                )],
            },
            Rule {
                name: "bribe_police",
                area: Area::at(1, 3),
                guards: &[
                    Guard::Holding(CellId::Money),
                    Guard::CellIs(Position::new(1, 2), CellId::Police),
                ],
                effects: &[
                    Effect::Say(CellId::Police, "Bribing an officer? You're in trouble now."),
                    Effect::Say(CellId::Man, "Sorry, sorry!"),
                ],
            },
        ],
    },
    fallback: &[Effect::Say(CellId::Man, "Nothing happens.")],
};
