use game_core::{Area, CellId, Effect, Guard, InteractionTable, Position, Rule, RuleTable};

use crate::scripts::STANDING;

const RICH_HOUSE_FRONT: &[Position] = &[
    Position::new(5, 3),
    Position::new(6, 3),
    Position::new(7, 3),
    Position::new(8, 2),
];
const STATION_GATES: &[Position] = &[Position::new(5, 16), Position::new(5, 18)];

pub static SEARCH: InteractionTable = InteractionTable {
    branches: RuleTable {
        rules: &[
            Rule {
                name: "rich_house",
                area: Area::Points(RICH_HOUSE_FRONT),
                guards: &[],
                effects: &[Effect::Say(
                    CellId::Man,
                    "The rich house next to the doctor's. They say its alarm is so touchy that a sparrow set it off last time, and the police came running.",
                )],
            },
            Rule {
                name: "doctors_house",
                area: Area::row(3, 1, 3),
                guards: &[],
                effects: &[Effect::Say(
                    CellId::Man,
                    "The doctor has lived here for years. He has always been a kind neighbour.",
                )],
            },
            Rule {
                name: "home_cabinet",
                area: Area::at(18, 17),
                guards: &[Guard::LacksItem(CellId::Slingshot)],
                effects: &[
                    Effect::AddItem(CellId::Slingshot),
                    Effect::set(18, 16, CellId::CabinetOpen),
                    Effect::Render(STANDING),
                    Effect::Say(
                        CellId::Man,
                        "My old slingshot! I never missed a shot with it as a kid.",
                    ),
                    Effect::Say(CellId::Slingshot, "Got the slingshot."),
                ],
            },
            Rule {
                name: "ticket_machine",
                area: Area::at(7, 16),
                guards: &[],
                effects: &[Effect::Say(CellId::Man, "A ticket machine.")],
            },
            Rule {
                name: "station_gate",
                area: Area::Points(STATION_GATES),
                guards: &[],
                effects: &[Effect::Say(
                    CellId::Man,
                    "A train is waiting on the platform. I need a ticket to get through.",
                )],
            },
            Rule {
                name: "doctors_cabinet",
                area: Area::at(19, 21),
                guards: &[Guard::LacksItem(CellId::Invoice)],
                effects: &[
                    Effect::AddItem(CellId::Invoice),
                    Effect::set(19, 20, CellId::CabinetOpen),
                    Effect::Render(STANDING),
                    Effect::Say(
                        CellId::Man,
                        "Found it, a repair receipt for a CC800. It's ready for pickup at the shop in the tower across town. I should go now.",
                    ),
                    Effect::Say(CellId::Invoice, "Got the repair receipt."),
                ],
            },
            Rule {
                name: "lab_cabinet",
                area: Area::at(1, 21),
                guards: &[],
                effects: &[Effect::Say(
                    CellId::Man,
                    "This cabinet has an electronic lock. The doctor must keep something important in it.",
                )],
            },
            Rule {
                name: "toilet_cabinet",
                area: Area::at(26, 22),
                guards: &[Guard::LacksItem(CellId::ToiletPaper)],
                effects: &[
                    Effect::AddItem(CellId::ToiletPaper),
                    Effect::set(26, 21, CellId::CabinetOpen),
                    Effect::Render(STANDING),
                    Effect::Say(CellId::Man, "A roll of toilet paper. Could come in handy."),
                    Effect::Say(CellId::ToiletPaper, "Got the toilet paper."),
                ],
            },
            Rule {
                name: "cell_door",
                area: Area::at(29, 27),
                guards: &[],
                effects: &[Effect::Say(
                    CellId::Man,
                    "The door is wired to an electric lock. It's shut tight.",
                )],
            },
        ],
    },
    fallback: &[Effect::Say(CellId::Man, "Found nothing special.")],
};
