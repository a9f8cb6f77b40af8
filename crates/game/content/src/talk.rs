use game_core::{
    Area, CellId, Effect, Guard, InteractionTable, Milestone, Position, Rule, RuleTable,
};

use crate::milestone;
use crate::scripts::{self, STANDING};

const DOCTORS_DOOR: Position = Position::new(1, 2);
const HOME_VISITOR: Position = Position::new(12, 18);
const ASSISTANT_SPOTS: &[Position] = &[Position::new(7, 21), Position::new(8, 22)];
const CAPTIVE_SPOTS: &[Position] = &[Position::new(28, 28), Position::new(29, 27)];
const GUARD_AWAY: &[Milestone] = &[milestone::GUARD_LURED, milestone::DOOR_CORRODED];

pub static TALK: InteractionTable = InteractionTable {
    branches: RuleTable {
        rules: &[
            Rule {
                name: "doctor_worried",
                area: Area::at(1, 3),
                guards: &[Guard::StoryIs(milestone::START)],
                effects: &[
                    Effect::Say(CellId::Man, "Doctor, why are you standing out at your door?"),
                    Effect::Say(CellId::Dr, "I'm worried. My research is almost finished."),
                    Effect::Say(CellId::Man, "That's great news. Why worry?"),
                    Effect::Say(
                        CellId::Dr,
                        "I fear some people would put my work to terrible use.",
                    ),
                    Effect::Say(
                        CellId::Dr,
                        "Lately I feel watched, and I keep getting strange phone calls.",
                    ),
                    Effect::Say(CellId::Man, "Sounds serious. Should we call the police?"),
                    Effect::Say(
                        CellId::Dr,
                        "No, no. Maybe I'm just tired. I need some rest.",
                    ),
                    Effect::Advance(milestone::MET_DOCTOR),
                ],
            },
            Rule {
                name: "doctor_tired",
                area: Area::at(1, 3),
                guards: &[Guard::StoryIs(milestone::MET_DOCTOR)],
                effects: &[Effect::Say(
                    CellId::Dr,
                    "It's late. Go home and get some sleep.",
                )],
            },
            Rule {
                name: "police_at_the_door",
                area: Area::at(1, 3),
                guards: &[Guard::CellIs(DOCTORS_DOOR, CellId::Police)],
                effects: &[
                    Effect::Say(CellId::Man, "Officer, why are you guarding the doctor's house?"),
                    Effect::Say(
                        CellId::Police,
                        "The doctor was taken from his home. Nobody touches the scene until the investigators are done.",
                    ),
                    Effect::Say(CellId::Man, "Not even me?"),
                    Effect::Say(CellId::Police, "Especially not you. No one goes in."),
                    Effect::Say(
                        CellId::Man,
                        "I need to get inside somehow. I have to lure him away.",
                    ),
                ],
            },
            Rule {
                name: "police_questioning",
                area: Area::at(13, 18),
                guards: &[Guard::StoryIs(milestone::WOKE_UP)],
                effects: &[
                    Effect::Say(
                        CellId::Police,
                        "Good morning, police. Your neighbour the doctor has disappeared. Did you see anything?",
                    ),
                    Effect::Say(CellId::Man, "What? How did that happen?"),
                    Effect::Say(
                        CellId::Police,
                        "His house was broken into and his lab was ransacked. Nobody has seen him since.",
                    ),
                    Effect::Say(
                        CellId::Police,
                        "Did he have enemies? Did he mention anything odd lately?",
                    ),
                    Effect::Say(CellId::Man, "Well..."),
                    Effect::Say(CellId::Man, "No."),
                    Effect::Say(
                        CellId::Police,
                        "Did you hear anything last night, or see anyone suspicious?",
                    ),
                    Effect::Say(CellId::Man, "No, I slept like a log."),
                    Effect::Say(
                        CellId::Police,
                        "If you remember anything, let us know right away.",
                    ),
                    Effect::Say(CellId::Man, "I will."),
                    Effect::Advance(milestone::QUESTIONED),
                    Effect::SetCell(HOME_VISITOR, CellId::Blank),
                    Effect::set(11, 18, CellId::Police),
                    Effect::Render(STANDING),
                    Effect::set(11, 18, CellId::Blank),
                    Effect::SetCell(DOCTORS_DOOR, CellId::Police),
                    Effect::Render(STANDING),
                    Effect::Say(
                        CellId::Man,
                        "The doctor vanished right after telling me about his research?",
                    ),
                    Effect::Say(
                        CellId::Man,
                        "The police won't get far with this. I'll have to find him myself.",
                    ),
                    Effect::Say(CellId::Man, "His lab is the place to start."),
                ],
            },
            Rule {
                name: "shop_clerk",
                area: Area::at(15, 28),
                guards: &[],
                effects: &[
                    Effect::Say(
                        CellId::Girl,
                        "Hello, this is the repair counter. How can I help?",
                    ),
                    Effect::Say(CellId::Man, "Oh, so this is the repair shop."),
                    Effect::Say(CellId::Man, "Are you free tonight? Let's have dinner."),
                    Effect::Say(CellId::Girl, "Excuse me? What are you here for?"),
                    Effect::Say(
                        CellId::Man,
                        "Just kidding. I came to pick up a repaired CC800.",
                    ),
                    Effect::Say(CellId::Girl, "Hand me the repair receipt, please."),
                ],
            },
            Rule {
                name: "assistant_briefing",
                area: Area::Points(ASSISTANT_SPOTS),
                guards: &[Guard::StoryAtLeast(milestone::QUESTIONED)],
                effects: &[
                    Effect::Say(
                        CellId::Assistant,
                        "I heard the doctor was kidnapped. I'm so worried.",
                    ),
                    Effect::Say(CellId::Man, "Don't worry, I'll find a way to save him."),
                    Effect::Say(CellId::Man, "You're his assistant. What was he working on?"),
                    Effect::Say(
                        CellId::Assistant,
                        "He worked alone. I only know it had to do with germs.",
                    ),
                    Effect::Say(CellId::Man, "Germs? Did he keep notes anywhere?"),
                    Effect::Say(
                        CellId::Assistant,
                        "Everything is on his CC800, but it broke last week and went in for repair.",
                    ),
                    Effect::Say(CellId::Man, "Then I have to find that CC800."),
                ],
            },
            Rule {
                name: "assistant_greeting",
                area: Area::Points(ASSISTANT_SPOTS),
                guards: &[],
                effects: &[
                    Effect::Say(CellId::Assistant, "Hello, I'm the doctor's assistant."),
                    Effect::Say(CellId::Man, "Hi."),
                ],
            },
            Rule {
                name: "captive_doctor_explains",
                area: Area::Points(CAPTIVE_SPOTS),
                guards: &[Guard::StoryIs(milestone::CHEMICAL_FOUND)],
                effects: &[
                    Effect::Say(CellId::Man, "Doctor, are you all right? What do they want?"),
                    Effect::Say(CellId::Dr, "They want the formula of the germ I bred."),
                    Effect::Say(CellId::Man, "A germ?"),
                    Effect::Say(CellId::Dr, "Yes, a germ that eats through metal."),
                    Effect::Say(
                        CellId::Man,
                        "Eats metal? Is that the liquid I found in your cabinet?",
                    ),
                    Effect::Say(CellId::Dr, "That's it. How did you get it?"),
                    Effect::Say(
                        CellId::Man,
                        "Oh no, I spilled some on my hands. Will they be eaten away?",
                    ),
                    Effect::Say(
                        CellId::Dr,
                        "Relax. Outside the solution the germs die quickly.",
                    ),
                    Effect::Say(
                        CellId::Dr,
                        "They only corrode metal that carries an electric current. That's why a glass bottle holds them.",
                    ),
                    Effect::Say(CellId::Man, "That makes sense. What a relief."),
                    Effect::Say(
                        CellId::Dr,
                        "Enough of that. We need a way out of here.",
                    ),
                ],
            },
            Rule {
                name: "captive_doctor_plan",
                area: Area::Points(CAPTIVE_SPOTS),
                guards: &[Guard::StoryIs(milestone::TOILET_JAMMED)],
                effects: &[
                    Effect::Say(
                        CellId::Man,
                        "I jammed the toilet with paper. Once it floods the guard has to go look.",
                    ),
                    Effect::Say(CellId::Dr, "Let's hope it works."),
                    Effect::Play(&scripts::GUARD_LEAVES),
                    Effect::Advance(milestone::GUARD_LURED),
                ],
            },
            Rule {
                name: "captive_doctor_hurry",
                area: Area::Points(CAPTIVE_SPOTS),
                guards: &[Guard::StoryIn(GUARD_AWAY)],
                effects: &[
                    Effect::Say(CellId::Man, "It worked, the guard is gone."),
                    Effect::Say(CellId::Dr, "Then let's find a way out, quickly."),
                ],
            },
            Rule {
                name: "captive_doctor_silent",
                area: Area::Points(CAPTIVE_SPOTS),
                guards: &[],
                effects: &[
                    Effect::Say(CellId::Man, "..."),
                    Effect::Say(CellId::Dr, "..."),
                ],
            },
            Rule {
                name: "guard",
                area: Area::at(26, 27),
                guards: &[Guard::CellIs(Position::new(24, 27), CellId::BadManR)],
                effects: &[
                    Effect::Say(CellId::Man, "Let us out!"),
                    Effect::Say(
                        CellId::BadManR,
                        "Not until the doctor agrees to work with us.",
                    ),
                ],
            },
        ],
    },
    fallback: &[Effect::Say(CellId::Man, "There is no one to talk to.")],
};
