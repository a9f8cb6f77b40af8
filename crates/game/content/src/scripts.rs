//! Cut-scenes: train rides, the police and guard walks, and the ending.
//!
//! Every frame is a `Render` followed by a `Pause`; sprite coordinates in
//! overlays and canvases are screen tiles, not world cells.

use game_core::{ActorSprite, CellId, Effect, Script, Sprite, View};

use crate::milestone;

/// The world with the actor standing still, used between dialogue lines.
pub(crate) const STANDING: View = View::World {
    actor: ActorSprite::Posed(CellId::Man),
    overlays: &[],
};

pub(crate) const BLANK_SCREEN: View = View::Canvas(&[]);

const FRAME: [Effect; 2] = [Effect::Render(View::SCENERY), Effect::Pause];

const POLICE_WALK: [&[Sprite]; 6] = [
    &[Sprite::new(CellId::Police, 1, 3)],
    &[Sprite::new(CellId::Police, 2, 3)],
    &[Sprite::new(CellId::Police, 3, 3)],
    &[Sprite::new(CellId::Police, 4, 3)],
    &[Sprite::new(CellId::Police, 5, 3)],
    &[Sprite::new(CellId::Police, 5, 2)],
];

const CHASE: [&[Sprite]; 4] = [
    &[Sprite::new(CellId::Man, 5, 1), Sprite::new(CellId::Dr, 6, 1)],
    &[
        Sprite::new(CellId::BadManR, 2, 1),
        Sprite::new(CellId::Man2, 6, 1),
        Sprite::new(CellId::Dr, 7, 1),
    ],
    &[
        Sprite::new(CellId::BadManR, 3, 1),
        Sprite::new(CellId::Man, 7, 1),
        Sprite::new(CellId::Dr, 8, 1),
    ],
    &[
        Sprite::new(CellId::BadManR, 4, 1),
        Sprite::new(CellId::Man2, 8, 1),
        Sprite::new(CellId::Dr, 9, 1),
    ],
];

pub static TRAIN_DEPARTURE: Script = Script {
    name: "train_departure",
    steps: &[
        Effect::reposition((0, 15), (0, 1)),
        FRAME[0],
        FRAME[1],
        Effect::set(0, 15, CellId::RapidCar1),
        Effect::set(0, 16, CellId::RapidCar2),
        Effect::set(0, 17, CellId::RapidCar3),
        Effect::set(0, 18, CellId::Track),
        FRAME[0],
        FRAME[1],
        Effect::set(0, 15, CellId::RapidCar2),
        Effect::set(0, 16, CellId::RapidCar3),
        Effect::set(0, 17, CellId::Track),
        FRAME[0],
        FRAME[1],
        Effect::set(0, 15, CellId::RapidCar3),
        Effect::set(0, 16, CellId::Track),
        FRAME[0],
        FRAME[1],
        Effect::set(0, 15, CellId::Track),
        FRAME[0],
        FRAME[1],
    ],
};

pub static TRAIN_ARRIVAL: Script = Script {
    name: "train_arrival",
    steps: &[
        Effect::set(0, 15, CellId::Track),
        Effect::set(0, 16, CellId::Track),
        Effect::set(0, 17, CellId::Track),
        Effect::set(0, 18, CellId::Track),
        FRAME[0],
        FRAME[1],
        Effect::set(0, 15, CellId::RapidCar3),
        FRAME[0],
        FRAME[1],
        Effect::set(0, 15, CellId::RapidCar2),
        Effect::set(0, 16, CellId::RapidCar3),
        FRAME[0],
        FRAME[1],
        Effect::set(0, 15, CellId::RapidCar1),
        Effect::set(0, 16, CellId::RapidCar2),
        Effect::set(0, 17, CellId::RapidCar3),
        FRAME[0],
        FRAME[1],
        Effect::set(0, 15, CellId::Track),
        Effect::set(0, 16, CellId::RapidCar1),
        Effect::set(0, 17, CellId::RapidCar2),
        Effect::set(0, 18, CellId::RapidCar3),
        FRAME[0],
        FRAME[1],
    ],
};

/// The officer hears the rich house's alarm and leaves the doctor's door.
pub static POLICE_LEAVE_DOOR: Script = Script {
    name: "police_leave_door",
    steps: &[
        Effect::SaveCamera,
        Effect::reposition((0, 0), (0, 0)),
        Effect::Render(View::SCENERY),
        Effect::Say(
            CellId::Police,
            "Strange, the rich house's alarm is going off. I had better take a look.",
        ),
        Effect::set(1, 2, CellId::DrHouse4),
        Effect::Render(View::with_overlays(POLICE_WALK[0])),
        Effect::Pause,
        Effect::Render(View::with_overlays(POLICE_WALK[1])),
        Effect::Pause,
        Effect::Render(View::with_overlays(POLICE_WALK[2])),
        Effect::Pause,
        Effect::Render(View::with_overlays(POLICE_WALK[3])),
        Effect::Pause,
        Effect::Render(View::with_overlays(POLICE_WALK[4])),
        Effect::Pause,
        Effect::Render(View::with_overlays(POLICE_WALK[5])),
        Effect::Pause,
        Effect::Render(View::SCENERY),
        Effect::Pause,
        Effect::Advance(milestone::POLICE_LURED),
        Effect::RestoreCamera,
    ],
};

/// The guard walks off to look at the flooded toilet.
pub static GUARD_LEAVES: Script = Script {
    name: "guard_leaves",
    steps: &[
        Effect::SaveCamera,
        Effect::reposition((21, 25), (5, 2)),
        Effect::set(24, 27, CellId::Blank),
        Effect::set(23, 27, CellId::BadManL),
        FRAME[0],
        FRAME[1],
        Effect::Say(
            CellId::BadManR,
            "Huh, why is the toilet leaking? I'd better go and see.",
        ),
        Effect::set(23, 27, CellId::Blank),
        Effect::set(23, 26, CellId::BadManL),
        FRAME[0],
        FRAME[1],
        Effect::set(23, 26, CellId::Blank),
        Effect::set(23, 25, CellId::BadManL),
        FRAME[0],
        FRAME[1],
        Effect::set(23, 25, CellId::Blank),
        Effect::set(26, 22, CellId::BadManL),
        Effect::RestoreCamera,
    ],
};

pub static ENDING: Script = Script {
    name: "ending",
    steps: &[
        Effect::Render(BLANK_SCREEN),
        Effect::Say(CellId::Blank, "-The End-"),
        Effect::Say(CellId::Man, "Wait, wait! It ends just like that?"),
        Effect::Say(CellId::Sad, "No choice, the cartridge is full."),
        Effect::Say(
            CellId::Man,
            "No way. I went through all that to rescue the doctor, I want a proper finale.",
        ),
        Effect::Say(CellId::Smile, "Fine."),
        Effect::Render(View::Canvas(CHASE[0])),
        Effect::Say(CellId::Dr, "Oh no, they are coming after us!"),
        Effect::Render(View::Canvas(CHASE[1])),
        Effect::Say(CellId::BadManR, "Stop right there!"),
        Effect::Render(View::Canvas(CHASE[2])),
        Effect::Say(CellId::Man, "Run, doctor, run!"),
        Effect::Render(View::Canvas(CHASE[3])),
        Effect::Say(CellId::BadManR, "I said stop!"),
        Effect::Say(CellId::Man, "Hmm... somehow this is not the finale I had in mind."),
        Effect::Render(BLANK_SCREEN),
        Effect::Say(CellId::Smile, "-The End-"),
    ],
};
