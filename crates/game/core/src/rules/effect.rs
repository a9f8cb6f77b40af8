use crate::action::CardinalDirection;
use crate::env::CellId;
use crate::state::{Camera, Milestone, Position};

/// One step of a rule or script, executed in order by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Paged message with the speaker's portrait.
    Say(CellId, &'static str),
    SetCell(Position, CellId),
    /// Teleport: viewport origin plus actor local position.
    Reposition(Camera),
    /// Push the actor one cell without any collision check.
    Nudge(CardinalDirection),
    Advance(Milestone),
    AddItem(CellId),
    Exchange(CellId, CellId),
    Render(View),
    /// One animation beat.
    Pause,
    Play(&'static Script),
    SaveCamera,
    RestoreCamera,
}

impl Effect {
    pub const fn reposition(viewport: (i32, i32), actor: (i32, i32)) -> Self {
        Effect::Reposition(Camera {
            viewport: Position::new(viewport.0, viewport.1),
            actor: Position::new(actor.0, actor.1),
        })
    }

    pub const fn set(x: i32, y: i32, cell: CellId) -> Self {
        Effect::SetCell(Position::new(x, y), cell)
    }
}

/// Named effect sequence: the data form of an animation or cut-scene.
#[derive(Debug, PartialEq, Eq)]
pub struct Script {
    pub name: &'static str,
    pub steps: &'static [Effect],
}

/// What a `Render` step draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Visible part of the world with the actor and extra sprites on top.
    World {
        actor: ActorSprite,
        overlays: &'static [Sprite],
    },
    /// Empty screen with only the listed sprites.
    Canvas(&'static [Sprite]),
}

impl View {
    /// The normal gameplay frame.
    pub const WORLD: View = View::World {
        actor: ActorSprite::Walking,
        overlays: &[],
    };
    /// The world without the actor, for cut-aways.
    pub const SCENERY: View = View::World {
        actor: ActorSprite::Hidden,
        overlays: &[],
    };

    pub const fn with_overlays(overlays: &'static [Sprite]) -> Self {
        View::World {
            actor: ActorSprite::Hidden,
            overlays,
        }
    }

    pub(crate) fn sprites(&self) -> &'static [Sprite] {
        match *self {
            View::World { overlays, .. } => overlays,
            View::Canvas(sprites) => sprites,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorSprite {
    Walking,
    Hidden,
    /// Drawn at the actor's spot instead of the walking sprite.
    Posed(CellId),
}

/// A sprite at a viewport-local tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub cell: CellId,
    pub at: Position,
}

impl Sprite {
    pub const fn new(cell: CellId, x: i32, y: i32) -> Self {
        Self {
            cell,
            at: Position::new(x, y),
        }
    }
}
