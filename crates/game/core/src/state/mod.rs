//! Session state.
//!
//! [`GameState`] is the one value the engine mutates: the live world grid,
//! the camera, the actor, the inventory and the story marker. Nothing lives in
//! globals, so every transition can be exercised from a plain test.
mod error;
pub mod types;

pub use error::{InitializationError, NarrativeError, StateError};
pub use types::{
    Actor, InventoryState, Item, Milestone, NarrativeState, Position, Viewport, WorldGrid,
};

use crate::env::{CellId, GameEnv};

/// Camera placement: viewport origin plus the actor's local position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    pub viewport: Position,
    pub actor: Position,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Playing,
    /// The ending played; no input is accepted any more.
    Ended,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub world: WorldGrid,
    pub viewport: Viewport,
    pub actor: Actor,
    pub inventory: InventoryState,
    pub narrative: NarrativeState,
    saved_camera: Option<Camera>,
    phase: SessionPhase,
}

impl GameState {
    pub fn new(
        world: WorldGrid,
        viewport: Viewport,
        actor: Actor,
        inventory: InventoryState,
        narrative: NarrativeState,
    ) -> Self {
        Self {
            world,
            viewport,
            actor,
            inventory,
            narrative,
            saved_camera: None,
            phase: SessionPhase::Playing,
        }
    }

    /// Builds the opening state from the map and the scenario's bootstrap.
    pub fn bootstrap(env: &GameEnv<'_>) -> Result<Self, InitializationError> {
        let map = env.map()?;
        let items = env.items()?;
        let bootstrap = env.scenario()?.bootstrap();

        let world = WorldGrid::from_oracle(map)?;
        let viewport = Viewport::new(bootstrap.viewport, world.dimensions())?;
        let actor = Actor::new(bootstrap.actor)?;

        let mut inventory = InventoryState::new();
        for &item in bootstrap.inventory {
            if !inventory.add(item, items) && inventory.is_full() {
                return Err(InitializationError::InventoryOverflow {
                    count: bootstrap.inventory.len(),
                });
            }
        }

        Ok(Self::new(
            world,
            viewport,
            actor,
            inventory,
            NarrativeState::new(bootstrap.milestone),
        ))
    }

    /// Actor position in world coordinates.
    pub fn actor_position(&self) -> Position {
        self.viewport.to_absolute(self.actor.local())
    }

    pub fn cell(&self, position: Position) -> Option<CellId> {
        self.world.get(position)
    }

    pub fn milestone(&self) -> Milestone {
        self.narrative.current()
    }

    pub fn camera(&self) -> Camera {
        Camera {
            viewport: self.viewport.origin(),
            actor: self.actor.local(),
        }
    }

    /// Teleports camera and actor. Both halves are validated before either changes.
    pub fn reposition(&mut self, camera: Camera) -> Result<(), StateError> {
        if !self.viewport.accepts_origin(camera.viewport) {
            return Err(StateError::ViewportOutOfRange {
                origin: camera.viewport,
            });
        }
        if !Viewport::contains_local(camera.actor) {
            return Err(StateError::ActorOutsideViewport {
                local: camera.actor,
            });
        }
        self.viewport.set_origin(camera.viewport)?;
        self.actor.place(camera.actor)
    }

    /// Remembers the camera so a cut-away can restore it afterwards.
    pub fn save_camera(&mut self) {
        self.saved_camera = Some(self.camera());
    }

    pub fn restore_camera(&mut self) -> Result<(), StateError> {
        let camera = self.saved_camera.take().ok_or(StateError::NoSavedCamera)?;
        self.reposition(camera)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_ended(&self) -> bool {
        self.phase == SessionPhase::Ended
    }

    pub fn end(&mut self) {
        self.phase = SessionPhase::Ended;
    }
}
