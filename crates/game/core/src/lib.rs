//! Deterministic rules for a tile-grid adventure.
//!
//! The crate models the world grid and its scrolling viewport, collision,
//! actor movement, ordered location triggers, a bounded inventory, a
//! forward-only story marker and the Talk/Search/Use dispatcher. Everything
//! observable (drawing, messages, key reads, pauses) goes through [`Host`];
//! static content comes in through the oracles bundled in [`GameEnv`].
//!
//! Modules:
//! - [`state`]: session state ([`GameState`]) and its invariants
//! - [`env`]: oracle traits and the sprite catalog ([`CellId`])
//! - [`action`]: input events, movement and interaction kinds
//! - [`rules`]: declarative triggers, guards, effects and scripts
//! - [`engine`]: [`GameEngine`], the single entry point for input
//! - [`menu`]: the paged selection widget
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod frame;
pub mod host;
pub mod menu;
pub mod rules;
pub mod state;

pub use action::{
    ActionTransition, CardinalDirection, InputEvent, InteractionKind, MoveAction, MoveError, Step,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, Interaction, TickOutcome, TransitionPhase, choose};
pub use env::{
    Bootstrap, CellId, Env, GameEnv, ItemOracle, MapDimensions, MapOracle, OracleError,
    ScenarioOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use frame::Frame;
pub use host::{Host, MenuEntry, MenuView};
pub use menu::{MenuInput, MenuOutcome, SelectionMenu};
pub use rules::{
    ActorSprite, Area, Effect, Guard, InteractionTable, Resolution, Rule, RuleContext, RuleError,
    RuleTable, Script, Sprite, View,
};
pub use state::{
    Actor, Camera, GameState, InitializationError, InventoryState, Item, Milestone,
    NarrativeError, NarrativeState, Position, SessionPhase, StateError, Viewport, WorldGrid,
};
