mod common;
mod inventory;
mod narrative;
mod viewport;
mod world;

pub use common::Position;
pub use inventory::{InventoryState, Item};
pub use narrative::{Milestone, NarrativeState};
pub use viewport::{Actor, Viewport};
pub use world::WorldGrid;
