//! The compiled-in "Boshi" story.
//!
//! A neighbour goes missing overnight; the player follows the trail from the
//! doctor's house to a locked cell across town. Everything here is static
//! data consumed by `game-core` through its oracle traits:
//! - [`map`]: the 31x30 town layout
//! - [`items`]: item labels
//! - [`milestone`]: story markers
//! - rule tables for location triggers and the Talk/Search/Use menus
//! - [`scripts`]: cut-scenes
//!
//! [`Boshi`] implements every oracle and hands out a ready [`GameEnv`](game_core::GameEnv).

mod error;
pub mod items;
pub mod map;
pub mod milestone;
mod scenario;
pub mod scripts;
mod search;
mod talk;
mod transitions;
mod use_item;

pub use error::ContentError;
pub use items::ItemCatalog;
pub use map::TownMap;
pub use scenario::Boshi;
pub use search::SEARCH;
pub use talk::TALK;
pub use transitions::TRANSITIONS;
pub use use_item::USE;
