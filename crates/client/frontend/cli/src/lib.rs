//! Terminal frontend for Boshi.
//!
//! [`CliFrontend`] owns the terminal for one session and drives the engine
//! through [`host::TerminalHost`], its [`game_core::Host`] implementation.

mod app;
mod config;
pub mod host;
mod input;
pub mod logging;
pub mod message;
pub mod presentation;
pub mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
