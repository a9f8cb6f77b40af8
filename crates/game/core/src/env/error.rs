//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when a required oracle is missing from the [`Env`](super::Env).
///
/// The engine cannot do anything useful without its map, item names or
/// scenario tables, so all variants are fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("MapOracle not available")]
    MapNotAvailable,

    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("ScenarioOracle not available")]
    ScenarioNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::MapNotAvailable => "ORACLE_MAP_NOT_AVAILABLE",
            OracleError::ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            OracleError::ScenarioNotAvailable => "ORACLE_SCENARIO_NOT_AVAILABLE",
        }
    }
}
