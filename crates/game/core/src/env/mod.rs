//! Traits describing read-only world data.
//!
//! Oracles expose the static map, item names and the scenario's rule tables.
//! The [`Env`] aggregate bundles them so the engine can access everything it
//! needs without hard coupling to concrete implementations.
mod cell;
mod error;
mod items;
mod map;
mod scenario;

pub use cell::CellId;
pub use error::OracleError;
pub use items::ItemOracle;
pub use map::{MapDimensions, MapOracle};
pub use scenario::{Bootstrap, ScenarioOracle};

/// Aggregates read-only oracles required by the engine.
pub struct Env<'a, M, I, S>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
    S: ScenarioOracle + ?Sized,
{
    map: Option<&'a M>,
    items: Option<&'a I>,
    scenario: Option<&'a S>,
}

impl<M, I, S> Clone for Env<'_, M, I, S>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
    S: ScenarioOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, I, S> Copy for Env<'_, M, I, S>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
    S: ScenarioOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<'a, dyn MapOracle + 'a, dyn ItemOracle + 'a, dyn ScenarioOracle + 'a>;

impl<'a, M, I, S> Env<'a, M, I, S>
where
    M: MapOracle + ?Sized,
    I: ItemOracle + ?Sized,
    S: ScenarioOracle + ?Sized,
{
    pub fn new(map: Option<&'a M>, items: Option<&'a I>, scenario: Option<&'a S>) -> Self {
        Self {
            map,
            items,
            scenario,
        }
    }

    pub fn with_all(map: &'a M, items: &'a I, scenario: &'a S) -> Self {
        Self::new(Some(map), Some(items), Some(scenario))
    }

    pub fn empty() -> Self {
        Self::new(None, None, None)
    }

    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` if no map oracle was provided.
    pub fn map(&self) -> Result<&'a M, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::ScenarioNotAvailable` if no scenario was provided.
    pub fn scenario(&self) -> Result<&'a S, OracleError> {
        self.scenario.ok_or(OracleError::ScenarioNotAvailable)
    }
}

impl<'a, M, I, S> Env<'a, M, I, S>
where
    M: MapOracle + 'a,
    I: ItemOracle + 'a,
    S: ScenarioOracle + 'a,
{
    /// Erases the concrete oracle types.
    pub fn into_game_env(self) -> GameEnv<'a> {
        Env {
            map: self.map.map(|map| map as &'a dyn MapOracle),
            items: self.items.map(|items| items as &'a dyn ItemOracle),
            scenario: self
                .scenario
                .map(|scenario| scenario as &'a dyn ScenarioOracle),
        }
    }
}
