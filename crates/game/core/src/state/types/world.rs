use crate::env::{CellId, MapDimensions, MapOracle};
use crate::state::{InitializationError, Position, StateError};

/// Mutable copy of the world map owned by the session.
///
/// Row-major storage; rule effects rewrite individual cells (doors opening,
/// cabinets emptied, characters appearing) while the oracle stays untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldGrid {
    dimensions: MapDimensions,
    cells: Vec<CellId>,
}

impl WorldGrid {
    /// Grid of the given size with every cell set to `cell`.
    pub fn filled(dimensions: MapDimensions, cell: CellId) -> Self {
        Self {
            dimensions,
            cells: vec![cell; dimensions.area()],
        }
    }

    /// Copies the initial layout out of a map oracle.
    pub fn from_oracle<M>(map: &M) -> Result<Self, InitializationError>
    where
        M: MapOracle + ?Sized,
    {
        let dimensions = map.dimensions();
        let mut cells = Vec::with_capacity(dimensions.area());
        for y in 0..dimensions.height as i32 {
            for x in 0..dimensions.width as i32 {
                let position = Position::new(x, y);
                let cell = map
                    .cell(position)
                    .ok_or(InitializationError::MissingCell { position })?;
                cells.push(cell);
            }
        }
        Ok(Self { dimensions, cells })
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    pub fn get(&self, position: Position) -> Option<CellId> {
        self.index(position).map(|index| self.cells[index])
    }

    /// Overwrites one cell and returns what was there before.
    pub fn set(&mut self, position: Position, cell: CellId) -> Result<CellId, StateError> {
        let index = self
            .index(position)
            .ok_or(StateError::CellOutOfBounds { position })?;
        Ok(std::mem::replace(&mut self.cells[index], cell))
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.get(position).is_some_and(CellId::is_walkable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_returns_previous_and_get_reads_back() {
        let mut grid = WorldGrid::filled(MapDimensions::new(4, 3), CellId::Blank);
        let at = Position::new(3, 2);
        assert_eq!(grid.set(at, CellId::DoorClose), Ok(CellId::Blank));
        assert_eq!(grid.get(at), Some(CellId::DoorClose));
        assert!(!grid.is_walkable(at));
    }

    #[test]
    fn out_of_bounds_is_reported_not_panicked() {
        let mut grid = WorldGrid::filled(MapDimensions::new(4, 3), CellId::Blank);
        let outside = Position::new(4, 0);
        assert_eq!(grid.get(outside), None);
        assert_eq!(
            grid.set(outside, CellId::Tree),
            Err(StateError::CellOutOfBounds { position: outside })
        );
        assert!(!grid.is_walkable(Position::new(-1, 0)));
    }
}
