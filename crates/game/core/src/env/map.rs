use super::CellId;
use crate::state::Position;

/// Static map oracle exposing the compiled-in layout a session starts from.
///
/// The live grid is copied out of the oracle at bootstrap; rule effects then
/// mutate the copy held by [`GameState`](crate::state::GameState).
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// Initial content of the cell at `position`, `None` when out of bounds.
    fn cell(&self, position: Position) -> Option<CellId>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
