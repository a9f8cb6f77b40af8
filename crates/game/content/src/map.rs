//! Town layout.
//!
//! Rows are `y`, columns are `x`; every entry is a raw sprite index. The
//! table is decoded cell by cell into [`CellId`] when a session copies it.

use game_core::{CellId, MapDimensions, MapOracle, Position};

use crate::ContentError;

pub const WIDTH: usize = 31;
pub const HEIGHT: usize = 30;

#[rustfmt::skip]
static MAP_DATA: [[u8; WIDTH]; HEIGHT] = [
    [ 1,  1,  1,  1,  1, 30, 31, 32,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1],
    [ 1, 15, 16, 17,  1, 33, 34, 35,  1,  1,  0,  0, 51, 52,  1,  0,  0,  0,  0,  0,  1, 40, 41, 42,  1,  0,  1,  0,  0,  0,  1],
    [ 1, 14, 19, 20, 65, 36, 37, 38,  0,  1,  0,  0, 53, 54,  1,  0,  0,  0,  0,  0,  1, 43, 44, 45, 65,  0,  1,  1,  1,  0,  1],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  1,  0,  1,  0,  1],
    [ 1,  1, 65,  0,  1,  1,  1,  1, 65,  1,  1,  1,  1,  1,  0,  1,  1, 65,  1,  1,  1,  0,  0,  1,  0,  0,  1,  0,  1,  0,  1],
    [ 1,  1,  0,  0,  0,  1,  1,  1, 40, 41, 42,  1,  0,  0,  0,  1,  1, 22, 23,  1,  1,  0,  0,  1,  0,  1,  0,  0,  0,  0,  1],
    [ 1,  0,  1,  1,  0,  0,  1,  1, 43, 44, 45,  1,  0,  0,  0,  1, 25, 26, 27, 28,  1,  1,  0,  0,  0,  0,  0,  0,  0,  1,  1],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1,  1,  0,  0,  6,  7,  8,  9,  0,  0,  1],
    [ 1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  0, 10, 11, 12, 13, 65,  0,  1],
    [ 1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  0,  0,  0,  0,  0,  0,  0,  1],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1],
    [ 3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1],
    [76,  2,  2,  2,  3,  2,  2, 61,  2,  2,  0,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1],
    [73,  0,  0,  0, 46,  0,  0,  0,  0, 48,  0,  3,  2,  2,  2,  2,  2,  2, 56,  2,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1],
    [74,  0,  0,  0,  3,  0,  0,  0,  0,  3,  0,  3, 50,  0,  0,  0, 55,  0,  0, 58,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1],
    [75,  0,  0,  0, 46,  0,  0,  0, 50,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1],
    [76,  3,  3,  3,  3,  3,  3,  3,  3,  3,  0,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1],
    [ 3, 56,  2,  2,  2,  2,  2,  2,  2,  3,  0,  3,  2,  2,  2,  2,  2,  3,  2, 56,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3],
    [ 3,  0,  0,  0,  0,  0,  0,  0,  0,  3,  0,  3,  0,  0,  0,  0,  0, 47,  0,  0,  3,  3,  2,  2,  3,  2, 56,  3,  2,  2,  3],
    [ 3,  0,  0,  3,  0,  0,  3, 80,  0,  3,  0,  3,  0,  0,  0,  0,  0,  3,  0,  0,  3,  3,  0,  0,  3, 77,  0,  3,  0,  0,  3],
    [ 3, 55, 67,  3,  0,  0,  3,  0, 67,  3,  0,  3,  0,  3,  0,  0,  0,  3, 58,  0, 47,  3,  0,  0, 46,  0,  0, 47,  0,  0,  3],
    [ 3,  3,  3,  3,  0,  0,  3,  3,  3,  3,  0,  3,  0,  3,  3,  3,  3,  3,  3,  3,  3,  3,  0,  0,  3,  3,  3,  3,  0,  0,  3],
    [ 3,  2,  2,  2,  0,  0,  2,  2,  2,  3,  0,  3, 56,  2,  3,  2,  2,  2,  2,  2,  3,  3,  0,  0,  2,  3,  2,  2,  0,  0,  3],
    [ 3, 50,  0,  0,  0,  0,  0,  0,  0,  3,  0, 49,  0,  0, 46,  0,  0,  0,  0,  0,  3,  3,  0,  0,  0,  3,  0,  0,  0,  0,  3],
    [ 3,  3,  3,  3,  3,  0,  3,  3,  3,  3,  0,  3,  0,  0,  3,  0,  0,  0,  0,  0,  0,  3,  0,  0, 72, 46,  0,  0,  0,  0, 46],
    [ 2,  2,  2,  2,  2,  0,  2,  2,  2,  2,  0,  3,  0, 57, 55,  0,  0,  0,  0,  0,  3,  3,  0,  0,  0,  3,  0,  0,  0, 14,  3],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3],
];

/// Map oracle over the compiled-in town.
#[derive(Clone, Copy, Debug, Default)]
pub struct TownMap;

impl TownMap {
    pub const fn new() -> Self {
        Self
    }

    fn raw(position: Position) -> Option<u8> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        MAP_DATA.get(y)?.get(x).copied()
    }

    /// Confirms every raw index names a catalog sprite.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (y, row) in MAP_DATA.iter().enumerate() {
            for (x, &raw) in row.iter().enumerate() {
                if CellId::from_repr(raw).is_none() {
                    return Err(ContentError::UnknownCell {
                        raw,
                        position: Position::new(x as i32, y as i32),
                    });
                }
            }
        }
        Ok(())
    }
}

impl MapOracle for TownMap {
    fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(WIDTH as u32, HEIGHT as u32)
    }

    fn cell(&self, position: Position) -> Option<CellId> {
        Self::raw(position).and_then(CellId::from_repr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_decodes() {
        TownMap::new().validate().unwrap();
    }

    #[test]
    fn landmarks_sit_where_the_rules_expect_them() {
        let map = TownMap::new();
        let at = |x, y| map.cell(Position::new(x, y));
        assert_eq!(at(9, 6), Some(CellId::Rapid5));
        assert_eq!(at(17, 6), Some(CellId::Office4));
        assert_eq!(at(12, 2), Some(CellId::Home3));
        assert_eq!(at(26, 8), Some(CellId::GlobalView7));
        assert_eq!(at(19, 17), Some(CellId::Bed));
        assert_eq!(at(24, 27), Some(CellId::BadManR));
        assert_eq!(at(30, 27), Some(CellId::DoorClose));
        assert_eq!(at(31, 0), None);
        assert_eq!(at(0, -1), None);
    }
}
