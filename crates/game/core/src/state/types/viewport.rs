use crate::config::GameConfig;
use crate::env::{CellId, MapDimensions};
use crate::state::{Position, StateError};

/// Visible window into the world grid.
///
/// The origin always satisfies `0 <= x <= world_width - WIDTH` and
/// `0 <= y <= world_height - HEIGHT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    origin: Position,
    max_origin: Position,
}

impl Viewport {
    pub const WIDTH: i32 = GameConfig::VIEWPORT_WIDTH as i32;
    pub const HEIGHT: i32 = GameConfig::VIEWPORT_HEIGHT as i32;

    pub fn new(origin: Position, world: MapDimensions) -> Result<Self, StateError> {
        let max_origin = Position::new(
            world.width as i32 - Self::WIDTH,
            world.height as i32 - Self::HEIGHT,
        );
        if max_origin.x < 0 || max_origin.y < 0 {
            return Err(StateError::world_too_small(world));
        }
        let mut viewport = Self {
            origin: Position::ORIGIN,
            max_origin,
        };
        viewport.set_origin(origin)?;
        Ok(viewport)
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Largest origin the viewport can take.
    pub fn max_origin(&self) -> Position {
        self.max_origin
    }

    pub fn accepts_origin(&self, origin: Position) -> bool {
        (0..=self.max_origin.x).contains(&origin.x) && (0..=self.max_origin.y).contains(&origin.y)
    }

    pub fn set_origin(&mut self, origin: Position) -> Result<(), StateError> {
        if !self.accepts_origin(origin) {
            return Err(StateError::ViewportOutOfRange { origin });
        }
        self.origin = origin;
        Ok(())
    }

    /// Shifts the origin by one step, clamped to the world bounds.
    ///
    /// Returns `true` when the origin actually moved.
    pub fn scroll(&mut self, dx: i32, dy: i32) -> bool {
        let target = Position::new(
            (self.origin.x + dx).clamp(0, self.max_origin.x),
            (self.origin.y + dy).clamp(0, self.max_origin.y),
        );
        let moved = target != self.origin;
        self.origin = target;
        moved
    }

    pub fn contains_local(local: Position) -> bool {
        (0..Self::WIDTH).contains(&local.x) && (0..Self::HEIGHT).contains(&local.y)
    }

    pub fn to_absolute(&self, local: Position) -> Position {
        self.origin + local
    }

    /// Local coordinates of every visible cell, row by row.
    pub fn local_cells() -> impl Iterator<Item = Position> {
        (0..Self::HEIGHT).flat_map(|y| (0..Self::WIDTH).map(move |x| Position::new(x, y)))
    }
}

/// The player character, positioned relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actor {
    local: Position,
    stride: bool,
}

impl Actor {
    pub fn new(local: Position) -> Result<Self, StateError> {
        let mut actor = Self {
            local: Position::ORIGIN,
            stride: false,
        };
        actor.place(local)?;
        Ok(actor)
    }

    pub fn local(&self) -> Position {
        self.local
    }

    pub fn place(&mut self, local: Position) -> Result<(), StateError> {
        if !Viewport::contains_local(local) {
            return Err(StateError::ActorOutsideViewport { local });
        }
        self.local = local;
        Ok(())
    }

    /// Moves by a delta, stopping at the viewport border.
    pub fn nudge(&mut self, dx: i32, dy: i32) {
        self.local = Position::new(
            (self.local.x + dx).clamp(0, Viewport::WIDTH - 1),
            (self.local.y + dy).clamp(0, Viewport::HEIGHT - 1),
        );
    }

    /// Walking sprite for the current frame.
    pub fn sprite(&self) -> CellId {
        if self.stride {
            CellId::Man2
        } else {
            CellId::Man
        }
    }

    pub fn advance_stride(&mut self) {
        self.stride = !self.stride;
    }

    pub fn reset_stride(&mut self) {
        self.stride = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> MapDimensions {
        MapDimensions::new(31, 30)
    }

    #[test]
    fn scroll_is_clamped_to_world_bounds() {
        let mut viewport = Viewport::new(Position::new(0, 0), world()).unwrap();
        assert!(!viewport.scroll(-1, 0));
        assert!(!viewport.scroll(0, -1));

        viewport.set_origin(Position::new(21, 26)).unwrap();
        assert!(!viewport.scroll(1, 0));
        assert!(!viewport.scroll(0, 1));
        assert!(viewport.scroll(-1, 0));
        assert_eq!(viewport.origin(), Position::new(20, 26));
    }

    #[test]
    fn origin_outside_range_is_rejected() {
        let viewport = Viewport::new(Position::new(22, 0), world());
        assert_eq!(
            viewport,
            Err(StateError::ViewportOutOfRange {
                origin: Position::new(22, 0)
            })
        );
        assert!(Viewport::new(Position::ORIGIN, MapDimensions::new(9, 30)).is_err());
    }

    #[test]
    fn actor_stays_inside_the_window() {
        assert!(Actor::new(Position::new(10, 0)).is_err());
        let mut actor = Actor::new(Position::new(0, 3)).unwrap();
        actor.nudge(-1, 1);
        assert_eq!(actor.local(), Position::new(0, 3));
    }

    #[test]
    fn stride_alternates_walking_sprites() {
        let mut actor = Actor::new(Position::ORIGIN).unwrap();
        assert_eq!(actor.sprite(), CellId::Man);
        actor.advance_stride();
        assert_eq!(actor.sprite(), CellId::Man2);
        actor.reset_stride();
        assert_eq!(actor.sprite(), CellId::Man);
    }

    #[test]
    fn local_cells_cover_the_window_row_major() {
        let cells: Vec<_> = Viewport::local_cells().collect();
        assert_eq!(cells.len(), 40);
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[10], Position::new(0, 1));
    }
}
