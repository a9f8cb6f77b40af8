//! Composed screen contents handed to the host.

use crate::config::GameConfig;
use crate::env::CellId;
use crate::rules::{ActorSprite, Sprite, View};
use crate::state::{GameState, Position, Viewport};

const WIDTH: usize = GameConfig::VIEWPORT_WIDTH;
const HEIGHT: usize = GameConfig::VIEWPORT_HEIGHT;

/// One sprite id per visible tile; the host draws `tiles[y][x]` at tile `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    tiles: [[CellId; WIDTH]; HEIGHT],
}

impl Frame {
    pub fn blank() -> Self {
        Self {
            tiles: [[CellId::Blank; WIDTH]; HEIGHT],
        }
    }

    /// Gameplay frame: visible world cells with the walking actor on top.
    pub fn world(state: &GameState) -> Self {
        Self::compose(state, &View::WORLD)
    }

    pub fn compose(state: &GameState, view: &View) -> Self {
        match *view {
            View::World { actor, overlays } => {
                let mut frame = Self::blank();
                for local in Viewport::local_cells() {
                    let cell = state
                        .cell(state.viewport.to_absolute(local))
                        .unwrap_or(CellId::Blank);
                    frame.put(local, cell);
                }
                match actor {
                    ActorSprite::Walking => frame.put(state.actor.local(), state.actor.sprite()),
                    ActorSprite::Posed(cell) => frame.put(state.actor.local(), cell),
                    ActorSprite::Hidden => {}
                }
                frame.draw(overlays);
                frame
            }
            View::Canvas(sprites) => {
                let mut frame = Self::blank();
                frame.draw(sprites);
                frame
            }
        }
    }

    fn draw(&mut self, sprites: &[Sprite]) {
        for sprite in sprites {
            self.put(sprite.at, sprite.cell);
        }
    }

    fn put(&mut self, local: Position, cell: CellId) {
        if Viewport::contains_local(local) {
            self.tiles[local.y as usize][local.x as usize] = cell;
        }
    }

    pub fn get(&self, local: Position) -> Option<CellId> {
        Viewport::contains_local(local).then(|| self.tiles[local.y as usize][local.x as usize])
    }

    pub fn rows(&self) -> &[[CellId; WIDTH]; HEIGHT] {
        &self.tiles
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::blank()
    }
}
