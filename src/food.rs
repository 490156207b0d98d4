use rand::Rng;

use crate::config::Board;
use crate::snake::Position;

/// The single apple on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food on a uniformly random grid cell.
    ///
    /// Cells covered by the snake are not excluded.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, board: Board) -> Self {
        Self::new(spawn_position(rng, board))
    }
}

/// Picks a uniformly random grid-aligned cell on the board.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, board: Board) -> Position {
    debug_assert!(board.columns() > 0 && board.rows() > 0);

    let unit = i32::from(board.unit_size);
    let column = i32::from(rng.gen_range(0..board.columns()));
    let row = i32::from(rng.gen_range(0..board.rows()));

    Position {
        x: column * unit,
        y: row * unit,
    }
}
