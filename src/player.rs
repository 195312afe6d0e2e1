use crate::error::EngineError;
use crate::grid::{Cell, Grid};

/// A strategy capable of playing one side of the game
///
/// A player is bound once to the side it plays. The orchestration layer
/// asks it for a column whenever it is that side's turn and applies the
/// move itself, exactly as it would apply a human move.
pub trait AiPlayer {
    /// Binds this player to the side it plays for the rest of its lifetime
    ///
    /// The opponent's side is derived as the sole other non-empty cell
    /// state. Must be called exactly once before
    /// [`choose_move`](AiPlayer::choose_move).
    fn bind(&mut self, side: Cell) -> Result<(), EngineError>;

    /// Picks the column to drop the next piece into
    ///
    /// The grid is borrowed for the duration of the call and handed back
    /// with its contents unchanged.
    fn choose_move(&mut self, grid: &mut Grid) -> Result<usize, EngineError>;
}
