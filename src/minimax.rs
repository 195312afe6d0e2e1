//! An agent that picks moves with minimax search and alpha-beta pruning

use crate::error::EngineError;
use crate::grid::{Cell, Grid};
use crate::player::AiPlayer;

/// The number of plies explored before the search falls back to static
/// evaluation
pub const HORIZON: usize = 5;

/// Static evaluation of a grid at the search horizon
///
/// More positive scores favor the side the engine plays.
pub trait Scorer {
    fn score(&self, grid: &Grid) -> i32;
}

/// A scorer that assigns no strategic value to any position
///
/// This stands in until a real heuristic is supplied. With it, every leaf
/// ties at zero and the strict-improvement rule below makes the engine
/// deterministic: it always picks the lowest-indexed legal column.
pub struct ZeroScorer;

impl Scorer for ZeroScorer {
    fn score(&self, _grid: &Grid) -> i32 {
        0
    }
}

// Removes a speculatively placed mark when it goes out of scope, so every
// exploration path hands the grid back restored before the next candidate
// is tried.
struct Placed<'g> {
    grid: &'g mut Grid,
    row: usize,
    column: usize,
}

impl<'g> Placed<'g> {
    fn new(grid: &'g mut Grid, row: usize, column: usize, side: Cell) -> Self {
        grid.set(row, column, side);
        Self { grid, row, column }
    }

    fn grid(&mut self) -> &mut Grid {
        self.grid
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.grid.set(self.row, self.column, Cell::Empty);
    }
}

/// An agent choosing moves with depth-limited minimax and alpha-beta pruning
///
/// # Notes
/// The search uses the shared grid itself as scratch space: every
/// speculative placement is removed in the same call frame that made it, so
/// the caller observes no change in the grid's contents across a
/// [`choose_move`](AiPlayer::choose_move) call.
///
/// A node is terminal when the horizon is exhausted or no columns remain
/// playable; a completed line of four is not recognised, so the search can
/// explore past a decided position. Leaves are judged by the configured
/// [`Scorer`], which defaults to [`ZeroScorer`].
pub struct MinimaxPlayer {
    depth: usize,
    // own side and opponent side, fixed at bind time
    sides: Option<(Cell, Cell)>,
    scorer: Box<dyn Scorer>,

    /// The number of nodes searched by the last `choose_move` call (for
    /// diagnostics only)
    pub node_count: usize,
}

impl MinimaxPlayer {
    /// Creates a player searching to the default horizon with the default
    /// scorer
    pub fn new() -> Self {
        Self {
            depth: HORIZON,
            sides: None,
            scorer: Box::new(ZeroScorer),
            node_count: 0,
        }
    }

    /// Overrides the search horizon
    ///
    /// A horizon of zero plies turns every top-level position into a leaf,
    /// so no move can be produced.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Replaces the leaf scorer
    pub fn with_scorer(mut self, scorer: Box<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Explores one node of the game tree
    ///
    /// Returns the node's score and the column that achieves it (`None` at
    /// leaves). The best candidate is replaced only on strict improvement,
    /// so earlier-enumerated columns win all ties.
    fn minimax(
        &mut self,
        grid: &mut Grid,
        depth: usize,
        to_move: Cell,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<(i32, Option<usize>), EngineError> {
        self.node_count += 1;
        let (own, rival) = self.sides.ok_or(EngineError::NotBound)?;

        let columns = grid.legal_columns();
        if columns.is_empty() || depth == 0 {
            return Ok((self.scorer.score(grid), None));
        }

        let maximizing = to_move == own;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_column = None;

        for column in columns {
            let row = grid.drop_row(column)?;
            let score = {
                let mut placed = Placed::new(grid, row, column, to_move);
                let next = if maximizing { rival } else { own };
                self.minimax(placed.grid(), depth - 1, next, alpha, beta)?.0
            };

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_column = Some(column);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = Some(column);
                }
                beta = beta.min(best_score);
            }

            // the window is closed, no later candidate can change the result
            if alpha >= beta {
                break;
            }
        }

        Ok((best_score, best_column))
    }
}

impl AiPlayer for MinimaxPlayer {
    fn bind(&mut self, side: Cell) -> Result<(), EngineError> {
        if self.sides.is_some() {
            return Err(EngineError::AlreadyBound);
        }
        let rival = side.opponent().ok_or(EngineError::EmptySide)?;
        self.sides = Some((side, rival));
        Ok(())
    }

    fn choose_move(&mut self, grid: &mut Grid) -> Result<usize, EngineError> {
        let (own, _) = self.sides.ok_or(EngineError::NotBound)?;
        if grid.legal_columns().is_empty() {
            return Err(EngineError::NoLegalMove);
        }

        self.node_count = 0;
        let (_score, column) = self.minimax(grid, self.depth, own, i32::MIN, i32::MAX)?;
        column.ok_or(EngineError::NoLegalMove)
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new()
    }
}
