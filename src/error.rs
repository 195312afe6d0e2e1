use thiserror::Error;

/// Contract violations raised by the game engine
///
/// These are caller errors rather than recoverable runtime conditions; a
/// correct orchestration layer never triggers them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cell ({row}, {column}) is outside the grid")]
    OutOfBounds { row: usize, column: usize },

    #[error("cell ({row}, {column}) does not hold the given side")]
    SideMismatch { row: usize, column: usize },

    #[error("the empty cell state is not a playable side")]
    EmptySide,

    #[error("no legal moves remain")]
    NoLegalMove,

    #[error("player is already bound to a side")]
    AlreadyBound,

    #[error("player must be bound to a side before choosing a move")]
    NotBound,
}
