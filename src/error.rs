use thiserror::Error;

/// Everything that can go wrong before a search starts.
///
/// An unsolvable puzzle is not an error; see [`crate::Outcome::Unsolved`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    #[error("expected 6 rows, found {found}")]
    RowCount { found: usize },

    #[error("row {row} has {found} cells, expected 6")]
    RowLength { row: usize, found: usize },

    #[error("invalid cell {symbol:?} at row {row}, column {col}")]
    InvalidSymbol { row: usize, col: usize, symbol: char },

    #[error("target vehicle {symbol:?} is not on the board")]
    MissingTarget { symbol: char },

    #[error("target vehicle {symbol:?} must sit in row 2")]
    TargetOutsideGoalRow { symbol: char },

    #[error("target vehicle {symbol:?} must be horizontal with length 2, found length {length}")]
    TargetShape { symbol: char, length: usize },

    #[error("vehicle {symbol:?} does not occupy a single straight run of cells")]
    MalformedVehicle { symbol: char },

    #[error("unknown heuristic {0:?} (expected 0/blocking or 1/custom)")]
    UnknownHeuristic(String),
}
