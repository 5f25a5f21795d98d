//! Solver for 6×6 Rush Hour puzzles.
//!
//! A puzzle is six rows of six cells: `-` is empty, any other printable symbol
//! is a vehicle, and `X` is the two-cell target that has to reach the right
//! edge of row 2. [`solve`] runs a best-first search over configurations and
//! reports how many it explored along with the path it found.

mod board;
mod error;
mod heuristic;
mod moves;
mod puzzle;
mod search;
mod vehicle;

pub use board::{parse_board, Board, CELLS, EMPTY, GOAL_ROW, HEIGHT, TARGET, WIDTH};
pub use error::Error;
pub use heuristic::{blocking, custom, Heuristic};
pub use moves::{expand, slide, successors, Direction, Move};
pub use puzzle::{Puzzle, PUZZLES};
pub use search::{search, Outcome, SearchOptions, Solution, Strategy};
pub use vehicle::{Orientation, Registry, Vehicle};

/// Solves `rows` with the heuristic picked by ordinal (0 = blocking, 1 = custom).
pub fn solve<S: AsRef<str>>(heuristic: usize, rows: &[S]) -> Result<Solution, Error> {
    let options = SearchOptions {
        heuristic: Heuristic::try_from(heuristic)?,
        ..Default::default()
    };

    solve_with(rows, &options)
}

pub fn solve_with<S: AsRef<str>>(rows: &[S], options: &SearchOptions) -> Result<Solution, Error> {
    Ok(Puzzle::new(rows)?.solve(options))
}
