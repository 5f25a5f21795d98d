use std::{
    fmt::{Debug, Display},
    ops::Index,
};

use itertools::Itertools;

use crate::Error;

pub const WIDTH: usize = 6;
pub const HEIGHT: usize = 6;
pub const CELLS: usize = WIDTH * HEIGHT;

/// Row the target vehicle lives in and leaves through.
pub const GOAL_ROW: usize = 2;

pub const EMPTY: u8 = b'-';
pub const TARGET: u8 = b'X';

/// A full 6×6 configuration, stored row-major as one flat run of cells.
///
/// Each cell is either [`EMPTY`] or the ASCII symbol of the vehicle covering it.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// Concatenates six rows of six cells into a configuration.
    ///
    /// Only the dimensions and the cell alphabet are checked here; vehicle
    /// shapes are checked when the [`Registry`](crate::Registry) is built.
    pub fn decode<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        if rows.len() != HEIGHT {
            return Err(Error::RowCount { found: rows.len() });
        }

        let mut cells = [EMPTY; CELLS];
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != WIDTH {
                return Err(Error::RowLength { row, found });
            }

            for (col, symbol) in line.chars().enumerate() {
                if !symbol.is_ascii_graphic() {
                    return Err(Error::InvalidSymbol { row, col, symbol });
                }

                cells[row * WIDTH + col] = symbol as u8;
            }
        }

        Ok(Board { cells })
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * WIDTH..(row + 1) * WIDTH]
    }

    /// Flat index of the first cell holding `symbol`, scanning row-major.
    pub fn find(&self, symbol: u8) -> Option<usize> {
        self.cells.iter().position(|&c| c == symbol)
    }

    /// The target occupies the last two cells of the goal row.
    pub fn is_goal(&self) -> bool {
        let row = self.row(GOAL_ROW);
        row[WIDTH - 2] == TARGET && row[WIDTH - 1] == TARGET
    }

    // callers guarantee `enter` is empty and `leave` is the far end of the vehicle
    pub(crate) fn slid(&self, symbol: u8, enter: usize, leave: usize) -> Board {
        let mut next = *self;
        next.cells[enter] = symbol;
        next.cells[leave] = EMPTY;
        next
    }
}

/// Parses a board written one row per line, ignoring surrounding whitespace.
pub fn parse_board(b: &str) -> Result<Board, Error> {
    let rows: Vec<&str> = b.trim().lines().map(str::trim).collect();
    Board::decode(&rows)
}

impl Index<usize> for Board {
    type Output = u8;
    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl Index<(usize, usize)> for Board {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index.0 * WIDTH + index.1]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .cells
            .chunks(WIDTH)
            .map(|line| line.iter().map(|&c| c as char).collect::<String>())
            .join("\n");

        f.write_str(&text)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .cells
            .chunks(WIDTH)
            .map(|line| line.iter().map(|&c| c as char).collect::<String>());

        f.debug_list().entries(rows).finish()
    }
}
