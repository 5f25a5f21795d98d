use crate::{
    board::Board,
    search::{search, SearchOptions, Solution},
    vehicle::Registry,
    Error,
};

/// The reference puzzles, easiest first.
pub const PUZZLES: [[&str; 6]; 5] = [
    ["---O--", "---O--", "XX-O--", "PQQQ--", "P-----", "P-----"],
    ["OOOP--", "--AP--", "XXAP--", "Q-----", "QGGCCD", "Q----D"],
    ["--OPPP", "--O--A", "XXO--A", "-CC--Q", "-----Q", "--RRRQ"],
    ["-ABBO-", "-ACDO-", "XXCDO-", "PJFGG-", "PJFH--", "PIIH--"],
    ["OOO--P", "-----P", "--AXXP", "--ABCC", "D-EBFF", "D-EQQQ"],
];

/// A starting board together with the shapes of its vehicles.
#[derive(Clone, Debug)]
pub struct Puzzle {
    start: Board,
    registry: Registry,
}

impl Puzzle {
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Puzzle, Error> {
        let start = Board::decode(rows)?;
        let registry = Registry::build(&start)?;
        Ok(Puzzle { start, registry })
    }

    pub fn start(&self) -> &Board {
        &self.start
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn solve(&self, options: &SearchOptions) -> Solution {
        search(&self.start, &self.registry, options)
    }
}
