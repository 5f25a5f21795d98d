use std::fmt::Display;

use smallvec::{Array, SmallVec};

use crate::{
    board::{Board, CELLS, EMPTY, WIDTH},
    vehicle::{Orientation, Registry, Vehicle},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Directions a vehicle may slide in, in the order moves are generated.
    pub fn along(orientation: Orientation) -> [Direction; 2] {
        match orientation {
            Orientation::Horizontal => [Direction::Left, Direction::Right],
            Orientation::Vertical => [Direction::Up, Direction::Down],
        }
    }

    /// The neighbouring cell in this direction, if it is still on the grid.
    pub fn step(self, from: usize) -> Option<usize> {
        match self {
            Direction::Left => (from % WIDTH > 0).then(|| from - 1),
            Direction::Right => (from % WIDTH < WIDTH - 1).then(|| from + 1),
            Direction::Up => from.checked_sub(WIDTH),
            Direction::Down => Some(from + WIDTH).filter(|&ix| ix < CELLS),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

/// One vehicle slid by one cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub vehicle: u8,
    pub direction: Direction,
}

impl Move {
    /// Recovers the single slide that turns `from` into `to`, if there is one.
    pub fn between(from: &Board, to: &Board, registry: &Registry) -> Option<Move> {
        let changed = (0..CELLS).find(|&ix| from[ix] != to[ix])?;
        let symbol = if from[changed] == EMPTY {
            to[changed]
        } else {
            from[changed]
        };

        let vehicle = registry.get(symbol)?;
        let head = from.find(symbol)?;
        Direction::along(vehicle.orientation)
            .into_iter()
            .find(|&direction| slide(from, vehicle, head, direction).as_ref() == Some(to))
            .map(|direction| Move {
                vehicle: symbol,
                direction,
            })
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.vehicle as char, self.direction)
    }
}

/// Slides `vehicle`, whose first cell is `head`, one cell in `direction`.
///
/// Returns `None` when the vehicle would leave the grid or the cell it moves into is taken.
pub fn slide(board: &Board, vehicle: &Vehicle, head: usize, direction: Direction) -> Option<Board> {
    let tail = vehicle.tail(head);
    let (enter, leave) = match direction {
        Direction::Left | Direction::Up => (direction.step(head)?, tail),
        Direction::Right | Direction::Down => (direction.step(tail)?, head),
    };

    (board[enter] == EMPTY).then(|| board.slid(vehicle.symbol, enter, leave))
}

/// Every board one slide away from `board`.
///
/// Vehicles are taken in the order their first cell appears scanning row-major,
/// and each contributes its left/right (or up/down) move in that order.
pub fn successors(board: &Board, registry: &Registry) -> SmallVec<[Board; 16]> {
    let mut out = SmallVec::new();
    expand(board, registry, &mut out);
    out
}

pub fn expand<const N: usize>(board: &Board, registry: &Registry, out: &mut SmallVec<[Board; N]>)
where
    [Board; N]: Array<Item = Board>,
{
    let mut seen = [false; 256];

    for (head, &symbol) in board.cells().iter().enumerate() {
        if symbol == EMPTY || seen[symbol as usize] {
            continue;
        }
        seen[symbol as usize] = true;

        // only symbols from the starting board have a shape
        let Some(vehicle) = registry.get(symbol) else {
            continue;
        };

        for direction in Direction::along(vehicle.orientation) {
            if let Some(next) = slide(board, vehicle, head, direction) {
                out.push(next);
            }
        }
    }
}
