use crate::{
    board::{Board, CELLS, EMPTY, GOAL_ROW, TARGET, WIDTH},
    Error,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Distance between consecutive cells of a vehicle in the flat layout.
    pub fn stride(self) -> usize {
        match self {
            Orientation::Horizontal => 1,
            Orientation::Vertical => WIDTH,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Vehicle {
    pub symbol: u8,
    pub orientation: Orientation,
    pub length: usize,
}

impl Vehicle {
    /// Flat index of the far end of the vehicle when its first cell is `head`.
    pub fn tail(&self, head: usize) -> usize {
        head + (self.length - 1) * self.orientation.stride()
    }
}

// cells from `start` to the edge of the grid along `orientation`
#[auto_enums::auto_enum(Iterator)]
fn ray(start: usize, orientation: Orientation) -> impl Iterator<Item = usize> {
    match orientation {
        Orientation::Horizontal => start..start - start % WIDTH + WIDTH,
        Orientation::Vertical => (start..CELLS).step_by(WIDTH),
    }
}

fn run_length(board: &Board, start: usize, orientation: Orientation) -> usize {
    ray(start, orientation)
        .take_while(|&ix| board[ix] == board[start])
        .count()
}

/// Shape of every vehicle on a board, keyed by symbol.
///
/// Built once from the starting configuration: vehicles only ever change
/// position, so the same registry serves every configuration of a search.
#[derive(Clone, Debug)]
pub struct Registry {
    vehicles: Vec<Vehicle>,
    // symbol -> 1 + position in `vehicles`, 0 when absent
    lookup: [u8; 256],
}

impl Registry {
    /// Scans the board once, measuring each vehicle from the first cell it is seen in.
    ///
    /// A run longer than one cell to the right makes a vehicle horizontal, a run
    /// downwards makes it vertical, and a lone cell counts as horizontal of length 1.
    /// Fails if a vehicle's cells are not exactly that run, or if the target
    /// is not a horizontal pair in the goal row.
    pub fn build(board: &Board) -> Result<Registry, Error> {
        let mut registry = Registry {
            vehicles: Vec::new(),
            lookup: [0; 256],
        };
        let mut counts = [0usize; 256];

        for (ix, &symbol) in board.cells().iter().enumerate() {
            if symbol == EMPTY {
                continue;
            }

            counts[symbol as usize] += 1;
            if registry.contains(symbol) {
                continue;
            }

            let across = run_length(board, ix, Orientation::Horizontal);
            let down = run_length(board, ix, Orientation::Vertical);
            let (orientation, length) = if across > 1 {
                (Orientation::Horizontal, across)
            } else if down > 1 {
                (Orientation::Vertical, down)
            } else {
                (Orientation::Horizontal, 1)
            };

            registry.vehicles.push(Vehicle {
                symbol,
                orientation,
                length,
            });
            registry.lookup[symbol as usize] = registry.vehicles.len() as u8;
        }

        for vehicle in &registry.vehicles {
            if counts[vehicle.symbol as usize] != vehicle.length {
                return Err(Error::MalformedVehicle {
                    symbol: vehicle.symbol as char,
                });
            }
        }

        registry.check_target(board)?;
        Ok(registry)
    }

    fn check_target(&self, board: &Board) -> Result<(), Error> {
        let symbol = TARGET as char;
        let target = self.get(TARGET).ok_or(Error::MissingTarget { symbol })?;

        if target.orientation != Orientation::Horizontal || target.length != 2 {
            return Err(Error::TargetShape {
                symbol,
                length: target.length,
            });
        }

        match board.find(TARGET) {
            Some(head) if head / WIDTH == GOAL_ROW => Ok(()),
            _ => Err(Error::TargetOutsideGoalRow { symbol }),
        }
    }

    pub fn get(&self, symbol: u8) -> Option<&Vehicle> {
        match self.lookup[symbol as usize] {
            0 => None,
            n => self.vehicles.get(n as usize - 1),
        }
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.lookup[symbol as usize] != 0
    }

    /// Vehicles in the order they were first met scanning the board.
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.vehicles.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::parse_board;

    fn registry(text: &str) -> Result<Registry, Error> {
        Registry::build(&parse_board(text).unwrap())
    }

    #[test]
    fn measures_every_vehicle_once() {
        let registry = registry(
            "
            ---O--
            ---O--
            XX-O--
            PQQQ--
            P-----
            P----Z",
        )
        .unwrap();

        let symbols: Vec<u8> = registry.iter().map(|v| v.symbol).collect();
        assert_eq!(symbols, b"OXPQZ");

        let o = registry.get(b'O').unwrap();
        assert_eq!(o.orientation, Orientation::Vertical);
        assert_eq!(o.length, 3);
        assert_eq!(o.tail(3), 15);

        let q = registry.get(b'Q').unwrap();
        assert_eq!(q.orientation, Orientation::Horizontal);
        assert_eq!(q.length, 3);

        let z = registry.get(b'Z').unwrap();
        assert_eq!(z.orientation, Orientation::Horizontal);
        assert_eq!(z.length, 1);

        assert_eq!(registry.get(b'X').unwrap().length, 2);
        assert!(registry.get(b'-').is_none());
        assert!(registry.get(b'A').is_none());
    }

    #[test]
    fn runs_stop_at_the_row_edge() {
        // A ends one row and B starts the next; they must not merge
        let registry = registry(
            "
            ----AA
            BB----
            XX----
            ------
            ------
            ------",
        )
        .unwrap();

        assert_eq!(registry.get(b'A').unwrap().length, 2);
        assert_eq!(registry.get(b'B').unwrap().length, 2);
    }

    #[test]
    fn rejects_broken_vehicles() {
        let split = registry(
            "
            A--A--
            ------
            XX----
            ------
            ------
            ------",
        );
        assert_eq!(split.unwrap_err(), Error::MalformedVehicle { symbol: 'A' });

        let bent = registry(
            "
            AA----
            A-----
            XX----
            ------
            ------
            ------",
        );
        assert_eq!(bent.unwrap_err(), Error::MalformedVehicle { symbol: 'A' });
    }

    #[test]
    fn rejects_misplaced_targets() {
        let missing = registry(
            "
            ------
            ------
            AA----
            ------
            ------
            ------",
        );
        assert_eq!(missing.unwrap_err(), Error::MissingTarget { symbol: 'X' });

        let long = registry(
            "
            ------
            ------
            XXX---
            ------
            ------
            ------",
        );
        assert_eq!(
            long.unwrap_err(),
            Error::TargetShape {
                symbol: 'X',
                length: 3
            }
        );

        let upright = registry(
            "
            ------
            X-----
            X-----
            ------
            ------
            ------",
        );
        assert_eq!(
            upright.unwrap_err(),
            Error::TargetShape {
                symbol: 'X',
                length: 2
            }
        );

        let wrong_row = registry(
            "
            ------
            ------
            ------
            XX----
            ------
            ------",
        );
        assert_eq!(
            wrong_row.unwrap_err(),
            Error::TargetOutsideGoalRow { symbol: 'X' }
        );
    }
}
