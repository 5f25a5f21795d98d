use std::{fmt::Display, str::FromStr};

use crate::{
    board::{Board, EMPTY, GOAL_ROW, TARGET, WIDTH},
    moves::Direction,
    Error,
};

/// Estimates of how many slides remain before the target can leave.
///
/// Neither estimate is guaranteed to be admissible.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Heuristic {
    /// One for the target's own exit plus one per occupied cell in front of it.
    #[default]
    Blocking,
    /// Blocking vehicles plus a penalty for what pins each of them in place.
    Custom,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::Blocking, Heuristic::Custom];

    pub fn evaluate(self, board: &Board) -> usize {
        match self {
            Heuristic::Blocking => blocking(board),
            Heuristic::Custom => custom(board),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Blocking => "blocking",
            Heuristic::Custom => "custom",
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<usize> for Heuristic {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Heuristic::Blocking),
            1 => Ok(Heuristic::Custom),
            _ => Err(Error::UnknownHeuristic(value.to_string())),
        }
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "blocking" => Ok(Heuristic::Blocking),
            "1" | "custom" => Ok(Heuristic::Custom),
            _ => Err(Error::UnknownHeuristic(s.to_string())),
        }
    }
}

/// Goal-row cells strictly to the right of the target's first cell.
fn ahead_of_target(board: &Board) -> impl Iterator<Item = (usize, u8)> + '_ {
    let start = GOAL_ROW * WIDTH;
    board
        .row(GOAL_ROW)
        .iter()
        .enumerate()
        .map(move |(col, &c)| (start + col, c))
        .skip_while(|&(_, c)| c != TARGET)
        .skip(1)
}

pub fn blocking(board: &Board) -> usize {
    if board.is_goal() {
        return 0;
    }

    1 + ahead_of_target(board)
        .filter(|&(_, c)| c != EMPTY && c != TARGET)
        .count()
}

pub fn custom(board: &Board) -> usize {
    if board.is_goal() {
        return 0;
    }

    let mut charged = [false; 256];
    charged[TARGET as usize] = true;
    let mut estimate = 1;

    for (ix, c) in ahead_of_target(board) {
        if c == EMPTY || c == TARGET {
            continue;
        }

        if !charged[c as usize] {
            charged[c as usize] = true;
            estimate += 1;
        }

        // whatever holds the blocker in place has to move too; above wins over below
        let pinning = [Direction::Up, Direction::Down]
            .into_iter()
            .filter_map(|direction| direction.step(ix))
            .map(|neighbour| board[neighbour])
            .find(|&n| n != EMPTY && !charged[n as usize]);

        if let Some(n) = pinning {
            charged[n as usize] = true;
            estimate += 2;
        }
    }

    estimate
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::parse_board;

    fn board(text: &str) -> Board {
        parse_board(text).unwrap()
    }

    #[test]
    fn selector_ordinals() {
        assert_eq!(Heuristic::try_from(0), Ok(Heuristic::Blocking));
        assert_eq!(Heuristic::try_from(1), Ok(Heuristic::Custom));
        assert_eq!(
            Heuristic::try_from(2),
            Err(Error::UnknownHeuristic("2".to_string()))
        );
        assert_eq!("custom".parse::<Heuristic>(), Ok(Heuristic::Custom));
        assert_eq!("0".parse::<Heuristic>(), Ok(Heuristic::Blocking));
        assert!("manhattan".parse::<Heuristic>().is_err());
    }

    #[test]
    fn zero_only_at_the_goal() {
        let solved = board(
            "
            A-----
            A-----
            ----XX
            ------
            ------
            ------",
        );
        let unsolved = board(
            "
            A-----
            A-----
            ---XX-
            ------
            ------
            ------",
        );

        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.evaluate(&solved), 0);
            assert_eq!(heuristic.evaluate(&unsolved), 1);
        }
    }

    #[test]
    fn blocking_counts_cells_in_front_only() {
        let b = board(
            "
            ---O--
            ---O-B
            ZXXO-B
            PQQQ--
            P-----
            P-----",
        );

        // O and B, not Z behind the target
        assert_eq!(blocking(&b), 3);

        let wide = board(
            "
            ------
            ------
            XX-AA-
            ------
            ------
            ------",
        );
        assert_eq!(blocking(&wide), 3);
    }

    #[test]
    fn custom_charges_pinning_vehicles() {
        let b = board(
            "
            ---O--
            ---O--
            XX-O--
            PQQQ--
            P-----
            P-----",
        );

        // O blocks (+1); nothing new above it, Q below it (+2)
        assert_eq!(custom(&b), 4);
        assert_eq!(blocking(&b), 2);
    }

    #[test]
    fn custom_prefers_the_vehicle_above() {
        let b = board(
            "
            ------
            --A---
            XXB---
            --C---
            ------
            ------",
        );

        // B (+1), then A above it (+2); C below is left alone
        assert_eq!(custom(&b), 4);
    }

    #[test]
    fn custom_falls_through_to_the_vehicle_below() {
        let b = board(
            "
            ------
            ------
            XX-B--
            ---C--
            ------
            ------",
        );

        // B (+1); nothing above, so C below is charged (+2)
        assert_eq!(custom(&b), 4);
    }

    #[test]
    fn custom_never_charges_empty_cells() {
        let b = board(
            "
            ------
            ------
            XX-B--
            ------
            ------
            ------",
        );

        // B alone; empty neighbours add nothing
        assert_eq!(custom(&b), 2);
        assert_eq!(blocking(&b), 2);
    }

    #[test]
    fn custom_probes_every_cell_of_a_wide_blocker() {
        let b = board(
            "
            ------
            --A-B-
            XX-CC-
            ----D-
            ------
            ------",
        );

        // C once (+1); first cell has nothing around it,
        // second cell finds B above (+2) and skips D below
        assert_eq!(custom(&b), 4);
        assert_eq!(blocking(&b), 3);
    }
}
