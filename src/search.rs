use std::{
    cmp::Reverse,
    collections::{hash_map::Entry, BinaryHeap, HashMap},
};

use pathfinding::directed::astar::astar;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::{
    board::Board,
    heuristic::Heuristic,
    moves::{successors, Move},
    vehicle::Registry,
};

/// How the search treats configurations it reaches more than once.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// The first path to reach a configuration is the one kept; later arrivals are
    /// dropped even when cheaper. Fast, but not optimal in general.
    #[default]
    EarlyInsertion,
    /// Textbook A* that re-opens a configuration reached again at lower cost.
    Optimal,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchOptions {
    pub heuristic: Heuristic,
    pub strategy: Strategy,
    /// Give up after popping this many configurations.
    pub max_explored: Option<usize>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Every configuration from the start to a goal, inclusive.
    Solved(Vec<Board>),
    /// All reachable configurations were explored without reaching the goal.
    Unsolved,
    /// `max_explored` was hit first.
    LimitReached,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    /// Configurations popped from the frontier.
    pub explored: usize,
    /// Successor configurations produced, duplicates included.
    pub generated: usize,
    pub outcome: Outcome,
}

impl Solution {
    pub fn path(&self) -> Option<&[Board]> {
        match &self.outcome {
            Outcome::Solved(path) => Some(path),
            _ => None,
        }
    }

    /// Number of slides in the solution.
    pub fn moves(&self) -> Option<usize> {
        self.path().map(|path| path.len() - 1)
    }

    /// The slide taken at each step of the solution; empty when unsolved.
    #[auto_enums::auto_enum(Iterator)]
    pub fn steps<'a>(&'a self, registry: &'a Registry) -> impl Iterator<Item = Move> + 'a {
        match self.path() {
            Some(path) => path
                .windows(2)
                .filter_map(move |pair| Move::between(&pair[0], &pair[1], registry)),
            None => std::iter::empty::<Move>(),
        }
    }
}

// explored map entry; its index in the arena doubles as its insertion order
struct Explored {
    board: Board,
    parent: Option<usize>,
    cost: usize,
}

pub fn search(start: &Board, registry: &Registry, options: &SearchOptions) -> Solution {
    debug!(
        heuristic = %options.heuristic,
        strategy = ?options.strategy,
        vehicles = registry.len(),
        start_estimate = options.heuristic.evaluate(start),
        "starting search"
    );

    let solution = match options.strategy {
        Strategy::EarlyInsertion => early_insertion(start, registry, options),
        Strategy::Optimal => optimal(start, registry, options),
    };

    debug!(
        explored = solution.explored,
        generated = solution.generated,
        moves = ?solution.moves(),
        "search finished"
    );
    solution
}

fn early_insertion(start: &Board, registry: &Registry, options: &SearchOptions) -> Solution {
    let heuristic = options.heuristic;
    let mut arena = vec![Explored {
        board: *start,
        parent: None,
        cost: 0,
    }];
    let mut index = HashMap::from([(*start, 0)]);

    // ordered by (f, h, insertion order), smallest first
    let mut frontier = BinaryHeap::new();
    let h = heuristic.evaluate(start);
    frontier.push(Reverse((h, h, 0)));

    let mut explored = 0;
    let mut generated = 0;

    while let Some(Reverse((estimate, _, current))) = frontier.pop() {
        explored += 1;
        let board = arena[current].board;
        let cost = arena[current].cost;

        if board.is_goal() {
            return Solution {
                explored,
                generated,
                outcome: Outcome::Solved(reconstruct(&arena, current)),
            };
        }

        if options.max_explored.is_some_and(|limit| explored >= limit) {
            warn!(explored, "exploration limit reached");
            return Solution {
                explored,
                generated,
                outcome: Outcome::LimitReached,
            };
        }

        trace!(explored, cost, estimate, "expanding\n{}", board);

        let next = successors(&board, registry);
        generated += next.len();

        for child in next {
            if let Entry::Vacant(slot) = index.entry(child) {
                let id = arena.len();
                slot.insert(id);
                arena.push(Explored {
                    board: child,
                    parent: Some(current),
                    cost: cost + 1,
                });

                let h = heuristic.evaluate(&child);
                frontier.push(Reverse((cost + 1 + h, h, id)));
            }
        }
    }

    Solution {
        explored,
        generated,
        outcome: Outcome::Unsolved,
    }
}

fn reconstruct(arena: &[Explored], goal: usize) -> Vec<Board> {
    let mut path: Vec<Board> = std::iter::successors(Some(goal), |&ix| arena[ix].parent)
        .map(|ix| arena[ix].board)
        .collect();
    path.reverse();
    path
}

fn optimal(start: &Board, registry: &Registry, options: &SearchOptions) -> Solution {
    let heuristic = options.heuristic;
    let mut explored = 0;
    let mut generated = 0;
    let mut capped = false;

    let result: Option<(Vec<Board>, usize)> = astar(
        start,
        |b| {
            // once capped, stop growing the frontier and let astar drain it
            if capped {
                return successors_with_cost(Default::default());
            }

            explored += 1;
            if options.max_explored.is_some_and(|limit| explored >= limit) {
                capped = true;
                return successors_with_cost(Default::default());
            }

            let next = successors(b, registry);
            generated += next.len();
            successors_with_cost(next)
        },
        |b| heuristic.evaluate(b),
        |b| b.is_goal(),
    );

    let outcome = match result {
        Some((path, _)) => {
            // the goal itself is popped but never expanded
            explored += 1;
            Outcome::Solved(path)
        }
        None if capped => {
            warn!(explored, "exploration limit reached");
            Outcome::LimitReached
        }
        None => Outcome::Unsolved,
    };

    Solution {
        explored,
        generated,
        outcome,
    }
}

fn successors_with_cost(next: SmallVec<[Board; 16]>) -> impl Iterator<Item = (Board, usize)> {
    next.into_iter().map(|b| (b, 1))
}
