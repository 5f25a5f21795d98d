use anyhow::Context;
use clap::Parser;
use rush_hour_solver::{Heuristic, Outcome, Puzzle, SearchOptions, Strategy, PUZZLES};

/// Solves Rush Hour puzzles with best-first search.
///
/// Without --puzzle, runs the built-in reference puzzles.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Heuristic to use: blocking (0) or custom (1). Repeat to run several; defaults to both.
    #[arg(short = 'H', long = "heuristic")]
    heuristics: Vec<Heuristic>,

    /// One puzzle as six comma-separated rows, e.g. ---O--,---O--,XX-O--,PQQQ--,P-----,P-----
    #[arg(short, long)]
    puzzle: Option<String>,

    /// Print every board on the solution path.
    #[arg(long)]
    print_path: bool,

    /// Stop a search after popping this many boards.
    #[arg(long)]
    max_explored: Option<usize>,

    /// Re-open boards reached again more cheaply, guaranteeing a shortest path
    /// when the heuristic never overestimates.
    #[arg(long)]
    optimal: bool,
}

fn report(puzzle: &Puzzle, options: &SearchOptions, print_path: bool) {
    let solution = puzzle.solve(options);

    match &solution.outcome {
        Outcome::Solved(path) => {
            if print_path {
                println!("{}", path[0]);
                println!();
                for (step, board) in solution.steps(puzzle.registry()).zip(&path[1..]) {
                    println!("{}", step);
                    println!("{}", board);
                    println!();
                }
            }
            println!("Total moves: {}", path.len() - 1);
        }
        Outcome::Unsolved => println!("No solution found"),
        Outcome::LimitReached => println!("Gave up before finding a solution"),
    }
    println!("States explored: {}", solution.explored);
    println!();
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let heuristics = if args.heuristics.is_empty() {
        Heuristic::ALL.to_vec()
    } else {
        args.heuristics.clone()
    };

    let puzzles = match &args.puzzle {
        Some(text) => {
            let rows: Vec<&str> = text.split(',').map(str::trim).collect();
            vec![Puzzle::new(&rows).with_context(|| format!("invalid puzzle {:?}", text))?]
        }
        None => PUZZLES
            .iter()
            .enumerate()
            .map(|(i, rows)| {
                Puzzle::new(rows).with_context(|| format!("invalid reference puzzle {}", i + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()?,
    };

    let strategy = if args.optimal {
        Strategy::Optimal
    } else {
        Strategy::EarlyInsertion
    };

    for heuristic in heuristics {
        let options = SearchOptions {
            heuristic,
            strategy,
            max_explored: args.max_explored,
        };

        for (i, puzzle) in puzzles.iter().enumerate() {
            println!("Puzzle {} using {} heuristic", i + 1, heuristic);
            report(puzzle, &options, args.print_path);
        }
        println!();
    }

    Ok(())
}
