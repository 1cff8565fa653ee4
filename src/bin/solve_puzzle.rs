use clap::{Parser, ValueEnum};
use eightpuzzle_solver::error::Error;
use eightpuzzle_solver::heuristics::Heuristic;
use eightpuzzle_solver::solver::{solve, Strategy};
use eightpuzzle_solver::utils::board_from_str_array;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicArg {
    /// Count of tiles not on their goal cell
    Misplaced,
    /// Sum of tile distances to their goal cells
    Manhattan,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// Greedy best-first: order by heuristic only
    Greedy,
    /// A*: order by path cost plus heuristic
    Astar,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Heuristic used to score states
    #[clap(short = 'e', long, value_enum, default_value = "manhattan")]
    heuristic: HeuristicArg,

    /// Search-ordering strategy
    #[clap(short, long, value_enum, default_value = "astar")]
    strategy: StrategyArg,

    /// Path to the board file (3 rows of the digits 0-8, 0 is the blank)
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<eightpuzzle_solver::engine::Board, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines).map_err(|e| format!("Invalid board: {}", e))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let board = match read_board_file(&args.board_file) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let heuristic = match args.heuristic {
        HeuristicArg::Misplaced => Heuristic::MisplacedTiles,
        HeuristicArg::Manhattan => Heuristic::ManhattanDistance,
    };
    let strategy = match args.strategy {
        StrategyArg::Greedy => Strategy::GreedyBestFirst,
        StrategyArg::Astar => Strategy::AStar,
    };

    println!("Loaded board from {}\n", args.board_file.display());
    println!("Initial board state:\n{}\n", board);
    println!(
        "Searching with {:?} / {:?}...\n",
        heuristic, strategy
    );

    match solve(&board, heuristic, strategy) {
        Ok(solution) => {
            println!("Solution Path:");
            for (step, state) in solution.path.iter().enumerate() {
                println!("Step {}:", step + 1);
                println!("{}\n", state);
            }
            println!("Moves: {}", solution.moves());
            println!("Nodes expanded: {}", solution.expanded);
            ExitCode::SUCCESS
        }
        Err(Error::NoSolution) => {
            println!("No solution found.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Search failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
