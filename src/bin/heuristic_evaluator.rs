use clap::Parser;
use eightpuzzle_solver::engine::Board;
use eightpuzzle_solver::heuristics::Heuristic;
use eightpuzzle_solver::solver::{solve, Strategy};
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of scrambled boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: u64,

    /// Seed for the first board; board N uses seed START_SEED + N
    #[clap(long, default_value_t = 0)]
    start_seed: u64,
}

fn main() {
    let args = Args::parse();

    let combos: Vec<(&str, Heuristic, Strategy)> = vec![
        ("Greedy+Misplaced", Heuristic::MisplacedTiles, Strategy::GreedyBestFirst),
        ("Greedy+Manhattan", Heuristic::ManhattanDistance, Strategy::GreedyBestFirst),
        ("A*+Misplaced", Heuristic::MisplacedTiles, Strategy::AStar),
        ("A*+Manhattan", Heuristic::ManhattanDistance, Strategy::AStar),
    ];

    let mut path_lengths: HashMap<String, Vec<usize>> = HashMap::new();
    let mut expansions: HashMap<String, Vec<u32>> = HashMap::new();
    for (name, _, _) in &combos {
        path_lengths.insert(name.to_string(), Vec::new());
        expansions.insert(name.to_string(), Vec::new());
    }

    println!("Starting evaluation over {} scrambled boards...", args.boards);

    for board_idx in 0..args.boards {
        let seed = args.start_seed + board_idx;
        let start = Board::new_random_with_seed(seed);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, seed);

        for (name, heuristic, strategy) in &combos {
            match solve(&start, *heuristic, *strategy) {
                Ok(solution) => {
                    println!(
                        "  {:<18} Moves: {:<4} Expanded: {}",
                        name,
                        solution.moves(),
                        solution.expanded
                    );
                    path_lengths.get_mut(*name).unwrap().push(solution.moves());
                    expansions.get_mut(*name).unwrap().push(solution.expanded);
                }
                Err(e) => {
                    // Seeded scrambles are walks from the goal, so this
                    // indicates a bug rather than an unsolvable instance.
                    eprintln!("  {:<18} failed on seed {}: {}", name, seed, e);
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Boards evaluated: {}", args.boards);

    let mut summary: Vec<(String, f64, f64)> = Vec::new();
    for (name, _, _) in &combos {
        let lengths = &path_lengths[*name];
        let expanded = &expansions[*name];
        if lengths.is_empty() {
            println!("{}: no results recorded.", name);
            continue;
        }
        let avg_len = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
        let avg_exp = expanded.iter().sum::<u32>() as f64 / expanded.len() as f64;
        summary.push((name.to_string(), avg_len, avg_exp));
    }

    // Sort by average nodes expanded ascending: cheapest search first.
    summary.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

    println!("\n--- Averages ---");
    for (name, avg_len, avg_exp) in summary {
        println!(
            "{:<18} Avg moves = {:>6.2}, Avg nodes expanded = {:>10.2}",
            name, avg_len, avg_exp
        );
    }
}
