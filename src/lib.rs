//! # 8-Puzzle Solver Library
//!
//! This library provides the core state representation for the 8-puzzle
//! (a 3x3 sliding-tile grid with one blank) and an informed-search solver
//! supporting greedy best-first and A* orderings with pluggable heuristics.
//!
//! It is used by two binaries:
//! - `solve_puzzle`: reads a board file and prints the solution path step by step.
//! - `heuristic_evaluator`: benchmarks every heuristic/strategy combination
//!   over a batch of seeded random scrambles.
//!
//! ## Modules
//! - `engine`: the immutable board representation (`Board`), the goal
//!   configuration, successor generation, and the solvability parity test.
//! - `heuristics`: the `Heuristic` selector and the two evaluators
//!   (misplaced-tile count, Manhattan distance).
//! - `solver`: the search engine, frontier, `Strategy` selector, and the
//!   public `solve` entry point.
//! - `error`: the crate's error taxonomy.
//! - `utils`: parsing boards from text.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, are accessed via their full path,
// e.g. `eightpuzzle_solver::solver::solve`. This keeps the top-level
// library namespace cleaner.
