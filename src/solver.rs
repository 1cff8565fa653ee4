//! Informed search over the 8-puzzle state space.
//!
//! The entry point is [`solve`], which runs a best-first search from a start
//! board to the goal using a caller-selected [`Heuristic`] and [`Strategy`].
//! Each call owns an independent [`SearchEngine`] holding all mutable search
//! state (frontier, visited set, counters); nothing is shared between runs.

use crate::engine::Board;
use crate::error::Error;
use crate::heuristics::Heuristic;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::rc::Rc;

/// Selects how the frontier orders pending nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Expand the node with the lowest heuristic estimate, ignoring path cost.
    /// Finds some solution on a finite space, not necessarily the shortest.
    GreedyBestFirst,
    /// Expand the node with the lowest `g + h`. Returns a minimum-length move
    /// sequence given an admissible heuristic.
    AStar,
}

impl Strategy {
    /// Computes the frontier priority for a node with the given cost and estimate.
    fn priority(&self, g: u32, h: u32) -> u32 {
        match self {
            Strategy::GreedyBestFirst => h,
            Strategy::AStar => g + h,
        }
    }
}

/// A discovered state together with its search bookkeeping.
///
/// The parent link is a shared immutable reference; the chain of parents from
/// the goal node back to the root is the solution path in reverse.
#[derive(Debug)]
struct SearchNode {
    board: Board,
    /// Moves taken from the start to reach this node.
    g: u32,
    /// Heuristic estimate of moves remaining.
    h: u32,
    parent: Option<Rc<SearchNode>>,
}

/// One pending entry in the frontier.
///
/// Ordering is by `(priority, h, seq)` ascending: equal priorities fall back
/// to the lower heuristic estimate, and remaining ties resolve in insertion
/// order. The comparison is reversed so that `BinaryHeap`, a max-heap, pops
/// the smallest key first.
#[derive(Debug)]
struct FrontierEntry {
    priority: u32,
    h: u32,
    seq: u64,
    node: Rc<SearchNode>,
}

impl FrontierEntry {
    fn key(&self) -> (u32, u32, u64) {
        (self.priority, self.h, self.seq)
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Priority structure over pending search nodes.
///
/// Strategy-agnostic: the priority is computed by the caller at push time.
#[derive(Debug)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, priority: u32, node: Rc<SearchNode>) {
        let h = node.h;
        self.heap.push(FrontierEntry {
            priority,
            h,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    /// Removes and returns the lowest-keyed pending node, or `None` if no
    /// nodes remain. The engine's loop only terminates through this `None`,
    /// so a pop on a known-empty frontier cannot be expressed at all.
    fn pop_best(&mut self) -> Option<Rc<SearchNode>> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// A solution path found by the solver.
#[derive(Clone, Debug)]
pub struct Solution {
    /// The sequence of boards from the start (inclusive) to the goal.
    pub path: Vec<Board>,
    /// Number of nodes the search expanded before reaching the goal.
    pub expanded: u32,
}

impl Solution {
    /// Number of blank moves in the path.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Solves the puzzle from `start` with the given heuristic and strategy.
///
/// # Errors
/// Returns [`Error::NoSolution`] if the reachable state space is exhausted
/// without finding the goal (the case for any start in the unsolvable half of
/// the permutation space). This is a reported outcome, never a panic.
pub fn solve(start: &Board, heuristic: Heuristic, strategy: Strategy) -> Result<Solution, Error> {
    let mut engine = SearchEngine::new(heuristic, strategy);
    engine.run(start)
}

/// Owns all mutable state for one search run.
#[derive(Debug)]
struct SearchEngine {
    heuristic: Heuristic,
    strategy: Strategy,
    frontier: Frontier,
    visited: HashSet<Board>,
    expanded: u32,
}

impl SearchEngine {
    fn new(heuristic: Heuristic, strategy: Strategy) -> Self {
        SearchEngine {
            heuristic,
            strategy,
            frontier: Frontier::new(),
            visited: HashSet::new(),
            expanded: 0,
        }
    }

    /// Runs the search to a terminal outcome.
    ///
    /// A board is marked visited when it is first enqueued, uniformly for both
    /// strategies, so no board is ever pushed onto the frontier twice.
    fn run(&mut self, start: &Board) -> Result<Solution, Error> {
        let h = self.heuristic.evaluate(start);
        let root = Rc::new(SearchNode {
            board: start.clone(),
            g: 0,
            h,
            parent: None,
        });
        self.visited.insert(start.clone());
        self.frontier.push(self.strategy.priority(0, h), root);

        while let Some(node) = self.frontier.pop_best() {
            if node.board.is_goal() {
                return Ok(Solution {
                    path: reconstruct_path(&node),
                    expanded: self.expanded,
                });
            }

            self.expanded += 1;
            for successor in node.board.successors() {
                if self.visited.contains(&successor) {
                    continue;
                }
                self.visited.insert(successor.clone());

                let h = self.heuristic.evaluate(&successor);
                let g = node.g + 1;
                let child = Rc::new(SearchNode {
                    board: successor,
                    g,
                    h,
                    parent: Some(Rc::clone(&node)),
                });
                self.frontier.push(self.strategy.priority(g, h), child);
            }
        }

        Err(Error::NoSolution)
    }
}

/// Walks parent links from the goal node back to the root, then reverses.
fn reconstruct_path(goal_node: &Rc<SearchNode>) -> Vec<Board> {
    let mut path = Vec::new();
    let mut current = Some(goal_node);
    while let Some(node) = current {
        path.push(node.board.clone());
        current = node.parent.as_ref();
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GRID_SIZE;

    const ALL_HEURISTICS: [Heuristic; 2] = [Heuristic::MisplacedTiles, Heuristic::ManhattanDistance];
    const ALL_STRATEGIES: [Strategy; 2] = [Strategy::GreedyBestFirst, Strategy::AStar];

    /// Asserts every consecutive pair of boards differs by exactly one legal
    /// blank swap.
    fn assert_path_is_valid(path: &[Board]) {
        for pair in path.windows(2) {
            let successors = pair[0].successors();
            assert!(
                successors.contains(&pair[1]),
                "boards are not one move apart:\n{}\n--\n{}",
                pair[0],
                pair[1]
            );
        }
    }

    fn assert_no_duplicate_states(path: &[Board]) {
        let unique: HashSet<&Board> = path.iter().collect();
        assert_eq!(unique.len(), path.len(), "path revisits a state");
    }

    #[test]
    fn test_start_at_goal_is_zero_moves() {
        for heuristic in ALL_HEURISTICS {
            for strategy in ALL_STRATEGIES {
                let solution = solve(&Board::solved(), heuristic, strategy).unwrap();
                assert_eq!(solution.moves(), 0);
                assert_eq!(solution.path, vec![Board::solved()]);
                assert_eq!(solution.expanded, 0);
            }
        }
    }

    #[test]
    fn test_one_swap_start_solves_in_one_move() {
        let start = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
        for heuristic in ALL_HEURISTICS {
            for strategy in ALL_STRATEGIES {
                let solution = solve(&start, heuristic, strategy).unwrap();
                assert_eq!(
                    solution.moves(),
                    1,
                    "expected a single move for {:?}/{:?}",
                    heuristic,
                    strategy
                );
                assert_eq!(solution.path[0], start);
                assert!(solution.path[1].is_goal());
            }
        }
    }

    #[test]
    fn test_astar_finds_two_move_optimum() {
        // Blank two cells left of home: slide 7 then 8.
        let start = Board::from_grid([[1, 2, 3], [4, 5, 6], [0, 7, 8]]).unwrap();
        for heuristic in ALL_HEURISTICS {
            let solution = solve(&start, heuristic, Strategy::AStar).unwrap();
            assert_eq!(solution.moves(), 2);
            assert_path_is_valid(&solution.path);
        }
    }

    #[test]
    fn test_astar_finds_three_move_optimum() {
        // Goal with the blank walked up, left, down: optimum is exactly 3.
        let start = Board::from_grid([[1, 2, 3], [4, 8, 5], [7, 0, 6]]).unwrap();
        for heuristic in ALL_HEURISTICS {
            let solution = solve(&start, heuristic, Strategy::AStar).unwrap();
            assert_eq!(solution.moves(), 3);
            assert_path_is_valid(&solution.path);
            assert!(solution.path.last().unwrap().is_goal());
        }
    }

    #[test]
    fn test_astar_manhattan_end_to_end_scramble() {
        let start = Board::from_grid([[4, 7, 8], [3, 6, 5], [1, 2, 0]]).unwrap();
        let solution = solve(&start, Heuristic::ManhattanDistance, Strategy::AStar).unwrap();

        assert_eq!(solution.path.first().unwrap(), &start);
        assert!(solution.path.last().unwrap().is_goal());
        assert_path_is_valid(&solution.path);
        assert_no_duplicate_states(&solution.path);
        // Manhattan distance of the start is 16, so no shorter path exists.
        assert!(solution.moves() >= 16);
    }

    #[test]
    fn test_greedy_returns_some_valid_path() {
        let start = Board::from_grid([[4, 7, 8], [3, 6, 5], [1, 2, 0]]).unwrap();
        for heuristic in ALL_HEURISTICS {
            let solution = solve(&start, heuristic, Strategy::GreedyBestFirst).unwrap();
            assert_eq!(solution.path.first().unwrap(), &start);
            assert!(solution.path.last().unwrap().is_goal());
            assert_path_is_valid(&solution.path);
            assert_no_duplicate_states(&solution.path);
        }
    }

    #[test]
    fn test_greedy_path_no_shorter_than_astar() {
        let start = Board::new_random_with_seed(7);
        let astar = solve(&start, Heuristic::ManhattanDistance, Strategy::AStar).unwrap();
        let greedy = solve(&start, Heuristic::ManhattanDistance, Strategy::GreedyBestFirst).unwrap();
        assert!(greedy.moves() >= astar.moves());
    }

    #[test]
    fn test_repeated_solves_are_identical() {
        let start = Board::from_grid([[4, 7, 8], [3, 6, 5], [1, 2, 0]]).unwrap();
        for heuristic in ALL_HEURISTICS {
            for strategy in ALL_STRATEGIES {
                let first = solve(&start, heuristic, strategy).unwrap();
                let second = solve(&start, heuristic, strategy).unwrap();
                assert_eq!(first.path, second.path);
                assert_eq!(first.expanded, second.expanded);
            }
        }
    }

    #[test]
    fn test_heuristics_admissible_on_solved_fixtures() {
        // A* path length is the true optimum; neither heuristic may exceed it.
        for seed in 0..5 {
            let start = Board::new_random_with_seed(seed);
            let optimal = solve(&start, Heuristic::ManhattanDistance, Strategy::AStar)
                .unwrap()
                .moves() as u32;
            assert!(Heuristic::ManhattanDistance.evaluate(&start) <= optimal);
            assert!(Heuristic::MisplacedTiles.evaluate(&start) <= optimal);
        }
    }

    #[test]
    fn test_unsolvable_start_reports_no_solution() {
        // Odd inversion parity: the goal is unreachable, so the search must
        // exhaust the frontier and report the outcome instead of crashing.
        let start = Board::from_grid([[2, 1, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
        assert!(!start.is_solvable());
        let result = solve(&start, Heuristic::ManhattanDistance, Strategy::AStar);
        assert!(matches!(result, Err(Error::NoSolution)));
    }

    #[test]
    fn test_unsolvable_search_visits_half_the_permutations() {
        // The unsolvable orbit of the 8-puzzle has 9!/2 states; exhaustion
        // must touch every one of them exactly once.
        let start = Board::from_grid([[2, 1, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
        let mut engine = SearchEngine::new(Heuristic::MisplacedTiles, Strategy::GreedyBestFirst);
        let result = engine.run(&start);
        assert!(matches!(result, Err(Error::NoSolution)));
        assert_eq!(engine.visited.len(), 181_440);
        assert!(engine.frontier.is_empty());
    }

    #[test]
    fn test_looser_heuristic_expands_at_least_as_many_nodes() {
        let start = Board::from_grid([[4, 7, 8], [3, 6, 5], [1, 2, 0]]).unwrap();
        let loose = solve(&start, Heuristic::MisplacedTiles, Strategy::AStar).unwrap();
        let tight = solve(&start, Heuristic::ManhattanDistance, Strategy::AStar).unwrap();
        assert!(loose.moves() >= 16);
        assert!(tight.moves() >= 16);
        assert!(loose.expanded >= tight.expanded);
    }

    #[test]
    fn test_frontier_pops_lowest_priority_first() {
        let mut frontier = Frontier::new();
        for (priority, label) in [(5u32, 1u8), (2, 2), (8, 3), (2, 4)] {
            // Board content is irrelevant here; g doubles as a label.
            let node = Rc::new(SearchNode {
                board: Board::solved(),
                g: label as u32,
                h: 0,
                parent: None,
            });
            frontier.push(priority, node);
        }
        assert_eq!(frontier.len(), 4);

        // Equal priorities (the two 2s) resolve in insertion order.
        let order: Vec<u32> = std::iter::from_fn(|| frontier.pop_best())
            .map(|node| node.g)
            .collect();
        assert_eq!(order, vec![2, 4, 1, 3]);
        assert!(frontier.is_empty());
        assert!(frontier.pop_best().is_none());
    }

    #[test]
    fn test_frontier_equal_priority_prefers_lower_h() {
        let mut frontier = Frontier::new();
        for (h, g) in [(3u32, 1u32), (1, 2), (2, 3)] {
            let node = Rc::new(SearchNode {
                board: Board::solved(),
                g,
                h,
                parent: None,
            });
            // Same priority for all three entries.
            frontier.push(10, node);
        }
        let order: Vec<u32> = std::iter::from_fn(|| frontier.pop_best())
            .map(|node| node.g)
            .collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_path_states_stay_inside_grid_invariant() {
        let start = Board::new_random_with_seed(3);
        let solution = solve(&start, Heuristic::ManhattanDistance, Strategy::AStar).unwrap();
        for board in &solution.path {
            let (r, c) = board.blank_pos();
            assert!(r < GRID_SIZE && c < GRID_SIZE);
        }
    }
}
