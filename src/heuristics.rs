//! Heuristic evaluators for estimating remaining distance to the goal.
//!
//! Both heuristics are pure functions of a [`Board`] and are admissible for
//! the 8-puzzle (they never overestimate the true remaining move count), so
//! either can back an optimal A* search. Manhattan distance dominates the
//! misplaced-tile count and typically expands far fewer nodes.

use crate::engine::{Board, BLANK, GOAL_GRID, GRID_SIZE};

/// Selects which heuristic a search run evaluates states with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Count of non-blank tiles not on their goal cell. Range 0..=8.
    MisplacedTiles,
    /// Sum of each tile's row and column offsets from its goal cell.
    ManhattanDistance,
}

impl Heuristic {
    /// Evaluates this heuristic on the given board.
    pub fn evaluate(&self, board: &Board) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(board),
            Heuristic::ManhattanDistance => manhattan_distance(board),
        }
    }
}

/// Counts the tiles that differ from the goal label at their cell.
///
/// The blank is never counted, so the solved board scores 0 and no board
/// scores more than 8.
pub fn misplaced_tiles(board: &Board) -> u32 {
    let mut misplaced = 0;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let label = board.get_tile(r, c);
            if label != BLANK && label != GOAL_GRID[r][c] {
                misplaced += 1;
            }
        }
    }
    misplaced
}

/// Sums each non-blank tile's Manhattan distance to its goal cell.
///
/// A tile labelled `n` belongs at row `(n - 1) / 3`, column `(n - 1) % 3`.
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let label = board.get_tile(r, c);
            if label != BLANK {
                let goal_r = (label as usize - 1) / GRID_SIZE;
                let goal_c = (label as usize - 1) % GRID_SIZE;
                distance += r.abs_diff(goal_r) + c.abs_diff(goal_c);
            }
        }
    }
    distance as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_heuristics_zero_at_goal() {
        let goal = Board::solved();
        assert_eq!(misplaced_tiles(&goal), 0);
        assert_eq!(manhattan_distance(&goal), 0);
    }

    #[test]
    fn test_one_swap_from_goal() {
        // Blank one cell left of home: only tile 8 is off, one cell away.
        let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
        assert_eq!(misplaced_tiles(&board), 1);
        assert_eq!(manhattan_distance(&board), 1);
    }

    #[test]
    fn test_misplaced_tiles_scrambled_fixture() {
        // Every tile is away from home.
        let board = Board::from_grid([[4, 7, 8], [3, 6, 5], [1, 2, 0]]).unwrap();
        assert_eq!(misplaced_tiles(&board), 8);
    }

    #[test]
    fn test_manhattan_distance_scrambled_fixture() {
        // 4:(0,0)->(1,0)=1, 7:(0,1)->(2,0)=3, 8:(0,2)->(2,1)=3,
        // 3:(1,0)->(0,2)=3, 6:(1,1)->(1,2)=1, 5:(1,2)->(1,1)=1,
        // 1:(2,0)->(0,0)=2, 2:(2,1)->(0,1)=2.
        let board = Board::from_grid([[4, 7, 8], [3, 6, 5], [1, 2, 0]]).unwrap();
        assert_eq!(manhattan_distance(&board), 16);
    }

    #[test]
    fn test_blank_never_counted() {
        // The blank sits on tile 1's goal cell but contributes nothing itself;
        // tiles 1, 2, 3, and 6 are each one cell from home.
        let board = Board::from_grid([[0, 1, 2], [4, 5, 3], [7, 8, 6]]).unwrap();
        assert_eq!(misplaced_tiles(&board), 4);
        // Each of the four is exactly one move of distance away.
        assert_eq!(manhattan_distance(&board), 4);
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        // Manhattan counts at least 1 for every misplaced tile.
        for seed in 0..10 {
            let board = Board::new_random_with_seed(seed);
            assert!(manhattan_distance(&board) >= misplaced_tiles(&board));
        }
    }

    #[test]
    fn test_enum_dispatch_matches_free_functions() {
        let board = Board::from_grid([[4, 7, 8], [3, 6, 5], [1, 2, 0]]).unwrap();
        assert_eq!(
            Heuristic::MisplacedTiles.evaluate(&board),
            misplaced_tiles(&board)
        );
        assert_eq!(
            Heuristic::ManhattanDistance.evaluate(&board),
            manhattan_distance(&board)
        );
    }
}
