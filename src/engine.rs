//! Core board representation for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: an immutable snapshot of the 3x3 grid plus the blank's position,
//!   with successor generation, goal testing, and a parity-based solvability check.
//! - `GOAL_GRID`: the fixed solved configuration every search runs toward.
//!
//! A `Board` is never mutated after construction; applying a move produces a
//! fresh value. Equality and hashing derive from the full grid contents, which
//! makes boards directly usable as visited-set keys.
use crate::error::Error;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width and height of the puzzle grid. The board is always square.
pub const GRID_SIZE: usize = 3;

/// The label stored in the single empty cell.
pub const BLANK: u8 = 0;

/// The solved configuration: tiles 1..=8 in row-major order, blank last.
pub const GOAL_GRID: [[u8; GRID_SIZE]; GRID_SIZE] = [[1, 2, 3], [4, 5, 6], [7, 8, BLANK]];

/// An immutable 3x3 sliding-tile board.
///
/// Holds the grid of tile labels (1..=8 plus one `BLANK`) and the cached
/// coordinates of the blank cell. The permutation invariant is enforced at
/// every construction site, so a `Board` value is always well-formed.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::engine::Board;
///
/// let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
/// assert!(!board.is_goal());
/// assert_eq!(board.blank_pos(), (2, 1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[u8; GRID_SIZE]; GRID_SIZE],
    blank_row: usize,
    blank_col: usize,
}

impl Board {
    /// Creates a board in the solved configuration.
    pub fn solved() -> Self {
        Board {
            grid: GOAL_GRID,
            blank_row: GRID_SIZE - 1,
            blank_col: GRID_SIZE - 1,
        }
    }

    /// Creates a board from an explicit grid, validating the permutation invariant.
    ///
    /// The grid must contain each label in `{0..=8}` exactly once, with `0`
    /// standing for the blank.
    ///
    /// # Errors
    /// Returns [`Error::InvalidStartState`] if any label is out of range or
    /// appears more than once (which also covers a missing or duplicated blank).
    pub fn from_grid(grid: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self, Error> {
        let mut seen = [false; GRID_SIZE * GRID_SIZE];
        let mut blank_pos = None;

        for (r, row) in grid.iter().enumerate() {
            for (c, &label) in row.iter().enumerate() {
                let idx = label as usize;
                if idx >= GRID_SIZE * GRID_SIZE {
                    return Err(Error::InvalidStartState {
                        reason: format!("tile label {} out of range 0..=8", label),
                    });
                }
                if seen[idx] {
                    return Err(Error::InvalidStartState {
                        reason: format!("tile label {} appears more than once", label),
                    });
                }
                seen[idx] = true;
                if label == BLANK {
                    blank_pos = Some((r, c));
                }
            }
        }

        // The permutation check above guarantees the blank exists.
        let (blank_row, blank_col) = blank_pos.ok_or_else(|| Error::InvalidStartState {
            reason: "no blank cell (label 0) present".to_string(),
        })?;

        Ok(Board {
            grid,
            blank_row,
            blank_col,
        })
    }

    /// Creates a scrambled board by walking the blank randomly from the goal.
    ///
    /// The walk length is fixed and the generator is seeded, so the same seed
    /// always yields the same board. Because every step is a legal move applied
    /// to the goal, the result is guaranteed solvable.
    ///
    /// # Arguments
    /// * `seed`: Seed for the random number generator.
    pub fn new_random_with_seed(seed: u64) -> Self {
        const SCRAMBLE_MOVES: usize = 60;

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::solved();
        for _ in 0..SCRAMBLE_MOVES {
            let successors = board.successors();
            let pick = rng.gen_range(0..successors.len());
            board = successors[pick].clone();
        }
        board
    }

    /// Returns the label at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside `0..GRID_SIZE`.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns the cached `(row, col)` of the blank cell.
    pub fn blank_pos(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    /// Returns an immutable reference to the underlying grid.
    pub fn get_grid(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.grid
    }

    /// Returns `true` if this board equals the goal configuration.
    pub fn is_goal(&self) -> bool {
        self.grid == GOAL_GRID
    }

    /// Generates every board reachable from this one by a single blank move.
    ///
    /// The blank is swapped with each in-bounds orthogonal neighbor. The
    /// enumeration order is fixed at up, down, left, right; the frontier's
    /// tie-breaking depends on this order staying stable.
    ///
    /// # Returns
    /// Between 2 (blank in a corner) and 4 (blank in the center) new boards.
    /// The source board is left untouched.
    pub fn successors(&self) -> Vec<Board> {
        // Up, down, left, right.
        const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

        let mut next_boards = Vec::with_capacity(4);
        for (dr, dc) in OFFSETS {
            let nr = self.blank_row as isize + dr;
            let nc = self.blank_col as isize + dc;
            if nr >= 0 && nr < GRID_SIZE as isize && nc >= 0 && nc < GRID_SIZE as isize {
                let nr = nr as usize;
                let nc = nc as usize;
                let mut grid = self.grid;
                grid[self.blank_row][self.blank_col] = grid[nr][nc];
                grid[nr][nc] = BLANK;
                next_boards.push(Board {
                    grid,
                    blank_row: nr,
                    blank_col: nc,
                });
            }
        }
        next_boards
    }

    /// Tests whether this board can reach the goal at all.
    ///
    /// For an odd-width puzzle the goal is reachable exactly when the number
    /// of inversions in the row-major tile sequence (blank excluded) is even.
    pub fn is_solvable(&self) -> bool {
        let flattened: Vec<u8> = self.grid.iter().flatten().copied().collect();
        Self::count_inversions(&flattened) % 2 == 0
    }

    fn count_inversions(flattened: &[u8]) -> usize {
        flattened
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label != BLANK)
            .map(|(i, &label)| {
                flattened[i + 1..]
                    .iter()
                    .filter(|&&later| later != BLANK && later < label)
                    .count()
            })
            .sum()
    }
}

impl fmt::Display for Board {
    /// Formats the board as three rows of space-separated labels, blank as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &label) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", label)?;
            }
            if r < GRID_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
