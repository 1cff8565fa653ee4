//! Utility functions for building boards from text.

use crate::engine::{Board, GRID_SIZE};
use crate::error::Error;

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row, starting from row 0. Exactly `GRID_SIZE`
/// rows of `GRID_SIZE` digit characters are required; `0` marks the blank.
/// Digits may optionally be separated by single spaces, so both `"123"` and
/// `"1 2 3"` parse as the same row.
///
/// # Errors
/// * [`Error::InvalidBoardShape`] — wrong number of rows, or a row with the
///   wrong number of cells.
/// * [`Error::UnrecognizedCharacter`] — a cell character outside `'0'..='8'`.
/// * [`Error::InvalidStartState`] — the digits do not form a permutation of
///   {0..=8} (checked by `Board::from_grid`).
///
/// # Examples
/// ```
/// use eightpuzzle_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["478", "365", "120"]).unwrap();
/// assert_eq!(board.blank_pos(), (2, 2));
///
/// assert!(board_from_str_array(&["478", "365"]).is_err());
/// assert!(board_from_str_array(&["478", "365", "12X"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, Error> {
    if s.len() != GRID_SIZE {
        return Err(Error::InvalidBoardShape {
            expected: GRID_SIZE,
            found: s.len(),
            unit: "rows",
        });
    }

    let mut grid = [[0u8; GRID_SIZE]; GRID_SIZE];

    for (r, row_str) in s.iter().enumerate() {
        let cells: Vec<char> = row_str.chars().filter(|ch| !ch.is_whitespace()).collect();
        if cells.len() != GRID_SIZE {
            return Err(Error::InvalidBoardShape {
                expected: GRID_SIZE,
                found: cells.len(),
                unit: "cells in a row",
            });
        }

        for (c, &ch) in cells.iter().enumerate() {
            grid[r][c] = match ch.to_digit(10) {
                Some(d) if (d as usize) < GRID_SIZE * GRID_SIZE => d as u8,
                _ => {
                    return Err(Error::UnrecognizedCharacter {
                        character: ch,
                        row: r,
                        col: c,
                    })
                }
            };
        }
    }

    Board::from_grid(grid)
}
