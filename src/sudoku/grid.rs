use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ValidationError},
    sudoku::{Cell, BLOCK_DIM},
};

/// A square matrix of optional digits.
///
/// `None` is a blank cell awaiting a value; `Some(d)` is a given clue or,
/// after solving, the filled digit. Squareness and the `1..=9` digit range
/// are validated at construction, so every `Grid` in circulation is
/// well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<Option<u8>>>,
}

impl Grid {
    /// Builds a grid from rows of optional digits, validating that the
    /// matrix is non-empty, square, and holds only digits `1..=9`.
    pub fn new(cells: Vec<Vec<Option<u8>>>) -> Result<Self, ValidationError> {
        if cells.is_empty() {
            return Err(ValidationError::EmptyGrid);
        }
        let expected = cells.len();
        for (row, contents) in cells.iter().enumerate() {
            if contents.len() != expected {
                return Err(ValidationError::RaggedRow {
                    row,
                    len: contents.len(),
                    expected,
                });
            }
            for &digit in contents.iter().flatten() {
                if !(1..=9).contains(&digit) {
                    return Err(ValidationError::DigitOutOfRange(digit));
                }
            }
        }
        Ok(Self { cells })
    }

    /// Parses the puzzle text format: one row per line, space-separated
    /// tokens, `1`..`9` for clues and `-` for blanks.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let mut cells = Vec::new();
        for (row, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut parsed = Vec::new();
            for token in line.split_whitespace() {
                match token {
                    "-" => parsed.push(None),
                    _ => match token.parse::<u8>() {
                        Ok(digit) if (1..=9).contains(&digit) => parsed.push(Some(digit)),
                        _ => {
                            return Err(ValidationError::BadToken {
                                token: token.to_string(),
                                row,
                            })
                        }
                    },
                }
            }
            cells.push(parsed);
        }
        Self::new(cells)
    }

    /// The side length of the grid.
    pub fn dim(&self) -> usize {
        self.cells.len()
    }

    /// The digit at `cell`, or `None` while it is blank.
    pub fn get(&self, (row, col): Cell) -> Option<u8> {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, (row, col): Cell, digit: u8) {
        self.cells[row][col] = Some(digit);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dim = self.dim();
        for (row, contents) in self.cells.iter().enumerate() {
            if row != 0 && row % BLOCK_DIM == 0 {
                let mut separator = Vec::with_capacity(dim + dim / BLOCK_DIM);
                for col in 0..dim {
                    if col != 0 && col % BLOCK_DIM == 0 {
                        separator.push("+".to_string());
                    }
                    separator.push("-".to_string());
                }
                writeln!(f, "{}", separator.join(" "))?;
            }
            let mut tokens = Vec::with_capacity(dim + dim / BLOCK_DIM);
            for (col, cell) in contents.iter().enumerate() {
                if col != 0 && col % BLOCK_DIM == 0 {
                    tokens.push("|".to_string());
                }
                tokens.push(match cell {
                    Some(digit) => digit.to_string(),
                    None => "-".to_string(),
                });
            }
            writeln!(f, "{}", tokens.join(" "))?;
        }
        Ok(())
    }
}

/// Reads a puzzle file and parses it into a grid.
pub fn load(path: impl AsRef<Path>) -> Result<Grid> {
    let text = fs::read_to_string(path)?;
    Ok(Grid::parse(&text)?)
}
