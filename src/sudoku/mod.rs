//! The Sudoku frontend.
//!
//! Reduces a 9×9 grid of clues to a CSP over its cells — candidate digits
//! as domains, pairwise inequality between peer cells as constraints — and
//! writes a found assignment back into the grid. The frontend owns the peer
//! topology; the engine only ever sees abstract variables and values.

pub mod grid;

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::{
    error::{Result, ValidationError},
    solver::{constraint::Assignment, constraints::not_equal::NotEqualConstraint, engine::Csp},
};

pub use grid::{load, Grid};

/// A cell coordinate, `(row, column)`, both in `0..GRID_DIM`.
pub type Cell = (usize, usize);

/// The only supported grid dimension. The peer topology below is specific
/// to 9×9 grids with 3×3 blocks and does not generalize to other sizes.
pub const GRID_DIM: usize = 9;
pub(crate) const BLOCK_DIM: usize = 3;

/// A 9×9 Sudoku puzzle wrapping a [`Grid`] and the reduction to a CSP.
#[derive(Debug)]
pub struct Puzzle {
    grid: Grid,
    csp: Option<Csp<Cell, u8>>,
}

impl Puzzle {
    /// Wraps `grid`, rejecting any dimension other than 9.
    pub fn new(grid: Grid) -> Result<Self, ValidationError> {
        if grid.dim() != GRID_DIM {
            return Err(ValidationError::UnsupportedSize(grid.dim()));
        }
        Ok(Self { grid, csp: None })
    }

    /// The wrapped grid in its current state.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All cell coordinates in row-major order. This is also the engine's
    /// branching order.
    fn variables() -> Vec<Cell> {
        (0..GRID_DIM)
            .flat_map(|row| (0..GRID_DIM).map(move |col| (row, col)))
            .collect()
    }

    /// The cells sharing a row, column, or 3×3 block with `cell`, excluding
    /// `cell` itself. Deduplicated and sorted.
    pub fn peers(cell: Cell) -> Vec<Cell> {
        let (row, col) = cell;
        let (block_row, block_col) = (row / BLOCK_DIM, col / BLOCK_DIM);

        let mut peers = BTreeSet::new();
        for c in 0..GRID_DIM {
            peers.insert((row, c));
        }
        for r in 0..GRID_DIM {
            peers.insert((r, col));
        }
        for r in 0..BLOCK_DIM {
            for c in 0..BLOCK_DIM {
                peers.insert((block_row * BLOCK_DIM + r, block_col * BLOCK_DIM + c));
            }
        }
        peers.remove(&cell);
        peers.into_iter().collect()
    }

    /// Candidate digits per cell.
    ///
    /// A clue keeps only its given digit; a blank keeps `1..=9` minus every
    /// digit already fixed on one of its peers, in ascending order. The
    /// pruning is a single pass over the grid as given, not iterated.
    fn domains(&self) -> HashMap<Cell, Vec<u8>> {
        let mut domains = HashMap::new();
        for cell in Self::variables() {
            let domain = match self.grid.get(cell) {
                Some(given) => vec![given],
                None => {
                    let used: BTreeSet<u8> = Self::peers(cell)
                        .into_iter()
                        .filter_map(|peer| self.grid.get(peer))
                        .collect();
                    (1..=9).filter(|digit| !used.contains(digit)).collect()
                }
            };
            domains.insert(cell, domain);
        }
        domains
    }

    fn build_csp(&self) -> Result<Csp<Cell, u8>, ValidationError> {
        let variables = Self::variables();
        let mut csp = Csp::new(variables.clone(), self.domains())?;
        for cell in variables {
            for peer in Self::peers(cell) {
                // Exactly one constraint per unordered peer pair: emit it
                // from the greater endpoint only.
                if cell > peer {
                    csp.add_constraint(Box::new(NotEqualConstraint::new(cell, peer)))?;
                }
            }
        }
        Ok(csp)
    }

    /// Builds the CSP for the grid's current state so the next
    /// [`solve`](Puzzle::solve) call can run immediately.
    pub fn setup(&mut self) -> Result<(), ValidationError> {
        self.csp = Some(self.build_csp()?);
        Ok(())
    }

    /// Runs the backtracking search over the grid's current state.
    ///
    /// On success every solved digit is written back into the grid and
    /// `true` is returned. An unsatisfiable puzzle returns `false` and
    /// leaves the grid untouched. The CSP instance is consumed either way;
    /// a later call rebuilds it from the grid as it then stands, so solving
    /// an already-solved grid succeeds immediately.
    pub fn solve(&mut self) -> Result<bool, ValidationError> {
        let csp = match self.csp.take() {
            Some(csp) => csp,
            None => self.build_csp()?,
        };

        let (solution, stats) = csp.search();
        debug!(
            nodes = stats.nodes,
            backtracks = stats.backtracks,
            solved = solution.is_some(),
            "sudoku solve finished"
        );

        match solution {
            Some(assignment) => {
                self.apply(&assignment);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn apply(&mut self, assignment: &Assignment<Cell, u8>) {
        for (cell, digit) in assignment {
            self.grid.set(*cell, *digit);
        }
    }

    /// Block-delimited text rendering of the grid, blanks shown as `-`.
    pub fn render(&self) -> String {
        self.grid.to_string()
    }
}
