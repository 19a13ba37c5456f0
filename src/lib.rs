//! Tessella is a generic, reusable backtracking solver for constraint
//! satisfaction problems (CSPs), together with a 9×9 Sudoku frontend built
//! on top of it.
//!
//! The crate is split into a problem-agnostic backend and a problem-specific
//! frontend:
//!
//! - **[`Csp`](solver::engine::Csp)**: a problem instance — variables, their
//!   candidate domains, and the constraints indexed by the variables they
//!   touch — with a deterministic depth-first
//!   [`search`](solver::engine::Csp::search).
//! - **[`Constraint`](solver::constraint::Constraint)**: a rule over a fixed
//!   set of variables, judged against a partial
//!   [`Assignment`](solver::constraint::Assignment). The standard library
//!   currently provides
//!   [`NotEqualConstraint`](solver::constraints::not_equal::NotEqualConstraint),
//!   the one kind the Sudoku reduction needs.
//! - **[`Puzzle`](sudoku::Puzzle)**: translates a grid of clues into CSP
//!   primitives and writes a found assignment back into the grid. The
//!   frontend never inspects search internals; the engine never learns about
//!   grids or digits.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `?a != ?b` where `?a` can be `1` or `2` and `?b` only `1`. The
//! search must land on `?a = 2`.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use tessella::solver::constraints::not_equal::NotEqualConstraint;
//! use tessella::solver::engine::Csp;
//!
//! let domains = HashMap::from([("a", vec![1, 2]), ("b", vec![1])]);
//! let mut csp = Csp::new(vec!["a", "b"], domains)?;
//! csp.add_constraint(Box::new(NotEqualConstraint::new("a", "b")))?;
//!
//! let (solution, _stats) = csp.search();
//! let solution = solution.unwrap();
//! assert_eq!(solution.get("a"), Some(&2));
//! assert_eq!(solution.get("b"), Some(&1));
//! # Ok::<(), tessella::error::ValidationError>(())
//! ```
pub mod error;
pub mod solver;
pub mod sudoku;
