//! Gridlock fills crossword grids by constraint satisfaction. Every slot in
//! the grid is a variable whose domain is the vocabulary; a unary constraint
//! fixes each word's length and a binary constraint makes crossing slots
//! agree on their shared letter. Node and arc consistency (AC-3) shrink the
//! domains up front, and a depth-first backtracking search — ordered by
//! minimum-remaining-values slot selection and least-constraining-value word
//! ordering — does the rest.
//!
//! ```
//! use gridlock::grid::GridStructure;
//! use gridlock::results::SatisfactionResult;
//! use gridlock::termination::Indefinite;
//! use gridlock::Solver;
//!
//! // A 3x3 corner: one across slot and one down slot crossing at (0, 0).
//! let cells = vec![
//!     true, true, true,
//!     true, false, false,
//!     true, false, false,
//! ];
//! let grid = GridStructure::from_cells(3, 3, cells).unwrap();
//!
//! let mut solver = Solver::with_vocabulary(grid, ["CAT", "DOG", "CAR", "TIP"]);
//! let mut brancher = solver.default_brancher();
//!
//! match solver.satisfy(&mut brancher, &mut Indefinite) {
//!     SatisfactionResult::Satisfiable(solution) => assert_eq!(solution.len(), 2),
//!     SatisfactionResult::Unsatisfiable => panic!("this grid has a fill"),
//!     SatisfactionResult::Unknown => panic!("no termination condition was set"),
//! }
//! ```

pub mod asserts;
pub mod branching;
pub mod grid;
pub mod results;
pub mod termination;

pub(crate) mod basic_types;
pub(crate) mod engine;

mod api;
mod tests;

pub use api::Solver;
pub use api::SolverOptions;
pub use branching::DefaultBrancher;
pub use engine::domains::DomainStore;
