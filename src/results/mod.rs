//! The outcomes a solve can end in. The three variants are deliberately
//! distinct: [`SatisfactionResult::Unsatisfiable`] is a proof that no fill
//! exists, while [`SatisfactionResult::Unknown`] only records that the
//! termination condition fired first.

mod solution;

pub use solution::Solution;

/// The outcome of [`Solver::satisfy`](crate::Solver::satisfy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A complete fill satisfying every length and crossing constraint.
    Satisfiable(Solution),
    /// No fill exists for this grid and vocabulary.
    Unsatisfiable,
    /// The termination condition fired before the search could conclude
    /// either way.
    Unknown,
}
