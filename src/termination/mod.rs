//! Cooperative bounds on how long the solver may run. The search asks the
//! [`TerminationCondition`] at every node whether to keep going; a fired
//! condition surfaces as [`SatisfactionResult::Unknown`](crate::results::SatisfactionResult::Unknown),
//! never as "unsatisfiable", since giving up proves nothing.

mod decision_budget;
mod indefinite;
mod time_budget;

pub use decision_budget::DecisionBudget;
pub use indefinite::Indefinite;
pub use time_budget::TimeBudget;

/// Decides whether the solver should give up. Implementations are queried
/// frequently, so `should_stop` is expected to be cheap.
pub trait TerminationCondition {
    fn should_stop(&mut self) -> bool;
}

impl<T: TerminationCondition> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }
}
