use crate::termination::TerminationCondition;

/// A [`TerminationCondition`] which never fires: the solver runs until it
/// proves satisfiability or unsatisfiability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
