use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::grid::Slot;

/// A [`VariableSelector`] which selects the first unassigned slot in grid
/// order. Mostly useful for tests, where heuristic-free behaviour is easier
/// to reason about.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Slot> {
        context.unassigned_slots().next()
    }
}
