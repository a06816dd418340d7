use crate::branching::SelectionContext;
use crate::grid::Slot;

/// Decides which unassigned slot the search fills next. Returning `None`
/// signals that every slot is assigned.
pub trait VariableSelector {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Slot>;
}
