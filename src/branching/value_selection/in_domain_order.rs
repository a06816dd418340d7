use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::grid::Slot;

/// A [`ValueSelector`] which returns the candidates in domain-store order,
/// with no attempt at being clever. Mostly useful for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InDomainOrder;

impl ValueSelector for InDomainOrder {
    fn order_values(&mut self, context: &mut SelectionContext, slot: Slot) -> Vec<String> {
        context.candidates(slot).iter().cloned().collect()
    }
}
