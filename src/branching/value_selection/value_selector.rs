use crate::branching::SelectionContext;
use crate::grid::Slot;

/// Orders the candidate words of `slot`; the search tries them front to
/// back. Every candidate must appear exactly once in the returned order.
pub trait ValueSelector {
    fn order_values(&mut self, context: &mut SelectionContext, slot: Slot) -> Vec<String>;
}
