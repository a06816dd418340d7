use crate::branching::LeastConstraining;
use crate::branching::MinRemainingValues;
use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::branching::VariableSelector;
use crate::grid::Slot;

/// Makes the branching decisions of the search: which slot to fill next, and
/// in which order to try its candidate words.
pub trait Brancher {
    /// The next slot to fill, or `None` when every slot is assigned.
    fn next_slot(&mut self, context: &mut SelectionContext) -> Option<Slot>;

    /// The candidates of `slot` in the order the search should try them.
    fn order_values(&mut self, context: &mut SelectionContext, slot: Slot) -> Vec<String>;
}

/// A [`Brancher`] delegating to an independent [`VariableSelector`] and
/// [`ValueSelector`] pair.
#[derive(Debug, Clone, Copy)]
pub struct IndependentSlotValueBrancher<VarSel, ValSel> {
    variable_selector: VarSel,
    value_selector: ValSel,
}

impl<VarSel, ValSel> IndependentSlotValueBrancher<VarSel, ValSel> {
    pub fn new(variable_selector: VarSel, value_selector: ValSel) -> Self {
        IndependentSlotValueBrancher {
            variable_selector,
            value_selector,
        }
    }
}

impl<VarSel, ValSel> Brancher for IndependentSlotValueBrancher<VarSel, ValSel>
where
    VarSel: VariableSelector,
    ValSel: ValueSelector,
{
    fn next_slot(&mut self, context: &mut SelectionContext) -> Option<Slot> {
        self.variable_selector.select_variable(context)
    }

    fn order_values(&mut self, context: &mut SelectionContext, slot: Slot) -> Vec<String> {
        self.value_selector.order_values(context, slot)
    }
}

/// The brancher used when the caller has no particular preference:
/// minimum-remaining-values slot selection with least-constraining-value
/// word ordering.
pub type DefaultBrancher = IndependentSlotValueBrancher<MinRemainingValues, LeastConstraining>;

impl DefaultBrancher {
    pub fn default_over_all_slots() -> DefaultBrancher {
        IndependentSlotValueBrancher::new(MinRemainingValues, LeastConstraining)
    }
}
