use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::engine::domains::DomainStore;
use crate::grid::GridStructure;

/// Drops every candidate whose length differs from its slot's length. One
/// pass per slot, no dependency between slots, idempotent.
pub(crate) fn enforce(grid: &GridStructure, domains: &mut DomainStore) -> PropagationStatus {
    for &slot in grid.slots() {
        domains.retain(slot, |word| word.len() == slot.length);

        if domains.is_empty(slot) {
            return Err(EmptyDomain(slot));
        }
    }

    Ok(())
}
