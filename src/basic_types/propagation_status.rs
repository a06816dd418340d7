use crate::grid::Slot;

/// The result of running a consistency pass over the domain store. A pass
/// either reaches its fixed point or empties some slot's domain, which proves
/// the puzzle unsatisfiable before any search takes place.
pub(crate) type PropagationStatus = Result<(), EmptyDomain>;

/// Witness of the first slot whose domain was emptied during propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EmptyDomain(pub(crate) Slot);
