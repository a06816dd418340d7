pub(crate) mod propagation_status;
pub(crate) mod word;

use fnv::FnvHashMap;

pub(crate) use propagation_status::EmptyDomain;
pub(crate) use propagation_status::PropagationStatus;

use crate::grid::Slot;

/// A partial or complete mapping from slots to the words placed in them. The
/// search engine grows and shrinks this map; it never mutates the domain
/// store.
pub(crate) type Assignment = FnvHashMap<Slot, String>;
