use fnv::FnvHashSet;
use rand::rngs::SmallRng;

use crate::basic_types::Assignment;
use crate::engine::domains::DomainStore;
use crate::grid::GridStructure;
use crate::grid::Slot;

/// Read view over the search state handed to selectors: the grid, the
/// consistency-filtered domains, and the current partial assignment, plus
/// the solver's random generator for tie-breaking.
#[derive(Debug)]
pub struct SelectionContext<'a> {
    grid: &'a GridStructure,
    domains: &'a DomainStore,
    assignment: &'a Assignment,
    random: &'a mut SmallRng,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(
        grid: &'a GridStructure,
        domains: &'a DomainStore,
        assignment: &'a Assignment,
        random: &'a mut SmallRng,
    ) -> SelectionContext<'a> {
        SelectionContext {
            grid,
            domains,
            assignment,
            random,
        }
    }

    /// The slots not yet given a word, in grid order.
    pub fn unassigned_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.grid
            .slots()
            .iter()
            .copied()
            .filter(|slot| !self.assignment.contains_key(slot))
    }

    pub fn is_assigned(&self, slot: Slot) -> bool {
        self.assignment.contains_key(&slot)
    }

    pub fn domain_size(&self, slot: Slot) -> usize {
        self.domains.size(slot)
    }

    pub fn candidates(&self, slot: Slot) -> &'a FnvHashSet<String> {
        self.domains.candidates(slot)
    }

    pub fn degree(&self, slot: Slot) -> usize {
        self.grid.degree(slot)
    }

    pub fn neighbors(&self, slot: Slot) -> &'a [Slot] {
        self.grid.neighbors(slot)
    }

    pub fn overlap(&self, x: Slot, y: Slot) -> Option<(usize, usize)> {
        self.grid.overlap(x, y)
    }

    pub fn random(&mut self) -> &mut SmallRng {
        self.random
    }
}
