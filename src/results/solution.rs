use crate::basic_types::Assignment;
use crate::grid::Slot;

/// A complete fill: exactly one word per slot. Projecting the words back
/// onto grid coordinates is left to the caller, using each slot's start
/// position and orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    assignment: Assignment,
}

impl Solution {
    pub(crate) fn new(assignment: Assignment) -> Solution {
        Solution { assignment }
    }

    /// The word placed in `slot`, or `None` for a slot that is not part of
    /// the solved grid.
    pub fn word(&self, slot: Slot) -> Option<&str> {
        self.assignment.get(&slot).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> + '_ {
        self.assignment
            .iter()
            .map(|(slot, word)| (*slot, word.as_str()))
    }
}
