use fnv::FnvHashMap;
use fnv::FnvHashSet;

use crate::gridlock_assert_simple;
use crate::grid::GridStructure;
use crate::grid::Slot;

/// The candidate word sets per slot. Domains only ever shrink, and only the
/// consistency passes shrink them; the search engine works on a separate
/// partial assignment and reads the store without mutating it.
///
/// Words are compared bytewise, so vocabularies are expected to use a
/// single-byte encoding.
#[derive(Debug, Clone, Default)]
pub struct DomainStore {
    domains: FnvHashMap<Slot, FnvHashSet<String>>,
}

impl DomainStore {
    /// A store giving every slot of `grid` the full vocabulary as its initial
    /// candidate set. Node consistency filters out the wrong lengths later.
    pub fn uniform<I, S>(grid: &GridStructure, vocabulary: I) -> DomainStore
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: FnvHashSet<String> = vocabulary.into_iter().map(Into::into).collect();

        DomainStore {
            domains: grid
                .slots()
                .iter()
                .map(|slot| (*slot, words.clone()))
                .collect(),
        }
    }

    /// Overrides the candidate set of one slot, for loaders that pre-filter
    /// per slot.
    pub fn set_candidates<I, S>(&mut self, slot: Slot, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let _ = self
            .domains
            .insert(slot, candidates.into_iter().map(Into::into).collect());
    }

    /// The current candidate set of `slot`.
    pub fn candidates(&self, slot: Slot) -> &FnvHashSet<String> {
        gridlock_assert_simple!(
            self.domains.contains_key(&slot),
            "slot is not part of this domain store"
        );
        &self.domains[&slot]
    }

    pub fn size(&self, slot: Slot) -> usize {
        self.candidates(slot).len()
    }

    pub fn is_empty(&self, slot: Slot) -> bool {
        self.candidates(slot).is_empty()
    }

    pub fn contains(&self, slot: Slot, word: &str) -> bool {
        self.candidates(slot).contains(word)
    }

    pub(crate) fn remove(&mut self, slot: Slot, word: &str) -> bool {
        match self.domains.get_mut(&slot) {
            Some(candidates) => candidates.remove(word),
            None => false,
        }
    }

    pub(crate) fn retain(&mut self, slot: Slot, keep: impl FnMut(&String) -> bool) {
        if let Some(candidates) = self.domains.get_mut(&slot) {
            candidates.retain(keep);
        }
    }
}
