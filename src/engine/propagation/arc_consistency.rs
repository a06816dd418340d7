use std::collections::VecDeque;

use log::debug;

use crate::basic_types::word::letters_agree;
use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::engine::domains::DomainStore;
use crate::grid::GridStructure;
use crate::grid::Slot;

/// Enforces arc consistency over the domain store, AC-3 style.
///
/// The worklist starts from `arcs`, or from every ordered pair of distinct
/// slots when no initial worklist is supplied; the order only affects how
/// fast the fixed point is reached, not which fixed point it is. Whenever
/// revising `(x, y)` removes candidates from `x`, the arcs `(z, x)` are
/// re-enqueued for every neighbor `z` of `x` other than `y` — consistency
/// established for those arcs may have relied on the removed candidates.
/// Halts the moment any domain empties.
pub(crate) fn propagate(
    grid: &GridStructure,
    domains: &mut DomainStore,
    arcs: Option<Vec<(Slot, Slot)>>,
) -> PropagationStatus {
    let mut worklist: VecDeque<(Slot, Slot)> = match arcs {
        Some(arcs) => arcs.into(),
        None => all_arcs(grid).into(),
    };

    while let Some((x, y)) = worklist.pop_front() {
        if !revise(grid, domains, x, y) {
            continue;
        }

        if domains.is_empty(x) {
            debug!("domain of {x} emptied while revising against {y}");
            return Err(EmptyDomain(x));
        }

        for &z in grid.neighbors(x) {
            if z != y {
                worklist.push_back((z, x));
            }
        }
    }

    Ok(())
}

/// Removes from `domain[x]` every candidate with no supporting candidate in
/// `domain[y]` at the shared offsets. Returns whether anything was removed.
/// A no-op for pairs that do not overlap.
pub(crate) fn revise(
    grid: &GridStructure,
    domains: &mut DomainStore,
    x: Slot,
    y: Slot,
) -> bool {
    let Some((offset_x, offset_y)) = grid.overlap(x, y) else {
        return false;
    };

    let unsupported: Vec<String> = {
        let support = domains.candidates(y);
        domains
            .candidates(x)
            .iter()
            .filter(|candidate| {
                !support
                    .iter()
                    .any(|word| letters_agree(candidate, offset_x, word, offset_y))
            })
            .cloned()
            .collect()
    };

    for word in &unsupported {
        let _ = domains.remove(x, word);
    }

    !unsupported.is_empty()
}

/// Every ordered pair of distinct slots.
fn all_arcs(grid: &GridStructure) -> Vec<(Slot, Slot)> {
    let mut arcs = Vec::new();
    for &x in grid.slots() {
        for &y in grid.slots() {
            if x != y {
                arcs.push((x, y));
            }
        }
    }
    arcs
}
