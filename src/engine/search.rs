//! Depth-first backtracking over partial assignments. The search runs on the
//! consistency-filtered domain store and never mutates it; all trial state
//! lives in the partial assignment, which is grown before each recursive
//! call and shrunk again on every failing exit path.

use std::fmt::Debug;
use std::fmt::Formatter;

use log::debug;
use rand::rngs::SmallRng;

use crate::basic_types::word::letters_agree;
use crate::basic_types::Assignment;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::domains::DomainStore;
use crate::grid::GridStructure;
use crate::grid::Slot;
use crate::gridlock_assert_moderate;
use crate::termination::TerminationCondition;

/// How a search run ended.
#[derive(Debug)]
pub(crate) enum SearchOutcome {
    /// Every slot was filled; the assignment satisfies all constraints.
    Complete(Assignment),
    /// The whole consistency-filtered space was explored without success:
    /// the puzzle is unsatisfiable.
    Exhausted,
    /// The termination condition fired mid-search.
    Aborted,
}

/// Status propagated through the recursion. `Solution` and `Aborted` unwind
/// immediately; `Exhausted` makes the caller try its next candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BacktrackStatus {
    Solution,
    Exhausted,
    Aborted,
}

/// Counters updated while solving, logged through
/// [`Solver::log_statistics`](crate::Solver::log_statistics).
#[derive(Default, Debug, Copy, Clone)]
pub(crate) struct Counters {
    pub(crate) num_decisions: u64,
    pub(crate) num_backtracks: u64,
    pub(crate) time_spent_in_solver: u64,
}

impl Counters {
    pub(crate) fn log_statistics(&self) {
        debug!("numberOfDecisions={}", self.num_decisions);
        debug!("numberOfBacktracks={}", self.num_backtracks);
        debug!("timeSpentInSolverInMilliseconds={}", self.time_spent_in_solver);
    }
}

pub(crate) struct BacktrackSearch<'a, B, T> {
    grid: &'a GridStructure,
    domains: &'a DomainStore,
    brancher: &'a mut B,
    termination: &'a mut T,
    random: &'a mut SmallRng,
    counters: &'a mut Counters,
    assignment: Assignment,
}

impl<B, T> Debug for BacktrackSearch<'_, B, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BacktrackSearch")
            .field("assignment", &self.assignment)
            .field("counters", &self.counters)
            .finish()
    }
}

impl<'a, B: Brancher, T: TerminationCondition> BacktrackSearch<'a, B, T> {
    pub(crate) fn new(
        grid: &'a GridStructure,
        domains: &'a DomainStore,
        brancher: &'a mut B,
        termination: &'a mut T,
        random: &'a mut SmallRng,
        counters: &'a mut Counters,
    ) -> Self {
        BacktrackSearch {
            grid,
            domains,
            brancher,
            termination,
            random,
            counters,
            assignment: Assignment::default(),
        }
    }

    pub(crate) fn search(mut self) -> SearchOutcome {
        match self.backtrack() {
            BacktrackStatus::Solution => {
                gridlock_assert_moderate!(self.assignment.len() == self.grid.slots().len());
                SearchOutcome::Complete(self.assignment)
            }
            BacktrackStatus::Exhausted => SearchOutcome::Exhausted,
            BacktrackStatus::Aborted => SearchOutcome::Aborted,
        }
    }

    fn backtrack(&mut self) -> BacktrackStatus {
        if self.termination.should_stop() {
            debug!("search aborted by the termination condition");
            return BacktrackStatus::Aborted;
        }

        if self.assignment.len() == self.grid.slots().len() {
            return BacktrackStatus::Solution;
        }

        let (slot, ordered_values) = {
            let mut context =
                SelectionContext::new(self.grid, self.domains, &self.assignment, self.random);

            let Some(slot) = self.brancher.next_slot(&mut context) else {
                // The assignment is incomplete, so the brancher has violated
                // its contract; treat the branch as a dead end.
                return BacktrackStatus::Exhausted;
            };

            let ordered_values = self.brancher.order_values(&mut context, slot);
            (slot, ordered_values)
        };

        gridlock_assert_moderate!(!self.assignment.contains_key(&slot));

        for word in ordered_values {
            if !self.accepts(slot, &word) {
                continue;
            }

            self.counters.num_decisions += 1;
            let _ = self.assignment.insert(slot, word);

            match self.backtrack() {
                BacktrackStatus::Exhausted => {
                    let _ = self.assignment.remove(&slot);
                    self.counters.num_backtracks += 1;
                }
                status => return status,
            }
        }

        BacktrackStatus::Exhausted
    }

    /// Whether extending the assignment with `(slot, word)` keeps it
    /// globally consistent: the word is unused, fits the slot, and agrees
    /// with every assigned crossing slot at the shared cell.
    fn accepts(&self, slot: Slot, word: &str) -> bool {
        if word.len() != slot.length {
            return false;
        }

        for (&assigned_slot, assigned_word) in &self.assignment {
            if assigned_word == word {
                return false;
            }

            if let Some((offset, assigned_offset)) = self.grid.overlap(slot, assigned_slot) {
                if !letters_agree(word, offset, assigned_word, assigned_offset) {
                    return false;
                }
            }
        }

        true
    }
}
