use std::time::Instant;

use log::debug;
use log::warn;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::basic_types::EmptyDomain;
use crate::branching::Brancher;
use crate::branching::DefaultBrancher;
use crate::engine::domains::DomainStore;
use crate::engine::propagation::arc_consistency;
use crate::engine::propagation::node_consistency;
use crate::engine::search::BacktrackSearch;
use crate::engine::search::Counters;
use crate::engine::search::SearchOutcome;
use crate::grid::GridStructure;
use crate::results::SatisfactionResult;
use crate::results::Solution;
use crate::termination::TerminationCondition;

/// Options which determine how the [`Solver`] behaves.
#[derive(Debug)]
pub struct SolverOptions {
    /// The random generator used for heuristic tie-breaking; passing it in
    /// allows seeding of the randomization.
    pub random_generator: SmallRng,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            random_generator: SmallRng::seed_from_u64(42),
        }
    }
}

/// Fills a crossword grid from a vocabulary so that every slot holds a word
/// of its own length, crossing slots agree on the shared letter, and no word
/// is used twice.
///
/// Each call to [`Solver::satisfy`] is a fresh computation: node and arc
/// consistency first reduce a working copy of the initial domains, and the
/// backtracking search then explores the filtered space under the given
/// [`Brancher`] and [`TerminationCondition`].
#[derive(Debug)]
pub struct Solver {
    grid: GridStructure,
    initial_domains: DomainStore,
    options: SolverOptions,
    counters: Counters,
}

impl Solver {
    /// A solver over `grid` with caller-supplied per-slot candidate sets.
    pub fn new(grid: GridStructure, initial_domains: DomainStore) -> Solver {
        Solver::with_options(grid, initial_domains, SolverOptions::default())
    }

    /// A solver over `grid` where every slot starts from the full
    /// vocabulary.
    pub fn with_vocabulary<I, S>(grid: GridStructure, vocabulary: I) -> Solver
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let initial_domains = DomainStore::uniform(&grid, vocabulary);
        Solver::new(grid, initial_domains)
    }

    pub fn with_options(
        grid: GridStructure,
        initial_domains: DomainStore,
        options: SolverOptions,
    ) -> Solver {
        if grid.slots().is_empty() {
            warn!("the grid contains no slots; any vocabulary trivially fills it");
        }

        Solver {
            grid,
            initial_domains,
            options,
            counters: Counters::default(),
        }
    }

    pub fn grid(&self) -> &GridStructure {
        &self.grid
    }

    pub fn default_brancher(&self) -> DefaultBrancher {
        DefaultBrancher::default_over_all_slots()
    }

    pub fn log_statistics(&self) {
        self.counters.log_statistics()
    }

    /// Attempts to fill the grid. Returns [`SatisfactionResult::Satisfiable`]
    /// with a complete [`Solution`], [`SatisfactionResult::Unsatisfiable`]
    /// when no fill exists, or [`SatisfactionResult::Unknown`] when
    /// `termination` fired before the search could conclude.
    pub fn satisfy(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        let start_time = Instant::now();

        let mut domains = self.initial_domains.clone();

        if let Err(EmptyDomain(slot)) = node_consistency::enforce(&self.grid, &mut domains) {
            debug!("no candidate of the right length for {slot}");
            return SatisfactionResult::Unsatisfiable;
        }

        if let Err(EmptyDomain(slot)) = arc_consistency::propagate(&self.grid, &mut domains, None)
        {
            debug!("domain of {slot} emptied by propagation");
            return SatisfactionResult::Unsatisfiable;
        }

        let outcome = BacktrackSearch::new(
            &self.grid,
            &domains,
            brancher,
            termination,
            &mut self.options.random_generator,
            &mut self.counters,
        )
        .search();

        self.counters.time_spent_in_solver += start_time.elapsed().as_millis() as u64;

        match outcome {
            SearchOutcome::Complete(assignment) => {
                SatisfactionResult::Satisfiable(Solution::new(assignment))
            }
            SearchOutcome::Exhausted => SatisfactionResult::Unsatisfiable,
            SearchOutcome::Aborted => SatisfactionResult::Unknown,
        }
    }
}
