#![cfg(test)]

use crate::basic_types::word::letters_agree;
use crate::branching::InDomainOrder;
use crate::branching::IndependentSlotValueBrancher;
use crate::branching::InputOrder;
use crate::engine::domains::DomainStore;
use crate::engine::propagation::node_consistency;
use crate::engine::search::BacktrackSearch;
use crate::engine::search::Counters;
use crate::engine::search::SearchOutcome;
use crate::engine::test_helper;
use crate::grid::Slot;
use crate::results::SatisfactionResult;
use crate::results::Solution;
use crate::termination::DecisionBudget;
use crate::termination::Indefinite;
use crate::termination::TimeBudget;
use crate::Solver;

/// Checks the three solution invariants: fitting lengths, agreeing
/// crossings, and no reused words.
fn assert_valid(solver: &Solver, solution: &Solution) {
    let grid = solver.grid();
    assert_eq!(solution.len(), grid.slots().len());

    for &slot in grid.slots() {
        let word = solution.word(slot).expect("every slot is filled");
        assert_eq!(word.len(), slot.length);

        for &other in grid.slots() {
            if other == slot {
                continue;
            }

            let other_word = solution.word(other).expect("every slot is filled");
            assert_ne!(word, other_word, "a word was used twice");

            if let Some((offset, other_offset)) = grid.overlap(slot, other) {
                assert!(letters_agree(word, offset, other_word, other_offset));
            }
        }
    }
}

#[test]
fn crossing_slots_share_their_first_letter() {
    let grid = test_helper::grid_from_pattern(
        "___
         _##
         _##",
    );
    let across = Slot::across(0, 0, 3);
    let down = Slot::down(0, 0, 3);

    let mut solver = Solver::with_vocabulary(grid, ["CAT", "DOG", "CAR", "TIP"]);
    let mut brancher = solver.default_brancher();

    match solver.satisfy(&mut brancher, &mut Indefinite) {
        SatisfactionResult::Satisfiable(solution) => {
            assert_valid(&solver, &solution);

            let across_word = solution.word(across).expect("across is filled");
            let down_word = solution.word(down).expect("down is filled");
            assert_eq!(across_word.as_bytes()[0], down_word.as_bytes()[0]);
            assert_ne!(across_word, down_word);
        }
        other => panic!("expected a fill, got {other:?}"),
    }
}

#[test]
fn no_shared_first_letter_means_no_fill() {
    let grid = test_helper::grid_from_pattern(
        "___
         _##
         _##",
    );

    let mut solver = Solver::with_vocabulary(grid, ["DOG", "CAT"]);
    let mut brancher = solver.default_brancher();

    assert_eq!(
        solver.satisfy(&mut brancher, &mut Indefinite),
        SatisfactionResult::Unsatisfiable
    );
}

#[test]
fn disjoint_slots_are_filled_independently() {
    let grid = test_helper::grid_from_pattern("___#___");

    let mut solver = Solver::with_vocabulary(grid, ["CAT", "DOG"]);

    // Heuristic-free branching: the outcome must not depend on ordering.
    let mut brancher = IndependentSlotValueBrancher::new(InputOrder, InDomainOrder);

    match solver.satisfy(&mut brancher, &mut Indefinite) {
        SatisfactionResult::Satisfiable(solution) => assert_valid(&solver, &solution),
        other => panic!("expected a fill, got {other:?}"),
    }
}

#[test]
fn a_length_without_candidates_is_unsatisfiable_before_search() {
    let grid = test_helper::grid_from_pattern(
        "___
         _##
         _##",
    );

    let mut solver = Solver::with_vocabulary(grid, ["HOUSE", "PLANT"]);
    let mut brancher = solver.default_brancher();

    // A zero budget turns any search attempt into Unknown, so Unsatisfiable
    // proves node consistency short-circuited before searching.
    assert_eq!(
        solver.satisfy(&mut brancher, &mut DecisionBudget::new(0)),
        SatisfactionResult::Unsatisfiable
    );
}

#[test]
fn a_spent_budget_reports_unknown_rather_than_unsatisfiable() {
    let grid = test_helper::grid_from_pattern(
        "___
         _##
         _##",
    );

    let mut solver = Solver::with_vocabulary(grid, ["CAT", "DOG", "CAR", "TIP"]);
    let mut brancher = solver.default_brancher();

    assert_eq!(
        solver.satisfy(&mut brancher, &mut DecisionBudget::new(0)),
        SatisfactionResult::Unknown
    );
}

#[test]
fn an_expired_time_budget_reports_unknown() {
    let grid = test_helper::grid_from_pattern(
        "___
         _##
         _##",
    );

    let mut solver = Solver::with_vocabulary(grid, ["CAT", "DOG", "CAR", "TIP"]);
    let mut brancher = solver.default_brancher();
    let mut termination = TimeBudget::starting_now(std::time::Duration::ZERO);

    assert_eq!(
        solver.satisfy(&mut brancher, &mut termination),
        SatisfactionResult::Unknown
    );
}

#[test]
fn search_agrees_with_propagation_about_unsatisfiability() {
    // Arc consistency proves this puzzle unsatisfiable (CAT has no support
    // in {DOG}); the bare search, run on node-consistent domains without any
    // propagation, must come to the same conclusion.
    let grid = test_helper::grid_from_pattern(
        "___
         _##
         _##",
    );
    let across = Slot::across(0, 0, 3);
    let down = Slot::down(0, 0, 3);

    let mut domains = test_helper::domains_from_words(&grid, &[]);
    domains.set_candidates(across, ["CAT"]);
    domains.set_candidates(down, ["DOG"]);

    node_consistency::enforce(&grid, &mut domains).expect("lengths all fit");

    let mut brancher = IndependentSlotValueBrancher::new(InputOrder, InDomainOrder);
    let mut termination = Indefinite;
    let mut random = test_helper::test_random();
    let mut counters = Counters::default();

    let outcome = BacktrackSearch::new(
        &grid,
        &domains,
        &mut brancher,
        &mut termination,
        &mut random,
        &mut counters,
    )
    .search();

    assert!(matches!(outcome, SearchOutcome::Exhausted));
}

#[test]
fn each_solve_is_a_fresh_computation() {
    let grid = test_helper::grid_from_pattern(
        "___
         _##
         _##",
    );

    let mut solver = Solver::with_vocabulary(grid, ["CAT", "DOG", "CAR", "TIP"]);
    let mut brancher = solver.default_brancher();

    let first = solver.satisfy(&mut brancher, &mut Indefinite);
    let second = solver.satisfy(&mut brancher, &mut Indefinite);

    assert!(matches!(first, SatisfactionResult::Satisfiable(_)));
    assert!(matches!(second, SatisfactionResult::Satisfiable(_)));
}

#[test]
fn a_denser_grid_is_filled_correctly() {
    crate::tests::init_logger();

    // A ring of four slots: two across, two down, four crossings.
    let grid = test_helper::grid_from_pattern(
        "___
         _#_
         ___",
    );

    // One of the fills: CAT and TIC across, COT and TAC down.
    let words = ["CAT", "TIC", "COT", "TAC", "ARC", "RAT", "OAT"];
    let mut solver = Solver::with_vocabulary(grid, words);
    let mut brancher = solver.default_brancher();

    match solver.satisfy(&mut brancher, &mut Indefinite) {
        SatisfactionResult::Satisfiable(solution) => assert_valid(&solver, &solution),
        other => panic!("expected a fill, got {other:?}"),
    }

    solver.log_statistics();
}

#[test]
fn per_slot_candidate_sets_are_respected() {
    let grid = test_helper::grid_from_pattern(
        "___
         _##
         _##",
    );
    let across = Slot::across(0, 0, 3);
    let down = Slot::down(0, 0, 3);

    let mut domains = DomainStore::uniform(&grid, ["CAT", "CAR"]);
    domains.set_candidates(down, ["CAR"]);

    let mut solver = Solver::new(grid, domains);
    let mut brancher = solver.default_brancher();

    match solver.satisfy(&mut brancher, &mut Indefinite) {
        SatisfactionResult::Satisfiable(solution) => {
            assert_eq!(solution.word(down), Some("CAR"));
            assert_eq!(solution.word(across), Some("CAT"));
        }
        other => panic!("expected a fill, got {other:?}"),
    }
}
