use crate::basic_types::word::letters_agree;
use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::grid::Slot;

/// A [`ValueSelector`] which orders candidates ascending by how many values
/// they would rule out in the domains of crossing slots: for each neighbor,
/// every candidate disagreeing at the shared letter counts, and a neighbor
/// candidate identical to the trial word counts once more since no word may
/// appear in two slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastConstraining;

impl ValueSelector for LeastConstraining {
    fn order_values(&mut self, context: &mut SelectionContext, slot: Slot) -> Vec<String> {
        let mut scored: Vec<(usize, String)> = Vec::new();

        for word in context.candidates(slot) {
            let mut ruled_out = 0;

            for &neighbor in context.neighbors(slot) {
                let Some((offset, neighbor_offset)) = context.overlap(slot, neighbor) else {
                    continue;
                };

                for other in context.candidates(neighbor) {
                    if !letters_agree(word, offset, other, neighbor_offset) {
                        ruled_out += 1;
                    }
                    if other == word {
                        ruled_out += 1;
                    }
                }
            }

            scored.push((ruled_out, word.clone()));
        }

        // Stable, so equally constraining words keep their domain order.
        scored.sort_by_key(|(ruled_out, _)| *ruled_out);
        scored.into_iter().map(|(_, word)| word).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::branching::LeastConstraining;
    use crate::branching::ValueSelector;
    use crate::engine::test_helper;
    use crate::grid::Slot;

    #[test]
    fn least_constraining_word_comes_first() {
        let grid = test_helper::grid_from_pattern(
            "___
             _##
             _##",
        );
        let across = Slot::across(0, 0, 3);
        let down = Slot::down(0, 0, 3);

        let mut domains = test_helper::domains_from_words(&grid, &[]);
        domains.set_candidates(across, ["CAT", "TIP"]);
        domains.set_candidates(down, ["CAR", "COT", "TAR"]);

        let assignment = test_helper::empty_assignment();
        let mut random = test_helper::test_random();
        let mut context = test_helper::selection_context(&grid, &domains, &assignment, &mut random);

        // CAT keeps CAR and COT (rules out TAR only); TIP keeps TAR (rules
        // out CAR and COT).
        let mut selector = LeastConstraining;
        let ordered = selector.order_values(&mut context, across);
        assert_eq!(ordered, vec![String::from("CAT"), String::from("TIP")]);
    }

    #[test]
    fn reusing_a_neighbor_candidate_is_penalised() {
        let grid = test_helper::grid_from_pattern(
            "___
             _##
             _##",
        );
        let across = Slot::across(0, 0, 3);
        let down = Slot::down(0, 0, 3);

        let mut domains = test_helper::domains_from_words(&grid, &[]);
        domains.set_candidates(across, ["CAT", "COT"]);
        domains.set_candidates(down, ["CAT", "CAR"]);

        let assignment = test_helper::empty_assignment();
        let mut random = test_helper::test_random();
        let mut context = test_helper::selection_context(&grid, &domains, &assignment, &mut random);

        // Both words agree with both neighbor candidates on 'C', but CAT is
        // also a literal reuse of a neighbor candidate.
        let mut selector = LeastConstraining;
        let ordered = selector.order_values(&mut context, across);
        assert_eq!(ordered, vec![String::from("COT"), String::from("CAT")]);
    }
}
