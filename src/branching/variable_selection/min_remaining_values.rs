use rand::Rng;

use crate::branching::SelectionContext;
use crate::branching::VariableSelector;
use crate::grid::Slot;

/// A [`VariableSelector`] which selects the unassigned slot with the fewest
/// remaining candidate words. Ties are broken towards the slot crossed by the
/// most other slots, so the most constrained parts of the grid are resolved
/// first; any remaining ties are broken randomly.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinRemainingValues;

impl VariableSelector for MinRemainingValues {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Slot> {
        // Smaller domain wins; on equal domains, larger degree wins.
        let mut best: Option<(usize, usize)> = None;
        let mut ties: Vec<Slot> = Vec::new();

        for slot in context.unassigned_slots() {
            let key = (context.domain_size(slot), context.degree(slot));

            let better = match best {
                None => true,
                Some((size, degree)) => key.0 < size || (key.0 == size && key.1 > degree),
            };

            if better {
                best = Some(key);
                ties.clear();
                ties.push(slot);
            } else if best == Some(key) {
                ties.push(slot);
            }
        }

        match ties.len() {
            0 => None,
            1 => Some(ties[0]),
            tied => Some(ties[context.random().gen_range(0..tied)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::branching::MinRemainingValues;
    use crate::branching::VariableSelector;
    use crate::engine::test_helper;
    use crate::grid::Slot;

    #[test]
    fn smallest_domain_is_selected() {
        let grid = test_helper::grid_from_pattern(
            "___
             _##
             _##",
        );
        let down = Slot::down(0, 0, 3);

        let mut domains = test_helper::domains_from_words(&grid, &["CAT", "DOG", "CAR"]);
        domains.set_candidates(down, ["CAT"]);

        let assignment = test_helper::empty_assignment();
        let mut random = test_helper::test_random();
        let mut context = test_helper::selection_context(&grid, &domains, &assignment, &mut random);

        let mut selector = MinRemainingValues;
        assert_eq!(selector.select_variable(&mut context), Some(down));
    }

    #[test]
    fn assigned_slots_are_not_selected() {
        let grid = test_helper::grid_from_pattern(
            "___
             _##
             _##",
        );
        let across = Slot::across(0, 0, 3);
        let down = Slot::down(0, 0, 3);

        let domains = test_helper::domains_from_words(&grid, &["CAT", "DOG"]);
        let mut assignment = test_helper::empty_assignment();
        let _ = assignment.insert(down, String::from("CAT"));

        let mut random = test_helper::test_random();
        let mut context = test_helper::selection_context(&grid, &domains, &assignment, &mut random);

        let mut selector = MinRemainingValues;
        assert_eq!(selector.select_variable(&mut context), Some(across));
    }

    #[test]
    fn equal_domains_fall_back_to_degree() {
        // The long across slot crosses both down slots; each down slot
        // crosses only the across one.
        let grid = test_helper::grid_from_pattern(
            "___
             _#_
             _#_",
        );
        let across = Slot::across(0, 0, 3);

        let domains = test_helper::domains_from_words(&grid, &["CAT", "DOG", "CAR"]);
        let assignment = test_helper::empty_assignment();
        let mut random = test_helper::test_random();
        let mut context = test_helper::selection_context(&grid, &domains, &assignment, &mut random);

        let mut selector = MinRemainingValues;
        assert_eq!(selector.select_variable(&mut context), Some(across));
    }
}
