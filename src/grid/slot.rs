use std::fmt::Display;
use std::fmt::Formatter;

/// The direction in which a slot runs through the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Across,
    Down,
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Across => write!(f, "across"),
            Orientation::Down => write!(f, "down"),
        }
    }
}

/// One contiguous fill-in run of cells: a single word position. Slots are
/// value types, equal iff all four fields are equal, and are used as map keys
/// throughout the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub start_row: usize,
    pub start_col: usize,
    pub length: usize,
    pub orientation: Orientation,
}

impl Slot {
    pub fn new(start_row: usize, start_col: usize, length: usize, orientation: Orientation) -> Slot {
        Slot {
            start_row,
            start_col,
            length,
            orientation,
        }
    }

    pub fn across(start_row: usize, start_col: usize, length: usize) -> Slot {
        Slot::new(start_row, start_col, length, Orientation::Across)
    }

    pub fn down(start_row: usize, start_col: usize, length: usize) -> Slot {
        Slot::new(start_row, start_col, length, Orientation::Down)
    }

    /// The grid position of the `offset`-th cell of this slot.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Across => (self.start_row, self.start_col + offset),
            Orientation::Down => (self.start_row + offset, self.start_col),
        }
    }

    /// Iterates over the grid positions covered by this slot, in offset order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(|offset| self.position(offset))
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, {}) of length {}",
            self.orientation, self.start_row, self.start_col, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Slot;

    #[test]
    fn positions_follow_the_orientation() {
        let across = Slot::across(2, 1, 3);
        assert_eq!(across.cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);

        let down = Slot::down(2, 1, 3);
        assert_eq!(down.cells().collect::<Vec<_>>(), vec![(2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Slot::across(0, 0, 3), Slot::across(0, 0, 3));
        assert_ne!(Slot::across(0, 0, 3), Slot::down(0, 0, 3));
        assert_ne!(Slot::across(0, 0, 3), Slot::across(0, 0, 4));
    }
}
