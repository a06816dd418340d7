use fnv::FnvHashMap;
use thiserror::Error;

use crate::gridlock_assert_simple;
use crate::grid::Orientation;
use crate::grid::Slot;

/// The raw grid geometry was malformed. Construction fails fast on these,
/// before any solving begins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("expected {expected} cells for a {height}x{width} grid, got {actual}")]
    DimensionMismatch {
        height: usize,
        width: usize,
        expected: usize,
        actual: usize,
    },

    #[error("slot {slot} leaves the grid or covers a blocked cell")]
    SlotOffGrid { slot: Slot },

    #[error("slot {slot} occurs more than once")]
    DuplicateSlot { slot: Slot },

    #[error("slots {first} and {second} share {shared_cells} cells; two slots may cross in at most one")]
    ConflictingOverlap {
        first: Slot,
        second: Slot,
        shared_cells: usize,
    },
}

/// The set of slots in a grid together with a *total* overlap table: every
/// ordered pair of distinct slots has an entry, either the pair of offsets at
/// which the slots share a cell or an explicit "no overlap". Built once and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct GridStructure {
    height: usize,
    width: usize,
    /// Row-major fillable mask.
    cells: Vec<bool>,
    slots: Vec<Slot>,
    overlaps: FnvHashMap<(Slot, Slot), Option<(usize, usize)>>,
    neighbors: FnvHashMap<Slot, Vec<Slot>>,
}

impl GridStructure {
    /// Builds the structure from raw geometry. Every maximal horizontal or
    /// vertical run of at least two fillable cells becomes a slot.
    pub fn from_cells(
        height: usize,
        width: usize,
        cells: Vec<bool>,
    ) -> Result<GridStructure, StructureError> {
        if cells.len() != height * width {
            return Err(StructureError::DimensionMismatch {
                height,
                width,
                expected: height * width,
                actual: cells.len(),
            });
        }

        let slots = extract_slots(height, width, &cells);
        GridStructure::with_slots(height, width, cells, slots)
    }

    /// Builds the structure from an explicit slot list, as produced by an
    /// external grid loader. The slots are validated against the geometry and
    /// the overlap table is computed from scratch.
    pub fn with_slots(
        height: usize,
        width: usize,
        cells: Vec<bool>,
        slots: Vec<Slot>,
    ) -> Result<GridStructure, StructureError> {
        if cells.len() != height * width {
            return Err(StructureError::DimensionMismatch {
                height,
                width,
                expected: height * width,
                actual: cells.len(),
            });
        }

        for (idx, slot) in slots.iter().enumerate() {
            for (row, col) in slot.cells() {
                if row >= height || col >= width || !cells[row * width + col] {
                    return Err(StructureError::SlotOffGrid { slot: *slot });
                }
            }

            if slots[..idx].contains(slot) {
                return Err(StructureError::DuplicateSlot { slot: *slot });
            }
        }

        let overlaps = compute_overlaps(&slots)?;

        // The table holds both orderings of every pair, so scanning the (x, y)
        // entries alone yields every neighbor of x.
        let mut neighbors: FnvHashMap<Slot, Vec<Slot>> =
            slots.iter().map(|slot| (*slot, Vec::new())).collect();
        for (&(x, y), offsets) in &overlaps {
            if offsets.is_some() {
                if let Some(entry) = neighbors.get_mut(&x) {
                    entry.push(y);
                }
            }
        }

        Ok(GridStructure {
            height,
            width,
            cells,
            slots,
            overlaps,
            neighbors,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The offsets at which `x` and `y` share a cell, or `None` for disjoint
    /// pairs. Total over all ordered pairs of distinct slots in this grid.
    pub fn overlap(&self, x: Slot, y: Slot) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied().flatten()
    }

    /// The slots that share a cell with `slot`.
    pub fn neighbors(&self, slot: Slot) -> &[Slot] {
        self.neighbors.get(&slot).map_or(&[], Vec::as_slice)
    }

    /// The number of slots crossing `slot`.
    pub fn degree(&self, slot: Slot) -> usize {
        self.neighbors(slot).len()
    }
}

/// Maximal horizontal and vertical runs of fillable cells, length >= 2.
fn extract_slots(height: usize, width: usize, cells: &[bool]) -> Vec<Slot> {
    let mut slots = Vec::new();
    let fillable = |row: usize, col: usize| cells[row * width + col];

    for row in 0..height {
        let mut col = 0;
        while col < width {
            let start = col;
            while col < width && fillable(row, col) {
                col += 1;
            }
            if col - start >= 2 {
                slots.push(Slot::new(row, start, col - start, Orientation::Across));
            }
            col += 1;
        }
    }

    for col in 0..width {
        let mut row = 0;
        while row < height {
            let start = row;
            while row < height && fillable(row, col) {
                row += 1;
            }
            if row - start >= 2 {
                slots.push(Slot::new(start, col, row - start, Orientation::Down));
            }
            row += 1;
        }
    }

    slots
}

/// The total overlap table over ordered pairs of distinct slots. Two slots
/// sharing more than one cell is a structural contradiction and aborts
/// construction.
fn compute_overlaps(
    slots: &[Slot],
) -> Result<FnvHashMap<(Slot, Slot), Option<(usize, usize)>>, StructureError> {
    let positions: Vec<FnvHashMap<(usize, usize), usize>> = slots
        .iter()
        .map(|slot| slot.cells().enumerate().map(|(offset, cell)| (cell, offset)).collect())
        .collect();

    let mut overlaps = FnvHashMap::default();

    for (i, &x) in slots.iter().enumerate() {
        for (j, &y) in slots.iter().enumerate() {
            if i == j {
                continue;
            }

            let mut shared: Vec<(usize, usize)> = Vec::new();
            for (cell, &offset_x) in &positions[i] {
                if let Some(&offset_y) = positions[j].get(cell) {
                    shared.push((offset_x, offset_y));
                }
            }

            let entry = match shared.len() {
                0 => None,
                1 => {
                    let (offset_x, offset_y) = shared[0];
                    gridlock_assert_simple!(offset_x < x.length && offset_y < y.length);
                    Some((offset_x, offset_y))
                }
                shared_cells => {
                    return Err(StructureError::ConflictingOverlap {
                        first: x,
                        second: y,
                        shared_cells,
                    })
                }
            };

            let _ = overlaps.insert((x, y), entry);
        }
    }

    Ok(overlaps)
}
