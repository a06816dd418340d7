#![cfg(any(test, doc))]
//! Helpers for setting up grids, domains and selection contexts in tests.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::basic_types::Assignment;
use crate::branching::SelectionContext;
use crate::engine::domains::DomainStore;
use crate::grid::GridStructure;

/// Builds a [`GridStructure`] from a textual pattern: `_` marks a fillable
/// cell, anything else a blocked one. Leading whitespace per line is
/// ignored so patterns can be indented.
pub(crate) fn grid_from_pattern(pattern: &str) -> GridStructure {
    let rows: Vec<&str> = pattern
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());
    let cells = rows
        .iter()
        .flat_map(|row| row.bytes().map(|cell| cell == b'_'))
        .collect();

    GridStructure::from_cells(height, width, cells).expect("test pattern must be well formed")
}

pub(crate) fn domains_from_words(grid: &GridStructure, words: &[&str]) -> DomainStore {
    DomainStore::uniform(grid, words.iter().copied())
}

pub(crate) fn empty_assignment() -> Assignment {
    Assignment::default()
}

pub(crate) fn test_random() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

pub(crate) fn selection_context<'a>(
    grid: &'a GridStructure,
    domains: &'a DomainStore,
    assignment: &'a Assignment,
    random: &'a mut SmallRng,
) -> SelectionContext<'a> {
    SelectionContext::new(grid, domains, assignment, random)
}
