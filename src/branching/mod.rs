//! How the search engine decides what to try next: a [`VariableSelector`]
//! picks the slot to fill, a [`ValueSelector`] orders that slot's candidate
//! words, and a [`Brancher`] combines the two. The provided
//! [`DefaultBrancher`] pairs minimum-remaining-values slot selection with
//! least-constraining-value word ordering.

mod brancher;
mod selection_context;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use brancher::DefaultBrancher;
pub use brancher::IndependentSlotValueBrancher;
pub use selection_context::SelectionContext;
pub use value_selection::*;
pub use variable_selection::*;
