//! Provides the [`ValueSelector`] trait which orders the candidate words of
//! the slot chosen by variable selection; the search tries the words in the
//! returned order.
//!
//! Furthermore, it defines the implementations of the trait:
//! [`LeastConstraining`] (the default) and [`InDomainOrder`]. A selector must
//! only return words which are in the domain of the provided slot.

mod in_domain_order;
mod least_constraining;
mod value_selector;

pub use in_domain_order::*;
pub use least_constraining::*;
pub use value_selector::ValueSelector;
