//! The crossword structure the solver operates on: [`Slot`]s and the
//! [`GridStructure`] which records, for every pair of slots, where (if
//! anywhere) they cross.

mod slot;
mod structure;

pub use slot::Orientation;
pub use slot::Slot;
pub use structure::GridStructure;
pub use structure::StructureError;
