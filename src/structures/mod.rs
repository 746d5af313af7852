//! Abstract structures of a solve: atoms, literals, clauses, and the sources of assignments.

pub mod atom;
pub mod clause;
pub mod consequence;
pub mod literal;
