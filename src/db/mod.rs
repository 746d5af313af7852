//! Databases for holding information relevant to a solve.
//!
//!   - [The clause database](crate::db::clause)
//!     + A collection of clauses, each indexed by a [clause key](ClauseKey).
//!       There are two kinds of clause:
//!       * Original clauses \
//!         Original clauses are added to the context from some external source (e.g. directly or through some DIMACS file).
//!       * Added clauses \
//!         Clauses added to the context by conflict analysis.
//!         Every added clause is a consequence of the collection of original clauses.
//!
//!   - [The atom database](crate::db::atom)
//!     + Properties of atoms.
//!       * The current valuation, with the level and source of each assignment.
//!       * Frequency and polarity statistics, used to make decisions.
//!
//!   - [The trail](crate::db::trail)
//!     + Assignments in the order made, partitioned by decision level.

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;

/// The index of a decision level.
///
/// Level 0 holds every assignment made before the first decision.
pub type LevelIndex = u32;
