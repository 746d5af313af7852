//! The source of an assignment, and the record of an assignment to an atom.
//!
//! An assignment is a (tagged) record, rather than a handful of parallel fields with a shared 'unset' value.
//! So, an atom either has no assignment at all, or has a value, a level, and a source together.

use crate::db::{ClauseKey, LevelIndex};

/// The source of an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum AssignmentSource {
    /// A decision, made by the [decision procedure](crate::procedures::decision).
    Decision,

    /// A consequence of boolean constraint propagation, with the key to the clause which was unit.
    BCP(ClauseKey),
}

impl AssignmentSource {
    /// The clause which forced the assignment, if the assignment was not a decision.
    pub fn antecedent(&self) -> Option<ClauseKey> {
        match self {
            Self::Decision => None,
            Self::BCP(key) => Some(*key),
        }
    }
}

/// A value bound to an atom, together with the level and reason of the bind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// The value of the atom.
    pub value: bool,

    /// The decision level on which the atom was valued.
    pub level: LevelIndex,

    /// Why the atom was valued.
    pub source: AssignmentSource,
}
