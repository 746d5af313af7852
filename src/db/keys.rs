/// The index to a formula.
pub type FormulaIndex = u32;

/// A key to access a clause stored in the clause database.
///
/// Within the clause database clauses are stored in vectors, and a key is the index to the clause together with which vector the clause is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to an original clause.
    Original(FormulaIndex),

    /// The key to a clause added during a solve.
    Addition(FormulaIndex),
}

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        match self {
            Self::Original(i) | Self::Addition(i) => *i as usize,
        }
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(key) => write!(f, "Original({key})"),
            Self::Addition(key) => write!(f, "Addition({key})"),
        }
    }
}
