//! Error types used in the library.
//!
//! - Parse errors are external, and note some issue with a formula given in DIMACS form.
//! - Analysis and decision errors note a broken invariant (e.g. a malformed implication graph) and are not expected during use.
//!   Still, rather than loop or act on undefined data a solve returns such errors immediately.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{
    db::{ClauseKey, LevelIndex},
    structures::atom::Atom,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    AtomDB(AtomDBError),
    ClauseDB(ClauseDBError),
    Decision(DecisionError),
    Parse(ParseError),
    State(StateError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "Analysis error: {e:?}"),
            Self::AtomDB(e) => write!(f, "Atom database error: {e:?}"),
            Self::ClauseDB(e) => write!(f, "Clause database error: {e:?}"),
            Self::Decision(e) => write!(f, "Decision error: {e:?}"),
            Self::Parse(e) => write!(f, "Parse error: {e:?}"),
            Self::State(e) => write!(f, "State error: {e:?}"),
        }
    }
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// No literal of the working clause was valued at the level of the conflict.
    NoConflictLiteral(ClauseKey, LevelIndex),

    /// Every literal valued at the level of the conflict was a decision, and so no clause is available to resolve with.
    NoResolver(LevelIndex),
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,

    /// An assignment was made to an atom which already had a value.
    Reassignment(Atom),

    /// An assignment was made to an atom which is not part of the database.
    UnknownAtom(Atom),
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// No clause is stored with the key.
    Missing(ClauseKey),

    /// A clause contains an atom which is not part of the context.
    UnknownAtom(Atom),

    /// All possible keys have been used.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Noted errors when making a decision.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecisionError {
    /// The atom chosen already had a value.
    AssignedChoice(Atom),

    /// A decision was requested, though every atom had a value.
    NoCandidate,
}

impl From<DecisionError> for ErrorKind {
    fn from(e: DecisionError) -> Self {
        ErrorKind::Decision(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),

    /// Some unspecific problem reading a specific line.
    Line(usize),

    /// A token on the given line was not an integer.
    Literal(usize),

    /// A literal on the given line was for an atom beyond the count given in the problem specification.
    AtomOutOfRange(usize),

    /// Input ended partway through a clause.
    UnterminatedClause,

    /// The count of clauses read differs from the count given in the problem specification.
    ClauseCount { expected: usize, found: usize },
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from use of a context in the wrong state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A solve has completed, and the context may not be extended or solved again.
    SolveComplete,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
