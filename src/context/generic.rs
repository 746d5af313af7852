use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail},
    reports::Report,
    structures::atom::Atom,
};

use super::{ContextState, Counters};

/// A generic context, parameratised to a source of randomness.
///
/// The source of randomness is used only to guide decisions, and so may affect the valuation found for a satisfiable formula, but never whether a formula is satisfiable.
///
/// # Example
///
/// ```rust
/// # use marten_sat::context::GenericContext;
/// # use marten_sat::generic::random::MinimalPCG32;
/// # use marten_sat::config::Config;
/// # use rand::SeedableRng;
/// let rng = MinimalPCG32::from_seed(7_u64.to_le_bytes());
/// let context = GenericContext::from_config_and_rng(Config::default(), rng);
/// ```
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail of assignments.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Creates a context from some given configuration and source of randomness.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        GenericContext {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            trail: Trail::default(),
            state: ContextState::Input,
            rng,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The value of an atom on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }
}
