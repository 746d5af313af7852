/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

A formula may be added to a context by interweaving these two methods.
In rough strokes, the pattern is to:
- Obtain a collection of atoms to represent a clause.
- Create [CLiteral]s from the atoms.
- Bundle the literals into a [CClause].
- Add the clause to the context.

Alternatively, a formula may be read from its [DIMACS](crate::context::GenericContext::read_dimacs) representation.

Clauses may only be added before a solve.

# Examples

A clause built using basic methods.

```rust
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::reports::Report;
# use marten_sat::structures::{clause::CClause, literal::{CLiteral, Literal}};
#
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let clause_a = CClause::from([CLiteral::new(p, true), CLiteral::new(q, false)]);
let clause_b = CClause::from([CLiteral::new(p, false), CLiteral::new(q, true)]);

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```

An empty clause makes a formula unsatisfiable, without any search.

```rust
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::reports::Report;
# use marten_sat::builder::ClauseOk;
let mut the_context = Context::from_config(Config::default());
assert_eq!(the_context.add_clause(vec![]), Ok(ClauseOk::Empty));
assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
assert_eq!(the_context.counters.total_iterations, 1);
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

use std::collections::HashSet;

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was empty, and the formula is unsatisfiable.
    Empty,
}

impl<R: rand::Rng> GenericContext<R> {
    /// A fresh atom.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::StateError::SolveComplete.into());
        }
        Ok(self.atom_db.fresh_atom()?)
    }

    /// Up to `count` literals, each with a fresh atom and positive polarity.
    ///
    /// Fewer literals are returned only if fresh atoms are exhausted, or the context does not allow input.
    pub fn fresh_literals(&mut self, count: usize) -> Vec<CLiteral> {
        let mut literals = Vec::with_capacity(count);
        for _ in 0..count {
            match self.fresh_atom() {
                Ok(atom) => literals.push(CLiteral::new(atom, true)),
                Err(e) => {
                    log::warn!(target: targets::CLAUSE_DB, "{e} after {} fresh literals", literals.len());
                    break;
                }
            }
        }
        literals
    }

    /// Ensures the atoms 1..=`count` are part of the context.
    pub fn ensure_atoms(&mut self, count: Atom) -> Result<(), err::ErrorKind> {
        while self.atom_db.count() < count as usize {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// Adds a clause to the context.
    ///
    /// Repeated occurrences of a literal are kept once, and every atom in the clause must be part of the context.
    /// The frequency statistics of each atom in the clause are bumped.
    pub fn add_clause(&mut self, clause: impl Into<CClause>) -> Result<ClauseOk, err::ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::StateError::SolveComplete.into());
        }

        let mut clause: CClause = clause.into();
        let mut seen = HashSet::with_capacity(clause.len());
        clause.retain(|literal| seen.insert(*literal));

        if let Some(atom) = clause.atoms().find(|atom| !self.atom_db.contains(*atom)) {
            return Err(err::ClauseDBError::UnknownAtom(atom).into());
        }

        if clause.is_empty() {
            log::info!(target: targets::CLAUSE_DB, "Empty clause");
            self.clause_db.note_empty_clause();
            return Ok(ClauseOk::Empty);
        }

        self.atom_db.bump_frequencies(&clause);
        let key = self.clause_db.store_original(clause)?;
        log::trace!(target: targets::CLAUSE_DB, "Added {key}");

        Ok(ClauseOk::Added)
    }
}
