/*!
A context method for boolean constraint propagation (aka. unit propagation).

See [GenericContext::propagate] for the relevant context method.

# Overview

Clauses are examined, in turn, with respect to the current valuation:
- If some literal of the clause is true, the clause is satisfied and is skipped.
- If every literal but one is false, and the atom of the remaining literal has no value, the clause is *unit*.
  The atom of the remaining literal is valued to make the literal true, on the current level, with the clause as the source of the assignment.
- If every literal of the clause is false, the clause is a *conflict*, and propagation stops with the key to the clause.

A pass is made over every clause (original clauses before added clauses) and passes are repeated until some pass makes no assignment.
At this point the valuation is a fixpoint of propagation.

As any assignment made during a pass is seen by the remainder of the pass, a single pass may make a chain of assignments.
Still, an assignment may make some earlier clause unit, and so a further pass is required after any assignment.

# Example

```rust,ignore
match self.propagate()? {
    PropagationOk::Exhausted => {
        // decide, or note satisfiability
    }
    PropagationOk::Conflict(key) => {
        // analyse the conflict
    }
}
```
*/

use crate::{
    context::GenericContext,
    db::{atom::ClauseStatus, ClauseKey},
    misc::log::targets::{self},
    structures::consequence::AssignmentSource,
    types::err::{self},
};

/// Possible results of propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationOk {
    /// Propagation reached a fixpoint without conflict.
    Exhausted,

    /// Every literal of the clause with the given key is false.
    Conflict(ClauseKey),
}

impl<R: rand::Rng> GenericContext<R> {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    ///
    /// Fails only if an assignment is refused by the atom database, in which case the trail is left unchanged by the assignment.
    pub fn propagate(&mut self) -> Result<PropagationOk, err::ErrorKind> {
        let level = self.trail.level();

        'pass_loop: loop {
            let mut assignment_made = false;

            for (key, clause) in self.clause_db.all_clauses() {
                match self.atom_db.clause_status(clause) {
                    ClauseStatus::Satisfied | ClauseStatus::Unresolved => {}

                    ClauseStatus::Unit(literal) => {
                        log::trace!(target: targets::PROPAGATION, "{key} asserts {literal}");
                        self.atom_db
                            .assign(literal, level, AssignmentSource::BCP(key))?;
                        self.trail.store_assignment(literal);
                        assignment_made = true;
                    }

                    ClauseStatus::Conflict => {
                        log::trace!(target: targets::PROPAGATION, "Conflict with {key} on {level}");
                        return Ok(PropagationOk::Conflict(key));
                    }
                }
            }

            if !assignment_made {
                break 'pass_loop;
            }
        }

        Ok(PropagationOk::Exhausted)
    }
}
