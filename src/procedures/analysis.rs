/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation and learns a clause which asserts some literal after a [backjump](crate::procedures::backjump).

# Resolution

Analysis begins with the unsatisfiable clause as a working clause, and repeats:
- If exactly one literal of the working clause was valued on the level of the conflict, stop.
  The working clause is *asserting*, as after undoing the level of the conflict the clause is unit on the remaining literal.
- Otherwise, take the literal valued on the level of the conflict most recently by propagation and [resolve](resolve) the working clause with the clause which forced the value of the literal.

As each literal of the clause resolved with was valued before the pivot, each step replaces a literal of the working clause with literals valued earlier.
So, the process terminates.
Further, as at most one literal of a level is a decision, whenever two or more literals of the working clause were valued on the level of the conflict some literal was valued by propagation.
Still, should no such literal be found, analysis fails with [NoResolver](err::AnalysisError::NoResolver) rather than continue.

# Learning

The clause obtained is stored as an addition to the clause database, and the frequency statistics of each atom in the clause are bumped as with any original clause.

# Level zero

A conflict found before any decision is made is fundamental: the formula is unsatisfiable, and no clause is learnt.

# Example

```rust,ignore
match self.conflict_analysis(key)? {
    AnalysisResult::FundamentalConflict => {
        // the formula is unsatisfiable
    }
    AnalysisResult::AssertingClause { backjump_level, .. } => {
        self.backjump(backjump_level);
    }
}
```
*/

use crate::{
    context::GenericContext,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Possible 'Ok' results from conflict analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisResult {
    /// The conflict was found before any decision, and so the formula is unsatisfiable.
    FundamentalConflict,

    /// An asserting clause was learnt.
    AssertingClause {
        /// The key to the clause.
        key: ClauseKey,

        /// The literal asserted by the clause, after a backjump.
        literal: CLiteral,

        /// The level to backjump to.
        backjump_level: LevelIndex,
    },
}

impl<R: rand::Rng> GenericContext<R> {
    /// Analyses the clause with the given key, which is unsatisfiable on the current valuation.
    ///
    /// For documentation see [procedures::analysis](crate::procedures::analysis).
    pub fn conflict_analysis(&mut self, key: ClauseKey) -> Result<AnalysisResult, err::ErrorKind> {
        let conflict_level = self.trail.level();
        if conflict_level == 0 {
            log::info!(target: targets::ANALYSIS, "Conflict with {key} before any decision");
            return Ok(AnalysisResult::FundamentalConflict);
        }

        let clause = self.resolve_until_asserting(key, conflict_level)?;

        let Some(literal) = clause
            .literals()
            .find(|literal| self.atom_db.level_of(literal.atom()) == Some(conflict_level))
            .copied()
        else {
            return Err(err::AnalysisError::NoConflictLiteral(key, conflict_level).into());
        };
        let backjump_level = self.backjump_level(&clause, conflict_level);

        self.atom_db.bump_frequencies(&clause);
        let learnt_key = self.clause_db.store_addition(clause)?;
        log::debug!(target: targets::ANALYSIS, "Learnt {learnt_key} asserting {literal} on {backjump_level}");

        Ok(AnalysisResult::AssertingClause {
            key: learnt_key,
            literal,
            backjump_level,
        })
    }

    /// Applies resolution to the clause with the given key until the clause obtained has exactly one literal valued on `conflict_level`.
    ///
    /// # Soundness
    /// `conflict_level` should be the current level, and the clause should be unsatisfiable on the current valuation.
    pub fn resolve_until_asserting(
        &self,
        key: ClauseKey,
        conflict_level: LevelIndex,
    ) -> Result<CClause, err::ErrorKind> {
        let mut clause = self.clause_db.get(&key)?.clone();

        loop {
            let conflict_level_count = clause
                .atoms()
                .filter(|atom| self.atom_db.level_of(*atom) == Some(conflict_level))
                .count();

            match conflict_level_count {
                0 => {
                    log::error!(target: targets::ANALYSIS, "No literal of {key} on {conflict_level}");
                    return Err(err::AnalysisError::NoConflictLiteral(key, conflict_level).into());
                }
                1 => return Ok(clause),
                _ => {}
            }

            // The top level of the trail is the level of the conflict.
            let resolver = self
                .trail
                .top_level_assignments()
                .iter()
                .rev()
                .find_map(|assignment| {
                    let atom = assignment.atom();
                    match self.atom_db.antecedent_of(atom) {
                        Some(antecedent) if clause.atoms().any(|a| a == atom) => {
                            Some((atom, antecedent))
                        }
                        _ => None,
                    }
                });

            let Some((pivot, antecedent)) = resolver else {
                log::error!(target: targets::ANALYSIS, "No propagated literal of {} on {conflict_level}", clause.as_dimacs(false));
                return Err(err::AnalysisError::NoResolver(conflict_level).into());
            };

            log::trace!(target: targets::ANALYSIS, "Resolving {} with {antecedent} on {pivot}", clause.as_dimacs(false));
            resolve(&mut clause, pivot, self.clause_db.get(&antecedent)?);
        }
    }
}

/// Resolves `clause` with `other` on `pivot`, leaving the resolvent in `clause`.
///
/// That is, `clause` becomes the union of the two clauses, without any literal whose atom is `pivot`, and without repeated literals.
/// The literals of the resolvent are sorted.
///
/// ```rust
/// # use marten_sat::procedures::analysis::resolve;
/// # use marten_sat::structures::literal::CLiteral;
/// let lits = |ints: &[isize]| ints.iter().map(|i| CLiteral::from_dimacs(*i).unwrap()).collect::<Vec<_>>();
///
/// let mut clause = lits(&[-1, -2, 4]);
/// resolve(&mut clause, 2, &lits(&[-1, 2, 3]));
/// assert_eq!(clause, lits(&[-1, 3, 4]));
/// ```
pub fn resolve(clause: &mut CClause, pivot: Atom, other: &CClause) {
    clause.extend(other.literals().copied());
    clause.retain(|literal| literal.atom() != pivot);
    clause.sort_unstable();
    clause.dedup();
}
