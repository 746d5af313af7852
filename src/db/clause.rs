/*!
A database of clauses, accessed via [clause keys](ClauseKey).

The database is in two parts:
- Original clauses, fixed once a solve begins.
- Added clauses, learnt through conflict analysis.
  Added clauses are appended, and are never removed or revised.

In addition, the database notes whether an empty clause was ever added.
The empty clause is not stored, as no valuation satisfies it, and a context with an empty clause is unsatisfiable regardless of any other clause.
*/

use crate::{
    db::keys::{ClauseKey, FormulaIndex},
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
    types::err::{self},
};

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Clauses added to the context from some external source.
    original: Vec<CClause>,

    /// Clauses learnt during a solve.
    addition: Vec<CClause>,

    /// Whether an empty clause was added to the context.
    empty_clause: bool,
}

impl ClauseDB {
    /// Stores an original clause, returning the key to the clause.
    ///
    /// # Soundness
    /// The clause is assumed to be non-empty and duplicate free.
    pub fn store_original(&mut self, clause: CClause) -> Result<ClauseKey, err::ClauseDBError> {
        let index = FormulaIndex::try_from(self.original.len())
            .map_err(|_| err::ClauseDBError::StorageExhausted)?;
        let key = ClauseKey::Original(index);
        log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_dimacs(false));
        self.original.push(clause);
        Ok(key)
    }

    /// Stores a clause derived during a solve, returning the key to the clause.
    pub fn store_addition(&mut self, clause: CClause) -> Result<ClauseKey, err::ClauseDBError> {
        let index = FormulaIndex::try_from(self.addition.len())
            .map_err(|_| err::ClauseDBError::StorageExhausted)?;
        let key = ClauseKey::Addition(index);
        log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_dimacs(false));
        self.addition.push(clause);
        Ok(key)
    }

    /// Notes the addition of an empty clause.
    pub fn note_empty_clause(&mut self) {
        log::info!(target: targets::CLAUSE_DB, "Empty clause noted");
        self.empty_clause = true;
    }

    /// True, if an empty clause has been added, and so the formula is unsatisfiable.
    pub fn trivially_unsatisfiable(&self) -> bool {
        self.empty_clause
    }

    /// The clause stored with the given key, if it exists.
    pub fn get(&self, key: &ClauseKey) -> Result<&CClause, err::ClauseDBError> {
        let clause = match key {
            ClauseKey::Original(_) => self.original.get(key.index()),
            ClauseKey::Addition(_) => self.addition.get(key.index()),
        };
        clause.ok_or(err::ClauseDBError::Missing(*key))
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.original.len()
    }

    /// A count of added clauses.
    pub fn addition_count(&self) -> usize {
        self.addition.len()
    }

    /// A count of all clauses, original and added.
    pub fn total_count(&self) -> usize {
        self.original.len() + self.addition.len()
    }

    /// An iterator over every original clause, paired with its key.
    pub fn original_clauses(&self) -> impl Iterator<Item = (ClauseKey, &CClause)> {
        self.original
            .iter()
            .enumerate()
            .map(|(index, clause)| (ClauseKey::Original(index as FormulaIndex), clause))
    }

    /// An iterator over every added clause, paired with its key, in the order added.
    pub fn addition_clauses(&self) -> impl Iterator<Item = (ClauseKey, &CClause)> {
        self.addition
            .iter()
            .enumerate()
            .map(|(index, clause)| (ClauseKey::Addition(index as FormulaIndex), clause))
    }

    /// An iterator over all clauses, with original clauses before added clauses.
    pub fn all_clauses(&self) -> impl Iterator<Item = (ClauseKey, &CClause)> {
        self.original_clauses().chain(self.addition_clauses())
    }
}
