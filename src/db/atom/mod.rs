/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- The current (often partial) valuation, as a [cell](AtomCell) for each atom.
  A cell holds the [assignment](Assignment) of an atom --- value, level, and source together --- if the atom has a value.
- [Frequency statistics](frequency) for each atom, used when making decisions.
- A count of valued atoms.

Atoms are the integers 1..=*n* and cells are indexed by atoms, so the cell at index 0 is unused.

# Assignment and unassignment

[assign](AtomDB::assign) and [unassign](AtomDB::unassign) are inverse, in that unassigning an atom restores the cell of the atom to the state prior to the assignment.
With the exception, that is, of any bump made to the frequency of the atom while valued, which is kept.

```rust
# use marten_sat::db::{atom::AtomDB, ClauseKey};
# use marten_sat::structures::{consequence::AssignmentSource, literal::{CLiteral, Literal}};
let mut atom_db = AtomDB::default();
let p = atom_db.fresh_atom().unwrap();
atom_db.bump_frequencies(&vec![CLiteral::new(p, true)]);
let before = atom_db.cell(p).cloned();

assert!(atom_db.assign(CLiteral::new(p, false), 3, AssignmentSource::BCP(ClauseKey::Original(0))).is_ok());
assert_eq!(atom_db.value_of(p), Some(false));
assert_eq!(atom_db.level_of(p), Some(3));

atom_db.unassign(p);
assert_eq!(atom_db.cell(p).cloned(), before);
```
*/

pub mod frequency;

use frequency::FrequencyCell;

use crate::{
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        consequence::{Assignment, AssignmentSource},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The record of an atom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AtomCell {
    /// The assignment of the atom, if the atom has a value.
    pub assignment: Option<Assignment>,

    /// Frequency statistics of the atom.
    pub frequency: FrequencyCell,
}

/// The status of a clause with respect to the current valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is true.
    Satisfied,

    /// Every literal of the clause is false, except the given literal, whose atom has no value.
    Unit(CLiteral),

    /// Every literal of the clause is false.
    Conflict,

    /// At least two literals have atoms without a value, and no literal is true.
    Unresolved,
}

/// The atom database.
pub struct AtomDB {
    /// Cells for each atom, indexed by atom.
    cells: Vec<AtomCell>,

    /// A count of atoms with some value.
    assigned_count: usize,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB {
            cells: vec![AtomCell::default()],
            assigned_count: 0,
        }
    }
}

impl AtomDB {
    /// A fresh atom, without a value and without any occurrence.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        let atom = match Atom::try_from(self.cells.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(err::AtomDBError::AtomsExhausted),
        };
        self.cells.push(AtomCell {
            assignment: None,
            frequency: FrequencyCell::fresh(),
        });
        Ok(atom)
    }

    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.cells.len() - 1
    }

    /// A count of atoms with some value.
    pub fn assigned_count(&self) -> usize {
        self.assigned_count
    }

    /// True if every atom has a value.
    pub fn all_assigned(&self) -> bool {
        self.assigned_count == self.count()
    }

    /// True if the atom is part of the database.
    pub fn contains(&self, atom: Atom) -> bool {
        atom != 0 && (atom as usize) < self.cells.len()
    }

    /// Every atom in the database, in order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> {
        1..(self.cells.len() as Atom)
    }

    /// Every atom without a value, in order.
    pub fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.atoms()
            .filter(|atom| self.cells[*atom as usize].assignment.is_none())
    }

    /// The cell of an atom, if the atom is part of the database.
    pub fn cell(&self, atom: Atom) -> Option<&AtomCell> {
        match atom {
            0 => None,
            _ => self.cells.get(atom as usize),
        }
    }

    /// The assignment of an atom, if the atom has a value.
    pub fn assignment_of(&self, atom: Atom) -> Option<&Assignment> {
        self.cell(atom)?.assignment.as_ref()
    }

    /// The value of an atom, if the atom has a value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.assignment_of(atom).map(|assignment| assignment.value)
    }

    /// The level on which an atom was valued, if the atom has a value.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.assignment_of(atom).map(|assignment| assignment.level)
    }

    /// The clause which forced the value of an atom, if the atom was valued by propagation.
    pub fn antecedent_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.assignment_of(atom)?.source.antecedent()
    }

    /// The frequency statistics of an atom.
    pub fn frequency(&self, atom: Atom) -> Option<&FrequencyCell> {
        self.cell(atom).map(|cell| &cell.frequency)
    }

    /// Values the atom of `literal` to the polarity of `literal`, on `level`, due to `source`.
    ///
    /// The live frequency of the atom is excluded until the atom is unassigned.
    ///
    /// # Errors
    /// If the atom is not part of the database, or already has a value, the database is unchanged and an error is returned.
    pub fn assign(
        &mut self,
        literal: CLiteral,
        level: LevelIndex,
        source: AssignmentSource,
    ) -> Result<(), err::AtomDBError> {
        let atom = literal.atom();
        let cell = match atom {
            0 => None,
            _ => self.cells.get_mut(atom as usize),
        };
        let Some(cell) = cell else {
            log::error!(target: targets::VALUATION, "Assignment to unknown atom {atom}");
            return Err(err::AtomDBError::UnknownAtom(atom));
        };
        if let Some(existing) = cell.assignment {
            log::error!(target: targets::VALUATION, "Reassignment of {literal}, valued {} on {}", existing.value, existing.level);
            return Err(err::AtomDBError::Reassignment(atom));
        }
        log::trace!(target: targets::VALUATION, "Assign {literal} on {level}");

        cell.assignment = Some(Assignment {
            value: literal.polarity(),
            level,
            source,
        });
        cell.frequency.exclude();
        self.assigned_count += 1;
        Ok(())
    }

    /// Clears the value of an atom, and restores the live frequency of the atom.
    ///
    /// If the atom has no value, nothing happens.
    pub fn unassign(&mut self, atom: Atom) {
        let Some(cell) = self.cells.get_mut(atom as usize) else {
            return;
        };
        if cell.assignment.take().is_some() {
            log::trace!(target: targets::VALUATION, "Unassign {atom}");
            cell.frequency.restore();
            self.assigned_count -= 1;
        }
    }

    /// Notes an occurrence of each literal in `clause` in the frequency statistics of its atom.
    pub fn bump_frequencies(&mut self, clause: &CClause) {
        for literal in clause.literals() {
            if let Some(cell) = self.cells.get_mut(literal.atom() as usize) {
                cell.frequency.note_occurrence(literal.polarity());
            }
        }
    }

    /// Halves the frequency of every atom.
    pub fn decay_frequencies(&mut self) {
        log::debug!(target: targets::VALUATION, "Frequency decay");
        for cell in self.cells.iter_mut().skip(1) {
            cell.frequency.decay();
        }
    }

    /// The status of `clause` on the current valuation.
    ///
    /// ```rust
    /// # use marten_sat::db::atom::{AtomDB, ClauseStatus};
    /// # use marten_sat::structures::{consequence::AssignmentSource, literal::{CLiteral, Literal}};
    /// let mut atom_db = AtomDB::default();
    /// let p = CLiteral::new(atom_db.fresh_atom().unwrap(), true);
    /// let q = CLiteral::new(atom_db.fresh_atom().unwrap(), true);
    ///
    /// assert_eq!(atom_db.clause_status(&vec![p, q]), ClauseStatus::Unresolved);
    ///
    /// assert!(atom_db.assign(-p, 1, AssignmentSource::Decision).is_ok());
    /// assert_eq!(atom_db.clause_status(&vec![p, q]), ClauseStatus::Unit(q));
    /// assert_eq!(atom_db.clause_status(&vec![p]), ClauseStatus::Conflict);
    /// assert_eq!(atom_db.clause_status(&vec![-p, q]), ClauseStatus::Satisfied);
    /// ```
    pub fn clause_status(&self, clause: &CClause) -> ClauseStatus {
        let mut valueless = None;
        let mut valueless_count = 0;

        for literal in clause.literals() {
            match self.value_of(literal.atom()) {
                None => {
                    valueless_count += 1;
                    valueless = Some(*literal);
                }
                Some(value) if value == literal.polarity() => return ClauseStatus::Satisfied,
                Some(_) => {}
            }
        }

        match (valueless_count, valueless) {
            (0, _) => ClauseStatus::Conflict,
            (1, Some(literal)) => ClauseStatus::Unit(literal),
            _ => ClauseStatus::Unresolved,
        }
    }

    /// The current valuation, indexed by atom, with `None` at index 0.
    pub fn valuation(&self) -> Vec<Option<bool>> {
        self.cells
            .iter()
            .map(|cell| cell.assignment.map(|assignment| assignment.value))
            .collect()
    }

    /// The current valuation, as a string of DIMACS literals.
    ///
    /// Atoms without a value are written with positive polarity.
    pub fn valuation_dimacs(&self) -> String {
        self.atoms()
            .map(|atom| match self.value_of(atom) {
                Some(false) => format!("-{atom}"),
                _ => format!("{atom}"),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
