/*!
The trail: every assignment, in the order made, partitioned into decision levels.

Level 0 holds the assignments made before any decision.
Each decision opens a fresh level, whose first assignment is the decision and whose remaining assignments are consequences of the decision (together with every lower level).

The trail records *which* atoms were valued on a level, while the [atom database](crate::db::atom) records the values themselves.
So, undoing a level requires removing the level from the trail and unassigning each of the removed atoms in the atom database, as in [backjump](crate::context::GenericContext::backjump).
*/

use crate::structures::literal::CLiteral;

use super::LevelIndex;

#[derive(Default)]
pub struct Trail {
    /// Assignments, in the order made.
    pub literals: Vec<CLiteral>,

    /// Indicies at which a level begins.
    /// The index of level *l* is stored at position *l - 1*, as level zero always begins at index 0.
    pub level_indicies: Vec<usize>,
}

impl Trail {
    /// Stores a consequence of the top decision level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Opens a fresh level with `decision` as its first assignment.
    pub fn store_decision(&mut self, decision: CLiteral) {
        self.level_indicies.push(self.literals.len());
        self.literals.push(decision);
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Returns true if some decision is active, false otherwise.
    pub fn decision_is_made(&self) -> bool {
        !self.level_indicies.is_empty()
    }

    /// The assignments made at the (current) top level, in order of assignment.
    pub fn top_level_assignments(&self) -> &[CLiteral] {
        match self.level_indicies.last() {
            Some(&level_start) => &self.literals[level_start..],
            None => &self.literals,
        }
    }

    /// Removes levels above the given level, if they exist, and returns the assignments made on those levels.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of any atom.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        // level_indicies stores the start of level l + 1 at position l.
        // So, all assignments made after level l are cleared by clearing from level_indicies[l].
        if let Some(&level_start) = self.level_indicies.get(level as usize) {
            self.level_indicies.truncate(level as usize);
            self.literals.split_off(level_start)
        } else {
            Vec::default()
        }
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;
    use crate::structures::literal::Literal;

    fn lit(int: isize) -> CLiteral {
        CLiteral::from_dimacs(int).expect("non-zero")
    }

    #[test]
    fn levels() {
        let mut trail = Trail::default();
        trail.store_assignment(lit(1));
        assert_eq!(trail.level(), 0);
        assert_eq!(trail.top_level_assignments(), &[lit(1)]);

        trail.store_decision(lit(-2));
        trail.store_assignment(lit(3));
        trail.store_decision(lit(4));
        trail.store_assignment(lit(-5));

        assert_eq!(trail.level(), 2);
        assert!(trail.decision_is_made());
        assert_eq!(trail.top_level_assignments(), &[lit(4), lit(-5)]);

        let cleared = trail.clear_assignments_above(1);
        assert_eq!(cleared, vec![lit(4), lit(-5)]);
        assert_eq!(trail.level(), 1);
        assert_eq!(trail.top_level_assignments(), &[lit(-2), lit(3)]);

        assert!(trail.clear_assignments_above(4).is_empty());

        let cleared = trail.clear_assignments_above(0);
        assert_eq!(cleared.iter().map(|l| l.as_int()).collect::<Vec<_>>(), vec![-2, 3]);
        assert_eq!(trail.literals, vec![lit(1)]);
        assert!(!trail.decision_is_made());
    }
}
