//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions above level *l - i* are undone.
//!
//! # Methods
//!
//! # [backjump](GenericContext::backjump) --- Backjump to a target level
//!
//! Unassigns every atom valued on a level strictly greater than the target level.
//! Atoms valued on the target level, or below, are untouched, as are atoms without a value.
//!
//! Passing a target level greater than or equal to the current level is safe --- nothing will happen.
//!
//! # [backjump_level](GenericContext::backjump_level) --- The backjump level of a learnt clause
//!
//! The backjump level of a learnt clause is the highest level of any literal in the clause, excluding the level of the conflict.
//! If every literal was valued on the level of the conflict (e.g. if the clause is unit) the backjump level is 0, and the clause asserts before any decision.
//!
//! # Example
//!
//! ```rust,ignore
//! if let AnalysisResult::AssertingClause { backjump_level, .. } = result {
//!     self.backjump(backjump_level);
//! }
//! ```

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
};

impl<R: rand::Rng> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        for literal in self.trail.clear_assignments_above(target) {
            self.atom_db.unassign(literal.atom());
        }
    }

    /// The non-chronological backjump level of a clause learnt from a conflict on `conflict_level`.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump_level(&self, clause: &CClause, conflict_level: LevelIndex) -> LevelIndex {
        clause
            .atoms()
            .filter_map(|atom| self.atom_db.level_of(atom))
            .filter(|level| *level != conflict_level)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod backjump_tests {
    use crate::{
        config::Config,
        context::Context,
        procedures::bcp::PropagationOk,
        structures::{
            consequence::AssignmentSource,
            literal::{CLiteral, Literal},
        },
    };

    fn lit(int: isize) -> CLiteral {
        CLiteral::from_dimacs(int).expect("non-zero")
    }

    fn decide(the_context: &mut Context, int: isize) {
        the_context.trail.store_decision(lit(int));
        let level = the_context.trail.level();
        assert!(the_context
            .atom_db
            .assign(lit(int), level, AssignmentSource::Decision)
            .is_ok());
    }

    fn three_levels() -> Context {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.ensure_atoms(6).is_ok());
        for clause in [[-1, 2], [-3, 4], [-5, 6]] {
            let clause = clause.iter().map(|i| lit(*i)).collect::<Vec<_>>();
            assert!(the_context.add_clause(clause).is_ok());
        }

        for decision in [1, 3, 5] {
            decide(&mut the_context, decision);
            assert_eq!(the_context.propagate(), Ok(PropagationOk::Exhausted));
        }
        assert_eq!(the_context.trail.level(), 3);
        the_context
    }

    #[test]
    fn backjump_clears_higher_levels() {
        let mut the_context = three_levels();
        the_context.backjump(1);

        assert_eq!(the_context.trail.level(), 1);
        assert_eq!(the_context.atom_db.assigned_count(), 2);
        for atom in the_context.atom_db.atoms() {
            match the_context.atom_db.level_of(atom) {
                Some(level) => assert!(level <= 1),
                None => assert!(atom > 2),
            }
        }
        assert_eq!(the_context.trail.literals, vec![lit(1), lit(2)]);
        assert!(the_context.atom_db.frequency(3).is_some_and(|f| f.live().is_some()));
    }

    #[test]
    fn backjump_to_current_level_is_noop() {
        let mut the_context = three_levels();
        the_context.backjump(3);
        assert_eq!(the_context.atom_db.assigned_count(), 6);

        the_context.backjump(7);
        assert_eq!(the_context.trail.level(), 3);
    }

    #[test]
    fn backjump_to_zero_clears_decisions() {
        let mut the_context = three_levels();
        the_context.backjump(0);
        assert!(!the_context.trail.decision_is_made());
        assert_eq!(the_context.atom_db.assigned_count(), 0);
    }

    #[test]
    fn backjump_level_of_clause() {
        let the_context = three_levels();
        assert_eq!(the_context.backjump_level(&vec![lit(-2), lit(-4), lit(-6)], 3), 2);
        assert_eq!(the_context.backjump_level(&vec![lit(-5), lit(-6)], 3), 0);
        assert_eq!(the_context.backjump_level(&vec![lit(-1), lit(-6)], 3), 1);
    }
}
