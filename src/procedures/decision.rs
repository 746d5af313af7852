/*!
Methods for choosing the value of an atom.

# Overview

A decision is made only when propagation has reached a fixpoint and some atom has no value.

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* can be represented with the literal *-p*.

# Choosing an atom

A uniform value is drawn from the source of randomness on each decision, and:
- If fewer than half of the atoms have a value, or the value drawn is at least [random_decision_bias](crate::config::Config::random_decision_bias), the decision is *greedy*.
  The atom chosen is an atom without a value of greatest live [frequency](crate::db::atom::frequency), with ties going to the least atom.
- Otherwise, the atom chosen is some atom without a value, chosen uniformly at random.

Every [decay_interval](crate::config::Config::decay_interval) × (the count of atoms) greedy decisions, the frequency of every atom is halved.

```rust,ignore
let atom = self.atom_db.unvalued_atoms().choose(&mut self.rng);
```

# Choosing a value

Regardless of how an atom was chosen, the atom is valued true if the net polarity of the atom is non-negative, and false otherwise.

```rust,ignore
let value = self.atom_db.frequency(atom)?.preferred_value();
let decision_as_literal = CLiteral::new(atom, value);
```
*/

use rand::seq::IteratorRandom;

use crate::{
    context::GenericContext,
    db::atom::frequency::Frequency,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// A decision to value the atom of the literal with the polarity of the literal.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng> GenericContext<R> {
    /// Chooses an atom without a value, and a value for the atom.
    ///
    /// Note, the decision is only chosen, and not made.
    ///
    /// ```rust,ignore
    /// match self.make_decision()? {
    ///     DecisionOk::Literal(decision) => {
    ///         self.trail.store_decision(decision);
    ///         ...
    ///     }
    ///     DecisionOk::Exhausted => break,
    /// }
    /// ```
    pub fn make_decision(&mut self) -> Result<DecisionOk, err::ErrorKind> {
        if self.atom_db.all_assigned() {
            return Ok(DecisionOk::Exhausted);
        }

        let atom_count = self.atom_db.count();
        let draw = self.rng.random::<f64>();

        let chosen_atom = if self.atom_db.assigned_count() * 2 < atom_count
            || draw >= self.config.random_decision_bias.value
        {
            self.note_greedy_decision();
            self.most_frequent_atom()
        } else {
            self.counters.random_decisions += 1;
            self.atom_db.unvalued_atoms().choose(&mut self.rng)
        };

        let Some(atom) = chosen_atom else {
            log::error!(target: targets::DECISION, "No candidate with {} of {atom_count} atoms valued", self.atom_db.assigned_count());
            return Err(err::DecisionError::NoCandidate.into());
        };

        if self.atom_db.value_of(atom).is_some() {
            log::error!(target: targets::DECISION, "Chose {atom}, which has a value");
            return Err(err::DecisionError::AssignedChoice(atom).into());
        }

        let value = match self.atom_db.frequency(atom) {
            Some(frequency) => frequency.preferred_value(),
            None => return Err(err::DecisionError::NoCandidate.into()),
        };
        let decision = CLiteral::new(atom, value);
        log::trace!(target: targets::DECISION, "Decision {decision}");

        Ok(DecisionOk::Literal(decision))
    }

    /// An atom without a value of greatest live frequency, with ties going to the least atom.
    pub fn most_frequent_atom(&self) -> Option<Atom> {
        let mut chosen: Option<(Atom, Frequency)> = None;

        for atom in self.atom_db.unvalued_atoms() {
            let Some(frequency) = self.atom_db.frequency(atom).and_then(|f| f.live()) else {
                continue;
            };
            match chosen {
                Some((_, best)) if best >= frequency => {}
                _ => chosen = Some((atom, frequency)),
            }
        }

        chosen.map(|(atom, _)| atom)
    }

    /// Counts a greedy decision, and decays frequencies if due.
    fn note_greedy_decision(&mut self) {
        self.counters.greedy_decisions += 1;

        let interval = self
            .config
            .decay_interval
            .value
            .saturating_mul(self.atom_db.count());
        if self.counters.greedy_decisions >= interval {
            self.atom_db.decay_frequencies();
            self.counters.greedy_decisions = 0;
            self.counters.decays += 1;
        }
    }
}

#[cfg(test)]
mod decision_tests {
    use crate::{
        config::Config,
        context::Context,
        procedures::decision::DecisionOk,
        structures::{
            consequence::AssignmentSource,
            literal::{CLiteral, Literal},
        },
    };

    fn lit(int: isize) -> CLiteral {
        CLiteral::from_dimacs(int).expect("non-zero")
    }

    fn context_with(atoms: u32, clauses: &[&[isize]]) -> Context {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.ensure_atoms(atoms).is_ok());
        for clause in clauses {
            let clause = clause.iter().map(|i| lit(*i)).collect::<Vec<_>>();
            assert!(the_context.add_clause(clause).is_ok());
        }
        the_context
    }

    #[test]
    fn greedy_takes_most_frequent() {
        let mut the_context = context_with(3, &[&[1, 2], &[-2, 3], &[2, -3]]);
        assert_eq!(the_context.most_frequent_atom(), Some(2));
        assert_eq!(the_context.make_decision(), Ok(DecisionOk::Literal(lit(2))));
        assert_eq!(the_context.counters.greedy_decisions, 1);
    }

    #[test]
    fn ties_go_to_least_atom() {
        let the_context = context_with(3, &[&[1, 2, 3]]);
        assert_eq!(the_context.most_frequent_atom(), Some(1));
    }

    #[test]
    fn polarity_follows_net_occurrence() {
        let mut the_context = context_with(1, &[&[-1], &[-1], &[1]]);
        assert_eq!(the_context.make_decision(), Ok(DecisionOk::Literal(lit(-1))));
    }

    #[test]
    fn valued_atoms_are_never_chosen() {
        let mut the_context = context_with(2, &[&[1, 2], &[1, -2], &[1]]);
        assert!(the_context
            .atom_db
            .assign(lit(1), 0, AssignmentSource::Decision)
            .is_ok());
        assert_eq!(the_context.most_frequent_atom(), Some(2));
    }

    #[test]
    fn exhausted_when_all_valued() {
        let mut the_context = context_with(1, &[&[1]]);
        assert!(the_context
            .atom_db
            .assign(lit(1), 0, AssignmentSource::Decision)
            .is_ok());
        assert_eq!(the_context.make_decision(), Ok(DecisionOk::Exhausted));
    }

    #[test]
    fn random_path_after_half_valued() {
        let mut config = Config::default();
        assert!(config.random_decision_bias.set(1.0));
        let mut the_context = Context::from_config(config);
        assert!(the_context.ensure_atoms(4).is_ok());
        for atom in [1, 2] {
            assert!(the_context
                .atom_db
                .assign(lit(atom), 0, AssignmentSource::Decision)
                .is_ok());
        }

        for _ in 0..16 {
            match the_context.make_decision() {
                Ok(DecisionOk::Literal(literal)) => assert!(literal.atom() > 2),
                otherwise => panic!("Unexpected decision {otherwise:?}"),
            }
        }
        assert_eq!(the_context.counters.random_decisions, 16);
        assert_eq!(the_context.counters.greedy_decisions, 0);
    }

    #[test]
    fn frequencies_decay_on_interval() {
        let mut config = Config::default();
        assert!(config.decay_interval.set(1));
        let mut the_context = Context::from_config(config);
        assert!(the_context.ensure_atoms(2).is_ok());
        for _ in 0..4 {
            assert!(the_context.add_clause(vec![lit(1), lit(2)]).is_ok());
        }

        // Two greedy decisions, as no atom has a value.
        assert!(the_context.make_decision().is_ok());
        assert_eq!(the_context.counters.decays, 0);
        assert!(the_context.make_decision().is_ok());
        assert_eq!(the_context.counters.decays, 1);
        assert_eq!(the_context.counters.greedy_decisions, 0);

        let frequency = the_context.atom_db.frequency(1).expect("atom 1");
        assert_eq!(frequency.live(), Some(2));
        assert_eq!(frequency.snapshot(), 2);
    }
}
