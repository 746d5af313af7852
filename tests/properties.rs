use marten_sat::{
    config::Config,
    context::Context,
    db::atom::ClauseStatus,
    generic::random::MinimalPCG32,
    reports::Report,
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
};
use rand::{Rng, SeedableRng};

mod common;
use common::{brute_force_satisfiable, context_from_ints, models, random_formula, satisfies};

/// Random 3-SAT formulas near the threshold, to mix satisfiable and unsatisfiable formulas.
fn formulas(seed: u64, count: usize) -> Vec<(usize, Vec<Vec<isize>>)> {
    let mut rng = MinimalPCG32::from_seed(seed.to_le_bytes());
    (0..count)
        .map(|_| {
            let atoms = rng.random_range(4..=12_usize);
            let clause_count = (atoms * 43) / 10;
            (atoms, random_formula(&mut rng, atoms, clause_count, 3))
        })
        .collect()
}

fn learnt_clauses(the_context: &Context) -> Vec<CClause> {
    the_context
        .clause_db
        .addition_clauses()
        .map(|(_, clause)| clause.clone())
        .collect()
}

#[test]
fn agrees_with_brute_force() {
    let mut counts = [0, 0];

    for (atoms, formula) in formulas(11, 120) {
        let mut the_context = context_from_ints(atoms as u32, &formula, Config::default());
        let report = the_context.solve().expect("solve");

        match brute_force_satisfiable(atoms, &formula) {
            true => {
                assert_eq!(report, Report::Satisfiable, "{formula:?}");
                assert!(the_context.atom_db.all_assigned());
                for (_, clause) in the_context.clause_db.all_clauses() {
                    assert_eq!(the_context.atom_db.clause_status(clause), ClauseStatus::Satisfied);
                }
                counts[0] += 1;
            }
            false => {
                assert_eq!(report, Report::Unsatisfiable, "{formula:?}");
                counts[1] += 1;
            }
        }
    }

    // Both kinds of formula are checked.
    assert!(counts[0] > 0 && counts[1] > 0, "{counts:?}");
}

#[test]
fn learnt_clauses_are_consequences() {
    for (atoms, formula) in formulas(29, 60) {
        let mut the_context = context_from_ints(atoms as u32, &formula, Config::default());
        assert!(the_context.solve().is_ok());

        let learnt = learnt_clauses(&the_context)
            .iter()
            .map(|clause| {
                clause
                    .literals()
                    .map(|literal| match literal.polarity() {
                        true => literal.atom() as isize,
                        false => -(literal.atom() as isize),
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        for model in models(atoms, &formula) {
            for clause in &learnt {
                assert!(satisfies(&model, clause), "{clause:?} from {formula:?}");
            }
        }
    }
}

#[test]
fn learnt_clauses_are_asserting_and_kept() {
    for (atoms, formula) in formulas(5, 40) {
        let mut the_context = context_from_ints(atoms as u32, &formula, Config::default());
        assert!(the_context.solve().is_ok());

        // Every conflict except a final conflict before any decision learns one clause.
        let learnt_count = the_context.clause_db.addition_count();
        match the_context.report() {
            Report::Unsatisfiable => {
                assert_eq!(learnt_count + 1, the_context.counters.total_conflicts)
            }
            _ => assert_eq!(learnt_count, the_context.counters.total_conflicts),
        }

        for clause in learnt_clauses(&the_context) {
            assert!(!clause.is_empty());
            assert!(!clause.is_tautology());
        }
    }
}

#[test]
fn trail_and_valuation_agree() {
    for (atoms, formula) in formulas(3, 40) {
        let mut the_context = context_from_ints(atoms as u32, &formula, Config::default());
        if the_context.solve() != Ok(Report::Satisfiable) {
            continue;
        }

        let trail = &the_context.trail;
        assert_eq!(trail.literals.len(), the_context.atom_db.assigned_count());

        let mut previous_level = 0;
        let mut decisions = 0;
        for literal in &trail.literals {
            assert_eq!(the_context.value_of(literal.atom()), Some(literal.polarity()));

            let level = the_context.atom_db.level_of(literal.atom()).expect("level");
            assert!(level == previous_level || level == previous_level + 1);
            if the_context.atom_db.antecedent_of(literal.atom()).is_none() {
                decisions += 1;
                assert_eq!(level, previous_level + 1);
            }
            previous_level = level;
        }
        assert_eq!(decisions, trail.level());
    }
}

#[test]
fn deterministic_for_seed() {
    for seed in [0, 7, 1234] {
        for (atoms, formula) in formulas(seed, 20) {
            let run = || {
                let mut config = Config::default();
                config.rng_seed.value = seed;
                let mut the_context = context_from_ints(atoms as u32, &formula, config);
                let report = the_context.solve().expect("solve");
                (
                    report,
                    learnt_clauses(&the_context),
                    the_context.atom_db.valuation(),
                    the_context.counters.total_decisions,
                    the_context.counters.random_decisions,
                    the_context.trail.literals.clone(),
                )
            };

            assert_eq!(run(), run());
        }
    }
}

#[test]
fn verdict_independent_of_randomness() {
    for (atoms, formula) in formulas(41, 30) {
        let expected = brute_force_satisfiable(atoms, &formula);

        for (seed, bias) in [(1, 0.0), (2, 0.5), (3, 1.0)] {
            let mut config = Config::default();
            config.rng_seed.value = seed;
            assert!(config.random_decision_bias.set(bias));
            assert!(config.decay_interval.set(1));

            let mut the_context = context_from_ints(atoms as u32, &formula, config);
            let report = the_context.solve().expect("solve");
            assert_eq!(report == Report::Satisfiable, expected, "{formula:?}");
        }
    }
}
