use marten_sat::{
    builder::ClauseOk,
    config::Config,
    context::{Context, ContextState},
    reports::Report,
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

mod common;
use common::lit;

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut the_context = Context::from_config(Config::default());
        let p = the_context.fresh_atom().unwrap();
        assert!(the_context.add_clause(vec![CLiteral::new(p, true)]).is_ok());
        assert!(the_context.solve().is_ok());
        assert_eq!(the_context.report(), Report::Satisfiable);
        assert_eq!(the_context.value_of(p), Some(true));
    }

    #[test]
    fn conflict() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.ensure_atoms(2).is_ok());
        for clause in [[1, 2], [-1, -2], [1, -2], [-1, 2]] {
            let clause = clause.map(lit).to_vec();
            assert!(the_context.add_clause(clause).is_ok());
        }

        assert!(the_context.solve().is_ok());
        assert_eq!(the_context.report(), Report::Unsatisfiable);
        assert_eq!(the_context.state, ContextState::Unsatisfiable);
    }

    #[test]
    fn unit_forces_other_literal() {
        let mut the_context = Context::from_config(Config::default());
        let [p, q] = *the_context.fresh_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(the_context.add_clause(vec![p, q]).is_ok());
        assert!(the_context.add_clause(vec![-p]).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        assert_eq!(the_context.atom_db.valuation_dimacs(), "-1 2");
        assert_eq!(the_context.counters.total_decisions, 0);
    }

    #[test]
    fn duplicates() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.ensure_atoms(2).is_ok());
        assert!(the_context.add_clause(vec![lit(1), lit(2), lit(2)]).is_ok());

        let database = the_context.clause_db.all_clauses().collect::<Vec<_>>();
        assert_eq!(database.len(), 1);
        assert_eq!(database[0].1.len(), 2);
    }

    #[test]
    fn tautology_kept() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.ensure_atoms(1).is_ok());
        assert_eq!(
            the_context.add_clause(vec![lit(1), lit(-1)]),
            Ok(ClauseOk::Added)
        );
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn empty_formula() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let mut verdict = vec![];
        assert!(the_context.write_verdict(&mut verdict).is_ok());
        assert_eq!(verdict, b"SAT\n\n");
    }

    #[test]
    fn solve_once() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.ensure_atoms(1).is_ok());
        assert!(the_context.add_clause(vec![lit(1)]).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(
            the_context.solve(),
            Err(err::StateError::SolveComplete.into())
        );
        assert_eq!(the_context.report(), Report::Satisfiable);
    }

    #[test]
    fn decision_limit() {
        let mut config = Config::default();
        config.decision_limit = Some(0);

        let mut the_context = Context::from_config(config);
        assert!(the_context.ensure_atoms(2).is_ok());
        assert!(the_context.add_clause(vec![lit(1), lit(2)]).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Unknown));
        assert_eq!(the_context.state, ContextState::Unresolved);
        assert_eq!(the_context.counters.total_decisions, 0);

        let mut verdict = vec![];
        assert!(the_context.write_verdict(&mut verdict).is_ok());
        assert_eq!(verdict, b"UNKNOWN\n");
    }

    #[test]
    fn generous_time_limit() {
        let mut config = Config::default();
        config.time_limit = Some(std::time::Duration::from_secs(3600));

        let mut the_context = Context::from_config(config);
        assert!(the_context.ensure_atoms(2).is_ok());
        for clause in [[1, 2], [-1, -2], [1, -2], [-1, 2]] {
            assert!(the_context.add_clause(clause.map(lit).to_vec()).is_ok());
        }
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn counters_after_solve() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.ensure_atoms(2).is_ok());
        for clause in [[1, 2], [-1, -2], [1, -2], [-1, 2]] {
            assert!(the_context.add_clause(clause.map(lit).to_vec()).is_ok());
        }
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));

        let counters = &the_context.counters;
        assert!(counters.total_decisions >= 1);
        assert!(counters.total_conflicts >= 2);
        assert_eq!(
            counters.total_conflicts,
            the_context.clause_db.addition_count() + 1
        );
        assert!(counters.total_iterations > counters.total_decisions);
    }
}
