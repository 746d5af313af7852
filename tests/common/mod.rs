#![allow(dead_code)]

use marten_sat::{
    config::Config,
    context::Context,
    generic::random::MinimalPCG32,
    structures::literal::CLiteral,
};
use rand::Rng;

pub fn lit(int: isize) -> CLiteral {
    CLiteral::from_dimacs(int).expect("non-zero literal")
}

/// A context with atoms 1..=`atoms` and the given clauses.
pub fn context_from_ints(atoms: u32, clauses: &[Vec<isize>], config: Config) -> Context {
    let mut the_context = Context::from_config(config);
    assert!(the_context.ensure_atoms(atoms).is_ok());
    for clause in clauses {
        let clause = clause.iter().map(|int| lit(*int)).collect::<Vec<_>>();
        assert!(the_context.add_clause(clause).is_ok());
    }
    the_context
}

/// Whether the current valuation of the context satisfies every clause.
pub fn valuation_satisfies(the_context: &Context, clauses: &[Vec<isize>]) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|int| {
            let atom = int.unsigned_abs() as u32;
            the_context.value_of(atom) == Some(int.is_positive())
        })
    })
}

pub fn satisfies(valuation: &[bool], clause: &[isize]) -> bool {
    clause
        .iter()
        .any(|int| valuation[int.unsigned_abs() - 1] == int.is_positive())
}

/// Every valuation of atoms 1..=`atoms` which satisfies the clauses.
pub fn models(atoms: usize, clauses: &[Vec<isize>]) -> Vec<Vec<bool>> {
    (0..(1_u64 << atoms))
        .map(|bits| (0..atoms).map(|i| bits & (1 << i) != 0).collect::<Vec<_>>())
        .filter(|valuation| clauses.iter().all(|clause| satisfies(valuation, clause)))
        .collect()
}

pub fn brute_force_satisfiable(atoms: usize, clauses: &[Vec<isize>]) -> bool {
    (0..(1_u64 << atoms)).any(|bits| {
        let valuation = (0..atoms).map(|i| bits & (1 << i) != 0).collect::<Vec<_>>();
        clauses.iter().all(|clause| satisfies(&valuation, clause))
    })
}

/// A formula of `clause_count` clauses, each with `width` distinct atoms from 1..=`atoms`.
pub fn random_formula(
    rng: &mut MinimalPCG32,
    atoms: usize,
    clause_count: usize,
    width: usize,
) -> Vec<Vec<isize>> {
    let mut formula = Vec::with_capacity(clause_count);
    for _ in 0..clause_count {
        let mut clause: Vec<isize> = Vec::with_capacity(width);
        while clause.len() < width {
            let atom = rng.random_range(1..=atoms) as isize;
            if clause.iter().any(|int| int.abs() == atom) {
                continue;
            }
            match rng.random_bool(0.5) {
                true => clause.push(atom),
                false => clause.push(-atom),
            }
        }
        formula.push(clause);
    }
    formula
}
