/*!
The context --- to which formulas are added and within which a solve takes place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, which is given when the context is created.
A [Context] fixes the source of randomness to [MinimalPCG32](crate::generic::random::MinimalPCG32), seeded by the [configuration](crate::config::Config::rng_seed).

A context is used for a single solve.
Once a solve has completed clauses may not be added and the context may not be solved again, though the result of the solve may be inspected.

# Example
```rust
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::reports::Report;
# use marten_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = vec![CLiteral::new(p, false)];

assert!(the_context.add_clause(not_p).is_ok());
assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.value_of(p), Some(false));
assert_eq!(the_context.value_of(q), Some(true));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A solve is in progress.
    Solving,

    /// The formula is known to be satisfiable, with a complete valuation.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,

    /// A solve ended before satisfiability was determined, e.g. due to a time limit.
    Unresolved,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unresolved => write!(f, "Unresolved"),
        }
    }
}
