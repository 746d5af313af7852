//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! marten_sat is a small conflict-driven clause-learning (CDCL) solver.
//! Rather than an activity heap, decisions are guided by how often an atom occurs in the formula, with a dash of randomness.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config) and a source of randomness.
//! Clauses may be added through the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programatically](crate::context::GenericContext::add_clause).
//!
//! Internally, a solve is viewed in terms of a handful of databases:
//! - A formula is stored in a [clause database](crate::db::clause).
//!   Original clauses are fixed once added, and clauses learnt during a solve are appended and never removed.
//! - A valuation, together with the statistics used to make decisions, is stored in an [atom database](crate::db::atom).
//! - The decisions made, and the consequences of those decisions, are stored on a [trail](crate::db::trail).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [procedures] for the pieces of the solve: [propagation](crate::procedures::bcp), [analysis](crate::procedures::analysis), [backjumping](crate::procedures::backjump), and [decisions](crate::procedures::decision).
//! - The [structures] to familiarise yourself with atoms, literals, and clauses.
//!
//! # Examples
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use marten_sat::context::Context;
//! # use marten_sat::config::Config;
//! # use marten_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! + Build a formula directly, and read the valuation found.
//!
//! ```rust
//! # use marten_sat::context::Context;
//! # use marten_sat::config::Config;
//! # use marten_sat::reports::Report;
//! # use marten_sat::structures::literal::{CLiteral, Literal};
//! let mut the_context = Context::from_config(Config::default());
//! let [p, q] = *the_context.fresh_literals(2).as_slice() else {
//!     panic!("Insufficient literals");
//! };
//!
//! assert!(the_context.add_clause(vec![p, q]).is_ok());
//! assert!(the_context.add_clause(vec![-p]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(p.atom()), Some(false));
//! assert_eq!(the_context.value_of(q.atom()), Some(true));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is installed by the library, though the CLI installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
//!
//! ```sh
//! RUST_LOG=analysis=trace marten_cli formula.cnf
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
