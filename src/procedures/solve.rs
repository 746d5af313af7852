//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! [solve](GenericContext::solve) is a loop over the [phases](SolvePhase) of a conflict-driven clause-learning solve.
//!
//! - While [propagating](crate::procedures::bcp), every clause which is unit on the current valuation extends the valuation, until either some clause is unsatisfiable or no clause is unit.
//!   + If some clause is unsatisfiable, the conflict is analysed.
//!   + Otherwise, if every atom has a value the formula is satisfiable, and if some atom has no value a decision is made.
//! - When [deciding](crate::procedures::decision), some atom without a value is valued on a fresh decision level, and propagation resumes.
//! - When [analysing](crate::procedures::analysis) a conflict, either:
//!   + The conflict was found before any decision, and so the formula is unsatisfiable.
//!   + Or, some clause is learnt which asserts a literal after a [backjump](crate::procedures::backjump), and propagation resumes at the level backjumped to.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!                     +----------+
//!   +-----------------| Deciding |
//!   |                 +----------+
//!   |                      ⌃
//!   |                      | if no clause is unit, and some atom has no value
//!   |                      |
//!   ⌄              +-------------+
//! --+------------->| Propagating |-----> Satisfied, if every atom has a value
//!   ⌃              +-------------+
//!   |                      |
//!   |                      | if some clause is unsatisfiable
//!   |                      ⌄
//!   |            +-------------------+
//!   +------------| AnalyzingConflict |-----> Unsatisfied, if the conflict is on level 0
//!    (backjump)  +-------------------+
//! ```
//!
//! If the formula contains an empty clause, the solve begins (and ends) in the unsatisfied phase, without any propagation.
//!
//! # Limits
//!
//! A solve may be given a [time limit](crate::config::Config::time_limit) and/or a [decision limit](crate::config::Config::decision_limit).
//! If either limit is reached before satisfiability is determined, the solve ends with the context [unresolved](crate::context::ContextState::Unresolved), and an [unknown](Report::Unknown) report.
//!
//! # Example
//!
//! ```rust
//! # use marten_sat::config::Config;
//! # use marten_sat::context::Context;
//! # use marten_sat::reports::Report;
//! # use marten_sat::structures::literal::{CLiteral, Literal};
//! let mut the_context = Context::from_config(Config::default());
//! let [p, q] = *the_context.fresh_literals(2).as_slice() else {
//!     panic!("Insufficient literals");
//! };
//!
//! assert!(the_context.add_clause(vec![-p, q]).is_ok());
//! assert!(the_context.add_clause(vec![p, -q]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(p.atom()), the_context.value_of(q.atom()));
//!
//! // A context is solved at most once.
//! assert!(the_context.solve().is_err());
//! ```

use crate::{
    context::{ContextState, GenericContext},
    db::ClauseKey,
    misc::log::targets::{self},
    procedures::{
        analysis::AnalysisResult, bcp::PropagationOk, decision::DecisionOk,
    },
    reports::Report,
    structures::consequence::AssignmentSource,
    types::err::{self},
};

/// The phases of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolvePhase {
    /// Extending the valuation by propagation.
    Propagating,

    /// Extending the valuation by a decision.
    Deciding,

    /// Analysing the clause with the given key, which is unsatisfiable on the current valuation.
    AnalyzingConflict(ClauseKey),

    /// The formula is satisfiable on the current valuation.
    Satisfied,

    /// The formula is unsatisfiable.
    Unsatisfied,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// For documentation see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::StateError::SolveComplete.into());
        }
        let total_time = std::time::Instant::now();
        self.state = ContextState::Solving;

        let mut phase = match self.clause_db.trivially_unsatisfiable() {
            true => SolvePhase::Unsatisfied,
            false => SolvePhase::Propagating,
        };

        'solve_loop: loop {
            self.counters.total_iterations += 1;
            self.counters.time = total_time.elapsed();

            if self
                .config
                .time_limit
                .is_some_and(|limit| self.counters.time > limit)
            {
                log::info!(target: targets::SOLVE, "Time limit reached");
                self.state = ContextState::Unresolved;
                break 'solve_loop;
            }

            phase = match phase {
                SolvePhase::Propagating => match self.propagate()? {
                    PropagationOk::Exhausted if self.atom_db.all_assigned() => {
                        SolvePhase::Satisfied
                    }

                    PropagationOk::Exhausted => SolvePhase::Deciding,

                    PropagationOk::Conflict(key) => {
                        self.counters.total_conflicts += 1;
                        SolvePhase::AnalyzingConflict(key)
                    }
                },

                SolvePhase::Deciding => {
                    if self
                        .config
                        .decision_limit
                        .is_some_and(|limit| self.counters.total_decisions >= limit)
                    {
                        log::info!(target: targets::SOLVE, "Decision limit reached");
                        self.state = ContextState::Unresolved;
                        break 'solve_loop;
                    }

                    match self.make_decision()? {
                        DecisionOk::Literal(decision) => {
                            let level = self.trail.level() + 1;
                            self.atom_db
                                .assign(decision, level, AssignmentSource::Decision)?;
                            self.trail.store_decision(decision);
                            self.counters.total_decisions += 1;
                            SolvePhase::Propagating
                        }

                        DecisionOk::Exhausted => SolvePhase::Satisfied,
                    }
                }

                SolvePhase::AnalyzingConflict(key) => match self.conflict_analysis(key)? {
                    AnalysisResult::FundamentalConflict => SolvePhase::Unsatisfied,

                    AnalysisResult::AssertingClause { backjump_level, .. } => {
                        self.backjump(backjump_level);
                        SolvePhase::Propagating
                    }
                },

                SolvePhase::Satisfied => {
                    self.state = ContextState::Satisfiable;
                    break 'solve_loop;
                }

                SolvePhase::Unsatisfied => {
                    self.state = ContextState::Unsatisfiable;
                    break 'solve_loop;
                }
            };
        }

        self.counters.time = total_time.elapsed();
        log::info!(target: targets::SOLVE, "{} after {} conflicts and {} decisions", self.state, self.counters.total_conflicts, self.counters.total_decisions);

        Ok(self.report())
    }
}
