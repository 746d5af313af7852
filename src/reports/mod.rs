/*!
Reports for the context.

A [Report] summarises a solve, and [write_verdict](crate::context::GenericContext::write_verdict) writes the summary together with any valuation found.

# Example

```rust
# use marten_sat::context::Context;
# use marten_sat::config::Config;
# use marten_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());
let dimacs = b"p cnf 3 3\n1 0\n-1 2 0\n-2 -3 0\n";
assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

let mut verdict = vec![];
assert!(the_context.write_verdict(&mut verdict).is_ok());
assert_eq!(verdict, b"SAT\n1 2 -3\n");
```
*/

use std::io::Write;

use crate::context::{ContextState, GenericContext};

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Solving | ContextState::Unresolved => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl<R: rand::Rng> GenericContext<R> {
    /// Writes the verdict of a solve.
    ///
    /// - `SAT`, followed by a line with the valuation as DIMACS literals, if the formula is satisfiable.
    /// - `UNSAT`, if the formula is unsatisfiable.
    /// - `UNKNOWN`, otherwise.
    pub fn write_verdict(&self, mut writer: impl Write) -> std::io::Result<()> {
        match self.report() {
            Report::Satisfiable => {
                writeln!(writer, "SAT")?;
                writeln!(writer, "{}", self.atom_db.valuation_dimacs())
            }
            Report::Unsatisfiable => writeln!(writer, "UNSAT"),
            Report::Unknown => writeln!(writer, "UNKNOWN"),
        }
    }
}
