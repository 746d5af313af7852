use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self},
};

use std::io::BufRead;

/// Details of a formula read from a DIMACS representation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given in the problem specification.
    pub expected_atoms: usize,

    /// The count of clauses given in the problem specification.
    pub expected_clauses: usize,

    /// The count of clauses read, including any empty clause.
    pub added_clauses: usize,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Reads a DIMACS representation of a formula into the context.
    ///
    /// The representation must begin with a problem specification `p cnf <atoms> <clauses>`, though may be preceeded by comments.
    /// Following the problem line, each clause is a sequence of non-zero integers terminated by `0`, and a clause may span multiple lines.
    /// Lines beginning with `c` are comments, and a line beginning with `%` ends the formula.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use marten_sat::context::Context;
    /// # use marten_sat::config::Config;
    /// # use marten_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"c An example
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.added_clauses, 7);
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;

        // first phase, read until the problem specification
        'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(err::ParseError::ProblemSpecification.into()),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue 'preamble_loop,

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace().skip(1);
                    if problem_details.next() != Some("cnf") {
                        return Err(err::ParseError::ProblemSpecification.into());
                    }

                    let mut next_count = || -> Result<usize, err::ParseError> {
                        problem_details
                            .next()
                            .and_then(|count| count.parse::<usize>().ok())
                            .ok_or(err::ParseError::ProblemSpecification)
                    };
                    info.expected_atoms = next_count()?;
                    info.expected_clauses = next_count()?;
                    break 'preamble_loop;
                }

                Some(_) => return Err(err::ParseError::ProblemSpecification.into()),
            }
        }

        log::info!(target: targets::PARSE, "Expecting {} atoms and {} clauses", info.expected_atoms, info.expected_clauses);
        let atom_limit = u32::try_from(info.expected_atoms)
            .map_err(|_| err::ParseError::ProblemSpecification)?;
        self.ensure_atoms(atom_limit)?;

        // second phase, read until the formula ends
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,

                Some('c') => {}

                Some('p') => return Err(err::ParseError::MisplacedProblem(line_counter).into()),

                _ => {
                    for item in buffer.split_whitespace() {
                        let Ok(int) = item.parse::<isize>() else {
                            return Err(err::ParseError::Literal(line_counter).into());
                        };

                        if int == 0 {
                            let the_clause = std::mem::take(&mut clause_buffer);
                            self.add_clause(the_clause)?;
                            info.added_clauses += 1;
                            continue;
                        }

                        match CLiteral::from_dimacs(int) {
                            Some(literal) if int.unsigned_abs() <= info.expected_atoms => {
                                clause_buffer.push(literal)
                            }
                            _ => return Err(err::ParseError::AtomOutOfRange(line_counter).into()),
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ParseError::UnterminatedClause.into());
        }

        if info.added_clauses != info.expected_clauses {
            return Err(err::ParseError::ClauseCount {
                expected: info.expected_clauses,
                found: info.added_clauses,
            }
            .into());
        }

        log::info!(target: targets::PARSE, "Read {} clauses over {} atoms", info.added_clauses, self.atom_db.count());
        Ok(info)
    }
}
