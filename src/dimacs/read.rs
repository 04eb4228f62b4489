use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Reads a formula in DIMACS form.
///
/// ```rust,ignore
/// let formula = read_dimacs(BufReader::new(&file))?;
/// ```
///
/// ```rust
/// # use sat_corpus::dimacs::read_dimacs;
/// # use sat_corpus::types::err::{ErrorKind, ParseError};
/// let dimacs = b"c Two clauses
/// p cnf 3 2
///  1 -2 0
/// -1
///  3 0
/// ";
///
/// let formula = read_dimacs(dimacs.as_slice()).expect("well formed");
/// assert_eq!(formula.clauses(), [vec![1, -2], vec![-1, 3]]);
/// assert_eq!(formula.comments(), ["Two clauses"]);
///
/// let missing_zero = b"p cnf 2 1\n1 2\n";
/// assert_eq!(
///     read_dimacs(missing_zero.as_slice()),
///     Err(ErrorKind::Parse(ParseError::Unterminated(2)))
/// );
/// ```
#[allow(unused_labels)]
pub fn read_dimacs(mut reader: impl BufRead) -> Result<Formula, err::ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut comments: Vec<String> = Vec::default();

    let mut line_counter = 0;

    // first phase, read until the problem line
    let (atom_count, clause_count) = 'preamble_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => return Err(err::ErrorKind::from(err::ParseError::MissingProblem)),
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter + 1))),
        }

        let line = buffer.trim_end_matches(['\n', '\r']);

        match line.trim_start().chars().next() {
            None => continue,

            Some('c') => comments.push(comment_text(line)),

            Some('p') => break 'preamble_loop problem_counts(line, line_counter)?,

            _ => return Err(err::ErrorKind::from(err::ParseError::MissingProblem)),
        }
    };

    log::debug!(target: targets::DIMACS, "Expecting {atom_count} atoms and {clause_count} clauses");

    let mut formula = Formula::with_capacity(atom_count, clause_count);
    for comment in comments {
        formula.push_comment(comment);
    }

    let mut clause_buffer: CClause = Vec::default();
    let mut clause_start = 0;

    // second phase, read until the formula ends
    'formula_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break 'formula_loop,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter + 1))),
        }

        let line = buffer.trim_end_matches(['\n', '\r']);

        match line.trim_start().chars().next() {
            None => {}

            Some('%') => break 'formula_loop,

            Some('c') => formula.push_comment(comment_text(line)),

            Some('p') => {
                return Err(err::ErrorKind::from(err::ParseError::MisplacedProblem(
                    line_counter,
                )))
            }

            _ => {
                for item in line.split_whitespace() {
                    let literal = match item.parse::<CLiteral>() {
                        Ok(literal) => literal,
                        Err(_) => {
                            return Err(err::ErrorKind::from(err::ParseError::Literal(
                                line_counter,
                            )))
                        }
                    };

                    if literal == 0 {
                        let the_clause = std::mem::take(&mut clause_buffer);
                        formula.push_clause(the_clause);
                        continue;
                    }

                    if literal.atom() > atom_count {
                        return Err(err::ErrorKind::from(err::ParseError::AtomOutOfBounds {
                            line: line_counter,
                            atom: literal.atom(),
                            atom_count,
                        }));
                    }

                    if clause_buffer.is_empty() {
                        clause_start = line_counter;
                    }
                    clause_buffer.push(literal);
                }
            }
        }
    }

    if !clause_buffer.is_empty() {
        return Err(err::ErrorKind::from(err::ParseError::Unterminated(
            clause_start,
        )));
    }

    if formula.clause_count() != clause_count {
        return Err(err::ErrorKind::from(err::ParseError::ClauseCount {
            expected: clause_count,
            found: formula.clause_count(),
        }));
    }

    log::debug!(target: targets::DIMACS, "Read {} clauses and {} comments over {line_counter} lines", formula.clause_count(), formula.comments().len());

    Ok(formula)
}

/// The text of a comment line, without the `c` and (at most) one following space.
fn comment_text(line: &str) -> String {
    let text = line.trim_start();
    let text = text.strip_prefix('c').unwrap_or(text);
    text.strip_prefix(' ').unwrap_or(text).to_string()
}

/// The atom and clause counts from a problem line of the form `p cnf <atoms> <clauses>`.
fn problem_counts(line: &str, line_number: usize) -> Result<(Atom, usize), err::ParseError> {
    let malformed = err::ParseError::ProblemSpecification(line_number);

    let mut problem_details = line.split_whitespace();

    if problem_details.next() != Some("p") || problem_details.next() != Some("cnf") {
        return Err(malformed);
    }

    let atom_count: Atom = match problem_details.next().map(str::parse::<CLiteral>) {
        Some(Ok(count)) if count >= 0 => count as Atom,
        _ => return Err(malformed),
    };

    let clause_count: usize = match problem_details.next().map(str::parse::<usize>) {
        Some(Ok(count)) => count,
        _ => return Err(malformed),
    };

    match problem_details.next() {
        None => Ok((atom_count, clause_count)),
        Some(_) => Err(malformed),
    }
}

#[cfg(test)]
mod read_tests {
    use super::*;

    fn read(dimacs: &str) -> Result<Formula, err::ErrorKind> {
        read_dimacs(dimacs.as_bytes())
    }

    #[test]
    fn problem_line() {
        assert_eq!(problem_counts("p cnf 3 2", 1), Ok((3, 2)));
        assert_eq!(problem_counts("p  cnf  3   2 ", 1), Ok((3, 2)));

        for malformed in ["p cnf 3", "p dnf 3 2", "p cnf -3 2", "p cnf 3 x", "p cnf 3 2 1", "p"] {
            assert_eq!(
                problem_counts(malformed, 4),
                Err(err::ParseError::ProblemSpecification(4))
            );
        }
    }

    #[test]
    fn comments_kept_verbatim() {
        let formula = read("c  indented\nc\nc Status: SAT\np cnf 1 1\nc late\n1 0\n").expect("valid");
        assert_eq!(formula.comments(), [" indented", "", "Status: SAT", "late"]);
    }

    #[test]
    fn missing_problem() {
        assert_eq!(
            read("c nothing else\n"),
            Err(err::ErrorKind::Parse(err::ParseError::MissingProblem))
        );
        assert_eq!(
            read("1 2 0\np cnf 2 1\n"),
            Err(err::ErrorKind::Parse(err::ParseError::MissingProblem))
        );
        assert_eq!(
            read(""),
            Err(err::ErrorKind::Parse(err::ParseError::MissingProblem))
        );
    }

    #[test]
    fn second_problem() {
        assert_eq!(
            read("p cnf 2 1\n1 0\np cnf 2 1\n"),
            Err(err::ErrorKind::Parse(err::ParseError::MisplacedProblem(3)))
        );
    }

    #[test]
    fn atom_bound() {
        assert_eq!(
            read("p cnf 2 1\n1 -3 0\n"),
            Err(err::ErrorKind::Parse(err::ParseError::AtomOutOfBounds {
                line: 2,
                atom: 3,
                atom_count: 2
            }))
        );
    }

    #[test]
    fn bad_literal() {
        assert_eq!(
            read("p cnf 2 1\n1 x 0\n"),
            Err(err::ErrorKind::Parse(err::ParseError::Literal(2)))
        );
    }

    #[test]
    fn clause_count() {
        assert_eq!(
            read("p cnf 2 2\n1 0\n"),
            Err(err::ErrorKind::Parse(err::ParseError::ClauseCount {
                expected: 2,
                found: 1
            }))
        );
    }

    #[test]
    fn satlib_footer() {
        let formula = read("p cnf 2 2\n1 2 0\n-1 0\n%\n0\n\n").expect("valid");
        assert_eq!(formula.clauses(), [vec![1, 2], vec![-1]]);
    }

    #[test]
    fn empty_clause_and_crlf() {
        let formula = read("p cnf 2 2\r\n0\r\n1 -2 0\r\n").expect("valid");
        assert_eq!(formula.clauses(), [vec![], vec![1, -2]]);
    }

    #[test]
    fn oversized_problem_line() {
        assert_eq!(
            read("p cnf 1 18446744073709551615\n1 0\n"),
            Err(err::ErrorKind::Parse(err::ParseError::ClauseCount {
                expected: usize::MAX,
                found: 1
            }))
        );
    }
}
