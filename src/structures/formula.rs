//! Formulas, aka. a sequence of clauses interpreted as the conjunction of those clauses.
//!
//! A formula also declares a count of atoms, and every literal in the formula is over an atom within that count.
//! The declared count may exceed the atoms which appear in clauses, e.g. a random formula over many atoms with few clauses.
//!
//! ```rust
//! # use sat_corpus::structures::formula::Formula;
//! let mut formula = Formula::new(3);
//!
//! assert!(formula.add_clause(vec![1, -2]).is_ok());
//! assert!(formula.add_clause(vec![4]).is_err());
//! assert!(formula.add_clause(vec![0]).is_err());
//!
//! formula.push_comment("A small formula");
//! assert_eq!(formula.clause_count(), 1);
//! assert_eq!(formula.comments(), ["A small formula"]);
//! ```

use crate::{
    reports::Report,
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::Literal,
        valuation::Valuation,
    },
    types::err::{self},
};

/// The prefix of the comment recording the satisfiability status of a formula.
pub const STATUS_PREFIX: &str = "Status: ";

/// The most clauses reserved in advance by [Formula::with_capacity].
pub const RESERVE_LIMIT: usize = 1 << 16;

/// A formula, with comments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    /// The declared count of atoms.
    atom_count: Atom,

    /// The clauses of the formula, in order.
    clauses: Vec<CClause>,

    /// Free-form comments, without any DIMACS prefix.
    comments: Vec<String>,
}

impl Formula {
    /// A formula over `atom_count` atoms, without clauses or comments.
    pub fn new(atom_count: Atom) -> Self {
        Formula {
            atom_count,
            clauses: Vec::default(),
            comments: Vec::default(),
        }
    }

    /// A formula over `atom_count` atoms with capacity for `clause_count` clauses, up to [RESERVE_LIMIT].
    pub fn with_capacity(atom_count: Atom, clause_count: usize) -> Self {
        Formula {
            atom_count,
            clauses: Vec::with_capacity(clause_count.min(RESERVE_LIMIT)),
            comments: Vec::default(),
        }
    }

    /// Adds a clause to the formula, after checking each literal is non-zero and over a declared atom.
    pub fn add_clause(&mut self, clause: CClause) -> Result<(), err::FormulaError> {
        for literal in clause.literals() {
            if literal == 0 {
                return Err(err::FormulaError::ZeroLiteral);
            }
            if literal.atom() > self.atom_count || literal.atom() > ATOM_MAX {
                return Err(err::FormulaError::AtomOutOfBounds {
                    atom: literal.atom(),
                    atom_count: self.atom_count,
                });
            }
        }
        self.clauses.push(clause);
        Ok(())
    }

    /// Adds a clause without checks.
    ///
    /// For use by generators, where each clause is well-formed by construction.
    pub(crate) fn push_clause(&mut self, clause: CClause) {
        debug_assert!(clause
            .literals()
            .all(|literal| literal != 0 && literal.atom() <= self.atom_count));
        self.clauses.push(clause);
    }

    /// Appends a comment.
    ///
    /// Comments are single lines, so a comment which spans lines is appended as one comment for each line.
    /// A trailing carriage return is removed from each line.
    ///
    /// ```rust
    /// # use sat_corpus::structures::formula::Formula;
    /// let mut formula = Formula::new(1);
    /// formula.push_comment("first\r\nsecond");
    /// assert_eq!(formula.comments(), ["first", "second"]);
    /// ```
    pub fn push_comment(&mut self, comment: impl Into<String>) {
        let comment = comment.into();
        match comment.contains(['\n', '\r']) {
            false => self.comments.push(comment),
            true => {
                for line in comment.split('\n') {
                    self.comments.push(line.trim_end_matches('\r').to_string());
                }
            }
        }
    }

    /// Appends a comment recording the satisfiability status of the formula.
    pub fn push_status(&mut self, report: Report) {
        self.push_comment(format!("{STATUS_PREFIX}{report}"));
    }

    /// The status recorded by the first status comment of the formula, if one exists and is readable.
    pub fn status(&self) -> Option<Report> {
        self.comments
            .iter()
            .find_map(|comment| comment.strip_prefix(STATUS_PREFIX))
            .and_then(|status| status.trim().parse().ok())
    }

    /// The comments of the formula, in order.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// The clauses of the formula, in order.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The declared count of atoms.
    pub fn atom_count(&self) -> Atom {
        self.atom_count
    }

    /// The count of clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Whether every clause of the formula is satisfied by the valuation.
    ///
    /// Atoms without a value satisfy no literal.
    pub fn evaluate(&self, valuation: &impl Valuation) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.satisfied_by(valuation))
    }
}

#[cfg(test)]
mod formula_tests {
    use super::*;
    use crate::structures::valuation::from_literals;

    #[test]
    fn out_of_bounds_atom() {
        let mut formula = Formula::new(2);
        assert_eq!(
            formula.add_clause(vec![1, -3]),
            Err(err::FormulaError::AtomOutOfBounds {
                atom: 3,
                atom_count: 2
            })
        );
        assert_eq!(formula.clause_count(), 0);
    }

    #[test]
    fn status_comment() {
        let mut formula = Formula::new(1);
        assert_eq!(formula.status(), None);

        formula.push_comment("Some note");
        formula.push_status(Report::Unsatisfiable);

        assert_eq!(formula.comments()[1], "Status: UNSAT");
        assert_eq!(formula.status(), Some(Report::Unsatisfiable));
    }

    #[test]
    fn evaluation() {
        let mut formula = Formula::new(2);
        assert!(formula.add_clause(vec![1, 2]).is_ok());
        assert!(formula.add_clause(vec![-1]).is_ok());

        assert!(formula.evaluate(&from_literals(2, [-1, 2])));
        assert!(!formula.evaluate(&from_literals(2, [1, 2])));
        assert!(!formula.evaluate(&from_literals(2, [-1])));
    }

    #[test]
    fn large_clause_count() {
        let formula = Formula::with_capacity(3, usize::MAX);
        assert!(formula.clauses.capacity() <= RESERVE_LIMIT);
        assert_eq!(formula.clause_count(), 0);

        let small = Formula::with_capacity(3, 10);
        assert!(small.clauses.capacity() >= 10);
    }

    #[test]
    fn multi_line_comments() {
        let mut formula = Formula::new(1);
        formula.push_comment("first\nsecond");
        formula.push_comment("trailing\r");
        formula.push_comment("ends\n");
        formula.push_comment("");

        assert_eq!(
            formula.comments(),
            ["first", "second", "trailing", "ends", "", ""]
        );
    }
}
