//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use sat_corpus::structures::clause::{CClause, Clause};
//! # use sat_corpus::structures::valuation::from_literals;
//! let clause: CClause = vec![1, -3, 5];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "1 -3 5 0");
//!
//! assert!(clause.satisfied_by(&from_literals(5, [-1, -3, -5])));
//! assert!(!clause.satisfied_by(&from_literals(5, [-1, 3, -5])));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Order of literals is preserved, as the order a clause was generated in is part of a corpus.

use std::collections::HashSet;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    ///
    /// Literals are separated by a single space.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// An iterator over all atoms in the clause, in order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal of the clause is true on the valuation.
    fn satisfied_by(&self, valuation: &impl Valuation) -> bool;

    /// Whether no atom appears twice in the clause (with either polarity).
    fn has_distinct_atoms(&self) -> bool;
}

/// The implementation of a clause as a vector of literals.
pub type IntClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = IntClause;

impl Clause for IntClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if zero {
            if !dimacs_string.is_empty() {
                dimacs_string.push(' ');
            }
            dimacs_string.push('0');
        }
        dimacs_string
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_by(&self, valuation: &impl Valuation) -> bool {
        self.literals()
            .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    }

    fn has_distinct_atoms(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.len());
        self.atoms().all(|atom| seen.insert(atom))
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;
    use crate::structures::valuation::from_literals;

    #[test]
    fn dimacs_strings() {
        let clause: CClause = vec![-2, 4];
        assert_eq!(clause.as_dimacs(true), "-2 4 0");
        assert_eq!(clause.as_dimacs(false), "-2 4");

        let empty: CClause = vec![];
        assert_eq!(empty.as_dimacs(true), "0");
        assert_eq!(empty.as_dimacs(false), "");
    }

    #[test]
    fn distinct_atoms() {
        assert!(vec![1, -2, 3].has_distinct_atoms());
        assert!(!vec![1, -2, -1].has_distinct_atoms());
        assert!(!vec![2, 2].has_distinct_atoms());
    }

    #[test]
    fn empty_clause_is_false() {
        let empty: CClause = vec![];
        assert!(!empty.satisfied_by(&from_literals(2, [1, 2])));
    }
}
