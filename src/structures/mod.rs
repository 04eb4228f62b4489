//! Key structures, such as literals, clauses, and formulas.
//!
//! Literals and clauses are defined first as traits, with a 'canonical' implementation used throughout the library.
//! Formulas are a plain structure, as there is only one representation of interest.
//!
//! ## Formulas
//!
//! A formula is a sequence of [clauses](clause), interpreted as the conjunction of those clauses, together with a declared count of [atoms](atom) and a sequence of comments.
//! Comments are metadata only, e.g. the satisfiability status of a labeled formula, and are never interpreted as part of the formula.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;
