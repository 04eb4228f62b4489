//! Generic structures, not tied to formulas.

pub mod random;
