//! Valuations, aka. assignments of (boolean) values to atoms.
//!
//! The canonical valuation is a vector indexed by atoms, where index 0 (not an atom) is always `None`.
//! So, a valuation for a formula over *m* atoms has length *m + 1*.

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// Something which may return the value of an atom.
pub trait Valuation {
    /// The value of an atom, if the atom has a value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The count of atoms the valuation is defined over.
    fn atom_count(&self) -> usize;
}

/// The canonical implementation of a valuation.
pub type CValuation = Vec<Option<bool>>;

impl Valuation for [Option<bool>] {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn atom_count(&self) -> usize {
        self.len().saturating_sub(1)
    }
}

impl Valuation for CValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.as_slice().value_of(atom)
    }

    fn atom_count(&self) -> usize {
        self.as_slice().atom_count()
    }
}

/// A valuation over `atom_count` atoms, with the value of each atom given by the polarity of some literal.
///
/// Literals whose atom exceeds `atom_count` are skipped.
/// If an atom appears with both polarities the last literal wins.
pub fn from_literals(atom_count: Atom, literals: impl IntoIterator<Item = CLiteral>) -> CValuation {
    let mut valuation: CValuation = vec![None; atom_count as usize + 1];
    for literal in literals {
        if let Some(value) = valuation.get_mut(literal.atom() as usize) {
            *value = Some(literal.polarity());
        }
    }
    if let Some(top) = valuation.first_mut() {
        *top = None;
    }
    valuation
}

/// The valuation as a string of literals, in DIMACS form, omitting atoms without a value.
pub fn as_dimacs(valuation: &impl Valuation) -> String {
    (1..=valuation.atom_count() as Atom)
        .filter_map(|atom| {
            valuation
                .value_of(atom)
                .map(|value| CLiteral::new(atom, value).to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
