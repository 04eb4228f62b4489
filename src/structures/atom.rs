/*!
An atom (aka. a 'variable').

Atoms are numbered from 1, following the DIMACS representation of a formula.
A formula declares some count *m* of atoms, and every atom appearing in the formula is in [1..=*m*].

```rust
# use sat_corpus::structures::atom::Atom;
let m: Atom = 5;
let atoms = (1..=m).collect::<Vec<Atom>>();
assert_eq!(atoms.len(), 5);
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Atoms are paired with a polarity as a signed integer, and so the bound is that of the integer representation.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
