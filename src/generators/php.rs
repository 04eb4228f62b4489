/*!
Pigeonhole formulas.

A pigeonhole formula with *n* holes and multiplier *k* states that *k·n + 1* pigeons may be placed in *n* holes, with at most *k* pigeons in any hole.
As the holes have room for only *k·n* pigeons, every pigeonhole formula is unsatisfiable, and this is known without consulting an oracle.
With *k* = 1 the formula is the classical statement that *n + 1* pigeons do not fit into *n* holes.

There is one atom for each (pigeon, hole) pair, the atom of pigeon *i* and hole *j* (each from 1) is *(i - 1)·n + j*.
The clauses are, in order:
1. For each pigeon, a clause stating the pigeon is in some hole.
2. For each hole, and each (lexicographically ordered) combination of *k + 1* pigeons, a clause stating some pigeon of the combination is not in the hole.

```rust
# use sat_corpus::generators::php::Php;
# use sat_corpus::reports::Report;
let php = Php::new(2, 1).expect("valid parameters");
let formula = php.generate();

assert_eq!(formula.atom_count(), 6);
assert_eq!(
    formula.clauses(),
    [
        vec![1, 2],
        vec![3, 4],
        vec![5, 6],
        vec![-1, -3],
        vec![-1, -5],
        vec![-3, -5],
        vec![-2, -4],
        vec![-2, -6],
        vec![-4, -6],
    ]
);
assert_eq!(php.report(), Report::Unsatisfiable);
```
*/

use itertools::Itertools;

use crate::{
    misc::log::targets::{self},
    reports::Report,
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Parameters of a pigeonhole formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Php {
    holes: u32,
    multiplier: u32,
    pigeons: u32,
    clause_count: usize,
}

impl Php {
    /// Parameters for a formula with `holes` holes and `multiplier · holes + 1` pigeons.
    ///
    /// Fails if either parameter is not positive, or if the formula would have too many atoms or clauses to represent.
    pub fn new(holes: i64, multiplier: i64) -> Result<Self, err::ParameterError> {
        if holes <= 0 {
            return Err(err::ParameterError::HoleCount(holes));
        }
        if multiplier <= 0 {
            return Err(err::ParameterError::Multiplier(multiplier));
        }

        let (Ok(holes), Ok(multiplier)) = (u32::try_from(holes), u32::try_from(multiplier)) else {
            return Err(err::ParameterError::Size);
        };

        let pigeons = multiplier
            .checked_mul(holes)
            .and_then(|capacity| capacity.checked_add(1))
            .ok_or(err::ParameterError::Size)?;

        match pigeons.checked_mul(holes) {
            Some(atoms) if atoms <= ATOM_MAX => {}
            _ => return Err(err::ParameterError::Size),
        }

        let clause_count = binomial(pigeons as u128, multiplier as u128 + 1)
            .and_then(|per_hole| per_hole.checked_mul(holes as u128))
            .and_then(|exclusions| exclusions.checked_add(pigeons as u128))
            .and_then(|count| usize::try_from(count).ok())
            .ok_or(err::ParameterError::Size)?;

        Ok(Php {
            holes,
            multiplier,
            pigeons,
            clause_count,
        })
    }

    pub fn holes(&self) -> u32 {
        self.holes
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// The count of pigeons, `multiplier · holes + 1`.
    pub fn pigeons(&self) -> u32 {
        self.pigeons
    }

    /// The count of atoms, one for each (pigeon, hole) pair.
    pub fn atom_count(&self) -> Atom {
        self.pigeons * self.holes
    }

    /// The count of clauses.
    pub fn clause_count(&self) -> usize {
        self.clause_count
    }

    /// The satisfiability of the formula, which is always unsatisfiable.
    pub fn report(&self) -> Report {
        Report::Unsatisfiable
    }

    /// A comment which describes the formula.
    pub fn comment(&self) -> String {
        let family = match self.multiplier {
            1 => "PHP".to_string(),
            k => format!("{k}-PHP"),
        };
        format!(
            "{family} formula for {} pigeons and {} holes",
            self.pigeons, self.holes
        )
    }

    /// The atom for a pigeon and a hole, each counted from 1.
    fn atom(&self, pigeon: u32, hole: u32) -> Atom {
        (pigeon - 1) * self.holes + hole
    }

    /// The formula.
    pub fn generate(&self) -> Formula {
        log::debug!(target: targets::GENERATE, "Encoding {} pigeons in {} holes", self.pigeons, self.holes);

        let mut formula = Formula::with_capacity(self.atom_count(), self.clause_count);
        formula.push_comment(self.comment());

        for pigeon in 1..=self.pigeons {
            let somewhere: CClause = (1..=self.holes)
                .map(|hole| CLiteral::new(self.atom(pigeon, hole), true))
                .collect();
            formula.push_clause(somewhere);
        }

        for hole in 1..=self.holes {
            for crowd in (1..=self.pigeons).combinations(self.multiplier as usize + 1) {
                let not_all_here: CClause = crowd
                    .into_iter()
                    .map(|pigeon| CLiteral::new(self.atom(pigeon, hole), false))
                    .collect();
                formula.push_clause(not_all_here);
            }
        }

        log::info!(target: targets::GENERATE, "Encoded {} atoms and {} clauses", formula.atom_count(), formula.clause_count());
        formula
    }
}

/// *n* choose *r*, if representable.
fn binomial(n: u128, r: u128) -> Option<u128> {
    if r > n {
        return Some(0);
    }
    let r = std::cmp::min(r, n - r);
    let mut count: u128 = 1;
    for i in 0..r {
        // count is (n choose i), and (n choose i)·(n - i) = (n choose i + 1)·(i + 1).
        count = count.checked_mul(n - i)? / (i + 1);
    }
    Some(count)
}
