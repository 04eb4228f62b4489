/*!
Random k-SAT formulas.

Each clause is built by sampling *k* distinct atoms uniformly (without replacement) from the atoms of the formula, and pairing each atom with a polarity from a fair coin.
Clauses are sampled independently, and so a formula may contain duplicate clauses.

```rust
# use sat_corpus::generators::ksat::KSat;
# use sat_corpus::generic::random::MinimalPCG32;
# use sat_corpus::structures::clause::Clause;
use rand::SeedableRng;

let ksat = KSat::new(5, 4, 3).expect("valid parameters");

let formula = ksat.generate(&mut MinimalPCG32::seed_from_u64(42));
let again = ksat.generate(&mut MinimalPCG32::seed_from_u64(42));

assert_eq!(formula, again);
assert!(formula.clauses().iter().all(|clause| clause.size() == 3 && clause.has_distinct_atoms()));
assert_eq!(formula.comments(), ["Random 3-SAT instance", "Variables: 5, Clauses: 4"]);
```

# Parallel sampling

[KSat::generate_parallel] splits the clauses into blocks of [SAMPLE_BLOCK] clauses, and samples block *b* from a stream seeded by [derived_seed](crate::generic::random::derived_seed) of the seed and *b*.
Blocks are shared between workers, though as each block has its own stream the formula depends on the seed only, and not on the count of workers.

Note, the streams used by [KSat::generate_parallel] differ from the stream used by [KSat::generate], and so the two methods give different formulas for the same seed.
*/

use rand::{seq::index, Rng, SeedableRng};

use crate::{
    config::defaults::SAMPLE_BLOCK,
    generic::random::{derived_seed, MinimalPCG32},
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Parameters of a random k-SAT formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KSat {
    /// The count of atoms, each clause is over atoms in [1..=atom_count].
    atom_count: Atom,

    /// The count of clauses.
    clause_count: usize,

    /// The length of each clause, aka. *k*.
    length: u32,
}

impl KSat {
    /// Parameters for a formula of `clause_count` clauses, each over `length` distinct atoms from [1..=`atom_count`].
    ///
    /// Fails if `atom_count` is not positive, `clause_count` is negative, or `length` is not in [1..=`atom_count`].
    pub fn new(atom_count: i64, clause_count: i64, length: i64) -> Result<Self, err::ParameterError> {
        if atom_count <= 0 {
            return Err(err::ParameterError::AtomCount(atom_count));
        }
        if clause_count < 0 {
            return Err(err::ParameterError::ClauseCount(clause_count));
        }
        if length <= 0 || length > atom_count {
            return Err(err::ParameterError::ClauseLength {
                length,
                atom_count,
            });
        }

        let atom_count = match Atom::try_from(atom_count) {
            Ok(count) if count <= ATOM_MAX => count,
            _ => return Err(err::ParameterError::Size),
        };
        let Ok(clause_count) = usize::try_from(clause_count) else {
            return Err(err::ParameterError::Size);
        };

        Ok(KSat {
            atom_count,
            clause_count,
            // At most atom_count, and so within bounds.
            length: length as u32,
        })
    }

    pub fn atom_count(&self) -> Atom {
        self.atom_count
    }

    pub fn clause_count(&self) -> usize {
        self.clause_count
    }

    /// The length of each clause, aka. *k*.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The comments which describe a formula from these parameters: the family of the formula and the counts of atoms and clauses.
    pub fn comments(&self) -> [String; 2] {
        [
            format!("Random {}-SAT instance", self.length),
            format!(
                "Variables: {}, Clauses: {}",
                self.atom_count, self.clause_count
            ),
        ]
    }

    /// A random formula, with randomness drawn from `rng`.
    ///
    /// Clauses are sampled in order, and for each clause the atoms are sampled before the polarities.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Formula {
        log::debug!(target: targets::GENERATE, "Sampling {} clauses of length {} over {} atoms", self.clause_count, self.length, self.atom_count);

        let mut formula = Formula::with_capacity(self.atom_count, self.clause_count);
        for _ in 0..self.clause_count {
            formula.push_clause(self.sample_clause(rng));
        }
        for comment in self.comments() {
            formula.push_comment(comment);
        }
        formula
    }

    /// A random formula sampled by `workers` threads, with each block of clauses drawn from a stream derived from `seed`.
    ///
    /// The formula depends on `seed` only, any count of workers gives the same formula.
    pub fn generate_parallel(&self, seed: u64, workers: usize) -> Formula {
        let block_count = self.clause_count.div_ceil(SAMPLE_BLOCK);
        let per_worker = block_count.div_ceil(workers.max(1)).max(1);

        log::debug!(target: targets::GENERATE, "Sampling {block_count} blocks across {workers} workers");

        let sampling = crossbeam::thread::scope(|scope| {
            let handles = (0..block_count)
                .step_by(per_worker)
                .map(|first| {
                    let last = std::cmp::min(first + per_worker, block_count);
                    scope.spawn(move |_| {
                        (first..last)
                            .map(|block| self.sample_block(seed, block))
                            .collect::<Vec<_>>()
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Result<Vec<_>, _>>()
        });

        let blocks = match sampling {
            Ok(Ok(blocks)) => blocks,
            Ok(Err(panic)) | Err(panic) => std::panic::resume_unwind(panic),
        };

        let mut formula = Formula::with_capacity(self.atom_count, self.clause_count);
        for clause in blocks.into_iter().flatten().flatten() {
            formula.push_clause(clause);
        }
        for comment in self.comments() {
            formula.push_comment(comment);
        }
        formula
    }

    /// The clauses of the given block, from a fresh stream.
    fn sample_block(&self, seed: u64, block: usize) -> Vec<CClause> {
        let mut rng = MinimalPCG32::seed_from_u64(derived_seed(seed, block as u64));

        let start = block * SAMPLE_BLOCK;
        let end = std::cmp::min(start + SAMPLE_BLOCK, self.clause_count);

        (start..end).map(|_| self.sample_clause(&mut rng)).collect()
    }

    /// A clause of `length` literals over distinct atoms.
    fn sample_clause<R: Rng + ?Sized>(&self, rng: &mut R) -> CClause {
        let indices = index::sample(rng, self.atom_count as usize, self.length as usize);

        let clause: CClause = indices
            .into_iter()
            .map(|index| CLiteral::new(index as Atom + 1, rng.gen_bool(0.5)))
            .collect();

        log::trace!(target: targets::GENERATE, "Sampled clause {clause:?}");
        clause
    }
}
