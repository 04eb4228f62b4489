/*!
The pipeline from parameters to a (labeled) formula in a `.cnf` file.

For a random k-SAT formula the steps are:
1. Check the extension of the path.
2. Check the parameters.
3. Generate the formula, from the given seed or from a fresh seed.
4. Label the formula with an oracle, recording the status as a comment.
5. Write the formula.

Any failure ends the pipeline before the formula is written, and so no file is written without a label.
In particular, if the oracle makes no decision (after every configured attempt) the pipeline fails with an [OracleError::Unavailable](crate::types::err::OracleError::Unavailable).

A pigeonhole formula follows the same steps, except for labeling, as the status of a pigeonhole formula is known from its construction.

```rust,no_run
# use sat_corpus::config::Config;
# use sat_corpus::pipeline::Pipeline;
# use std::path::Path;
let pipeline = Pipeline::new(Config::default());

let formula = pipeline.ksat(Path::new("uf5-4.cnf"), 5, 4, 3, Some(42)).expect("labeled");
assert!(formula.status().is_some());
```
*/

use std::path::Path;

use rand::SeedableRng;

use crate::{
    config::Config,
    generators::{ksat::KSat, php::Php},
    generic::random::MinimalPCG32,
    io,
    misc::log::targets::{self},
    oracle::{self, Decision, Oracle, Report, Unknown},
    structures::{
        formula::Formula,
        valuation::{self},
    },
    types::err::{self},
};

/// A pipeline, with a configuration and an oracle.
pub struct Pipeline {
    config: Config,
    oracle: Box<dyn Oracle + Send + Sync>,
}

impl Pipeline {
    /// A pipeline with the oracle chosen by the configuration.
    pub fn new(config: Config) -> Self {
        let oracle = oracle::from_choice(&config.oracle);
        Pipeline { config, oracle }
    }

    /// A pipeline with the given oracle, in place of the oracle chosen by the configuration.
    pub fn with_oracle(config: Config, oracle: Box<dyn Oracle + Send + Sync>) -> Self {
        Pipeline { config, oracle }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn oracle(&self) -> &dyn Oracle {
        self.oracle.as_ref()
    }

    /// Labels the formula by appending a status comment, and returns the status.
    ///
    /// The oracle is asked at most `oracle_attempts` times, and only unknown decisions are retried.
    /// If configured, a witness given by the oracle is checked against the formula.
    pub fn label(&self, formula: &mut Formula) -> Result<Report, err::ErrorKind> {
        let attempts = self.config.oracle_attempts.value.max(1);
        let mut unknown = Unknown::Failure("no attempt was made".to_string());

        for attempt in 1..=attempts {
            log::debug!(target: targets::PIPELINE, "Asking {} for a decision, attempt {attempt} of {attempts}", self.oracle.name());

            match self.oracle.decide(formula, self.config.time_limit) {
                Decision::Unknown(reason) => {
                    log::warn!(target: targets::PIPELINE, "No decision on attempt {attempt}: {reason}");
                    unknown = reason;
                }

                decision => {
                    if let Some(witness) = decision.witness() {
                        log::trace!(target: targets::PIPELINE, "Witness: {}", valuation::as_dimacs(witness));

                        if self.config.check_witness.value && !formula.evaluate(witness) {
                            return Err(err::ErrorKind::from(err::OracleError::InvalidWitness));
                        }
                    }

                    let report = decision.report();
                    log::info!(target: targets::PIPELINE, "Status: {report}");
                    formula.push_status(report);
                    return Ok(report);
                }
            }
        }

        Err(err::ErrorKind::from(err::OracleError::Unavailable(unknown)))
    }

    /// Generates, labels, and writes a random k-SAT formula to `path`, returning the formula written.
    ///
    /// Without a seed a fresh seed is drawn, and logged, so the formula may be generated again.
    pub fn ksat(
        &self,
        path: &Path,
        atom_count: i64,
        clause_count: i64,
        length: i64,
        seed: Option<u64>,
    ) -> Result<Formula, err::ErrorKind> {
        io::check_extension(path)?;
        let ksat = KSat::new(atom_count, clause_count, length)?;

        let seed = seed.unwrap_or_else(rand::random);
        log::info!(target: targets::GENERATE, "Random {length}-SAT with seed {seed}");

        let workers = self.config.workers.value;
        let mut formula = match workers {
            0 | 1 => ksat.generate(&mut MinimalPCG32::seed_from_u64(seed)),
            _ => ksat.generate_parallel(seed, workers),
        };

        self.label(&mut formula)?;

        io::write_path(&formula, path)?;
        Ok(formula)
    }

    /// Generates and writes a pigeonhole formula to `path`, returning the formula written.
    pub fn php(&self, path: &Path, holes: i64, multiplier: i64) -> Result<Formula, err::ErrorKind> {
        io::check_extension(path)?;
        let php = Php::new(holes, multiplier)?;

        let formula = php.generate();

        io::write_path(&formula, path)?;
        Ok(formula)
    }
}

#[cfg(test)]
mod pipeline_tests {
    use std::{
        sync::atomic::{AtomicU32, Ordering},
        time::Duration,
    };

    use super::*;
    use crate::structures::valuation::from_literals;

    /// Unknown for some count of calls, then satisfiable with a given witness.
    struct Reluctant {
        refusals: u32,
        calls: AtomicU32,
        witness: Option<Vec<i32>>,
    }

    impl Oracle for Reluctant {
        fn decide(&self, formula: &Formula, _time_limit: Option<Duration>) -> Decision {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            match call < self.refusals {
                true => Decision::Unknown(Unknown::TimeLimit),
                false => Decision::Satisfiable(
                    self.witness
                        .clone()
                        .map(|literals| from_literals(formula.atom_count(), literals)),
                ),
            }
        }

        fn name(&self) -> String {
            "reluctant".to_string()
        }
    }

    fn small_formula() -> Formula {
        let mut formula = Formula::new(2);
        assert!(formula.add_clause(vec![1, -2]).is_ok());
        formula
    }

    #[test]
    fn retries_unknown() {
        let mut config = Config::default();
        assert!(config.oracle_attempts.set(3).is_ok());

        let oracle = Reluctant {
            refusals: 2,
            calls: AtomicU32::new(0),
            witness: Some(vec![1, 2]),
        };
        let pipeline = Pipeline::with_oracle(config, Box::new(oracle));

        let mut formula = small_formula();
        assert_eq!(pipeline.label(&mut formula), Ok(Report::Satisfiable));
        assert_eq!(formula.status(), Some(Report::Satisfiable));
    }

    #[test]
    fn gives_up() {
        let oracle = Reluctant {
            refusals: 5,
            calls: AtomicU32::new(0),
            witness: None,
        };
        let pipeline = Pipeline::with_oracle(Config::default(), Box::new(oracle));

        let mut formula = small_formula();
        assert_eq!(
            pipeline.label(&mut formula),
            Err(err::ErrorKind::Oracle(err::OracleError::Unavailable(
                Unknown::TimeLimit
            )))
        );
        assert_eq!(formula.status(), None);
    }

    #[test]
    fn bad_witness() {
        let oracle = Reluctant {
            refusals: 0,
            calls: AtomicU32::new(0),
            witness: Some(vec![-1, 2]),
        };
        let pipeline = Pipeline::with_oracle(Config::default(), Box::new(oracle));

        let mut formula = small_formula();
        assert_eq!(
            pipeline.label(&mut formula),
            Err(err::ErrorKind::Oracle(err::OracleError::InvalidWitness))
        );

        let mut config = Config::default();
        config.check_witness.value = false;
        let oracle = Reluctant {
            refusals: 0,
            calls: AtomicU32::new(0),
            witness: Some(vec![-1, 2]),
        };
        let trusting = Pipeline::with_oracle(config, Box::new(oracle));
        assert_eq!(trusting.label(&mut formula), Ok(Report::Satisfiable));
    }

    #[test]
    fn embedded_by_default() {
        let pipeline = Pipeline::new(Config::default());
        assert_eq!(pipeline.oracle().name(), "varisat");
    }
}
