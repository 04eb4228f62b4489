/*!
Configuration of a pipeline.

All configuration for generating and labeling a formula is contained within [Config].
Options with a range of acceptable values are stored as a [ConfigOption], and the range is checked when an option is set from outside the library (e.g. by a binary).

Defaults are given in [defaults].
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod defaults;

use std::{path::PathBuf, time::Duration};

/// Which oracle to use when labeling a formula.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OracleChoice {
    /// The embedded solver.
    #[default]
    Embedded,

    /// Some external solver, called with the given arguments and given a formula on standard input.
    External { path: PathBuf, args: Vec<String> },
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to check that a witness given by an oracle satisfies the formula.
    pub check_witness: ConfigOption<bool>,

    /// The oracle used to label formulas.
    pub oracle: OracleChoice,

    /// The number of times to ask an oracle for a verdict before giving up.
    /// Only 'unknown' responses are retried.
    pub oracle_attempts: ConfigOption<u32>,

    /// The time limit for each oracle attempt.
    pub time_limit: Option<Duration>,

    /// The number of threads to use when sampling clauses.
    pub workers: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            check_witness: ConfigOption {
                name: "check_witness",
                min: false,
                max: true,
                value: CHECK_WITNESS,
            },

            oracle: OracleChoice::default(),

            oracle_attempts: ConfigOption {
                name: "oracle_attempts",
                min: 1,
                max: MAX_ORACLE_ATTEMPTS,
                value: ORACLE_ATTEMPTS,
            },

            time_limit: TIME_LIMIT,

            workers: ConfigOption {
                name: "workers",
                min: 1,
                max: MAX_WORKERS,
                value: WORKERS,
            },
        }
    }
}
