/*!
Oracles, which decide the satisfiability of a formula.

An oracle is anything which implements [Oracle], and the rest of the library depends on this interface only.
Two oracles are provided:
- [VarisatOracle], which decides a formula with an embedded solver.
- [ExternalOracle], which decides a formula by calling some external solver, e.g. any solver which follows the conventions of the SAT competition.

A decision is either satisfiable (with a witness, if the oracle gives one), unsatisfiable, or unknown.
An unknown decision is an ordinary result rather than an error, though a caller may treat it as an error (as the [pipeline](crate::pipeline) does).

```rust
# use sat_corpus::oracle::{Decision, Oracle, VarisatOracle};
# use sat_corpus::structures::formula::Formula;
let mut formula = Formula::new(2);
assert!(formula.add_clause(vec![1, 2]).is_ok());
assert!(formula.add_clause(vec![-1]).is_ok());

match VarisatOracle::default().decide(&formula, None) {
    Decision::Satisfiable(Some(witness)) => assert!(formula.evaluate(&witness)),
    _ => panic!("expected a witness"),
}
```
*/

mod embedded;
mod external;

pub use crate::reports::Report;
pub use embedded::VarisatOracle;
pub use external::ExternalOracle;

use std::time::Duration;

use crate::{
    config::OracleChoice,
    structures::{formula::Formula, valuation::CValuation},
};

/// Something which decides the satisfiability of a formula.
pub trait Oracle {
    /// Decides the satisfiability of `formula`.
    ///
    /// If a time limit is given and no decision is made within the limit the decision is [Unknown::TimeLimit].
    fn decide(&self, formula: &Formula, time_limit: Option<Duration>) -> Decision;

    /// A short description of the oracle, for logs.
    fn name(&self) -> String;
}

/// The decision of an oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The formula is satisfiable, and (if given by the oracle) is satisfied by the valuation.
    Satisfiable(Option<CValuation>),

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// The oracle made no decision, for the noted reason.
    Unknown(Unknown),
}

impl Decision {
    /// The (high-level) report of the decision.
    pub fn report(&self) -> Report {
        match self {
            Self::Satisfiable(_) => Report::Satisfiable,
            Self::Unsatisfiable => Report::Unsatisfiable,
            Self::Unknown(_) => Report::Unknown,
        }
    }

    /// The witness of a satisfiable decision, if one was given.
    pub fn witness(&self) -> Option<&CValuation> {
        match self {
            Self::Satisfiable(witness) => witness.as_ref(),
            _ => None,
        }
    }
}

/// Reasons for an oracle to make no decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unknown {
    /// No decision was made within the time limit.
    TimeLimit,

    /// The oracle could not be used, e.g. an external solver is not installed.
    Unavailable(String),

    /// The oracle was used, but failed to give a verdict.
    Failure(String),
}

impl std::fmt::Display for Unknown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimeLimit => write!(f, "time limit reached"),
            Self::Unavailable(detail) => write!(f, "unavailable: {detail}"),
            Self::Failure(detail) => write!(f, "failure: {detail}"),
        }
    }
}

/// The oracle for a configured choice.
pub fn from_choice(choice: &OracleChoice) -> Box<dyn Oracle + Send + Sync> {
    match choice {
        OracleChoice::Embedded => Box::new(VarisatOracle::default()),
        OracleChoice::External { path, args } => {
            Box::new(ExternalOracle::new(path.clone(), args.clone()))
        }
    }
}
