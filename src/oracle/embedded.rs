//! An oracle backed by the [varisat](https://docs.rs/varisat) solver.
//!
//! The solve happens on a thread of its own, and the decision is sent back over a channel.
//! If a time limit is given and the limit passes the decision is unknown, and the thread is left to finish without anyone listening.
//! Varisat has no method to interrupt a solve, so the thread may run for some time after a time limit passes.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use crossbeam::channel::{self, RecvTimeoutError};
use varisat::ExtendFormula;

use crate::{
    misc::log::targets::{self},
    oracle::{Decision, Oracle, Unknown},
    structures::{
        atom::Atom,
        clause::Clause,
        formula::Formula,
        literal::{CLiteral, Literal},
        valuation,
    },
};

/// The embedded oracle.
///
/// Clones share a count of solves which are still running, including solves abandoned after a time limit.
#[derive(Clone, Debug, Default)]
pub struct VarisatOracle {
    running: Arc<AtomicUsize>,
}

impl VarisatOracle {
    /// The count of solves still running.
    pub fn running(&self) -> usize {
        self.running.load(Ordering::SeqCst)
    }
}

/// Decrements the count of running solves when the solve ends, however the solve ends.
struct RunningSolve(Arc<AtomicUsize>);

impl Drop for RunningSolve {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Oracle for VarisatOracle {
    fn decide(&self, formula: &Formula, time_limit: Option<Duration>) -> Decision {
        let clauses: Vec<Vec<isize>> = formula
            .clauses()
            .iter()
            .map(|clause| clause.literals().map(|literal| literal.as_int()).collect())
            .collect();
        let atom_count = formula.atom_count();

        let earlier = self.running.fetch_add(1, Ordering::SeqCst);
        if earlier > 0 {
            log::warn!(target: targets::ORACLE, "Starting a solve while {earlier} earlier solve(s) are still running");
        }
        let running = RunningSolve(self.running.clone());

        let (tx, rx) = channel::bounded::<Decision>(1);

        let spawned = std::thread::Builder::new()
            .name("varisat_oracle".to_string())
            .spawn(move || {
                let _running = running;
                // The receiver may have given up, in which case the decision is of no interest.
                let _ = tx.send(solve(&clauses, atom_count));
            });

        if let Err(e) = spawned {
            return Decision::Unknown(Unknown::Unavailable(format!("no thread for the solver: {e}")));
        }

        let received = match time_limit {
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            Some(limit) => rx.recv_timeout(limit),
        };

        match received {
            Ok(decision) => decision,
            Err(RecvTimeoutError::Timeout) => {
                log::info!(target: targets::ORACLE, "No decision within {time_limit:?}");
                Decision::Unknown(Unknown::TimeLimit)
            }
            Err(RecvTimeoutError::Disconnected) => Decision::Unknown(Unknown::Failure(
                "the solver stopped without a decision".to_string(),
            )),
        }
    }

    fn name(&self) -> String {
        "varisat".to_string()
    }
}

/// Decides the clauses, given as DIMACS integers.
fn solve(clauses: &[Vec<isize>], atom_count: Atom) -> Decision {
    let mut solver = varisat::Solver::new();

    let mut buffer = Vec::default();
    for clause in clauses {
        buffer.clear();
        buffer.extend(clause.iter().map(|literal| varisat::Lit::from_dimacs(*literal)));
        solver.add_clause(&buffer);
    }

    log::trace!(target: targets::ORACLE, "Solving {} clauses", clauses.len());

    match solver.solve() {
        Ok(true) => {
            let model = solver.model().unwrap_or_default();
            let witness = valuation::from_literals(
                atom_count,
                model.iter().map(|literal| literal.to_dimacs() as CLiteral),
            );
            Decision::Satisfiable(Some(witness))
        }

        Ok(false) => Decision::Unsatisfiable,

        Err(e) => Decision::Unknown(Unknown::Failure(format!("{e:?}"))),
    }
}

#[cfg(test)]
mod varisat_tests {
    use super::*;
    use crate::reports::Report;

    #[test]
    fn conflict() {
        let mut formula = Formula::new(2);
        for clause in [vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]] {
            assert!(formula.add_clause(clause).is_ok());
        }

        assert_eq!(
            VarisatOracle::default().decide(&formula, None),
            Decision::Unsatisfiable
        );
    }

    #[test]
    fn witness() {
        let mut formula = Formula::new(4);
        for clause in [vec![1, 2], vec![-1], vec![-2, 3]] {
            assert!(formula.add_clause(clause).is_ok());
        }

        let decision = VarisatOracle::default().decide(&formula, Some(Duration::from_secs(30)));
        assert_eq!(decision.report(), Report::Satisfiable);

        let witness = decision.witness().expect("witness");
        assert!(formula.evaluate(witness));
    }

    #[test]
    fn empty_formula() {
        let formula = Formula::new(3);
        assert_eq!(
            VarisatOracle::default().decide(&formula, None).report(),
            Report::Satisfiable
        );
    }

    #[test]
    fn empty_clause() {
        let mut formula = Formula::new(1);
        assert!(formula.add_clause(vec![]).is_ok());
        assert_eq!(
            VarisatOracle::default().decide(&formula, None),
            Decision::Unsatisfiable
        );
    }

    #[test]
    fn abandoned_solves_are_counted() {
        let formula = crate::generators::php::Php::new(9, 1).expect("valid").generate();
        let oracle = VarisatOracle::default();

        let decision = oracle.decide(&formula, Some(Duration::from_millis(1)));
        assert_eq!(decision, Decision::Unknown(Unknown::TimeLimit));
        assert!(oracle.running() >= 1);

        let quick = Formula::new(1);
        assert_eq!(oracle.decide(&quick, None).report(), Report::Satisfiable);
    }
}
