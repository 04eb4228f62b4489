//! An oracle backed by some external solver.
//!
//! The solver is called as a process, given the formula in DIMACS form on standard input, and is expected to follow the conventions of the SAT competition:
//! - A status line `s SATISFIABLE`, `s UNSATISFIABLE`, or `s UNKNOWN`.
//! - Optionally, value lines `v …` which list the literals of a satisfying valuation.
//! - An exit code of 10 for satisfiable formulas and 20 for unsatisfiable formulas.
//!
//! A status line takes precedence over an exit code.
//!
//! Many solvers read from standard input when no file is given, e.g. `kissat` or `cadical`.
//! Other solvers may require an argument such as `-` or `/dev/stdin`.

use std::{
    io::{Read, Write},
    path::PathBuf,
    process::{Command, Stdio},
    thread,
    time::{Duration, Instant},
};

use crossbeam::channel::{self, RecvTimeoutError};

use crate::{
    dimacs,
    misc::log::targets::{self},
    oracle::{Decision, Oracle, Report, Unknown},
    structures::{atom::Atom, formula::Formula, literal::CLiteral, valuation},
};

/// An oracle which calls some solver at `path` with `args`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalOracle {
    path: PathBuf,
    args: Vec<String>,
}

impl ExternalOracle {
    pub fn new(path: impl Into<PathBuf>, args: Vec<String>) -> Self {
        ExternalOracle {
            path: path.into(),
            args,
        }
    }
}

impl Oracle for ExternalOracle {
    fn decide(&self, formula: &Formula, time_limit: Option<Duration>) -> Decision {
        let deadline = time_limit.map(|limit| Instant::now() + limit);

        let mut input = Vec::default();
        if let Err(e) = dimacs::write_dimacs(formula, &mut input) {
            return Decision::Unknown(Unknown::Failure(format!("failed to write the formula: {e}")));
        }

        let mut child = match Command::new(&self.path)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                log::warn!(target: targets::ORACLE, "Failed to start {}: {e}", self.path.display());
                return Decision::Unknown(Unknown::Unavailable(format!(
                    "{}: {e}",
                    self.path.display()
                )));
            }
        };

        let (Some(mut stdin), Some(mut stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            let _ = child.wait();
            return Decision::Unknown(Unknown::Failure("no pipes to the solver".to_string()));
        };

        // Written on a thread of its own, as a solver may write before reading all input.
        // A solver may also stop reading early, so a failed write is not an error.
        let writer = thread::spawn(move || {
            let _ = stdin.write_all(&input);
        });

        let (tx, rx) = channel::bounded::<std::io::Result<String>>(1);
        let reader = thread::spawn(move || {
            let mut output = String::default();
            let read = stdout.read_to_string(&mut output).map(|_| output);
            let _ = tx.send(read);
        });

        let received = match deadline {
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            Some(deadline) => rx.recv_timeout(deadline.saturating_duration_since(Instant::now())),
        };

        let output = match received {
            Ok(Ok(output)) => output,

            Ok(Err(e)) => {
                let _ = child.kill();
                let _ = child.wait();
                return Decision::Unknown(Unknown::Failure(format!("failed to read the solver output: {e}")));
            }

            Err(RecvTimeoutError::Timeout) => {
                log::info!(target: targets::ORACLE, "No decision from {} within {time_limit:?}", self.path.display());
                let _ = child.kill();
                let _ = child.wait();
                return Decision::Unknown(Unknown::TimeLimit);
            }

            Err(RecvTimeoutError::Disconnected) => {
                let _ = child.kill();
                let _ = child.wait();
                return Decision::Unknown(Unknown::Failure(
                    "the solver output was lost".to_string(),
                ));
            }
        };

        let code = match child.wait() {
            Ok(status) => status.code(),
            Err(e) => {
                return Decision::Unknown(Unknown::Failure(format!("failed to wait on the solver: {e}")))
            }
        };

        let _ = writer.join();
        let _ = reader.join();

        log::debug!(target: targets::ORACLE, "{} exited with code {code:?}", self.path.display());
        interpret(&output, code, formula.atom_count())
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// The decision from the output and exit code of a solver.
fn interpret(output: &str, code: Option<i32>, atom_count: Atom) -> Decision {
    let mut status = None;
    let mut values: Option<Vec<CLiteral>> = None;

    for line in output.lines() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("s") => status = tokens.next().and_then(|token| token.parse::<Report>().ok()),

            Some("v") => values.get_or_insert_with(Vec::default).extend(
                tokens
                    .filter_map(|token| token.parse::<CLiteral>().ok())
                    .filter(|literal| *literal != 0),
            ),

            _ => {}
        }
    }

    let report = status.or(match code {
        Some(10) => Some(Report::Satisfiable),
        Some(20) => Some(Report::Unsatisfiable),
        _ => None,
    });

    match report {
        Some(Report::Satisfiable) => Decision::Satisfiable(
            values.map(|literals| valuation::from_literals(atom_count, literals)),
        ),

        Some(Report::Unsatisfiable) => Decision::Unsatisfiable,

        Some(Report::Unknown) | None => Decision::Unknown(Unknown::Failure(format!(
            "no verdict from the solver (exit code {code:?})"
        ))),
    }
}
