//! A library for generating labeled corpora of formulas in conjunctive normal form.
//!
//! sat_corpus builds two families of formulas for exercising satisfiability solvers:
//! - [Random k-SAT](crate::generators::ksat) formulas, where each clause contains exactly *k* distinct atoms with random polarity.
//! - [Pigeonhole](crate::generators::php) formulas, which are unsatisfiable by construction.
//!
//! Random formulas are labeled with their satisfiability status by an [oracle], and every formula may be written to (or read from) the [DIMACS](crate::dimacs) representation.
//!
//! # Orientation
//!
//! The [pipeline] ties the pieces together: a formula is generated, labeled (random formulas only), and written to a `.cnf` file.
//!
//! - The [structures] define literals, clauses, and formulas.
//! - The [generators] build formulas from parameters and (for random formulas) a seedable [source of randomness](crate::generic::random).
//! - The [oracle] module defines the decision interface, together with an embedded and an external implementation.
//! - The [configuration](crate::config) controls labeling (time limits, retries, witness checks) and parallel sampling.
//!
//! # Examples
//!
//! + Generate a seeded random 3-SAT formula and decide it.
//!
//! ```rust
//! # use sat_corpus::generators::ksat::KSat;
//! # use sat_corpus::generic::random::MinimalPCG32;
//! # use sat_corpus::oracle::{Oracle, Report, VarisatOracle};
//! use rand::SeedableRng;
//!
//! let ksat = KSat::new(5, 4, 3).expect("valid parameters");
//! let mut rng = MinimalPCG32::seed_from_u64(42);
//! let formula = ksat.generate(&mut rng);
//!
//! assert_eq!(formula.clause_count(), 4);
//!
//! let decision = VarisatOracle::default().decide(&formula, None);
//! assert_ne!(decision.report(), Report::Unknown);
//! ```
//!
//! + Write and read back a pigeonhole formula.
//!
//! ```rust
//! # use sat_corpus::generators::php::Php;
//! # use sat_corpus::dimacs;
//! let formula = Php::new(3, 1).expect("valid parameters").generate();
//!
//! let mut buffer = vec![];
//! assert!(dimacs::write_dimacs(&formula, &mut buffer).is_ok());
//!
//! let read = dimacs::read_dimacs(buffer.as_slice()).expect("well formed");
//! assert_eq!(read, formula);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with the targets listed in [misc::log].
//! No log implementation is provided by the library, though both binaries install [env_logger](https://docs.rs/env_logger/latest/env_logger/).
//!
//! For example:
//! - Logs related to the oracle can be filtered with `RUST_LOG=oracle …` or,
//! - The seed used for a random formula can be found with `RUST_LOG=generate=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod dimacs;
pub mod generators;
pub mod generic;
pub mod io;
pub mod misc;
pub mod oracle;
pub mod pipeline;
pub mod reports;
pub mod structures;
pub mod types;
