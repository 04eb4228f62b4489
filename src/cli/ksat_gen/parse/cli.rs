use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use sat_corpus::config::defaults;

pub fn cli() -> Command {
    Command::new("ksat_gen")
        .about("Generates a random k-SAT formula, labeled with its satisfiability status, and writes the formula to a .cnf file")

        .arg(Arg::new("path")
            .required(true)
            .value_name("FILEPATH")
            .value_parser(value_parser!(PathBuf))
            .help("The path to write the formula to, with a .cnf extension."))

        .arg(Arg::new("atoms")
            .required(true)
            .value_name("NUM_VARS")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .help("The number of atoms (variables) in the formula."))

        .arg(Arg::new("clauses")
            .required(true)
            .value_name("NUM_CLAUSES")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .help("The number of clauses in the formula."))

        .arg(Arg::new("length")
            .required(true)
            .value_name("K")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .help("The number of literals in each clause."))

        .arg(Arg::new("seed")
            .long("seed")
            .short('s')
            .value_name("N")
            .value_parser(clap::builder::ValueParser::new(seed_parser))
            .allow_negative_numbers(true)
            .required(false)
            .num_args(1)
            .help("Seed for the random source, negative seeds are read as their two's complement.
Default: A fresh seed, written to the log at the info level"))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .short('t')
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Time limit for each attempt to label the formula, in seconds.
Default: No limit"))

        .arg(Arg::new("attempts")
            .long("attempts")
            .value_name("COUNT")
            .value_parser(value_parser!(u32))
            .required(false)
            .num_args(1)
            .help(format!("The number of attempts to label the formula, if an attempt ends without a decision.
Default: {}", defaults::ORACLE_ATTEMPTS)))

        .arg(Arg::new("workers")
            .long("workers")
            .short('w')
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The number of threads used to sample clauses.
Default: {}", defaults::WORKERS))
            .long_help(format!("The number of threads used to sample clauses.
Default: {}

With more than one thread clauses are sampled in blocks, each from a stream derived from the seed.
The formula depends on the seed only, though the formula differs from the formula sampled with a single thread.", defaults::WORKERS)))

        .arg(Arg::new("oracle")
            .long("oracle")
            .value_name("SOLVER")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("An external solver to label the formula with, in place of the embedded solver.
The solver is given the formula on standard input, and should follow the output conventions of the SAT competition."))

        .arg(Arg::new("oracle_args")
            .long("oracle-arg")
            .value_name("ARG")
            .value_parser(value_parser!(String))
            .required(false)
            .action(ArgAction::Append)
            .allow_hyphen_values(true)
            .requires("oracle")
            .help("An argument to pass to the external solver (may be repeated)."))

        .arg(Arg::new("no_witness_check")
            .long("no-witness-check")
            .action(ArgAction::SetTrue)
            .help("Trust the valuation given by the solver when the solver reports the formula is satisfiable."))
}

/// A seed, as an unsigned integer or (in two's complement) as a signed integer.
fn seed_parser(arg: &str) -> Result<u64, std::io::Error> {
    match (arg.parse::<u64>(), arg.parse::<i64>()) {
        (Ok(seed), _) => Ok(seed),
        (_, Ok(seed)) => Ok(seed as u64),
        _ => Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "A seed must be an integer",
        )),
    }
}
