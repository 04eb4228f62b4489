use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

pub fn cli() -> Command {
    Command::new("php_gen")
        .about("Generates a pigeonhole formula, which is unsatisfiable, and writes the formula to a .cnf file")

        .arg(Arg::new("path")
            .required(true)
            .value_name("FILEPATH")
            .value_parser(value_parser!(PathBuf))
            .help("The path to write the formula to, with a .cnf extension."))

        .arg(Arg::new("holes")
            .required(true)
            .value_name("NUM_HOLES")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .help("The number of holes."))

        .arg(Arg::new("multiplier")
            .required(true)
            .value_name("K_MULT")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .help("The number of pigeons each hole may hold.")
            .long_help("The number of pigeons each hole may hold.

With n holes and a multiplier of k there are k·n + 1 pigeons, and so some hole must hold more than k pigeons."))
}
