use std::path::PathBuf;

use sat_corpus::{
    pipeline::Pipeline,
    types::err::{self},
};

mod parse;

fn main() {
    env_logger::init();

    let matches = parse::cli::cli().get_matches();
    let config = parse::config::config_from_args(&matches);

    // Each argument is required, so clap ensures a value is present.
    let (Some(path), Some(atoms), Some(clauses), Some(length)) = (
        matches.get_one::<PathBuf>("path"),
        matches.get_one::<i64>("atoms"),
        matches.get_one::<i64>("clauses"),
        matches.get_one::<i64>("length"),
    ) else {
        println!("A path, atom count, clause count, and clause length are required");
        std::process::exit(1);
    };
    let seed = matches.get_one::<u64>("seed").copied();

    let pipeline = Pipeline::new(config);

    match pipeline.ksat(path, *atoms, *clauses, *length, seed) {
        Ok(formula) => {
            let status = match formula.status() {
                Some(report) => report.to_string(),
                None => "UNKNOWN".to_string(),
            };
            println!("{}: {status}", path.display());
        }

        Err(err::ErrorKind::FileType(e)) => {
            println!("{e}");
        }

        // Distinct from the exit code of clap on a usage error.
        Err(e @ err::ErrorKind::Oracle(_)) => {
            eprintln!("{e}");
            std::process::exit(3);
        }

        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
