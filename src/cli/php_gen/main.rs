use std::path::PathBuf;

use sat_corpus::{
    config::Config,
    pipeline::Pipeline,
    types::err::{self},
};

mod parse;

fn main() {
    env_logger::init();

    let matches = parse::cli().get_matches();

    let (Some(path), Some(holes), Some(multiplier)) = (
        matches.get_one::<PathBuf>("path"),
        matches.get_one::<i64>("holes"),
        matches.get_one::<i64>("multiplier"),
    ) else {
        println!("A path, hole count, and multiplier are required");
        std::process::exit(1);
    };

    let pipeline = Pipeline::new(Config::default());

    match pipeline.php(path, *holes, *multiplier) {
        Ok(formula) => {
            println!(
                "{}: {} atoms, {} clauses",
                path.display(),
                formula.atom_count(),
                formula.clause_count()
            );
        }

        Err(err::ErrorKind::FileType(e)) => {
            println!("{e}");
        }

        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
