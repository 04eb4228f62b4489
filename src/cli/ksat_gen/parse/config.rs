use std::{path::PathBuf, time::Duration};

use clap::ArgMatches;

use sat_corpus::config::{Config, ConfigOption, OracleChoice};

/// Sets an option from some argument, or exits noting the acceptable range.
fn set_or_exit<T: Clone + PartialOrd + std::fmt::Display>(option: &mut ConfigOption<T>, value: T) {
    if option.set(value).is_err() {
        let (min, max) = option.min_max();
        println!("{} requires a value between {min} and {max}", option.name);
        std::process::exit(1);
    }
}

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        the_config.time_limit = Some(Duration::from_secs(*secs))
    };

    if let Ok(Some(attempts)) = args.try_get_one::<u32>("attempts") {
        set_or_exit(&mut the_config.oracle_attempts, *attempts);
    };

    if let Ok(Some(workers)) = args.try_get_one::<usize>("workers") {
        set_or_exit(&mut the_config.workers, *workers);
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("no_witness_check") {
        set_or_exit(&mut the_config.check_witness, false);
    };

    if let Ok(Some(path)) = args.try_get_one::<PathBuf>("oracle") {
        let oracle_args = match args.try_get_many::<String>("oracle_args") {
            Ok(Some(values)) => values.cloned().collect(),
            _ => Vec::default(),
        };

        the_config.oracle = OracleChoice::External {
            path: path.clone(),
            args: oracle_args,
        };
    };

    the_config
}
