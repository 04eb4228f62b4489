use std::{path::PathBuf, process::Command};

use sat_corpus::{io, oracle::Report};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sat_corpus_cli_{}_{name}", std::process::id()))
}

mod ksat_gen {
    use super::*;

    fn ksat_gen() -> Command {
        Command::new(env!("CARGO_BIN_EXE_ksat_gen"))
    }

    #[test]
    fn seeded() {
        let first_path = scratch_path("first.cnf");
        let second_path = scratch_path("second.cnf");

        for path in [&first_path, &second_path] {
            let output = ksat_gen()
                .arg(path)
                .args(["5", "4", "3", "--seed", "42"])
                .output()
                .expect("ksat_gen runs");
            assert!(output.status.success());
        }

        let first = io::read_path(&first_path).expect("readable formula");
        let second = io::read_path(&second_path).expect("readable formula");
        assert_eq!(first, second);
        assert_eq!(first.clause_count(), 4);
        assert!(matches!(
            first.status(),
            Some(Report::Satisfiable) | Some(Report::Unsatisfiable)
        ));

        let _ = std::fs::remove_file(&first_path);
        let _ = std::fs::remove_file(&second_path);
    }

    #[test]
    fn invalid_extension() {
        let path = scratch_path("out.txt");

        let output = ksat_gen()
            .arg(&path)
            .args(["5", "4", "3"])
            .output()
            .expect("ksat_gen runs");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Invalid file type: .cnf expected"));
        assert!(!path.exists());
    }

    #[test]
    fn invalid_parameters() {
        let path = scratch_path("too_long.cnf");

        let output = ksat_gen()
            .arg(&path)
            .args(["3", "4", "5"])
            .output()
            .expect("ksat_gen runs");

        assert_eq!(output.status.code(), Some(1));
        assert!(!path.exists());
    }

    #[test]
    fn out_of_range_option() {
        let path = scratch_path("workers.cnf");

        let output = ksat_gen()
            .arg(&path)
            .args(["5", "4", "3", "--workers", "0"])
            .output()
            .expect("ksat_gen runs");

        assert_eq!(output.status.code(), Some(1));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("workers requires a value between 1 and 256"));
        assert!(!path.exists());
    }

    #[test]
    fn missing_oracle() {
        let path = scratch_path("unlabeled.cnf");

        let output = ksat_gen()
            .arg(&path)
            .args(["5", "4", "3", "--oracle", "/nonexistent/sat_corpus/solver"])
            .output()
            .expect("ksat_gen runs");

        assert_eq!(output.status.code(), Some(3));
        assert!(!path.exists());
    }

    #[test]
    fn negative_seed() {
        let negative_path = scratch_path("negative_seed.cnf");
        let complement_path = scratch_path("complement_seed.cnf");

        let complement = (-7_i64 as u64).to_string();
        for (path, seed) in [(&negative_path, "-7"), (&complement_path, complement.as_str())] {
            let output = ksat_gen()
                .arg(path)
                .args(["6", "8", "3", "--seed", seed])
                .output()
                .expect("ksat_gen runs");
            assert!(output.status.success());
        }

        let negative = io::read_path(&negative_path).expect("readable formula");
        let complement = io::read_path(&complement_path).expect("readable formula");
        assert_eq!(negative.clauses(), complement.clauses());

        let _ = std::fs::remove_file(&negative_path);
        let _ = std::fs::remove_file(&complement_path);
    }
}

mod php_gen {
    use super::*;

    fn php_gen() -> Command {
        Command::new(env!("CARGO_BIN_EXE_php_gen"))
    }

    #[test]
    fn written() {
        let path = scratch_path("php4.cnf");

        let output = php_gen()
            .arg(&path)
            .args(["4", "1"])
            .output()
            .expect("php_gen runs");
        assert!(output.status.success());

        let formula = io::read_path(&path).expect("readable formula");
        assert_eq!(formula.atom_count(), 20);
        assert_eq!(formula.clause_count(), 5 + 4 * 10);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn invalid_extension() {
        let path = scratch_path("php.txt");

        let output = php_gen()
            .arg(&path)
            .args(["4", "1"])
            .output()
            .expect("php_gen runs");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Invalid file type: .cnf expected"));
        assert!(!path.exists());
    }

    #[test]
    fn invalid_parameters() {
        let path = scratch_path("negative.cnf");

        let output = php_gen()
            .arg(&path)
            .args(["-3", "1"])
            .output()
            .expect("php_gen runs");

        assert_eq!(output.status.code(), Some(1));
        assert!(!path.exists());
    }
}
