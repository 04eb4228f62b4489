use std::{
    io::{BufReader, Write},
    path::PathBuf,
};

use sat_corpus::{
    dimacs, io,
    structures::formula::Formula,
    types::err::{self},
};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sat_corpus_dimacs_{}_{name}", std::process::id()))
}

fn small_formula() -> Formula {
    let mut formula = Formula::new(5);
    formula.push_comment("A small formula");
    formula.push_comment("");
    assert!(formula.add_clause(vec![1, -3, 5]).is_ok());
    assert!(formula.add_clause(vec![-2]).is_ok());
    assert!(formula.add_clause(vec![]).is_ok());
    assert!(formula.add_clause(vec![4, 4]).is_ok());
    formula
}

mod files {
    use super::*;

    #[test]
    fn write_then_read() {
        let path = scratch_path("small.cnf");
        let formula = small_formula();

        assert!(io::write_path(&formula, &path).is_ok());

        let text = std::fs::read_to_string(&path).expect("readable file");
        assert_eq!(
            text,
            "c A small formula\nc \np cnf 5 4\n1 -3 5 0\n-2 0\n0\n4 4 0\n"
        );

        assert_eq!(io::read_path(&path), Ok(formula));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn multi_line_comments() {
        let path = scratch_path("comments.cnf");
        let mut formula = Formula::new(2);
        formula.push_comment("first\nsecond");
        formula.push_comment("carriage\r");
        assert!(formula.add_clause(vec![1, -2]).is_ok());

        assert!(io::write_path(&formula, &path).is_ok());

        let text = std::fs::read_to_string(&path).expect("readable file");
        assert_eq!(text, "c first\nc second\nc carriage\np cnf 2 1\n1 -2 0\n");

        let read = io::read_path(&path).expect("readable formula");
        assert_eq!(read.comments(), ["first", "second", "carriage"]);
        assert_eq!(read, formula);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn write_bad_extension() {
        let path = scratch_path("small.dimacs");
        assert!(matches!(
            io::write_path(&small_formula(), &path),
            Err(err::ErrorKind::FileType(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn missing_file() {
        let path = scratch_path("absent.cnf");
        assert_eq!(
            io::read_path(&path),
            Err(err::ErrorKind::Io(std::io::ErrorKind::NotFound))
        );
    }

    #[test]
    fn malformed_file() {
        let path = scratch_path("malformed.cnf");
        {
            let mut file = std::fs::File::create(&path).expect("scratch file");
            assert!(file.write_all(b"p cnf 2 1\n1 3 0\n").is_ok());
        }

        assert!(matches!(
            io::read_path(&path),
            Err(err::ErrorKind::Parse(err::ParseError::AtomOutOfBounds { .. }))
        ));

        // The file was closed, and so may be removed.
        assert!(std::fs::remove_file(&path).is_ok());
    }

    #[cfg(feature = "xz")]
    #[test]
    fn compressed() {
        let path = scratch_path("small.cnf.xz");
        let formula = small_formula();
        {
            let file = std::fs::File::create(&path).expect("scratch file");
            let mut encoder = xz2::write::XzEncoder::new(file, 6);
            assert!(dimacs::write_dimacs(&formula, &mut encoder).is_ok());
            assert!(encoder.finish().is_ok());
        }

        assert_eq!(io::read_path(&path), Ok(formula));

        let _ = std::fs::remove_file(&path);
    }
}

mod satlib {
    use super::*;

    #[test]
    fn uniform_random_layout() {
        let text = "c This Formular is generated by mcnf
c
c    horn? no
c    forced? no
c    mixed sat? no
c    clause length = 3
c
p cnf  4  3
 1 -4 2 0
-3 4 1 0
 2 3 -1 0
%
0
";
        let formula = dimacs::read_dimacs(BufReader::new(text.as_bytes())).expect("satlib formula");
        assert_eq!(formula.atom_count(), 4);
        assert_eq!(formula.clause_count(), 3);
        assert_eq!(formula.comments()[0], "This Formular is generated by mcnf");
        assert_eq!(formula.comments()[5], "   clause length = 3");
    }
}
