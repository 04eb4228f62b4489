/*!
Reading and writing formulas at some path.

The extension of a path for a formula is checked at the boundary, before any work on the formula is done.
Files are opened within the scope of a single read or write, and so are closed on every exit, including a parse error part way through a file.
*/

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{
    dimacs,
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

/// The extension required of a path to a formula.
pub const CNF_EXTENSION: &str = "cnf";

/// Checks the path ends with `.cnf`, ignoring case.
///
/// ```rust
/// # use sat_corpus::io::check_extension;
/// # use std::path::Path;
/// assert!(check_extension(Path::new("corpus/uf20.CNF")).is_ok());
/// assert!(check_extension(Path::new("out.txt")).is_err());
/// assert!(check_extension(Path::new("cnf")).is_err());
/// ```
pub fn check_extension(path: &Path) -> Result<(), err::FileTypeError> {
    match path.extension() {
        Some(extension) if extension.eq_ignore_ascii_case(CNF_EXTENSION) => Ok(()),
        _ => Err(err::FileTypeError::Extension { expected: ".cnf" }),
    }
}

/// Reads a formula from the file at `path`.
///
/// With the `xz` feature, a path ending in `.xz` is decompressed while reading.
pub fn read_path(path: &Path) -> Result<Formula, err::ErrorKind> {
    let file = File::open(path)?;

    log::debug!(target: targets::DIMACS, "Reading {}", path.display());

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            dimacs::read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        _ => dimacs::read_dimacs(BufReader::new(&file)),
    }
}

/// Writes a formula to the file at `path`, after checking the extension of the path.
///
/// If writing fails part way through the file is removed.
pub fn write_path(formula: &Formula, path: &Path) -> Result<(), err::ErrorKind> {
    check_extension(path)?;

    let file = File::create(path)?;

    match dimacs::write_dimacs(formula, BufWriter::new(file)) {
        Ok(()) => {
            log::info!(target: targets::DIMACS, "Wrote {} clauses to {}", formula.clause_count(), path.display());
            Ok(())
        }

        Err(e) => {
            log::warn!(target: targets::DIMACS, "Failed to write {}: {e}", path.display());
            let _ = std::fs::remove_file(path);
            Err(err::ErrorKind::from(e))
        }
    }
}
