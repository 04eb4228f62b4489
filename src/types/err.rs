//! Error types used in the library.
//!
//! - Parameter and file type errors are found at the boundary, before any formula is generated.
//! - Oracle errors follow a labeling attempt which did not result in a (trustworthy) verdict.
//! - Parse and formula errors follow malformed input.
//!
//! Names of the error enums (for the most part) overlap with the concern they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{oracle::Unknown, structures::atom::Atom};

/// The general error, wrapping a specific error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parameter(ParameterError),
    FileType(FileTypeError),
    Oracle(OracleError),
    Parse(ParseError),
    Formula(FormulaError),

    /// Some input/output error, e.g. a missing file or a full disk.
    Io(std::io::ErrorKind),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parameter(e) => write!(f, "Invalid parameter: {e}"),
            Self::FileType(e) => write!(f, "{e}"),
            Self::Oracle(e) => write!(f, "Oracle error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Formula(e) => write!(f, "Formula error: {e}"),
            Self::Io(kind) => write!(f, "IO error: {kind}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e.kind())
    }
}

/// Generator parameters which violate some constraint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParameterError {
    /// The count of atoms is not positive.
    AtomCount(i64),

    /// The count of clauses is negative.
    ClauseCount(i64),

    /// The length of a clause is not positive, or exceeds the count of atoms.
    ClauseLength { length: i64, atom_count: i64 },

    /// The count of holes is not positive.
    HoleCount(i64),

    /// The pigeon multiplier is not positive.
    Multiplier(i64),

    /// The formula described would exceed the representable count of atoms or clauses.
    Size,
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomCount(n) => write!(f, "the count of variables must be positive (given {n})"),
            Self::ClauseCount(m) => write!(f, "the count of clauses must not be negative (given {m})"),
            Self::ClauseLength { length, atom_count } => write!(
                f,
                "k must be between 1 and the count of variables {atom_count} (given {length})"
            ),
            Self::HoleCount(n) => write!(f, "the count of holes must be positive (given {n})"),
            Self::Multiplier(k) => write!(f, "the k multiplier must be positive (given {k})"),
            Self::Size => write!(f, "the requested formula is too large to represent"),
        }
    }
}

impl From<ParameterError> for ErrorKind {
    fn from(e: ParameterError) -> Self {
        ErrorKind::Parameter(e)
    }
}

/// Issues with the type of a file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FileTypeError {
    /// The path does not end with the expected extension.
    Extension { expected: &'static str },
}

impl std::fmt::Display for FileTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extension { expected } => write!(f, "Invalid file type: {expected} expected"),
        }
    }
}

impl From<FileTypeError> for ErrorKind {
    fn from(e: FileTypeError) -> Self {
        ErrorKind::FileType(e)
    }
}

/// A labeling attempt did not lead to a verdict.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// The oracle could not decide the formula, for the noted reason.
    Unavailable(Unknown),

    /// The oracle claimed satisfiability, though the valuation given does not satisfy the formula.
    InvalidWitness,
}

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(unknown) => write!(f, "no decision ({unknown})"),
            Self::InvalidWitness => write!(f, "the witness given does not satisfy the formula"),
        }
    }
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

/// Errors during parsing.
///
/// Line numbers count from 1.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input, at the given line.
    ProblemSpecification(usize),

    /// No problem specification was found before the formula (or at all).
    MissingProblem,

    /// A second problem specification, at the given line.
    MisplacedProblem(usize),

    /// A token which is not an integer, at the given line.
    Literal(usize),

    /// A literal over an atom which exceeds the declared count of atoms.
    AtomOutOfBounds { line: usize, atom: Atom, atom_count: Atom },

    /// A clause which is not terminated by `0`, beginning on the given line.
    Unterminated(usize),

    /// The count of clauses read differs from the count declared.
    ClauseCount { expected: usize, found: usize },

    /// Some failure to read the given line.
    Line(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification(line) => write!(f, "malformed problem line at line {line}"),
            Self::MissingProblem => write!(f, "missing problem line"),
            Self::MisplacedProblem(line) => write!(f, "unexpected problem line at line {line}"),
            Self::Literal(line) => write!(f, "invalid literal at line {line}"),
            Self::AtomOutOfBounds { line, atom, atom_count } => write!(
                f,
                "variable {atom} exceeds the declared {atom_count} variables at line {line}"
            ),
            Self::Unterminated(line) => write!(f, "clause from line {line} is not terminated by 0"),
            Self::ClauseCount { expected, found } => {
                write!(f, "expected {expected} clauses, found {found}")
            }
            Self::Line(line) => write!(f, "failed to read line {line}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when building a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// Zero is not a literal.
    ZeroLiteral,

    /// A literal over an atom which exceeds the declared count of atoms.
    AtomOutOfBounds { atom: Atom, atom_count: Atom },
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLiteral => write!(f, "0 is not a literal"),
            Self::AtomOutOfBounds { atom, atom_count } => {
                write!(f, "variable {atom} exceeds the declared {atom_count} variables")
            }
        }
    }
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}
