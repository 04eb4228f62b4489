use std::io::Write;

use crate::structures::{clause::Clause, formula::Formula};

/// Writes a formula in DIMACS form.
///
/// Each comment is written as a single `c` line, as [push_comment](Formula::push_comment) splits comments which span lines.
///
/// ```rust
/// # use sat_corpus::dimacs::write_dimacs;
/// # use sat_corpus::structures::formula::Formula;
/// let mut formula = Formula::new(5);
/// formula.push_comment("An example");
/// assert!(formula.add_clause(vec![1, -3, 5]).is_ok());
///
/// let mut dimacs = vec![];
/// assert!(write_dimacs(&formula, &mut dimacs).is_ok());
/// assert_eq!(String::from_utf8(dimacs).unwrap(), "c An example\np cnf 5 1\n1 -3 5 0\n");
/// ```
pub fn write_dimacs(formula: &Formula, mut writer: impl Write) -> std::io::Result<()> {
    for comment in formula.comments() {
        writeln!(writer, "c {comment}")?;
    }

    writeln!(
        writer,
        "p cnf {} {}",
        formula.atom_count(),
        formula.clause_count()
    )?;

    for clause in formula.clauses() {
        writeln!(writer, "{}", clause.as_dimacs(true))?;
    }

    writer.flush()
}
