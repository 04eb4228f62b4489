/*!
Reports on the satisfiability of a formula.
*/

/// High-level reports regarding a formula.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Report {
    /// The formula is satisfiable.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula is unknown, for some reason.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SAT"),
            Self::Unsatisfiable => write!(f, "UNSAT"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl std::str::FromStr for Report {
    type Err = ();

    /// Reads the short (`SAT`) or competition (`SATISFIABLE`) form of a report.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SAT" | "SATISFIABLE" => Ok(Self::Satisfiable),
            "UNSAT" | "UNSATISFIABLE" => Ok(Self::Unsatisfiable),
            "UNKNOWN" => Ok(Self::Unknown),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn display_parses_back() {
        for report in [Report::Satisfiable, Report::Unsatisfiable, Report::Unknown] {
            assert_eq!(report.to_string().parse::<Report>(), Ok(report));
        }
        assert_eq!("UNSATISFIABLE".parse::<Report>(), Ok(Report::Unsatisfiable));
        assert!("sat".parse::<Report>().is_err());
    }
}
