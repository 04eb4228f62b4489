/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
Note, no log implementation is provided by the library.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [generators](crate::generators), including the seed of a random formula.
    pub const GENERATE: &str = "generate";

    /// Logs related to an [oracle](crate::oracle)
    pub const ORACLE: &str = "oracle";

    /// Logs related to reading or writing [DIMACS](crate::dimacs)
    pub const DIMACS: &str = "dimacs";

    /// Logs related to the [pipeline](crate::pipeline)
    pub const PIPELINE: &str = "pipeline";
}
