//! Default values for the [configuration](super::Config).

use std::time::Duration;

pub const CHECK_WITNESS: bool = true;

pub const ORACLE_ATTEMPTS: u32 = 1;
pub const MAX_ORACLE_ATTEMPTS: u32 = 16;

/// No limit, as a label is required for each random formula.
pub const TIME_LIMIT: Option<Duration> = None;

pub const WORKERS: usize = 1;
pub const MAX_WORKERS: usize = 256;

/// The count of clauses sampled from a single stream of randomness when sampling in parallel.
pub const SAMPLE_BLOCK: usize = 1024;
