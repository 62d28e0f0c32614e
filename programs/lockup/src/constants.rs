//! Program-wide constants.

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Upper bound on `duration_seconds` (10 years).
pub const MAX_VESTING_DURATION: i64 = 10 * 365 * SECONDS_PER_DAY;
