// Constants for the heap-sort simulator

/// Sequence sorted when no `--values` are given
pub const DEFAULT_VALUES: [i64; 10] = [4, 10, 3, 5, 1, 2, 8, 7, 6, 9];

/// Default autoplay cadence in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// Fastest autoplay cadence the driver accepts
pub const MIN_INTERVAL_MS: u64 = 50;
