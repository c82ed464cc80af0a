//! Program-wide constants.

/// Hard cap on the number of pools per vault (fixed at construction).
pub const MAX_POOLS: usize = 10;
