//! Program-wide constants.

/// Max beneficiaries stored on-chain in the beneficiaries list PDA.
pub const MAX_BENEFICIARIES: usize = 35;

/// Upper bound for the immediate-release percent.
pub const MAX_START_PERCENT: u8 = 100;

/// Permille denominator used by the release-curve interpolation.
pub const PERMILLE: u128 = 1_000;
