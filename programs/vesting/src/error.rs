use anchor_lang::prelude::*;

/// Custom error codes for the vesting distributor.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Close time must not precede start time")]
    CloseBeforeStart,

    #[msg("Start percent exceeds 100")]
    PercentOutOfRange,

    #[msg("Token address is already set")]
    TokenAlreadySet,

    #[msg("Token address is not set")]
    TokenNotSet,

    #[msg("Beneficiary set is locked")]
    BeneficiariesLocked,

    #[msg("Beneficiary set is not locked yet")]
    BeneficiariesNotLocked,

    #[msg("Beneficiary list is full")]
    BeneficiaryListFull,

    #[msg("Invalid allocation (must be > 0)")]
    InvalidAllocation,

    #[msg("Caller has no allotment")]
    BeneficiaryNotFound,

    #[msg("Allotment fully withdrawn")]
    NothingLeft,

    #[msg("Nothing to withdraw yet")]
    NothingToWithdraw,

    #[msg("Release not open: before start and no immediate-release percent")]
    ReleaseNotOpen,

    #[msg("Release amount exceeds remaining balance")]
    AccountingViolation,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Fee collector account mismatch")]
    InvalidFeeCollector,

    #[msg("Math overflow")]
    MathOverflow,
}
