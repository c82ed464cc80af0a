use anchor_lang::prelude::*;

/// Custom error codes for the staking vault.
#[error_code]
pub enum StakingError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Vault needs at least one pool")]
    NoPools,

    #[msg("Too many pools (max 10)")]
    TooManyPools,

    #[msg("Invalid pool id")]
    InvalidPoolId,

    #[msg("Token address is already set")]
    TokenAlreadySet,

    #[msg("Token address is not set")]
    TokenNotSet,

    #[msg("Start block must be nonzero")]
    InvalidStartBlock,

    #[msg("Start block has already passed and cannot be moved")]
    StartBlockPassed,

    #[msg("Start block is not set")]
    StartBlockNotSet,

    #[msg("Close block must be after the start block")]
    CloseNotAfterStart,

    #[msg("Close block has already passed and cannot be moved")]
    CloseBlockPassed,

    #[msg("Close block is not set")]
    CloseBlockNotSet,

    #[msg("Vault has not started")]
    NotStarted,

    #[msg("Vault is closed")]
    AlreadyClosed,

    #[msg("Vault is not closed yet")]
    NotClosed,

    #[msg("Deposit would exceed the pool cap")]
    DepositCapExceeded,

    #[msg("Stake is still locked")]
    StillLocked,

    #[msg("Withdrawal exceeds staked amount")]
    InsufficientStake,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Fee collector account mismatch")]
    InvalidFeeCollector,

    #[msg("Math overflow")]
    MathOverflow,
}
