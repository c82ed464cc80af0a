//! # Simple Vesting
//!
//! Linear/cliff vesting distributor over a single SPL token vault. The owner
//! configures a piecewise-linear release curve and a beneficiary set, then
//! locks the set; beneficiaries pull their vested share through a fee-gated
//! `release` entry point. Conservation invariant: a beneficiary can never
//! withdraw more than their allotment, in total, regardless of call timing.

use anchor_lang::prelude::*;

declare_id!("DiPZqUTup1rsxvfDcBoKdpSno5c1jVmo33xCqFFcQFXW");

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::BeneficiaryInput;

#[program]
pub mod simple_vesting {
    use super::*;

    /// Create the ledger with its release-curve parameters and fee config.
    pub fn initialize(
        ctx: Context<Initialize>,
        start_ts: i64,
        close_ts: i64,
        start_percent: u8,
        fee_collector: Pubkey,
        release_fee: u64,
    ) -> Result<()> {
        instructions::initialize(ctx, start_ts, close_ts, start_percent, fee_collector, release_fee)
    }

    /// Bind the ledger to its token mint and create the vault. Once only.
    pub fn set_token_address(ctx: Context<SetTokenAddress>) -> Result<()> {
        instructions::set_token_address(ctx)
    }

    /// Add or overwrite allotments (owner, pre-lock only).
    pub fn add_beneficiaries(
        ctx: Context<AddBeneficiaries>,
        inputs: Vec<BeneficiaryInput>,
    ) -> Result<()> {
        instructions::add_beneficiaries(ctx, inputs)
    }

    /// Freeze the beneficiary set (one-way).
    pub fn lock(ctx: Context<Lock>) -> Result<()> {
        instructions::lock(ctx)
    }

    /// Update the fee gate configuration (owner).
    pub fn set_fees(ctx: Context<SetFees>, fee_collector: Pubkey, release_fee: u64) -> Result<()> {
        instructions::set_fees(ctx, fee_collector, release_fee)
    }

    /// Hand the owner capability to another identity (owner).
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    /// Fee-gated pull of the caller's currently unlockable amount.
    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release(ctx)
    }

    /// Emit the accounting view for one beneficiary.
    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_vesting_quote(ctx, wallet)
    }
}
