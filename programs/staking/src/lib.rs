//! # Simple Staking
//!
//! Multi-pool staking vault over a single SPL token. Each pool carries its
//! own lock-up duration and deposit cap; the vault as a whole runs between
//! an owner-configured start and close block. Per-pool conservation
//! invariant: `real_staked` always equals the sum of live user deposits, so
//! no withdrawal can exceed what was staked.
//!
//! `withdraw_emergency` is an owner escape hatch that bypasses that
//! accounting entirely and can drain staked user funds; deployments must
//! treat the owner key accordingly.

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::PoolConfig;

#[program]
pub mod simple_staking {
    use super::*;

    /// Create the vault with its fixed pool set and fee config.
    pub fn initialize(
        ctx: Context<Initialize>,
        pool_configs: Vec<PoolConfig>,
        fee_collector: Pubkey,
        deposit_fee: u64,
        withdraw_fee: u64,
    ) -> Result<()> {
        instructions::initialize(ctx, pool_configs, fee_collector, deposit_fee, withdraw_fee)
    }

    /// Bind the vault to its token mint and create the token vault. Once only.
    pub fn set_token_address(ctx: Context<SetTokenAddress>) -> Result<()> {
        instructions::set_token_address(ctx)
    }

    /// Configure the start gate (owner; frozen once the start has passed).
    pub fn set_start_block(ctx: Context<SetStartBlock>, start_block: u64) -> Result<()> {
        instructions::set_start_block(ctx, start_block)
    }

    /// Configure the close gate (owner; must follow start, frozen once passed).
    pub fn set_close_block(ctx: Context<SetCloseBlock>, close_block: u64) -> Result<()> {
        instructions::set_close_block(ctx, close_block)
    }

    /// Update the fee gate configuration (owner).
    pub fn set_fees(
        ctx: Context<SetFees>,
        fee_collector: Pubkey,
        deposit_fee: u64,
        withdraw_fee: u64,
    ) -> Result<()> {
        instructions::set_fees(ctx, fee_collector, deposit_fee, withdraw_fee)
    }

    /// Configure the balance-change delegate (owner).
    pub fn set_delegate(ctx: Context<SetDelegate>, delegate: Pubkey) -> Result<()> {
        instructions::set_delegate(ctx, delegate)
    }

    /// Hand the owner capability to another identity (owner).
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    /// Fee-gated stake into pool `pid`.
    pub fn deposit(ctx: Context<Deposit>, pid: u8, amount: u64) -> Result<()> {
        instructions::deposit(ctx, pid, amount)
    }

    /// Fee-gated unstake from pool `pid`.
    pub fn withdraw(ctx: Context<Withdraw>, pid: u8, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, pid, amount)
    }

    /// Owner sweep of the post-close surplus.
    pub fn withdraw_remaining(ctx: Context<WithdrawRemaining>) -> Result<()> {
        instructions::withdraw_remaining(ctx)
    }

    /// Owner escape hatch: drain the whole vault balance unconditionally.
    pub fn withdraw_emergency(ctx: Context<WithdrawEmergency>) -> Result<()> {
        instructions::withdraw_emergency(ctx)
    }

    /// Emit the (always-zero) pending-reward stub for one position.
    pub fn emit_pending_rewards(
        ctx: Context<EmitPendingRewards>,
        pid: u8,
        wallet: Pubkey,
    ) -> Result<()> {
        instructions::emit_pending_rewards(ctx, pid, wallet)
    }

    /// Emit the derived lifecycle status.
    pub fn emit_vault_status(ctx: Context<EmitVaultStatus>) -> Result<()> {
        instructions::emit_vault_status(ctx)
    }
}
