use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::StakingError;
use crate::state::{UserInfo, VaultState};
use crate::utils::fee;

/// Fee-gated stake into one pool. Amount 0 is a legal no-op call; it still
/// re-arms an expired lock timer and fires the delegate notification.
/// Ledger is credited before the incoming transfer CPI.
pub fn deposit(ctx: Context<Deposit>, pid: u8, amount: u64) -> Result<()> {
    let st = &mut ctx.accounts.vault_state;

    fee::collect(
        st.deposit_fee,
        &ctx.accounts.depositor,
        &ctx.accounts.fee_collector,
        &ctx.accounts.system_program,
    )?;

    let clock = Clock::get()?;
    let current_block = clock.slot;
    let now = clock.unix_timestamp;

    require!(st.is_started(current_block), StakingError::NotStarted);
    require!(!st.is_stopped(current_block), StakingError::AlreadyClosed);

    let pool = st.pool(pid)?;
    let lockup_duration = pool.lockup_duration;
    require!(pool.cap_allows(amount), StakingError::DepositCapExceeded);

    let user = &mut ctx.accounts.user;
    if user.wallet == Pubkey::default() {
        user.wallet = ctx.accounts.depositor.key();
        user.pid = pid;
        user.bump = ctx.bumps.user;
    }

    if amount > 0 {
        user.amount = user
            .amount
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        let pool = st.pool_mut(pid)?;
        pool.real_staked = pool
            .real_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.depositor_token.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                    authority: ctx.accounts.depositor.to_account_info(),
                },
            ),
            amount,
        )?;
    }

    user.refresh_lock(now, lockup_duration)?;

    emit!(Deposited {
        wallet: user.wallet,
        pid,
        amount,
        locked_until: user.locked_until,
        real_staked: st.pool(pid)?.real_staked,
    });
    if st.has_delegate() {
        emit!(BalanceChanged {
            delegate: st.delegate,
            wallet: user.wallet,
            pid,
            mint: st.mint,
            new_amount: user.amount,
        });
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(pid: u8)]
pub struct Deposit<'info> {
    #[account(mut, seeds = [b"vault_state"], bump)]
    pub vault_state: Box<Account<'info, VaultState>>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = 8 + UserInfo::SIZE,
        seeds = [
            b"user",
            vault_state.key().as_ref(),
            &[pid],
            depositor.key().as_ref()
        ],
        bump
    )]
    pub user: Account<'info, UserInfo>,

    #[account(
        mut,
        seeds = [b"token_vault", vault_state.key().as_ref()],
        bump,
        constraint = vault.mint == vault_state.mint @ StakingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = depositor_token.mint == vault_state.mint @ StakingError::InvalidTokenMint,
        constraint = depositor_token.owner == depositor.key() @ StakingError::InvalidTokenAccount,
    )]
    pub depositor_token: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        address = vault_state.fee_collector @ StakingError::InvalidFeeCollector,
    )]
    pub fee_collector: SystemAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct Deposited {
    pub wallet: Pubkey,
    pub pid: u8,
    pub amount: u64,
    pub locked_until: i64,
    pub real_staked: u64,
}

/// Fire-and-forget delegate notification.
#[event]
pub struct BalanceChanged {
    pub delegate: Pubkey,
    pub wallet: Pubkey,
    pub pid: u8,
    pub mint: Pubkey,
    pub new_amount: u64,
}
