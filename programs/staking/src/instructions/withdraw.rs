use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::StakingError;
use crate::instructions::deposit::BalanceChanged;
use crate::state::{UserInfo, VaultState};
use crate::utils::fee;

/// Fee-gated unstake from one pool. Allowed once the lock has expired, or
/// at any time after the vault has closed (close overrides lock). Ledger is
/// debited before the outgoing transfer CPI.
pub fn withdraw(ctx: Context<Withdraw>, pid: u8, amount: u64) -> Result<()> {
    let vault_state_ai = ctx.accounts.vault_state.to_account_info();
    let vault_state_bump = ctx.bumps.vault_state;

    let st = &mut ctx.accounts.vault_state;

    fee::collect(
        st.withdraw_fee,
        &ctx.accounts.staker,
        &ctx.accounts.fee_collector,
        &ctx.accounts.system_program,
    )?;

    let clock = Clock::get()?;
    let current_block = clock.slot;
    let now = clock.unix_timestamp;

    require!(st.is_started(current_block), StakingError::NotStarted);
    st.pool(pid)?;

    let user = &mut ctx.accounts.user;
    require!(
        user.can_withdraw(now, st.is_stopped(current_block)),
        StakingError::StillLocked
    );
    require!(amount <= user.amount, StakingError::InsufficientStake);

    if amount > 0 {
        user.amount = user
            .amount
            .checked_sub(amount)
            .ok_or(StakingError::InsufficientStake)?;
        let pool = st.pool_mut(pid)?;
        pool.real_staked = pool
            .real_staked
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;

        let signer_seeds: &[&[&[u8]]] = &[&[b"vault_state", &[vault_state_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.staker_token.to_account_info(),
                    authority: vault_state_ai,
                },
                signer_seeds,
            ),
            amount,
        )?;
    }

    emit!(Withdrawn {
        wallet: user.wallet,
        pid,
        amount,
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
pub struct Withdraw<'info> {
    #[account(mut, seeds = [b"vault_state"], bump)]
    pub vault_state: Box<Account<'info, VaultState>>,

    #[account(
        mut,
        seeds = [
            b"user",
            vault_state.key().as_ref(),
            &[pid],
            staker.key().as_ref()
        ],
        bump = user.bump,
        constraint = user.wallet == staker.key() @ StakingError::InvalidTokenAccount,
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
        constraint = staker_token.mint == vault_state.mint @ StakingError::InvalidTokenMint,
        constraint = staker_token.owner == staker.key() @ StakingError::InvalidTokenAccount,
    )]
    pub staker_token: Account<'info, TokenAccount>,

    #[account(mut)]
    pub staker: Signer<'info>,

    #[account(
        mut,
        address = vault_state.fee_collector @ StakingError::InvalidFeeCollector,
    )]
    pub fee_collector: SystemAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct Withdrawn {
    pub wallet: Pubkey,
    pub pid: u8,
    pub amount: u64,
    pub real_staked: u64,
}
