use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{Beneficiaries, VestingState};
use crate::utils::{curve, fee};

/// The only state-mutating entry point after lock. Ledger is debited before
/// the outgoing transfer CPI.
pub fn release(ctx: Context<Release>) -> Result<()> {
    // Capture AccountInfos/bump before taking mutable borrows.
    let vesting_state_ai = ctx.accounts.vesting_state.to_account_info();
    let vesting_state_bump = ctx.bumps.vesting_state;

    let st = &ctx.accounts.vesting_state;

    fee::collect(
        st.release_fee,
        &ctx.accounts.beneficiary,
        &ctx.accounts.fee_collector,
        &ctx.accounts.system_program,
    )?;

    require!(st.token_set(), VestingError::TokenNotSet);
    require!(st.is_locked(), VestingError::BeneficiariesNotLocked);

    let now = Clock::get()?.unix_timestamp;
    require!(st.release_open(now), VestingError::ReleaseNotOpen);

    let caller = ctx.accounts.beneficiary.key();
    let count = st.beneficiary_count as usize;
    let (start_ts, close_ts, start_percent) = (st.start_ts, st.close_ts, st.start_percent);

    let beneficiaries = &mut ctx.accounts.beneficiaries;
    let entry = beneficiaries
        .entries
        .iter_mut()
        .take(count)
        .find(|e| e.wallet == caller)
        .ok_or(VestingError::BeneficiaryNotFound)?;

    require!(entry.initial_amount > 0, VestingError::BeneficiaryNotFound);
    require!(entry.current_amount > 0, VestingError::NothingLeft);

    let allowed = curve::amount_allowed_to_withdraw(
        entry.initial_amount,
        now,
        start_ts,
        close_ts,
        start_percent,
    )?;
    let amount = curve::withdrawal_limit(entry.initial_amount, entry.current_amount, allowed)?;

    require!(amount > 0, VestingError::NothingToWithdraw);
    // Unreachable with a monotone curve; kept as a conservation check.
    require!(
        amount <= entry.current_amount,
        VestingError::AccountingViolation
    );
    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    entry.current_amount = entry
        .current_amount
        .checked_sub(amount)
        .ok_or(VestingError::AccountingViolation)?;
    let released_total = entry.withdrawn();
    let initial_amount = entry.initial_amount;

    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_state", &[vesting_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token.to_account_info(),
                authority: vesting_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TokensReleased {
        wallet: caller,
        amount,
        released_total,
        initial_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"beneficiaries", vesting_state.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,

    #[account(
        mut,
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump,
        constraint = vault.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
        constraint = beneficiary_token.owner == beneficiary.key() @ VestingError::InvalidTokenAccount,
    )]
    pub beneficiary_token: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(
        mut,
        address = vesting_state.fee_collector @ VestingError::InvalidFeeCollector,
    )]
    pub fee_collector: SystemAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensReleased {
    pub wallet: Pubkey,
    pub amount: u64,
    pub released_total: u64,
    pub initial_amount: u64,
}
