use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Beneficiaries, VestingState};
use crate::utils::curve;

/// Read accessor: emits the full per-beneficiary accounting view
/// (initial, current, withdrawn, curve value, withdrawal limit).
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, wallet: Pubkey) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    let now = Clock::get()?.unix_timestamp;

    let entry = ctx
        .accounts
        .beneficiaries
        .entries
        .iter()
        .take(st.beneficiary_count as usize)
        .find(|e| e.wallet == wallet)
        .ok_or(VestingError::BeneficiaryNotFound)?;

    let allowed = if st.token_set() {
        curve::amount_allowed_to_withdraw(
            entry.initial_amount,
            now,
            st.start_ts,
            st.close_ts,
            st.start_percent,
        )?
    } else {
        0
    };
    let limit = curve::withdrawal_limit(entry.initial_amount, entry.current_amount, allowed)
        .unwrap_or(0);

    emit!(VestingQuote {
        wallet,
        initial_amount: entry.initial_amount,
        current_amount: entry.current_amount,
        withdrawn: entry.withdrawn(),
        amount_allowed: allowed,
        withdrawal_limit: limit,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        seeds = [b"beneficiaries", vesting_state.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,
}

#[event]
pub struct VestingQuote {
    pub wallet: Pubkey,
    pub initial_amount: u64,
    pub current_amount: u64,
    pub withdrawn: u64,
    pub amount_allowed: u64,
    pub withdrawal_limit: u64,
}
