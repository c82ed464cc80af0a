use anchor_lang::prelude::*;

use crate::constants::{MAX_BENEFICIARIES, MAX_START_PERCENT};
use crate::error::VestingError;
use crate::state::{BeneficiaryEntry, Beneficiaries, LockState, VestingState};

pub fn initialize(
    ctx: Context<Initialize>,
    start_ts: i64,
    close_ts: i64,
    start_percent: u8,
    fee_collector: Pubkey,
    release_fee: u64,
) -> Result<()> {
    require!(start_ts > 0, VestingError::InvalidConfig);
    require!(close_ts >= start_ts, VestingError::CloseBeforeStart);
    require!(
        start_percent <= MAX_START_PERCENT,
        VestingError::PercentOutOfRange
    );
    require!(fee_collector != Pubkey::default(), VestingError::InvalidPubkey);

    let st = &mut ctx.accounts.vesting_state;
    st.owner = ctx.accounts.owner.key();
    st.mint = Pubkey::default();
    st.fee_collector = fee_collector;
    st.release_fee = release_fee;
    st.start_ts = start_ts;
    st.close_ts = close_ts;
    st.start_percent = start_percent;
    st.lock = LockState::Unlocked;
    st.beneficiary_count = 0;

    let beneficiaries = &mut ctx.accounts.beneficiaries;
    beneficiaries.entries = [BeneficiaryEntry::default(); MAX_BENEFICIARIES];

    emit!(LedgerInitialized {
        owner: st.owner,
        start_ts,
        close_ts,
        start_percent,
        release_fee,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + VestingState::SIZE,
        seeds = [b"vesting_state"],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = owner,
        space = 8 + Beneficiaries::SIZE,
        seeds = [b"beneficiaries", vesting_state.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LedgerInitialized {
    pub owner: Pubkey,
    pub start_ts: i64,
    pub close_ts: i64,
    pub start_percent: u8,
    pub release_fee: u64,
}
