use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{LockState, VestingState};

/// One-way freeze of the beneficiary set. Deliberately unguarded against
/// repeated calls: locking an already-locked ledger has no further effect.
pub fn lock(ctx: Context<Lock>) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        VestingError::UnauthorizedOwner
    );

    st.lock = LockState::Locked;

    emit!(BeneficiariesLocked {
        owner: st.owner,
        beneficiary_count: st.beneficiary_count,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Lock<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct BeneficiariesLocked {
    pub owner: Pubkey,
    pub beneficiary_count: u8,
}
