use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingState;

pub fn set_fees(
    ctx: Context<SetFees>,
    fee_collector: Pubkey,
    release_fee: u64,
) -> Result<()> {
    require!(fee_collector != Pubkey::default(), VestingError::InvalidPubkey);

    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        VestingError::UnauthorizedOwner
    );

    st.fee_collector = fee_collector;
    st.release_fee = release_fee;

    emit!(FeesSet {
        owner: st.owner,
        fee_collector,
        release_fee,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetFees<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct FeesSet {
    pub owner: Pubkey,
    pub fee_collector: Pubkey,
    pub release_fee: u64,
}
