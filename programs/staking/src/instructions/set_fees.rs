use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::VaultState;

pub fn set_fees(
    ctx: Context<SetFees>,
    fee_collector: Pubkey,
    deposit_fee: u64,
    withdraw_fee: u64,
) -> Result<()> {
    require!(fee_collector != Pubkey::default(), StakingError::InvalidPubkey);

    let st = &mut ctx.accounts.vault_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        StakingError::UnauthorizedOwner
    );

    st.fee_collector = fee_collector;
    st.deposit_fee = deposit_fee;
    st.withdraw_fee = withdraw_fee;

    emit!(FeesSet {
        owner: st.owner,
        fee_collector,
        deposit_fee,
        withdraw_fee,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetFees<'info> {
    #[account(mut, seeds = [b"vault_state"], bump)]
    pub vault_state: Box<Account<'info, VaultState>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct FeesSet {
    pub owner: Pubkey,
    pub fee_collector: Pubkey,
    pub deposit_fee: u64,
    pub withdraw_fee: u64,
}
