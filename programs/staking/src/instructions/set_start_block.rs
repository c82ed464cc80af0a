use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::{BlockGate, VaultState};

/// Configure the start gate. A start that has already been reached is
/// frozen forever; an unreached one may still be moved.
pub fn set_start_block(ctx: Context<SetStartBlock>, start_block: u64) -> Result<()> {
    require!(start_block > 0, StakingError::InvalidStartBlock);

    let st = &mut ctx.accounts.vault_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        StakingError::UnauthorizedOwner
    );

    let current_block = Clock::get()?.slot;
    require!(
        st.start_block.may_reconfigure(current_block),
        StakingError::StartBlockPassed
    );

    st.start_block = BlockGate::SetAt(start_block);

    emit!(StartBlockSet {
        owner: st.owner,
        start_block,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetStartBlock<'info> {
    #[account(mut, seeds = [b"vault_state"], bump)]
    pub vault_state: Box<Account<'info, VaultState>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct StartBlockSet {
    pub owner: Pubkey,
    pub start_block: u64,
}
