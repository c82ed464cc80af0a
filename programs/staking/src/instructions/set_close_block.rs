use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::{BlockGate, VaultState};

/// Configure the close gate: requires a start gate, must lie after it, and
/// freezes once the configured close has been reached.
pub fn set_close_block(ctx: Context<SetCloseBlock>, close_block: u64) -> Result<()> {
    let st = &mut ctx.accounts.vault_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        StakingError::UnauthorizedOwner
    );

    let start = st
        .start_block
        .get()
        .ok_or(StakingError::StartBlockNotSet)?;
    require!(close_block > start, StakingError::CloseNotAfterStart);

    let current_block = Clock::get()?.slot;
    require!(
        st.close_block.may_reconfigure(current_block),
        StakingError::CloseBlockPassed
    );

    st.close_block = BlockGate::SetAt(close_block);

    emit!(CloseBlockSet {
        owner: st.owner,
        close_block,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetCloseBlock<'info> {
    #[account(mut, seeds = [b"vault_state"], bump)]
    pub vault_state: Box<Account<'info, VaultState>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct CloseBlockSet {
    pub owner: Pubkey,
    pub close_block: u64,
}
