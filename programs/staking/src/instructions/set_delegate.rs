use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::VaultState;

/// Configure (or clear, with the default pubkey) the balance-change
/// notification delegate.
pub fn set_delegate(ctx: Context<SetDelegate>, delegate: Pubkey) -> Result<()> {
    let st = &mut ctx.accounts.vault_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        StakingError::UnauthorizedOwner
    );

    let old = st.delegate;
    st.delegate = delegate;

    emit!(DelegateSet {
        owner: st.owner,
        old_delegate: old,
        new_delegate: delegate,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetDelegate<'info> {
    #[account(mut, seeds = [b"vault_state"], bump)]
    pub vault_state: Box<Account<'info, VaultState>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct DelegateSet {
    pub owner: Pubkey,
    pub old_delegate: Pubkey,
    pub new_delegate: Pubkey,
}
