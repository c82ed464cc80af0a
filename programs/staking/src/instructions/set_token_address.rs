use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::StakingError;
use crate::state::VaultState;

/// Settable exactly once: the token vault PDA is created here, so a second
/// call fails on account creation even before the mint check.
pub fn set_token_address(ctx: Context<SetTokenAddress>) -> Result<()> {
    let st = &mut ctx.accounts.vault_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        StakingError::UnauthorizedOwner
    );
    require!(!st.token_set(), StakingError::TokenAlreadySet);

    st.mint = ctx.accounts.mint.key();

    emit!(TokenAddressSet {
        owner: st.owner,
        mint: st.mint,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetTokenAddress<'info> {
    #[account(mut, seeds = [b"vault_state"], bump)]
    pub vault_state: Box<Account<'info, VaultState>>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = vault_state,
        seeds = [b"token_vault", vault_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TokenAddressSet {
    pub owner: Pubkey,
    pub mint: Pubkey,
}
