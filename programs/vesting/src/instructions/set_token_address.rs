use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::VestingError;
use crate::state::VestingState;

/// Settable exactly once: the vault PDA is created here, so a second call
/// fails on account creation even before the mint check.
pub fn set_token_address(ctx: Context<SetTokenAddress>) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        VestingError::UnauthorizedOwner
    );
    require!(!st.token_set(), VestingError::TokenAlreadySet);

    st.mint = ctx.accounts.mint.key();

    emit!(TokenAddressSet {
        owner: st.owner,
        mint: st.mint,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetTokenAddress<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = vesting_state,
        seeds = [b"vault", vesting_state.key().as_ref()],
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
