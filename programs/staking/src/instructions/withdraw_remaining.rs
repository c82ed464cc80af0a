use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::StakingError;
use crate::state::VaultState;

/// Owner sweep of the surplus after close: whatever the vault holds beyond
/// the live stake (plus any rewarded-but-unpaid amount) across all pools.
pub fn withdraw_remaining(ctx: Context<WithdrawRemaining>) -> Result<()> {
    let vault_state_ai = ctx.accounts.vault_state.to_account_info();
    let vault_state_bump = ctx.bumps.vault_state;

    let st = &mut ctx.accounts.vault_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        StakingError::UnauthorizedOwner
    );

    let current_block = Clock::get()?.slot;
    let start = st.start_block.get().ok_or(StakingError::StartBlockNotSet)?;
    require!(st.close_block.is_set(), StakingError::CloseBlockNotSet);
    require!(st.is_stopped(current_block), StakingError::NotClosed);

    // Bookkeeping pass over every pool before settling.
    let close = st.close_block.get();
    let count = st.pool_count as usize;
    for pool in st.pools.iter_mut().take(count) {
        pool.update(start, close, current_block);
    }

    let reserved = st.reserved()?;
    let balance = ctx.accounts.vault.amount as u128;
    let surplus = balance.saturating_sub(reserved);
    let amount = u64::try_from(surplus).map_err(|_| StakingError::MathOverflow)?;

    if amount > 0 {
        let signer_seeds: &[&[&[u8]]] = &[&[b"vault_state", &[vault_state_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.owner_token.to_account_info(),
                    authority: vault_state_ai,
                },
                signer_seeds,
            ),
            amount,
        )?;
    }

    emit!(RemainingWithdrawn {
        owner: st.owner,
        amount,
        reserved: u64::try_from(reserved).unwrap_or(u64::MAX),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawRemaining<'info> {
    #[account(mut, seeds = [b"vault_state"], bump)]
    pub vault_state: Box<Account<'info, VaultState>>,

    #[account(
        mut,
        seeds = [b"token_vault", vault_state.key().as_ref()],
        bump,
        constraint = vault.mint == vault_state.mint @ StakingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_token.mint == vault_state.mint @ StakingError::InvalidTokenMint,
        constraint = owner_token.owner == owner.key() @ StakingError::InvalidTokenAccount,
    )]
    pub owner_token: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct RemainingWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub reserved: u64,
}
