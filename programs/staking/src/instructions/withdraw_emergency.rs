use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::StakingError;
use crate::state::VaultState;

/// Owner escape hatch with no lifecycle precondition: moves the vault's
/// entire token balance to the destination, bypassing all pool accounting.
/// This can drain funds owed to stakers; the owner role is fully trusted.
pub fn withdraw_emergency(ctx: Context<WithdrawEmergency>) -> Result<()> {
    let st = &ctx.accounts.vault_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        StakingError::UnauthorizedOwner
    );

    let amount = ctx.accounts.vault.amount;
    if amount > 0 {
        let signer_seeds: &[&[&[u8]]] = &[&[b"vault_state", &[ctx.bumps.vault_state]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.destination.to_account_info(),
                    authority: ctx.accounts.vault_state.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;
    }

    emit!(EmergencyWithdrawn {
        owner: st.owner,
        destination: ctx.accounts.destination.owner,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawEmergency<'info> {
    #[account(mut, seeds = [b"vault_state"], bump)]
    pub vault_state: Box<Account<'info, VaultState>>,

    #[account(
        mut,
        seeds = [b"token_vault", vault_state.key().as_ref()],
        bump,
        constraint = vault.mint == vault_state.mint @ StakingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Any token account of the vault's mint; its holder receives the
    /// full balance.
    #[account(
        mut,
        constraint = destination.mint == vault_state.mint @ StakingError::InvalidTokenMint,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct EmergencyWithdrawn {
    pub owner: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}
