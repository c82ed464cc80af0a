use anchor_lang::prelude::*;

use crate::state::VaultState;

/// Reward accrual is scaffolded but never computed; the pending amount is
/// always 0. Kept to preserve the observed interface.
pub fn emit_pending_rewards(
    ctx: Context<EmitPendingRewards>,
    pid: u8,
    wallet: Pubkey,
) -> Result<()> {
    ctx.accounts.vault_state.pool(pid)?;

    emit!(PendingRewards {
        pid,
        wallet,
        amount: 0,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitPendingRewards<'info> {
    #[account(seeds = [b"vault_state"], bump)]
    pub vault_state: Box<Account<'info, VaultState>>,
}

#[event]
pub struct PendingRewards {
    pub pid: u8,
    pub wallet: Pubkey,
    pub amount: u64,
}
