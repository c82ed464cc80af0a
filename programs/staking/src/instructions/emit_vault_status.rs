use anchor_lang::prelude::*;

use crate::state::VaultState;

/// Read accessor: emits the derived lifecycle booleans and gate values.
pub fn emit_vault_status(ctx: Context<EmitVaultStatus>) -> Result<()> {
    let st = &ctx.accounts.vault_state;
    let current_block = Clock::get()?.slot;

    emit!(VaultStatus {
        started: st.is_started(current_block),
        stopped: st.is_stopped(current_block),
        start_block: st.start_block.get().unwrap_or(0),
        close_block: st.close_block.get().unwrap_or(0),
        current_block,
        pool_count: st.pool_count,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitVaultStatus<'info> {
    #[account(seeds = [b"vault_state"], bump)]
    pub vault_state: Box<Account<'info, VaultState>>,
}

#[event]
pub struct VaultStatus {
    pub started: bool,
    pub stopped: bool,
    pub start_block: u64,
    pub close_block: u64,
    pub current_block: u64,
    pub pool_count: u8,
}
