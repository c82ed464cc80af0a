use anchor_lang::prelude::*;

use crate::constants::MAX_POOLS;
use crate::error::StakingError;
use crate::state::{BlockGate, Pool, PoolConfig, VaultState};

/// Create the vault with its full pool set. Pools can never be added,
/// removed or reconfigured after this point.
pub fn initialize(
    ctx: Context<Initialize>,
    pool_configs: Vec<PoolConfig>,
    fee_collector: Pubkey,
    deposit_fee: u64,
    withdraw_fee: u64,
) -> Result<()> {
    require!(!pool_configs.is_empty(), StakingError::NoPools);
    require!(pool_configs.len() <= MAX_POOLS, StakingError::TooManyPools);
    require!(fee_collector != Pubkey::default(), StakingError::InvalidPubkey);

    let st = &mut ctx.accounts.vault_state;
    st.owner = ctx.accounts.owner.key();
    st.mint = Pubkey::default();
    st.delegate = Pubkey::default();
    st.fee_collector = fee_collector;
    st.deposit_fee = deposit_fee;
    st.withdraw_fee = withdraw_fee;
    st.start_block = BlockGate::Unset;
    st.close_block = BlockGate::Unset;
    st.pool_count = 0;
    st.pools = [Pool::default(); MAX_POOLS];

    for cfg in pool_configs.iter() {
        require!(cfg.lockup_duration >= 0, StakingError::InvalidConfig);
        let idx = st.pool_count as usize;
        st.pools[idx] = Pool::new(cfg.lockup_duration, cfg.total_deposit_cap);
        st.pool_count = st
            .pool_count
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
    }

    emit!(VaultInitialized {
        owner: st.owner,
        pool_count: st.pool_count,
        deposit_fee,
        withdraw_fee,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + VaultState::SIZE,
        seeds = [b"vault_state"],
        bump
    )]
    pub vault_state: Box<Account<'info, VaultState>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VaultInitialized {
    pub owner: Pubkey,
    pub pool_count: u8,
    pub deposit_fee: u64,
    pub withdraw_fee: u64,
}
