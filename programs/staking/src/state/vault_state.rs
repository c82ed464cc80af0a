use anchor_lang::prelude::*;

use crate::constants::MAX_POOLS;
use crate::error::StakingError;
use crate::state::Pool;

/// One-way block-height gate: settable (and re-settable) only while the
/// previously configured block has not yet been reached. Never reversible
/// to `Unset`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockGate {
    Unset,
    SetAt(u64),
}

impl BlockGate {
    pub fn get(&self) -> Option<u64> {
        match self {
            BlockGate::Unset => None,
            BlockGate::SetAt(b) => Some(*b),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, BlockGate::SetAt(_))
    }

    /// True once the configured block has been reached.
    pub fn passed(&self, current_block: u64) -> bool {
        matches!(self, BlockGate::SetAt(b) if current_block >= *b)
    }

    /// Whether the gate may still be (re)configured at `current_block`.
    pub fn may_reconfigure(&self, current_block: u64) -> bool {
        match self {
            BlockGate::Unset => true,
            BlockGate::SetAt(b) => current_block < *b,
        }
    }
}

/// Single staking vault state PDA.
#[account]
pub struct VaultState {
    /// Privileged owner (set at creation, transferable).
    pub owner: Pubkey,
    /// Token mint; `Pubkey::default()` until `set_token_address` runs.
    pub mint: Pubkey,
    /// Delegate notified (via event) on balance changes; default = none.
    pub delegate: Pubkey,
    /// Destination for entry fees collected by the fee gate.
    pub fee_collector: Pubkey,
    /// Lamport fee charged per `deposit` call (0 = free).
    pub deposit_fee: u64,
    /// Lamport fee charged per `withdraw` call (0 = free).
    pub withdraw_fee: u64,
    /// Vault-wide start gate (block height).
    pub start_block: BlockGate,
    /// Vault-wide close gate (block height); close overrides lock-ups.
    pub close_block: BlockGate,
    /// Number of live pools (fixed at construction, <= 10).
    pub pool_count: u8,
    pub pools: [Pool; MAX_POOLS],
}

impl VaultState {
    pub const SIZE: usize =
        32 +              // owner
        32 +              // mint
        32 +              // delegate
        32 +              // fee_collector
        8 +               // deposit_fee
        8 +               // withdraw_fee
        9 +               // start_block (tag + u64)
        9 +               // close_block
        1 +               // pool_count
        Pool::SIZE * MAX_POOLS;

    pub fn token_set(&self) -> bool {
        self.mint != Pubkey::default()
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate != Pubkey::default()
    }

    pub fn is_started(&self, current_block: u64) -> bool {
        self.start_block.passed(current_block)
    }

    pub fn is_stopped(&self, current_block: u64) -> bool {
        self.close_block.passed(current_block)
    }

    pub fn pool(&self, pid: u8) -> Result<&Pool> {
        self.pools
            .get(pid as usize)
            .filter(|_| pid < self.pool_count)
            .ok_or_else(|| StakingError::InvalidPoolId.into())
    }

    pub fn pool_mut(&mut self, pid: u8) -> Result<&mut Pool> {
        let count = self.pool_count;
        self.pools
            .get_mut(pid as usize)
            .filter(|_| pid < count)
            .ok_or_else(|| StakingError::InvalidPoolId.into())
    }

    /// Tokens owed across all pools: live stake plus rewarded-but-unpaid
    /// amounts, net of reward funding already received.
    pub fn reserved(&self) -> Result<u128> {
        let mut staked: u128 = 0;
        let mut rewarded: u128 = 0;
        let mut received: u128 = 0;
        for p in self.pools.iter().take(self.pool_count as usize) {
            staked = staked
                .checked_add(p.real_staked as u128)
                .ok_or(StakingError::MathOverflow)?;
            rewarded = rewarded
                .checked_add(p.token_rewarded as u128)
                .ok_or(StakingError::MathOverflow)?;
            received = received
                .checked_add(p.token_received as u128)
                .ok_or(StakingError::MathOverflow)?;
        }
        staked
            .checked_add(rewarded)
            .ok_or(StakingError::MathOverflow)?
            .checked_sub(received)
            .ok_or_else(|| StakingError::MathOverflow.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault(pool_count: u8) -> VaultState {
        VaultState {
            owner: Pubkey::default(),
            mint: Pubkey::default(),
            delegate: Pubkey::default(),
            fee_collector: Pubkey::default(),
            deposit_fee: 0,
            withdraw_fee: 0,
            start_block: BlockGate::Unset,
            close_block: BlockGate::Unset,
            pool_count,
            pools: [Pool::default(); MAX_POOLS],
        }
    }

    #[test]
    fn gate_one_way_transitions() {
        let mut g = BlockGate::Unset;
        assert!(g.may_reconfigure(1_000));
        g = BlockGate::SetAt(500);

        // Still in the future: may move.
        assert!(g.may_reconfigure(499));
        // At or past the trigger point: frozen.
        assert!(!g.may_reconfigure(500));
        assert!(!g.may_reconfigure(9_999));
    }

    #[test]
    fn started_stopped_booleans() {
        let mut st = vault(1);
        assert!(!st.is_started(u64::MAX));

        st.start_block = BlockGate::SetAt(100);
        st.close_block = BlockGate::SetAt(200);
        assert!(!st.is_started(99));
        assert!(st.is_started(100));
        assert!(!st.is_stopped(199));
        assert!(st.is_stopped(200));
        // A stopped vault still counts as started.
        assert!(st.is_started(200));
    }

    #[test]
    fn pool_lookup_bounds() {
        let mut st = vault(2);
        assert!(st.pool(0).is_ok());
        assert!(st.pool(1).is_ok());
        // Index exists in the backing array but past pool_count.
        assert!(st.pool(2).is_err());
        assert!(st.pool_mut(9).is_err());
        assert!(st.pool(255).is_err());
    }

    #[test]
    fn reserved_sums_over_live_pools() {
        let mut st = vault(2);
        st.pools[0].real_staked = 300;
        st.pools[1].real_staked = 200;
        st.pools[1].token_rewarded = 50;
        st.pools[1].token_received = 20;
        // Pool past pool_count must not contribute.
        st.pools[2].real_staked = 999;
        assert_eq!(st.reserved().unwrap(), 300 + 200 + 50 - 20);
    }

    #[test]
    fn reserved_rejects_received_exceeding_owed() {
        let mut st = vault(1);
        st.pools[0].token_received = 1;
        assert!(st.reserved().is_err());
    }
}
