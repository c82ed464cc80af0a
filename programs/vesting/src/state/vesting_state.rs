use anchor_lang::prelude::*;

/// One-way freeze of the beneficiary set. Releases are only possible once
/// the state is `Locked`; allotments are only editable while `Unlocked`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockState {
    Unlocked,
    Locked,
}

/// Single vesting ledger state PDA.
#[account]
pub struct VestingState {
    /// Privileged owner (set at creation, transferable).
    pub owner: Pubkey,
    /// Token mint; `Pubkey::default()` until `set_token_address` runs.
    pub mint: Pubkey,
    /// Destination for entry fees collected by the fee gate.
    pub fee_collector: Pubkey,
    /// Lamport fee charged per `release` call (0 = free).
    pub release_fee: u64,
    /// Release-curve start timestamp (Unix seconds).
    pub start_ts: i64,
    /// Release-curve close timestamp; full release at or after this point.
    pub close_ts: i64,
    /// Percent (0-100) unlockable immediately, before `start_ts`.
    pub start_percent: u8,
    /// Beneficiary-set freeze state.
    pub lock: LockState,
    /// Number of live entries in the beneficiaries list (<= 35).
    pub beneficiary_count: u8,
}

impl VestingState {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // fee_collector
        8 +  // release_fee
        8 +  // start_ts
        8 +  // close_ts
        1 +  // start_percent
        1 +  // lock
        1;   // beneficiary_count

    pub fn token_set(&self) -> bool {
        self.mint != Pubkey::default()
    }

    pub fn is_locked(&self) -> bool {
        self.lock == LockState::Locked
    }

    /// Releases are open once time has started or an immediate-release
    /// percent exists.
    pub fn release_open(&self, now: i64) -> bool {
        now >= self.start_ts || self.start_percent != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(start_ts: i64, start_percent: u8) -> VestingState {
        VestingState {
            owner: Pubkey::default(),
            mint: Pubkey::default(),
            fee_collector: Pubkey::default(),
            release_fee: 0,
            start_ts,
            close_ts: start_ts + 100,
            start_percent,
            lock: LockState::Unlocked,
            beneficiary_count: 0,
        }
    }

    #[test]
    fn release_open_rules() {
        // No immediate percent: closed strictly before start.
        let st = state(100, 0);
        assert!(!st.release_open(99));
        assert!(st.release_open(100));
        assert!(st.release_open(101));

        // Immediate percent: open at any time.
        let st = state(100, 20);
        assert!(st.release_open(0));
    }

    #[test]
    fn token_gate_tracks_mint() {
        let mut st = state(0, 0);
        assert!(!st.token_set());
        st.mint = Pubkey::new_unique();
        assert!(st.token_set());
    }
}
