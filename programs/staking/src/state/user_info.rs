use anchor_lang::prelude::*;

/// Per-(pool, wallet) position PDA. Created implicitly on first deposit,
/// never closed; zero `amount` is a valid terminal state.
#[account]
pub struct UserInfo {
    pub wallet: Pubkey,
    pub pid: u8,
    /// Currently staked amount.
    pub amount: u64,
    /// Timestamp before which ordinary withdrawal is disallowed
    /// (0 = no lock taken yet).
    pub locked_until: i64,
    /// Reserved for the reward-accrual scaffold; currently unused.
    pub reward_debt: u64,
    /// Reserved for the reward-accrual scaffold; currently unused.
    pub pending_rewards: u64,
    pub bump: u8,
}

impl UserInfo {
    pub const SIZE: usize =
        32 + // wallet
        1 +  // pid
        8 +  // amount
        8 +  // locked_until
        8 +  // reward_debt
        8 +  // pending_rewards
        1;   // bump

    pub fn lock_expired(&self, now: i64) -> bool {
        self.locked_until == 0 || now >= self.locked_until
    }

    /// Reset the lock timer when no active lock remains. Runs on every
    /// deposit, including zero-amount ones: an expired position gets
    /// re-locked even by a deposit of 0.
    pub fn refresh_lock(&mut self, now: i64, lockup_duration: i64) -> Result<()> {
        if self.lock_expired(now) {
            self.locked_until = now
                .checked_add(lockup_duration)
                .ok_or(crate::error::StakingError::MathOverflow)?;
        }
        Ok(())
    }

    /// Ordinary withdrawal needs an expired lock; a globally closed vault
    /// overrides the lock.
    pub fn can_withdraw(&self, now: i64, vault_stopped: bool) -> bool {
        vault_stopped || now >= self.locked_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            wallet: Pubkey::default(),
            pid: 0,
            amount: 0,
            locked_until: 0,
            reward_debt: 0,
            pending_rewards: 0,
            bump: 0,
        }
    }

    #[test]
    fn deposit_locks_until_lockup_elapses() {
        // lockupDuration = 100, deposit at T = 1_000.
        let mut u = user();
        u.refresh_lock(1_000, 100).unwrap();
        assert_eq!(u.locked_until, 1_100);

        assert!(!u.can_withdraw(1_099, false));
        assert!(u.can_withdraw(1_100, false));
        // Close overrides the lock.
        assert!(u.can_withdraw(1_099, true));
    }

    #[test]
    fn active_lock_is_not_extended() {
        let mut u = user();
        u.refresh_lock(1_000, 100).unwrap();
        // Second deposit while still locked keeps the old expiry.
        u.refresh_lock(1_050, 100).unwrap();
        assert_eq!(u.locked_until, 1_100);
    }

    #[test]
    fn expired_lock_is_rearmed_even_by_zero_deposit() {
        let mut u = user();
        u.refresh_lock(1_000, 100).unwrap();
        // Lock expired, position untouched; any deposit call re-locks.
        u.refresh_lock(1_200, 100).unwrap();
        assert_eq!(u.locked_until, 1_300);
    }
}
