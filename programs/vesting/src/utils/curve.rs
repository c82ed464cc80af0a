//! Piecewise-linear release curve, computed in permille.
//!
//! Shape for a fixed allotment: flat at `start_percent` before `start_ts`,
//! linear interpolation between `start_ts` and `close_ts`, flat at 100%
//! from `close_ts` on. Monotonically non-decreasing in `now`.

use crate::constants::PERMILLE;
use crate::error::VestingError;

/// Amount of an `initial` allotment unlockable at time `now`.
pub fn amount_allowed_to_withdraw(
    initial: u64,
    now: i64,
    start_ts: i64,
    close_ts: i64,
    start_percent: u8,
) -> Result<u64, VestingError> {
    if initial == 0 {
        return Ok(0);
    }
    if now >= close_ts {
        return Ok(initial);
    }

    // start_percent is validated to <= 100 at initialization; the clamp
    // keeps this function total for arbitrary inputs.
    let start_promile = ((start_percent as u128) * 10).min(PERMILLE);
    if now <= start_ts {
        return apply_promile(initial, start_promile);
    }

    // start_ts < now < close_ts here, so the window is nonzero.
    let elapsed = (now - start_ts) as u128;
    let window = (close_ts - start_ts) as u128;
    let promile = start_promile
        .checked_add(
            elapsed
                .checked_mul(PERMILLE - start_promile)
                .ok_or(VestingError::MathOverflow)?
                / window,
        )
        .ok_or(VestingError::MathOverflow)?;

    if promile >= PERMILLE {
        return Ok(initial);
    }
    apply_promile(initial, promile)
}

/// Amount a beneficiary may withdraw right now: the curve value minus what
/// was already released (`withdrawn = initial - current`).
pub fn withdrawal_limit(
    initial: u64,
    current: u64,
    allowed: u64,
) -> Result<u64, VestingError> {
    let withdrawn = initial
        .checked_sub(current)
        .ok_or(VestingError::AccountingViolation)?;
    allowed
        .checked_sub(withdrawn)
        .ok_or(VestingError::MathOverflow)
}

fn apply_promile(initial: u64, promile: u128) -> Result<u64, VestingError> {
    let v = (initial as u128)
        .checked_mul(promile)
        .ok_or(VestingError::MathOverflow)?
        / PERMILLE;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 100;
    const CLOSE: i64 = 200;

    fn allowed(initial: u64, now: i64, percent: u8) -> u64 {
        amount_allowed_to_withdraw(initial, now, START, CLOSE, percent).unwrap()
    }

    #[test]
    fn scenario_twenty_percent_cliff() {
        // start=100, close=200, startPercent=20, allotment 1000.
        assert_eq!(allowed(1000, 100, 20), 200);
        // promile = 200 + 50 * (1000 - 200) / 100 = 600
        assert_eq!(allowed(1000, 150, 20), 600);
        assert_eq!(allowed(1000, 250, 20), 1000);
    }

    #[test]
    fn zero_initial_is_zero_everywhere() {
        for now in [0, START, 150, CLOSE, CLOSE + 1000] {
            assert_eq!(allowed(0, now, 20), 0);
        }
    }

    #[test]
    fn flat_before_start() {
        assert_eq!(allowed(1000, -50, 20), 200);
        assert_eq!(allowed(1000, 0, 20), 200);
        assert_eq!(allowed(1000, START, 20), 200);
        // Zero percent means nothing before start.
        assert_eq!(allowed(1000, 0, 0), 0);
    }

    #[test]
    fn full_at_and_after_close() {
        assert_eq!(allowed(1000, CLOSE, 0), 1000);
        assert_eq!(allowed(1000, i64::MAX, 0), 1000);
        assert_eq!(allowed(7, CLOSE, 100), 7);
    }

    #[test]
    fn hundred_percent_is_full_from_the_start() {
        assert_eq!(allowed(1000, 0, 100), 1000);
        assert_eq!(allowed(1000, 150, 100), 1000);
    }

    #[test]
    fn out_of_range_percent_clamps_to_full() {
        assert_eq!(allowed(1000, 0, 255), 1000);
        assert_eq!(allowed(1000, 150, 255), 1000);
    }

    #[test]
    fn monotone_non_decreasing_in_time() {
        let mut last = 0u64;
        for now in (START - 20)..=(CLOSE + 20) {
            let a = allowed(999_983, now, 13);
            assert!(a >= last, "curve decreased at now={now}");
            last = a;
        }
        assert_eq!(last, 999_983);
    }

    #[test]
    fn degenerate_window_releases_fully_at_close() {
        // close == start: flat percent strictly before, full from close on.
        let a = amount_allowed_to_withdraw(1000, 99, 100, 100, 20).unwrap();
        assert_eq!(a, 200);
        let a = amount_allowed_to_withdraw(1000, 100, 100, 100, 20).unwrap();
        assert_eq!(a, 1000);
    }

    #[test]
    fn limit_tracks_prior_withdrawals() {
        let a = allowed(1000, 150, 20); // 600
        // Nothing withdrawn yet.
        assert_eq!(withdrawal_limit(1000, 1000, a).unwrap(), 600);
        // 600 already out: immediate second release finds nothing.
        assert_eq!(withdrawal_limit(1000, 400, a).unwrap(), 0);
        // Fully vested and fully withdrawn.
        assert_eq!(withdrawal_limit(1000, 0, 1000).unwrap(), 0);
    }

    #[test]
    fn limit_rejects_corrupted_balances() {
        // current > initial violates the ledger invariant.
        assert!(withdrawal_limit(100, 200, 100).is_err());
    }

    #[test]
    fn cumulative_releases_never_exceed_initial() {
        // Replay a release loop across the whole curve.
        let initial = 1000u64;
        let mut current = initial;
        for now in (START - 10)..=(CLOSE + 10) {
            let a = allowed(initial, now, 20);
            let limit = withdrawal_limit(initial, current, a).unwrap();
            current -= limit;
        }
        assert_eq!(current, 0);
    }
}
