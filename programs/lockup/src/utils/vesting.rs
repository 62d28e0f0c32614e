//! Linear-with-cliff vesting math.
//!
//! Pure functions of the stored schedule and a caller-supplied timestamp:
//! - zero before `start_ts + cliff_seconds`
//! - exactly `total_amount` at and after `start_ts + duration_seconds`
//! - linearly proportional in between (floor rounding, u128 intermediate)
//! - frozen at `vested_at_revoke` once the lockup is revoked

use crate::constants::MAX_VESTING_DURATION;
use crate::error::LockupError;
use crate::state::LockupState;

/// Amount vested as of `now_ts`.
pub fn vested_amount(st: &LockupState, now_ts: i64) -> Result<u64, LockupError> {
    let cliff_end = st
        .start_ts
        .checked_add(st.cliff_seconds)
        .ok_or(LockupError::MathOverflow)?;
    if now_ts < cliff_end {
        return Ok(0);
    }

    let vesting_end = st
        .start_ts
        .checked_add(st.duration_seconds)
        .ok_or(LockupError::MathOverflow)?;
    if !st.revoked && now_ts >= vesting_end {
        // Exact-equality branch: no dust at or after the end.
        return Ok(st.total_amount);
    }

    // now_ts >= cliff_end >= start_ts, so elapsed is non-negative.
    let elapsed = now_ts
        .checked_sub(st.start_ts)
        .ok_or(LockupError::MathOverflow)?;
    // Multiply before dividing, with the product widened to u128.
    let accrued = (st.total_amount as u128)
        .checked_mul(elapsed as u128)
        .ok_or(LockupError::MathOverflow)?
        .checked_div(st.duration_seconds as u128)
        .ok_or(LockupError::MathOverflow)?;

    let capped = if st.revoked {
        // Vesting is frozen at the snapshot taken at revocation.
        accrued.min(st.vested_at_revoke as u128)
    } else {
        accrued
    };
    u64::try_from(capped).map_err(|_| LockupError::MathOverflow)
}

/// Vested amount not yet claimed by the beneficiary.
pub fn releasable_amount(st: &LockupState, now_ts: i64) -> Result<u64, LockupError> {
    let vested = vested_amount(st, now_ts)?;
    vested
        .checked_sub(st.released_amount)
        .ok_or(LockupError::MathOverflow)
}

/// Integer percentage `0..=100` of elapsed vesting time, floor-rounded.
/// Ignores the cliff: this tracks schedule progress, not claimability.
pub fn vesting_progress(st: &LockupState, now_ts: i64) -> Result<u8, LockupError> {
    if st.duration_seconds == 0 || now_ts <= st.start_ts {
        return Ok(0);
    }
    let vesting_end = st
        .start_ts
        .checked_add(st.duration_seconds)
        .ok_or(LockupError::MathOverflow)?;
    if now_ts >= vesting_end {
        return Ok(100);
    }
    let elapsed = now_ts
        .checked_sub(st.start_ts)
        .ok_or(LockupError::MathOverflow)?;
    let pct = (elapsed as u128)
        .checked_mul(100)
        .ok_or(LockupError::MathOverflow)?
        .checked_div(st.duration_seconds as u128)
        .ok_or(LockupError::MathOverflow)?;
    u8::try_from(pct).map_err(|_| LockupError::MathOverflow)
}

/// Seconds until the end of the vesting period, zero once past it.
pub fn remaining_vesting_time(st: &LockupState, now_ts: i64) -> i64 {
    st.start_ts
        .saturating_add(st.duration_seconds)
        .saturating_sub(now_ts)
        .max(0)
}

/// Schedule bounds: `0 <= cliff < duration <= MAX_VESTING_DURATION`.
/// Equality of cliff and duration is rejected so a gradual-vesting window
/// always exists.
pub fn validate_schedule(cliff_seconds: i64, duration_seconds: i64) -> Result<(), LockupError> {
    if cliff_seconds < 0 || duration_seconds <= 0 {
        return Err(LockupError::InvalidDuration);
    }
    if cliff_seconds >= duration_seconds {
        return Err(LockupError::InvalidDuration);
    }
    if duration_seconds > MAX_VESTING_DURATION {
        return Err(LockupError::InvalidDuration);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;
    use anchor_lang::prelude::Pubkey;

    const START: i64 = 1_700_000_000;

    fn lockup(total: u64, cliff: i64, duration: i64) -> LockupState {
        LockupState {
            mint: Pubkey::default(),
            owner: Pubkey::default(),
            beneficiary: Pubkey::default(),
            total_amount: total,
            released_amount: 0,
            start_ts: START,
            cliff_seconds: cliff,
            duration_seconds: duration,
            revocable: true,
            revoked: false,
            vested_at_revoke: 0,
            busy: false,
            bump: 255,
        }
    }

    #[test]
    fn zero_before_cliff() {
        let st = lockup(1_000, 6 * SECONDS_PER_DAY, 12 * SECONDS_PER_DAY);
        assert_eq!(vested_amount(&st, START).unwrap(), 0);
        assert_eq!(
            vested_amount(&st, START + 3 * SECONDS_PER_DAY).unwrap(),
            0
        );
        // One second before the cliff ends: still nothing.
        assert_eq!(
            vested_amount(&st, START + 6 * SECONDS_PER_DAY - 1).unwrap(),
            0
        );
        // At the cliff boundary vesting catches up to the full elapsed time.
        assert_eq!(
            vested_amount(&st, START + 6 * SECONDS_PER_DAY).unwrap(),
            500
        );
    }

    #[test]
    fn exact_total_at_end_no_dust() {
        // 1000 over 7 seconds does not divide evenly; the end boundary must
        // still pay out the full amount.
        let st = lockup(1_000, 0, 7);
        assert_eq!(vested_amount(&st, START + 6).unwrap(), 857);
        assert_eq!(vested_amount(&st, START + 7).unwrap(), 1_000);
        assert_eq!(vested_amount(&st, START + 1_000_000).unwrap(), 1_000);
    }

    #[test]
    fn monotonic_while_unrevoked() {
        let st = lockup(987_654, SECONDS_PER_DAY, 90 * SECONDS_PER_DAY);
        let mut prev = 0u64;
        for step in 0..=200 {
            let now = START + step * (SECONDS_PER_DAY / 2);
            let v = vested_amount(&st, now).unwrap();
            assert!(v >= prev, "vested decreased at step {step}");
            assert!(v <= st.total_amount);
            prev = v;
        }
        assert_eq!(prev, st.total_amount);
    }

    #[test]
    fn linear_midpoint() {
        let st = lockup(12_000, 0, 12 * SECONDS_PER_DAY);
        let half = START + 6 * SECONDS_PER_DAY;
        assert_eq!(vested_amount(&st, half).unwrap(), 6_000);
        assert_eq!(releasable_amount(&st, half).unwrap(), 6_000);
    }

    #[test]
    fn frozen_after_revoke() {
        let mut st = lockup(12_000, 0, 12 * SECONDS_PER_DAY);
        let revoke_time = START + 6 * SECONDS_PER_DAY;
        let vested = vested_amount(&st, revoke_time).unwrap();
        st.revoked = true;
        st.vested_at_revoke = vested;

        // Further elapsed time no longer grows the vested amount.
        assert_eq!(
            vested_amount(&st, revoke_time + SECONDS_PER_DAY).unwrap(),
            vested
        );
        assert_eq!(
            vested_amount(&st, START + 12 * SECONDS_PER_DAY).unwrap(),
            vested
        );
        // Even far past the original end the snapshot holds.
        assert_eq!(
            vested_amount(&st, START + 1_000 * SECONDS_PER_DAY).unwrap(),
            vested
        );
    }

    #[test]
    fn revoke_during_cliff_leaves_nothing_vested() {
        let mut st = lockup(1_000, 6 * SECONDS_PER_DAY, 12 * SECONDS_PER_DAY);
        let revoke_time = START + 3 * SECONDS_PER_DAY;
        let vested = vested_amount(&st, revoke_time).unwrap();
        assert_eq!(vested, 0);
        assert_eq!(releasable_amount(&st, revoke_time).unwrap(), 0);

        st.revoked = true;
        st.vested_at_revoke = vested;
        // The full amount is unvested and returns to the owner.
        assert_eq!(st.total_amount - vested, 1_000);
        // Nothing ever vests afterwards, even past the old cliff and end.
        assert_eq!(
            vested_amount(&st, START + 20 * SECONDS_PER_DAY).unwrap(),
            0
        );
    }

    #[test]
    fn supply_scale_no_overflow() {
        // Amount near the token supply ceiling over the 10-year maximum.
        let st = lockup(u64::MAX, 0, MAX_VESTING_DURATION);
        let one_year = 365 * SECONDS_PER_DAY;
        let expected =
            ((u64::MAX as u128) * (one_year as u128) / (MAX_VESTING_DURATION as u128)) as u64;
        let vested = vested_amount(&st, START + one_year).unwrap();
        assert_eq!(vested, expected);
        assert!(vested <= st.total_amount);
        assert_eq!(vested_amount(&st, START + MAX_VESTING_DURATION).unwrap(), u64::MAX);
    }

    #[test]
    fn releasable_subtracts_released() {
        let mut st = lockup(12_000, 0, 12 * SECONDS_PER_DAY);
        st.released_amount = 2_500;
        let half = START + 6 * SECONDS_PER_DAY;
        assert_eq!(releasable_amount(&st, half).unwrap(), 3_500);
        // At the end the remainder closes out exactly.
        assert_eq!(
            releasable_amount(&st, START + 12 * SECONDS_PER_DAY).unwrap(),
            9_500
        );
    }

    #[test]
    fn progress_floor_and_clamp() {
        let st = lockup(1_000, 600, 1_000);
        assert_eq!(vesting_progress(&st, START - 10).unwrap(), 0);
        assert_eq!(vesting_progress(&st, START).unwrap(), 0);
        // Floor rounding: 339/1000 -> 33%.
        assert_eq!(vesting_progress(&st, START + 339).unwrap(), 33);
        assert_eq!(vesting_progress(&st, START + 500).unwrap(), 50);
        assert_eq!(vesting_progress(&st, START + 1_000).unwrap(), 100);
        assert_eq!(vesting_progress(&st, START + 5_000).unwrap(), 100);
        // Progress tracks the schedule even inside the cliff window.
        assert_eq!(vesting_progress(&st, START + 300).unwrap(), 30);
        assert_eq!(vested_amount(&st, START + 300).unwrap(), 0);
    }

    #[test]
    fn remaining_time_saturates() {
        let st = lockup(1_000, 0, 1_000);
        assert_eq!(remaining_vesting_time(&st, START), 1_000);
        assert_eq!(remaining_vesting_time(&st, START + 400), 600);
        assert_eq!(remaining_vesting_time(&st, START + 1_000), 0);
        assert_eq!(remaining_vesting_time(&st, START + 9_999), 0);
    }

    #[test]
    fn schedule_bounds() {
        assert!(validate_schedule(0, 1).is_ok());
        assert!(validate_schedule(0, MAX_VESTING_DURATION).is_ok());
        assert!(validate_schedule(MAX_VESTING_DURATION - 1, MAX_VESTING_DURATION).is_ok());

        // Cliff equal to duration leaves no gradual window.
        assert!(matches!(
            validate_schedule(1_000, 1_000),
            Err(LockupError::InvalidDuration)
        ));
        assert!(validate_schedule(999, 1_000).is_ok());

        assert!(matches!(
            validate_schedule(0, 0),
            Err(LockupError::InvalidDuration)
        ));
        assert!(matches!(
            validate_schedule(-1, 1_000),
            Err(LockupError::InvalidDuration)
        ));
        assert!(matches!(
            validate_schedule(0, MAX_VESTING_DURATION + 1),
            Err(LockupError::InvalidDuration)
        ));
    }
}
