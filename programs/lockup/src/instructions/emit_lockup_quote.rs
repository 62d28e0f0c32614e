use anchor_lang::prelude::*;

use crate::state::LockupState;
use crate::utils::vesting;

/// Permissionless read-only quote: computes every derived amount for the
/// current time and emits them with a full record snapshot. Plain field
/// reads go through an account fetch off-chain; this is the on-chain query
/// surface.
pub fn emit_lockup_quote(ctx: Context<EmitLockupQuote>) -> Result<()> {
    let st = &ctx.accounts.lockup_state;
    let now = Clock::get()?.unix_timestamp;

    let vested = vesting::vested_amount(st, now)?;
    let releasable = vesting::releasable_amount(st, now)?;
    let progress = vesting::vesting_progress(st, now)?;
    let remaining = vesting::remaining_vesting_time(st, now);

    emit!(LockupQuote {
        beneficiary: st.beneficiary,
        total_amount: st.total_amount,
        released_amount: st.released_amount,
        start_ts: st.start_ts,
        cliff_seconds: st.cliff_seconds,
        duration_seconds: st.duration_seconds,
        revocable: st.revocable,
        revoked: st.revoked,
        vested_at_revoke: st.vested_at_revoke,
        vested_amount: vested,
        releasable_amount: releasable,
        vesting_progress: progress,
        remaining_vesting_time: remaining,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitLockupQuote<'info> {
    #[account(seeds = [b"lockup_state"], bump)]
    pub lockup_state: Account<'info, LockupState>,
}

#[event]
pub struct LockupQuote {
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub released_amount: u64,
    pub start_ts: i64,
    pub cliff_seconds: i64,
    pub duration_seconds: i64,
    pub revocable: bool,
    pub revoked: bool,
    pub vested_at_revoke: u64,
    pub vested_amount: u64,
    pub releasable_amount: u64,
    pub vesting_progress: u8,
    pub remaining_vesting_time: i64,
}
