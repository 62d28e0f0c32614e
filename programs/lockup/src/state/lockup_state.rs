use anchor_lang::prelude::*;

/// Singleton lockup state PDA.
///
/// `total_amount == 0` means no lockup has been created yet; `create_lockup`
/// uses this as its presence flag, so a populated record can never be
/// overwritten.
#[account]
pub struct LockupState {
    /// Token mint.
    pub mint: Pubkey,
    /// Owner authority (creates and may revoke the lockup).
    pub owner: Pubkey,
    /// Beneficiary wallet, set once at creation.
    pub beneficiary: Pubkey,
    /// Quantity locked at creation (> 0 once a lockup exists).
    pub total_amount: u64,
    /// Cumulative amount transferred to the beneficiary.
    pub released_amount: u64,
    /// Lockup creation timestamp (Unix seconds, UTC).
    pub start_ts: i64,
    /// Cliff length in seconds, measured from `start_ts`.
    pub cliff_seconds: i64,
    /// Total vesting length in seconds (strictly greater than the cliff).
    pub duration_seconds: i64,
    /// Whether the owner may revoke the unvested remainder.
    pub revocable: bool,
    /// One-way flag set by `revoke`.
    pub revoked: bool,
    /// Vested amount snapshotted at revocation; caps all later vesting.
    pub vested_at_revoke: u64,
    /// Reentrancy guard: true only while a transfer CPI is in flight.
    pub busy: bool,
    /// PDA bump, cached at initialization.
    pub bump: u8,
}

impl LockupState {
    pub const SIZE: usize =
        32 + // mint
        32 + // owner
        32 + // beneficiary
        8 +  // total_amount
        8 +  // released_amount
        8 +  // start_ts
        8 +  // cliff_seconds
        8 +  // duration_seconds
        1 +  // revocable
        1 +  // revoked
        8 +  // vested_at_revoke
        1 +  // busy
        1;   // bump

    /// True once `create_lockup` has populated the record.
    pub fn exists(&self) -> bool {
        self.total_amount > 0
    }
}
