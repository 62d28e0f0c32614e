use anchor_lang::prelude::*;

/// Custom error codes for the token lockup program.
#[error_code]
pub enum LockupError {
    #[msg("Unauthorized: caller does not hold the required role")]
    Unauthorized,

    #[msg("Invalid token address")]
    InvalidTokenAddress,

    #[msg("Invalid beneficiary")]
    InvalidBeneficiary,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid duration: require 0 <= cliff < duration <= 10 years")]
    InvalidDuration,

    #[msg("Lockup already exists")]
    LockupAlreadyExists,

    #[msg("Insufficient token balance")]
    InsufficientBalance,

    #[msg("Insufficient delegated allowance")]
    InsufficientAllowance,

    #[msg("Transferred amount does not match requested amount")]
    TransferAmountMismatch,

    #[msg("No tokens available for release")]
    NoTokensAvailable,

    #[msg("Lockup is not revocable")]
    NotRevocable,

    #[msg("Lockup already revoked")]
    AlreadyRevoked,

    #[msg("Nothing to revoke")]
    NothingToRevoke,

    #[msg("Reentrant call: a transfer is already in flight")]
    ReentrantCall,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid owner")]
    InvalidOwner,
}
