//! Single-beneficiary token lockup.
//!
//! An owner locks a fixed quantity of an SPL token for one beneficiary,
//! releases it linearly over time after an optional cliff, and — when the
//! lockup was created revocable — may reclaim the unvested remainder.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod token_lockup {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    pub fn create_lockup(
        ctx: Context<CreateLockup>,
        beneficiary: Pubkey,
        total_amount: u64,
        cliff_seconds: i64,
        duration_seconds: i64,
        revocable: bool,
    ) -> Result<()> {
        instructions::create_lockup::create_lockup(
            ctx,
            beneficiary,
            total_amount,
            cliff_seconds,
            duration_seconds,
            revocable,
        )
    }

    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release::release(ctx)
    }

    pub fn revoke(ctx: Context<Revoke>) -> Result<()> {
        instructions::revoke::revoke(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::transfer_ownership(ctx, new_owner)
    }

    pub fn emit_lockup_quote(ctx: Context<EmitLockupQuote>) -> Result<()> {
        instructions::emit_lockup_quote::emit_lockup_quote(ctx)
    }
}
