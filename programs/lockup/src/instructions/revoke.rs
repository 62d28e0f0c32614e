use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LockupError;
use crate::state::LockupState;
use crate::utils::vesting;

pub fn revoke(ctx: Context<Revoke>) -> Result<()> {
    let lockup_state_ai = ctx.accounts.lockup_state.to_account_info();

    let st = &mut ctx.accounts.lockup_state;
    require!(!st.busy, LockupError::ReentrantCall);
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        LockupError::Unauthorized
    );

    // An absent lockup has nothing to return.
    require!(st.exists(), LockupError::NothingToRevoke);
    require!(st.revocable, LockupError::NotRevocable);
    require!(!st.revoked, LockupError::AlreadyRevoked);

    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        st.mint,
        LockupError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        st.owner,
        LockupError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let vested = vesting::vested_amount(st, now)?;
    // Revoking a fully vested lockup would move zero value.
    require!(vested < st.total_amount, LockupError::NothingToRevoke);

    let unvested = st
        .total_amount
        .checked_sub(vested)
        .ok_or(LockupError::MathOverflow)?;
    require!(
        ctx.accounts.vault.amount >= unvested,
        LockupError::InsufficientBalance
    );

    // Effects before interactions: freeze vesting at the snapshot, then pay.
    st.revoked = true;
    st.vested_at_revoke = vested;
    st.busy = true;

    let signer_seeds: &[&[&[u8]]] = &[&[b"lockup_state", &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner_token_account.to_account_info(),
                authority: lockup_state_ai,
            },
            signer_seeds,
        ),
        unvested,
    )?;

    let st = &mut ctx.accounts.lockup_state;
    st.busy = false;

    emit!(LockupRevoked {
        owner: st.owner,
        beneficiary: st.beneficiary,
        vested_at_revoke: vested,
        returned_amount: unvested,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Revoke<'info> {
    #[account(mut, seeds = [b"lockup_state"], bump)]
    pub lockup_state: Account<'info, LockupState>,

    #[account(
        mut,
        seeds = [b"vault", lockup_state.key().as_ref()],
        bump,
        constraint = vault.mint == lockup_state.mint @ LockupError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct LockupRevoked {
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub vested_at_revoke: u64,
    pub returned_amount: u64,
}
